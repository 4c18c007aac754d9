//! Solver tests - move counts, ordering invariants, and concrete sequences

use hanoi_viz::core::{solve, PegState};
use hanoi_viz::types::{DiskCount, MoveRecord, PegId};

fn new_state(n: u64) -> PegState {
    PegState::new(DiskCount::clamp(n))
}

/// I1: every peg strictly decreases bottom-to-top.
/// I2: the union of all pegs is exactly {1..N}.
fn assert_invariants(pegs: &PegState) {
    let n = pegs.disk_count();
    let mut all: Vec<u8> = Vec::new();
    for peg in PegId::ALL {
        let disks = pegs.disks(peg);
        for pair in disks.windows(2) {
            assert!(
                pair[0] > pair[1],
                "peg {peg} violates ordering: {disks:?}"
            );
        }
        all.extend_from_slice(disks);
    }
    all.sort_unstable();
    let expected: Vec<u8> = (1..=n).collect();
    assert_eq!(all, expected, "disk multiset must stay {{1..{n}}}");
}

#[test]
fn test_move_count_is_closed_form() {
    for n in 1..=10u64 {
        let mut pegs = new_state(n);
        let mut observed = 0u64;
        let total = solve(&mut pegs, |_, _| observed += 1).unwrap();

        assert_eq!(total, (1 << n) - 1, "N={n} must take 2^N - 1 moves");
        assert_eq!(observed, total, "observer must fire once per move");
    }
}

#[test]
fn test_final_state_for_all_sizes() {
    for n in 1..=10u64 {
        let mut pegs = new_state(n);
        solve(&mut pegs, |_, _| {}).unwrap();

        assert!(pegs.disks(PegId::A).is_empty(), "N={n}: peg A not emptied");
        assert!(pegs.disks(PegId::B).is_empty(), "N={n}: peg B not emptied");
        let target: Vec<u8> = (1..=n as u8).rev().collect();
        assert_eq!(pegs.disks(PegId::C), target.as_slice());
    }
}

#[test]
fn test_invariants_hold_at_every_step() {
    for n in 1..=10u64 {
        let mut pegs = new_state(n);
        assert_invariants(&pegs);
        solve(&mut pegs, |_, state| assert_invariants(state)).unwrap();
    }
}

#[test]
fn test_clamped_input_solves_at_the_ceiling() {
    let count = DiskCount::clamp(15);
    assert!(count.was_clamped());

    let mut pegs = PegState::new(count);
    let total = solve(&mut pegs, |_, _| {}).unwrap();
    assert_eq!(total, 1023);
}

#[test]
fn test_two_disk_sequence() {
    let mut pegs = new_state(2);
    let mut moves = Vec::new();
    solve(&mut pegs, |record, _| moves.push(record)).unwrap();

    assert_eq!(
        moves,
        vec![
            MoveRecord { disk: 1, from: PegId::A, to: PegId::B },
            MoveRecord { disk: 2, from: PegId::A, to: PegId::C },
            MoveRecord { disk: 1, from: PegId::B, to: PegId::C },
        ]
    );
    assert_eq!(pegs.disks(PegId::C), &[2, 1]);
}

#[test]
fn test_three_disk_disk_order() {
    let mut pegs = new_state(3);
    let mut disks = Vec::new();
    solve(&mut pegs, |record, _| disks.push(record.disk)).unwrap();

    assert_eq!(disks, vec![1, 2, 1, 3, 1, 2, 1]);
}

#[test]
fn test_largest_disk_moves_exactly_once() {
    let mut pegs = new_state(5);
    let mut big_moves = Vec::new();
    solve(&mut pegs, |record, _| {
        if record.disk == 5 {
            big_moves.push(record);
        }
    })
    .unwrap();

    assert_eq!(
        big_moves,
        vec![MoveRecord { disk: 5, from: PegId::A, to: PegId::C }]
    );
}
