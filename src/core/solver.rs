//! Recursive move generator for the Towers of Hanoi puzzle.
//!
//! `solve` produces the unique minimal sequence of 2^N - 1 single-disk moves
//! transferring all disks from peg A to peg C, applying each move to the
//! [`PegState`] and handing the observer the move record plus the post-move
//! state. Recursion depth equals N, which the clamp bounds at 10.

use crate::core::pegs::{EmptyPegError, PegState};
use crate::types::{MoveRecord, PegId};

/// Solve the puzzle held by `pegs`, invoking `on_move` after every applied
/// move. Returns the number of moves performed: exactly `2^N - 1`.
///
/// N = 0 is a no-op that returns 0.
pub fn solve<F>(pegs: &mut PegState, mut on_move: F) -> Result<u64, EmptyPegError>
where
    F: FnMut(MoveRecord, &PegState),
{
    let n = pegs.disk_count();
    if n == 0 {
        return Ok(0);
    }

    let mut moves: u64 = 0;
    let mut counting = |record: MoveRecord, state: &PegState| {
        moves += 1;
        on_move(record, state);
    };
    transfer(pegs, n, PegId::A, PegId::B, PegId::C, &mut counting)?;
    Ok(moves)
}

/// Move the top `n` disks of `source` onto `target` via `auxiliary`.
///
/// Classic decomposition: park n-1 disks on the auxiliary peg, carry disk n
/// across, then bring the n-1 disks home on top of it.
fn transfer<F>(
    pegs: &mut PegState,
    n: u8,
    source: PegId,
    auxiliary: PegId,
    target: PegId,
    on_move: &mut F,
) -> Result<(), EmptyPegError>
where
    F: FnMut(MoveRecord, &PegState),
{
    if n == 1 {
        apply(pegs, source, target, on_move)?;
        return Ok(());
    }

    transfer(pegs, n - 1, source, target, auxiliary, on_move)?;
    apply(pegs, source, target, on_move)?;
    transfer(pegs, n - 1, auxiliary, source, target, on_move)
}

fn apply<F>(
    pegs: &mut PegState,
    from: PegId,
    to: PegId,
    on_move: &mut F,
) -> Result<(), EmptyPegError>
where
    F: FnMut(MoveRecord, &PegState),
{
    let disk = pegs.move_top(from, to)?;
    on_move(MoveRecord { disk, from, to }, pegs);
    Ok(())
}
