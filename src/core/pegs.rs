//! Peg state - the three disk stacks and their single mutation primitive.
//!
//! Storage is fixed-capacity and allocation-free: each peg is an
//! `ArrayVec<Disk, MAX_DISKS>`, and at most `MAX_DISKS` disks exist in total,
//! so a push can never overflow. Within a peg, slice index 0 is the bottom
//! of the physical stack and the last element is the top.

use arrayvec::ArrayVec;
use thiserror::Error;

use crate::types::{Disk, DiskCount, PegId, MAX_DISKS};

/// Attempted to move a disk off a peg that holds none.
///
/// The solver's recursive structure never produces this; it exists as an
/// invariant guard and must propagate to the caller when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot move a disk from empty peg {peg}")]
pub struct EmptyPegError {
    pub peg: PegId,
}

/// The three pegs plus the fixed disk count for one solver run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PegState {
    stacks: [ArrayVec<Disk, MAX_DISKS>; 3],
    disk_count: u8,
}

impl PegState {
    /// Create the initial layout: peg A loaded with `[N, N-1, ..., 1]`
    /// bottom-to-top, pegs B and C empty.
    pub fn new(count: DiskCount) -> Self {
        let n = count.get();
        let mut source = ArrayVec::new();
        for disk in (1..=n).rev() {
            source.push(disk);
        }
        Self {
            stacks: [source, ArrayVec::new(), ArrayVec::new()],
            disk_count: n,
        }
    }

    /// The fixed disk count N for this run.
    pub fn disk_count(&self) -> u8 {
        self.disk_count
    }

    /// A peg's disks, bottom-to-top.
    pub fn disks(&self, peg: PegId) -> &[Disk] {
        &self.stacks[peg.index()]
    }

    /// The movable (topmost) disk of a peg, if any.
    pub fn top(&self, peg: PegId) -> Option<Disk> {
        self.stacks[peg.index()].last().copied()
    }

    /// Move the topmost disk of `from` onto `to`, returning the moved disk.
    ///
    /// The only legal mutation. Size ordering is not re-checked here (the
    /// solver satisfies it by construction), but an empty source fails with
    /// [`EmptyPegError`].
    pub fn move_top(&mut self, from: PegId, to: PegId) -> Result<Disk, EmptyPegError> {
        let disk = self.stacks[from.index()]
            .pop()
            .ok_or(EmptyPegError { peg: from })?;
        // Total disks never exceed MAX_DISKS, so the push cannot overflow.
        self.stacks[to.index()].push(disk);
        Ok(disk)
    }
}
