//! Core puzzle logic - pure, deterministic, and testable.
//!
//! No I/O happens here: the solver mutates [`PegState`] through its single
//! move primitive and reports each move to an observer callback, leaving all
//! printing to the caller.
//!
//! - [`pegs`]: the three disk stacks and the `move_top` primitive
//! - [`solver`]: the recursive minimal-move generator

pub mod pegs;
pub mod solver;

pub use pegs::{EmptyPegError, PegState};
pub use solver::solve;
