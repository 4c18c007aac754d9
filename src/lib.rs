//! Towers of Hanoi textual visualizer.
//!
//! The crate splits into a pure core and a thin presentation layer:
//!
//! - [`core`]: peg state and the recursive minimal-move solver (no I/O)
//! - [`term`]: fixed-width board rendering
//! - [`types`]: shared vocabulary (pegs, disks, move records, the clamp)
//!
//! # Example
//!
//! ```
//! use hanoi_viz::core::{solve, PegState};
//! use hanoi_viz::term::BoardView;
//! use hanoi_viz::types::DiskCount;
//!
//! let mut pegs = PegState::new(DiskCount::clamp(3));
//! let view = BoardView::new();
//!
//! let moves = solve(&mut pegs, |record, state| {
//!     println!("{record}");
//!     print!("{}", view.render(state));
//! })
//! .unwrap();
//!
//! assert_eq!(moves, 7);
//! ```

pub mod core;
pub mod term;
pub mod types;

pub use crate::core::{solve, EmptyPegError, PegState};
pub use crate::term::BoardView;
pub use crate::types::{Disk, DiskCount, MoveRecord, PegId, MAX_DISKS};
