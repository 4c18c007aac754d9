//! BoardView: maps a `PegState` into fixed-width text.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Each peg renders as one line of exactly N slots walked from stack index
//! N-1 down to 0, so all three lines align by height from the top down:
//!
//! ```text
//! Peg A: |   | 2 | 3 |
//! Peg B: |   |   | 1 |
//! Peg C: |   |   |   |
//! ```
//!
//! A disk occupies a 3-character centered field between `|` separators; an
//! unoccupied slot is three blanks. A blank separator line closes the block.

use std::fmt::{self, Write};

use crate::core::PegState;
use crate::types::PegId;

/// Renders the three pegs as a fixed-width text block.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardView;

impl BoardView {
    pub fn new() -> Self {
        Self
    }

    /// Render the full board block, including the trailing separator line.
    pub fn render(&self, pegs: &PegState) -> String {
        let mut out = String::new();
        self.write_into(pegs, &mut out)
            .expect("formatting into a String never fails");
        out
    }

    /// Write the board block into any `fmt::Write` sink.
    pub fn write_into(&self, pegs: &PegState, out: &mut impl Write) -> fmt::Result {
        for peg in PegId::ALL {
            self.write_peg_line(pegs, peg, out)?;
        }
        writeln!(out)
    }

    fn write_peg_line(&self, pegs: &PegState, peg: PegId, out: &mut impl Write) -> fmt::Result {
        let disks = pegs.disks(peg);
        write!(out, "Peg {}: ", peg)?;
        for slot in (0..pegs.disk_count() as usize).rev() {
            match disks.get(slot) {
                Some(disk) => write!(out, "|{:^3}", disk)?,
                None => write!(out, "|   ")?,
            }
        }
        writeln!(out, "|")
    }
}
