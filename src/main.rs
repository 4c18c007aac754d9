//! Towers of Hanoi visualizer (default binary).
//!
//! Thin wrapper over the core solver: resolve the disk count (CLI argument
//! or interactive prompt), then print a move line followed by a full board
//! render for each of the 2^N - 1 moves.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use crossterm::style::Stylize;
use crossterm::tty::IsTty;

use hanoi_viz::core::{solve, PegState};
use hanoi_viz::term::BoardView;
use hanoi_viz::types::DiskCount;

/// Solve the Towers of Hanoi puzzle, printing the board after every move.
#[derive(Debug, Parser)]
#[command(name = "hanoi-viz", version, about)]
struct Args {
    /// Number of disks to solve for (prompted for when omitted).
    disks: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let requested = match args.disks {
        Some(n) => n,
        None => prompt_disk_count()?,
    };

    let count = DiskCount::clamp(requested);
    if count.was_clamped() {
        println!("Number of disks limited to 10 for visualization purposes.");
    }

    run(count)
}

fn run(count: DiskCount) -> Result<()> {
    let mut pegs = PegState::new(count);
    let view = BoardView::new();
    // Only style when attached to a terminal so piped output stays plain.
    let styled = io::stdout().is_tty();

    solve(&mut pegs, |record, state| {
        if styled {
            println!("{}", record.to_string().bold());
        } else {
            println!("{record}");
        }
        print!("{}", view.render(state));
    })?;

    Ok(())
}

/// Read the disk count from stdin, re-asking until a non-negative integer
/// arrives.
fn prompt_disk_count() -> Result<u64> {
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("Enter number of disks: ");
        io::stdout().flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            anyhow::bail!("no disk count supplied on stdin");
        }
        match line.trim().parse::<u64>() {
            Ok(n) => return Ok(n),
            Err(_) => println!("Please enter a non-negative integer."),
        }
    }
}
