//! Example driving a single strategy to its fixpoint.
//!
//! This example shows how to:
//! - Parse an 81-character puzzle string
//! - Run repeated passes of one strategy until it stops committing
//! - Inspect placements, the history chain, and the final board
//!
//! # Usage
//!
//! ```sh
//! cargo run --example solve -- "..1.948.7..2..........8.9.1.45..12..6.72..3....98354.....9.6...96..5378.12347865."
//! ```
//!
//! Pick the strategy to drive:
//!
//! ```sh
//! cargo run --example solve -- --strategy row-col-box-singleton <PUZZLE>
//! ```
//!
//! Set `RUST_LOG=debug` to watch each pass's deductions.

use std::process;

use clap::{Parser, ValueEnum};
use deduku_core::Grid;
use deduku_solver::Strategy;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    NakedSingleton,
    RowColBoxSingleton,
    BoxLineRemoval,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::NakedSingleton => Self::NakedSingleton,
            StrategyArg::RowColBoxSingleton => Self::RowColBoxSingleton,
            StrategyArg::BoxLineRemoval => Self::BoxLineRemoval,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// 81-character puzzle string, row-major, `.` for empty cells.
    #[arg(value_name = "PUZZLE")]
    puzzle: String,

    /// Strategy to drive to a fixpoint.
    #[arg(long, value_name = "STRATEGY", default_value = "naked-singleton")]
    strategy: StrategyArg,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let strategy = Strategy::from(args.strategy);

    let grid = match Grid::from_serialized(&args.puzzle) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("Invalid puzzle: {err}");
            process::exit(2);
        }
    };

    println!("Puzzle:");
    println!("{grid}");
    println!();

    let mut current = grid;
    let mut passes = 0_usize;
    loop {
        let pass = match strategy.solve(&current) {
            Ok(pass) => pass,
            Err(err) => {
                eprintln!("Pass failed: {err}");
                process::exit(1);
            }
        };
        passes += 1;
        let stuck = pass.solved.is_empty();
        if !stuck {
            println!("Pass {passes} ({strategy}):");
            for placement in &pass.solved {
                println!("  {placement}");
            }
        }
        current = pass.grid;
        if stuck {
            break;
        }
    }

    println!();
    println!("Result:");
    println!("{current}");
    println!();
    println!("Serialized:");
    println!("  {}", current.serialized());
    println!();
    println!("Stats:");
    println!("  passes: {passes}");
    println!("  chain length: {}", current.chain_length());
    let remaining = current.remaining();
    if remaining.is_empty() {
        println!("  solved: yes");
    } else {
        println!("  unsolved cells: {}", remaining.len());
    }
}
