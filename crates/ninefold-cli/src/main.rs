//! Command-line demo for the Ninefold sudoku engine.
//!
//! # Usage
//!
//! Generate a complete random solution:
//!
//! ```sh
//! ninefold generate
//! ```
//!
//! Generate a puzzle with 40 to 55 cells blanked, reproducibly:
//!
//! ```sh
//! ninefold puzzle --min 40 --max 56 --seed <64-hex-chars>
//! ```
//!
//! Solve a puzzle given as text (digits fill cells; `.`, `_`, or `0` leave
//! them empty), either as an argument or on stdin:
//!
//! ```sh
//! ninefold solve "53__7____6__195____98____6_8___6___34__8_3__17___2___6_6____28____419__5____8__79"
//! cat puzzle.txt | ninefold solve
//! ```

use std::{io::Read as _, process};

use clap::{Parser, Subcommand};
use ninefold_core::Grid;
use ninefold_engine::{PuzzleSeed, SudokuEngine};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed for the random stream (64 hex characters); random if omitted.
    #[arg(long, value_name = "SEED", global = true)]
    seed: Option<PuzzleSeed>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a complete random solution.
    Generate,
    /// Generate a solution, then carve a puzzle out of it.
    Puzzle {
        /// Inclusive lower bound on the number of cells to blank.
        #[arg(long, value_name = "COUNT", default_value_t = 40)]
        min: usize,
        /// Exclusive upper bound on the number of cells to blank.
        #[arg(long, value_name = "COUNT", default_value_t = 56)]
        max: usize,
    },
    /// Solve a puzzle given as an argument or on stdin.
    Solve {
        /// Puzzle text; read from stdin if omitted.
        #[arg(value_name = "GRID")]
        grid: Option<String>,
    },
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(PuzzleSeed::random);
    log::debug!("using seed {seed}");

    match args.command {
        Command::Generate => generate(seed),
        Command::Puzzle { min, max } => puzzle(seed, min, max),
        Command::Solve { grid } => solve(seed, grid),
    }
}

fn generate(seed: PuzzleSeed) {
    let mut engine = SudokuEngine::with_seed(seed);
    if !engine.generate() {
        eprintln!("generation failed");
        process::exit(1);
    }
    println!("Seed:");
    println!("  {seed}");
    println!();
    println!("{}", engine.grid());
}

fn puzzle(seed: PuzzleSeed, min: usize, max: usize) {
    if min >= max {
        eprintln!("--min must be below --max");
        process::exit(2);
    }
    let mut engine = SudokuEngine::with_seed(seed);
    if !engine.generate() {
        eprintln!("generation failed");
        process::exit(1);
    }
    let solution = engine.grid().clone();
    let sampled = engine.carve(min, max);

    println!("Seed:");
    println!("  {seed}");
    println!();
    println!("Puzzle ({sampled} cells targeted, {} blank):", engine.grid().empty_count());
    println!("{}", engine.grid());
    println!();
    println!("Solution:");
    println!("{solution}");
}

fn solve(seed: PuzzleSeed, grid: Option<String>) {
    let text = grid.unwrap_or_else(|| {
        let mut buffer = String::new();
        if let Err(err) = std::io::stdin().read_to_string(&mut buffer) {
            eprintln!("failed to read stdin: {err}");
            process::exit(2);
        }
        buffer
    });

    let grid: Grid = match text.parse() {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("invalid puzzle: {err}");
            process::exit(2);
        }
    };

    let mut engine = SudokuEngine::with_seed(seed);
    if let Err(err) = engine.set_board(grid.rows()) {
        eprintln!("invalid puzzle: {err}");
        process::exit(2);
    }

    if !engine.solve() {
        eprintln!("no solution found");
        process::exit(1);
    }
    println!("{}", engine.grid());
}
