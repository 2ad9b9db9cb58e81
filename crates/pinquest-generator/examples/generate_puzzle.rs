//! Example generating puzzles in bulk and checking every chain.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` for a difficulty and operation set
//! - Generate many puzzles in parallel from random seeds
//! - Report the seed of any puzzle whose chains do not reveal its code
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Choose the settings and the number of puzzles:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard --ops "+-*/" --count 50000
//! ```
//!
//! Check meta puzzles instead of plain ones:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --meta --code 19283746
//! ```

use std::process;

use clap::Parser;
use pinquest_core::{Code, Difficulty, OperationSet, Puzzle};
use pinquest_generator::{GeneratedPuzzle, PuzzleGenerator};
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Code the puzzles reveal.
    #[arg(long, default_value = "0472")]
    code: Code,

    /// Difficulty: easy, medium, or hard.
    #[arg(short, long, default_value = "medium")]
    difficulty: Difficulty,

    /// Enabled operations, as symbols or names.
    #[arg(long, value_name = "OPS", default_value = "+-")]
    ops: OperationSet,

    /// Generate meta (grid) puzzles.
    #[arg(long)]
    meta: bool,

    /// Number of puzzles to generate.
    #[arg(long, value_name = "COUNT", default_value_t = 10_000)]
    count: usize,
}

fn main() {
    let args = Args::parse();
    let generator = match PuzzleGenerator::new(args.difficulty, args.ops) {
        Ok(generator) => generator,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    let failures = (0..args.count)
        .into_par_iter()
        .map(|_| {
            if args.meta {
                generator.generate_meta(&args.code).unwrap()
            } else {
                generator.generate(&args.code)
            }
        })
        .filter(|generated| !generated.puzzle.is_consistent())
        .collect::<Vec<_>>();

    let sample = if args.meta {
        generator.generate_meta(&args.code).unwrap()
    } else {
        generator.generate(&args.code)
    };
    print_puzzle(&sample);

    println!("Checked:");
    println!("  Puzzles: {}", args.count);
    println!("  Failures: {}", failures.len());
    if failures.is_empty() {
        return;
    }
    for failure in &failures {
        eprintln!("inconsistent puzzle from seed {}", failure.seed);
    }
    process::exit(1);
}

fn print_puzzle(generated: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", generated.seed);
    println!();

    let Puzzle { code, chains, meta } = &generated.puzzle;
    println!("Code:");
    println!("  {code}");
    println!();

    if let Some(grid) = meta {
        println!("Grid:");
        for row in &grid.cells {
            let row: Vec<_> = row.iter().map(u8::to_string).collect();
            println!("  {}", row.join(" "));
        }
        println!();
    }

    for (i, chain) in chains.iter().enumerate() {
        println!("Chain {} (target {}):", i + 1, chain.target_digit);
        for step in &chain.steps {
            println!("  {step}");
        }
    }
    println!();
}
