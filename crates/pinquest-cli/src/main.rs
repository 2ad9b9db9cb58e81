//! Command-line front end for PIN Quest puzzles.
//!
//! Generates a puzzle for a code and prints it as a worksheet or as JSON.
//! Set `RUST_LOG=debug` to see generator decisions.

use std::process;

use clap::Parser;
use pinquest_core::{
    ChainLength, ChainLengthError, Code, Difficulty, GameMode, MultiplicationTableConfig,
    OperationSet,
};
use pinquest_generator::{
    GenerateError, GeneratedPuzzle, PuzzleGenerator, PuzzleSeed, generate_multiplication_table,
};

use crate::worksheet::{TableDrill, Worksheet};

mod worksheet;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Code to hide in the puzzle, e.g. 0472.
    #[arg(value_name = "CODE", required_unless_present = "table")]
    code: Option<Code>,

    /// Difficulty: easy, medium, or hard.
    #[arg(short, long, default_value = "easy")]
    difficulty: Difficulty,

    /// Enabled operations, as symbols (`+-*/`) or names (`add,mul`).
    #[arg(long, value_name = "OPS", default_value = "+-", allow_hyphen_values = true)]
    ops: OperationSet,

    /// Presentation: digital, print, meta, or meta-print.
    #[arg(short, long, default_value = "digital")]
    mode: GameMode,

    /// Use longer story chains (6-9 steps).
    #[arg(long, conflicts_with_all = ["min_steps", "max_steps"])]
    story: bool,

    /// Smallest number of steps per chain.
    #[arg(long, value_name = "N", requires = "max_steps")]
    min_steps: Option<usize>,

    /// Largest number of steps per chain.
    #[arg(long, value_name = "N", requires = "min_steps")]
    max_steps: Option<usize>,

    /// Seed as 64 hex characters, printed by every run.
    #[arg(long, value_name = "HEX", conflicts_with = "seed_phrase")]
    seed: Option<PuzzleSeed>,

    /// Derive the seed from arbitrary text.
    #[arg(long, value_name = "TEXT")]
    seed_phrase: Option<String>,

    /// Build every chain from times-table facts.
    #[arg(long, conflicts_with = "table")]
    multiplication: bool,

    /// Print a shuffled multiplication table drill for NUMBER instead.
    #[arg(long, value_name = "NUMBER")]
    table: Option<u32>,

    /// Largest multiplier of the table drill.
    #[arg(long, value_name = "N", default_value_t = MultiplicationTableConfig::DEFAULT_MAX_MULTIPLIER)]
    max_multiplier: u32,

    /// Print JSON instead of a worksheet.
    #[arg(long)]
    json: bool,

    /// Show the answers.
    #[arg(long)]
    answers: bool,
}

impl Args {
    fn seed(&self) -> PuzzleSeed {
        match (&self.seed, &self.seed_phrase) {
            (Some(seed), _) => *seed,
            (None, Some(phrase)) => PuzzleSeed::from_phrase(phrase),
            (None, None) => PuzzleSeed::random(),
        }
    }

    fn chain_length(&self) -> Result<ChainLength, ChainLengthError> {
        match (self.min_steps, self.max_steps) {
            (Some(min), Some(max)) => ChainLength::new(min, max),
            _ if self.story => Ok(ChainLength::STORY),
            _ => Ok(ChainLength::STANDALONE),
        }
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum AppError {
    #[display("{_0}")]
    Generate(#[from] GenerateError),
    #[display("invalid step range: {_0}")]
    ChainLength(#[from] ChainLengthError),
    #[display("failed to write JSON: {_0}")]
    Json(#[from] serde_json::Error),
    #[display("a code is required")]
    MissingCode,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let seed = args.seed();
    log::info!("using seed {seed}");

    if let Some(number) = args.table {
        let config = MultiplicationTableConfig {
            number,
            max_multiplier: args.max_multiplier,
        };
        let steps = generate_multiplication_table(&mut seed.rng(), config);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&steps)?);
        } else {
            print!(
                "{}",
                TableDrill {
                    steps: &steps,
                    show_answers: args.answers,
                }
            );
        }
        return Ok(());
    }

    let code = args.code.as_ref().ok_or(AppError::MissingCode)?;
    let generated = generate(args, code, seed)?;
    debug_assert!(generated.puzzle.is_consistent());

    if args.json {
        let output = serde_json::json!({
            "seed": generated.seed.to_string(),
            "mode": args.mode,
            "puzzle": generated.puzzle,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Seed: {}", generated.seed);
        println!();
        print!(
            "{}",
            Worksheet {
                puzzle: &generated.puzzle,
                mode: args.mode,
                show_answers: args.answers,
            }
        );
    }
    Ok(())
}

fn generate(args: &Args, code: &Code, seed: PuzzleSeed) -> Result<GeneratedPuzzle, AppError> {
    let generator = PuzzleGenerator::new(args.difficulty, args.ops)?
        .with_chain_length(args.chain_length()?);
    if args.multiplication {
        return Ok(generator.generate_multiplication_pin_with_seed(code, seed));
    }
    Ok(generator.generate_for_mode(code, args.mode, seed)?)
}
