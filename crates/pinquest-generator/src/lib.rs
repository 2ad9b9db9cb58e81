//! Seeded generation of code-revealing arithmetic puzzles.
//!
//! Every generating function takes the random source as `&mut R` where
//! `R: rand::Rng`, so a [`PuzzleSeed`] (or any other generator) reproduces the
//! same puzzle for the same inputs.
//!
//! # Overview
//!
//! - [`generate_chain`]: one chain revealing a digit, built by a
//!   [`ChainStrategy`](chain::ChainStrategy) picked from the difficulty and
//!   operations
//! - [`generate_puzzle`] and [`generate_meta_puzzle`]: whole puzzles for a code
//! - [`generate_meta_grid`]: the 10×10 grid of a meta puzzle
//! - [`generate_multiplication_table`], [`generate_multiplication_pin_chain`],
//!   [`generate_multiplication_pin_puzzle`]: times-table drills
//! - [`PuzzleGenerator`]: a facade that fixes the settings and records the seed
//!
//! # Examples
//!
//! ```
//! use pinquest_core::{Code, Difficulty, OperationSet};
//! use pinquest_generator::PuzzleGenerator;
//!
//! let code: Code = "0472".parse()?;
//! let generator = PuzzleGenerator::new(Difficulty::Easy, OperationSet::ADD_SUBTRACT)?;
//! let generated = generator.generate(&code);
//!
//! println!("seed: {}", generated.seed);
//! for chain in &generated.puzzle.chains {
//!     for step in &chain.steps {
//!         println!("{step}");
//!     }
//! }
//! assert_eq!(generated.puzzle.revealed_code(), Some(vec![0, 4, 7, 2]));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    assemble::*, chain::generate_chain, error::*, generator::*, grid::*, multiplication::*,
    seed::*,
};

mod assemble;
pub mod chain;
mod error;
mod generator;
mod grid;
mod multiplication;
pub mod random;
mod seed;

#[cfg(test)]
mod testing;
