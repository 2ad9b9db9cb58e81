//! Core data structures for code-revealing arithmetic puzzles.
//!
//! A puzzle hides a code (usually a 4-digit PIN) behind chains of arithmetic
//! problems. Solving a chain reveals one digit of the code, or, in meta mode,
//! one half of a grid coordinate. This crate holds the types shared by the
//! generator and by whatever presents puzzles to a player, plus the answer
//! validators. It contains no randomness.
//!
//! # Overview
//!
//! - [`operation`]: [`Operation`] and the [`OperationSet`] of enabled operations
//! - [`difficulty`]: [`Difficulty`], its [`DifficultyConstraints`], and
//!   [`ChainLength`] ranges
//! - [`step`]: a single [`MathStep`]
//! - [`chain`]: a [`PuzzleChain`] revealing one digit
//! - [`code`]: the [`Code`] a puzzle reveals
//! - [`meta`]: the 10×10 [`MetaGrid`] of meta puzzles
//! - [`puzzle`]: complete [`Puzzle`]s and [`GameMode`]s
//! - [`validate`]: checking submitted answers
//!
//! # Examples
//!
//! ```
//! use pinquest_core::{MathStep, Operation, PuzzleChain, validate};
//!
//! let chain = PuzzleChain {
//!     target_digit: 7,
//!     steps: vec![
//!         MathStep::new(2, Operation::Add, 8).unwrap(),
//!         MathStep::new(10, Operation::Subtract, 4).unwrap(),
//!         MathStep::new(6, Operation::Add, 1).unwrap(),
//!     ],
//!     use_last_digit: false,
//! };
//!
//! assert!(validate::validate_chain(&chain, &[10, 6, 7]));
//! assert!(!validate::validate_chain(&chain, &[10, 5, 7]));
//! ```

pub mod chain;
pub mod code;
pub mod difficulty;
pub mod meta;
pub mod operation;
pub mod puzzle;
pub mod step;
pub mod validate;

// Re-export commonly used types
pub use self::{
    chain::PuzzleChain,
    code::{Code, CodeError},
    difficulty::{ChainLength, ChainLengthError, Difficulty, DifficultyConstraints},
    meta::{MetaCoordinate, MetaGrid},
    operation::{Operation, OperationSet, OperationSetError},
    puzzle::{GameMode, MultiplicationTableConfig, Puzzle},
    step::MathStep,
};
