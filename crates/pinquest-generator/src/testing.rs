//! Test utilities for generator implementations.
//!
//! All assertion helpers use `#[track_caller]` so failures point at the test
//! that called them.

use pinquest_core::{MathStep, PuzzleChain};
use rand::SeedableRng as _;
use rand_pcg::Pcg64;

/// A reproducible generator for tests.
pub fn seeded_rng(seed: u64) -> Pcg64 {
    Pcg64::seed_from_u64(seed)
}

/// Asserts that `chain` is well formed and reveals `digit`.
#[track_caller]
pub fn assert_chain_valid(chain: &PuzzleChain, digit: u8) {
    assert_eq!(chain.target_digit, digit, "chain targets the wrong digit");
    assert!(!chain.steps.is_empty(), "chain to {digit} has no steps");
    for step in &chain.steps {
        assert!(step.is_correct(), "incorrect step {step} in chain to {digit}");
    }
    let last = chain.final_result();
    if chain.use_last_digit {
        assert_eq!(last % 10, u32::from(digit), "last answer {last} does not end in {digit}");
    } else {
        assert_eq!(last, u32::from(digit), "last answer {last} is not {digit}");
    }
    assert!(chain.is_consistent());
}

/// Asserts that no operand or result exceeds `max`.
#[track_caller]
pub fn assert_values_within(steps: &[MathStep], max: u32) {
    for step in steps {
        assert!(step.max_value() <= max, "{step} exceeds {max}");
    }
}

/// Asserts that every step starts from the previous step's result.
#[track_caller]
pub fn assert_chain_linked(steps: &[MathStep]) {
    for pair in steps.windows(2) {
        assert_eq!(
            pair[0].result, pair[1].left,
            "{} does not continue from {}",
            pair[1], pair[0]
        );
    }
}
