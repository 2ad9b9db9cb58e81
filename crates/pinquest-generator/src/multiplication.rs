//! Multiplication drills: full tables and PIN chains made of times-table facts.

use pinquest_core::{Code, MathStep, MultiplicationTableConfig, Operation, Puzzle, PuzzleChain};
use rand::Rng;

use crate::{
    GenerateError,
    chain::{check_digit, mul},
    random::{pick, random_int, shuffle},
};

/// Smallest and largest factor of a PIN chain fact.
const PIN_FACTORS: (u32, u32) = (2, 9);
/// Range of the number of facts before the final one.
const PIN_LEAD_FACTS: (usize, usize) = (5, 7);

/// Returns `number × m` for every `m` in `1..=max_multiplier`, in shuffled
/// order.
///
/// Products that overflow `u32` are skipped.
///
/// # Examples
///
/// ```
/// use pinquest_core::MultiplicationTableConfig;
/// use pinquest_generator::{PuzzleSeed, generate_multiplication_table};
///
/// let mut rng = PuzzleSeed::from_phrase("sevens").rng();
/// let table = generate_multiplication_table(&mut rng, MultiplicationTableConfig::new(7));
/// assert_eq!(table.len(), 10);
/// assert!(table.iter().all(|step| step.left == 7 && step.result == 7 * step.right));
/// ```
pub fn generate_multiplication_table<R>(rng: &mut R, config: MultiplicationTableConfig) -> Vec<MathStep>
where
    R: Rng + ?Sized,
{
    let mut steps: Vec<_> = (1..=config.max_multiplier)
        .filter_map(|m| MathStep::new(config.number, Operation::Multiply, m))
        .collect();
    shuffle(rng, &mut steps);
    steps
}

/// Generates a chain of times-table facts whose last product ends in
/// `target_digit`.
///
/// The chain always reveals the ones digit of its final answer.
///
/// # Errors
///
/// Returns [`GenerateError::DigitOutOfRange`] for a target above 9.
pub fn generate_multiplication_pin_chain<R>(rng: &mut R, target_digit: u8) -> Result<PuzzleChain, GenerateError>
where
    R: Rng + ?Sized,
{
    check_digit(target_digit)?;
    Ok(pin_chain(rng, target_digit))
}

/// Generates one multiplication PIN chain per digit of `code`.
pub fn generate_multiplication_pin_puzzle<R>(rng: &mut R, code: &Code) -> Puzzle
where
    R: Rng + ?Sized,
{
    let chains = code.digits().iter().map(|&digit| pin_chain(rng, digit)).collect();
    Puzzle {
        code: code.clone(),
        chains,
        meta: None,
    }
}

fn pin_chain<R>(rng: &mut R, target_digit: u8) -> PuzzleChain
where
    R: Rng + ?Sized,
{
    let (lo, hi) = PIN_FACTORS;
    let count = random_int(rng, PIN_LEAD_FACTS.0, PIN_LEAD_FACTS.1);
    let mut steps: Vec<_> = (0..count)
        .map(|_| mul(random_int(rng, lo, hi), random_int(rng, lo, hi)))
        .collect();

    let target = u32::from(target_digit);
    let last = product_ending_in(rng, target, lo, hi).unwrap_or_else(|| mul(1, target));
    steps.push(last);
    PuzzleChain {
        target_digit,
        steps,
        use_last_digit: true,
    }
}

/// Picks a random product of two factors in `lo..=hi` whose ones digit is
/// `digit`.
pub(crate) fn product_ending_in<R>(rng: &mut R, digit: u32, lo: u32, hi: u32) -> Option<MathStep>
where
    R: Rng + ?Sized,
{
    let candidates: Vec<_> = (lo..=hi)
        .flat_map(|a| (lo..=hi).map(move |b| (a, b)))
        .filter(|(a, b)| a * b % 10 == digit)
        .collect();
    if candidates.is_empty() {
        return None;
    }
    let (a, b) = pick(rng, &candidates);
    Some(mul(a, b))
}
