use pinquest_core::{MathStep, Operation};
use rand::Rng;

use super::{ChainRequest, add, sub};
use crate::random::{pick, random_int};

/// Range of the starting value.
const START: (u32, u32) = (25, 75);
/// Smallest intermediate value; keeps the final subtrahend two-digit.
const MIN_VALUE: u32 = 20;
/// Operand bounds for the walk.
const MIN_OPERAND: u32 = 10;
const MAX_OPERAND: u32 = 50;

pub(super) fn build<R>(rng: &mut R, request: &ChainRequest) -> Vec<MathStep>
where
    R: Rng + ?Sized,
{
    let max = request.difficulty.constraints().max_value;
    let ops: Vec<_> = request
        .operations
        .operations()
        .filter(|op| matches!(op, Operation::Add | Operation::Subtract))
        .collect();

    let mut current = random_int(rng, START.0, START.1);
    let mut steps = Vec::with_capacity(request.length);
    for _ in 1..request.length {
        let op = match pick(rng, &ops) {
            Operation::Add if current + MIN_OPERAND > max => Operation::Subtract,
            Operation::Subtract if current < MIN_VALUE + MIN_OPERAND => Operation::Add,
            op => op,
        };
        let step = if op == Operation::Add {
            let hi = (max - current).min(MAX_OPERAND);
            add(current, random_int(rng, MIN_OPERAND, hi))
        } else {
            let hi = (current - MIN_VALUE).min(MAX_OPERAND);
            sub(current, random_int(rng, MIN_OPERAND, hi))
        };
        current = step.result;
        steps.push(step);
    }
    steps.push(sub(current, current - request.target));
    steps
}
