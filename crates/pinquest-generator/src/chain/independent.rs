use std::collections::HashSet;

use pinquest_core::{DifficultyConstraints, MathStep, Operation};
use rand::Rng;

use super::{ChainRequest, add, div, mul, sub};
use crate::{
    multiplication::product_ending_in,
    random::{pick, random_int},
};

/// Draws per step before accepting a repeated fact.
const MAX_FACT_ATTEMPTS: usize = 30;

/// Returns the steps and whether the last result's ones digit is the answer.
pub(super) fn build<R>(rng: &mut R, request: &ChainRequest) -> (Vec<MathStep>, bool)
where
    R: Rng + ?Sized,
{
    let constraints = request.difficulty.constraints();
    let max_factor = request.difficulty.max_factor();
    let ops = request.operations.to_vec();

    let mut used = HashSet::new();
    let mut steps = Vec::with_capacity(request.length);
    for _ in 1..request.length {
        let op = pick(rng, &ops);
        let mut step = random_fact(rng, op, &constraints, max_factor);
        for _ in 1..MAX_FACT_ATTEMPTS {
            if !used.contains(&step.key()) {
                break;
            }
            step = random_fact(rng, op, &constraints, max_factor);
        }
        used.insert(step.key());
        steps.push(step);
    }

    let last = final_fact(rng, request, &ops, &constraints, max_factor);
    let use_last_digit = last.operator == Operation::Multiply && last.result > 9;
    steps.push(last);
    (steps, use_last_digit)
}

/// A random fact within the difficulty's limits.
fn random_fact<R>(
    rng: &mut R,
    op: Operation,
    constraints: &DifficultyConstraints,
    max_factor: u32,
) -> MathStep
where
    R: Rng + ?Sized,
{
    let max = constraints.max_value;
    match op {
        Operation::Add if constraints.two_digit => {
            let a = random_int(rng, 10, max - 10);
            add(a, random_int(rng, 10, max - a))
        }
        Operation::Add => {
            let cap = if constraints.allow_carry { max } else { max.min(10) };
            let a = random_int(rng, 1, cap - 1);
            add(a, random_int(rng, 1, cap - a))
        }
        Operation::Subtract if constraints.two_digit => {
            let a = random_int(rng, 20, max);
            sub(a, random_int(rng, 10, a - 10))
        }
        Operation::Subtract => {
            let a = random_int(rng, 2, max);
            sub(a, random_int(rng, 1, a))
        }
        Operation::Multiply => mul(
            random_int(rng, 2, max_factor),
            random_int(rng, 2, max_factor),
        ),
        Operation::Divide => div(
            random_int(rng, 1, max_factor),
            random_int(rng, 2, max_factor),
        ),
    }
}

/// The fact that reveals the target.
fn final_fact<R>(
    rng: &mut R,
    request: &ChainRequest,
    ops: &[Operation],
    constraints: &DifficultyConstraints,
    max_factor: u32,
) -> MathStep
where
    R: Rng + ?Sized,
{
    let target = request.target;
    let op = if request.operations.has(Operation::Multiply) {
        Operation::Multiply
    } else {
        pick(rng, ops)
    };
    match op {
        Operation::Multiply => product_ending_in(rng, target, 2, max_factor)
            .unwrap_or_else(|| div(target, random_int(rng, 2, max_factor))),
        Operation::Divide => div(target, random_int(rng, 2, max_factor)),
        Operation::Add if target >= 2 && !constraints.two_digit => {
            let a = random_int(rng, 1, target - 1);
            add(a, target - a)
        }
        Operation::Add | Operation::Subtract => difference_to(rng, target, constraints),
    }
}

/// `a - b = target`, with a two-digit `b` when required.
fn difference_to<R>(rng: &mut R, target: u32, constraints: &DifficultyConstraints) -> MathStep
where
    R: Rng + ?Sized,
{
    let lo = if constraints.two_digit { 10 } else { 1 };
    let b = random_int(rng, lo, constraints.max_value - target);
    sub(target + b, b)
}
