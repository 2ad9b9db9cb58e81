use std::collections::{HashMap, HashSet};

use pinquest_core::{ChainLength, DifficultyConstraints, MathStep, Operation};
use rand::Rng;

use super::{ChainRequest, add, sub};
use crate::random::{random_int, shuffle};

/// Whole-chain attempts before falling back.
const MAX_CHAIN_RETRIES: usize = 100;
/// Operand draws per operation and step.
const MAX_INVERT_ATTEMPTS: usize = 50;
/// Largest padding operand used by the fallback chain.
const MAX_PADDING_OPERAND: u32 = 5;

pub(super) fn build<R>(rng: &mut R, request: &ChainRequest, range: ChainLength) -> Vec<MathStep>
where
    R: Rng + ?Sized,
{
    for attempt in 1..=MAX_CHAIN_RETRIES {
        if let Some(steps) = try_build(rng, request) {
            return steps;
        }
        log::trace!(
            "backward chain to {} abandoned on attempt {attempt}",
            request.target
        );
    }
    log::debug!(
        "no backward chain to {} after {MAX_CHAIN_RETRIES} attempts, using fallback",
        request.target
    );
    fallback(rng, request.target, &request.difficulty.constraints(), range)
}

fn try_build<R>(rng: &mut R, request: &ChainRequest) -> Option<Vec<MathStep>>
where
    R: Rng + ?Sized,
{
    let constraints = request.difficulty.constraints();
    let visit_limit = request.length.div_ceil(4).max(2);
    let prefer_subtraction = (request.difficulty.is_hard() || request.target == 0)
        && request.operations.has(Operation::Subtract);

    let mut steps = Vec::with_capacity(request.length);
    let mut used = HashSet::new();
    let mut visits = HashMap::from([(request.target, 1_usize)]);
    let mut current = request.target;

    for index in 0..request.length {
        let mut ops = request.operations.to_vec();
        shuffle(rng, &mut ops);
        // The first inverted step is the last step the player solves.
        if index == 0
            && prefer_subtraction
            && let Some(pos) = ops.iter().position(|op| *op == Operation::Subtract)
        {
            ops[..=pos].rotate_right(1);
        }

        let step = ops.into_iter().find_map(|op| {
            let step = invert(rng, op, current, &constraints)?;
            let seen = visits.get(&step.left).copied().unwrap_or(0);
            (!used.contains(&step.key()) && seen < visit_limit).then_some(step)
        })?;

        used.insert(step.key());
        *visits.entry(step.left).or_default() += 1;
        current = step.left;
        steps.push(step);
    }

    steps.reverse();
    Some(steps)
}

/// Finds a step `previous op right = current` within the constraints.
fn invert<R>(
    rng: &mut R,
    op: Operation,
    current: u32,
    constraints: &DifficultyConstraints,
) -> Option<MathStep>
where
    R: Rng + ?Sized,
{
    let max = constraints.max_value;
    match op {
        Operation::Add => {
            let hi = max.min(current);
            if hi == 0 {
                return None;
            }
            (0..MAX_INVERT_ATTEMPTS).find_map(|_| {
                let right = random_int(rng, 1, hi);
                let previous = current - right;
                let carries = !constraints.allow_carry && previous + right > 10;
                (previous <= max && !carries).then(|| add(previous, right))
            })
        }
        Operation::Subtract => (0..MAX_INVERT_ATTEMPTS).find_map(|_| {
            let right = random_int(rng, 1, max);
            let previous = current + right;
            let carries = !constraints.allow_carry && previous > 10;
            (previous <= max && !carries).then(|| sub(previous, right))
        }),
        Operation::Multiply | Operation::Divide => None,
    }
}

/// A chain of exactly `range.min()` steps that always reaches `target`.
///
/// Layout: an optional lead-in step, a base step producing the target, then
/// `+k`/`-k` pairs that return to the target.
fn fallback<R>(
    rng: &mut R,
    target: u32,
    constraints: &DifficultyConstraints,
    range: ChainLength,
) -> Vec<MathStep>
where
    R: Rng + ?Sized,
{
    let max = constraints.max_value;
    let base = if target == 0 {
        let a = random_int(rng, 1, max.min(10));
        sub(a, a)
    } else {
        add(1, target - 1)
    };

    let mut steps = Vec::with_capacity(range.min());
    if (range.min() - 1) % 2 == 1 {
        steps.push(lead_in(rng, base.left, max));
    }
    steps.push(base);

    let mut previous_k = None;
    while steps.len() < range.min() {
        let k = padding_operand(rng, target, max, previous_k);
        steps.push(add(target, k));
        steps.push(sub(target + k, k));
        previous_k = Some(k);
    }
    steps
}

/// A step whose result is `value`, placed before the base step.
fn lead_in<R>(rng: &mut R, value: u32, max: u32) -> MathStep
where
    R: Rng + ?Sized,
{
    if value < max {
        let k = random_int(rng, 1, (max - value).min(MAX_PADDING_OPERAND));
        sub(value + k, k)
    } else {
        let k = random_int(rng, 1, value.min(MAX_PADDING_OPERAND));
        add(value - k, k)
    }
}

fn padding_operand<R>(rng: &mut R, target: u32, max: u32, previous: Option<u32>) -> u32
where
    R: Rng + ?Sized,
{
    let hi = (max - target).min(MAX_PADDING_OPERAND);
    if hi < 2 {
        return 1;
    }
    let k = random_int(rng, 2, hi);
    if previous == Some(k) {
        if k == hi { 2 } else { k + 1 }
    } else {
        k
    }
}

#[cfg(test)]
mod tests {
    use pinquest_core::{Difficulty, OperationSet};

    use super::*;
    use crate::testing::{assert_chain_linked, assert_values_within, seeded_rng};

    fn request(target: u32, difficulty: Difficulty, operations: OperationSet, length: usize) -> ChainRequest {
        ChainRequest {
            target,
            difficulty,
            operations,
            length,
        }
    }

    #[test]
    fn test_backward_chain_reaches_target_and_links() {
        let mut rng = seeded_rng(11);
        for difficulty in [Difficulty::Easy, Difficulty::Medium] {
            let max = difficulty.constraints().max_value;
            for target in 0..=9 {
                for length in 3..=5 {
                    let req = request(target, difficulty, OperationSet::ADD_SUBTRACT, length);
                    let steps = build(&mut rng, &req, ChainLength::STANDALONE);
                    assert_eq!(steps.last().unwrap().result, target);
                    assert!(steps.iter().all(MathStep::is_correct));
                    assert_values_within(&steps, max);
                    assert_chain_linked(&steps);
                }
            }
        }
    }

    #[test]
    fn test_easy_chains_never_carry() {
        let mut rng = seeded_rng(12);
        for target in 0..=9 {
            let req = request(target, Difficulty::Easy, OperationSet::ADD_SUBTRACT, 5);
            for step in build(&mut rng, &req, ChainLength::STANDALONE) {
                if step.operator == Operation::Add {
                    assert!(step.left + step.right <= 10, "{step}");
                }
            }
        }
    }

    #[test]
    fn test_zero_target_ends_in_subtraction() {
        let mut rng = seeded_rng(13);
        for _ in 0..50 {
            let req = request(0, Difficulty::Medium, OperationSet::ADD_SUBTRACT, 4);
            let steps = build(&mut rng, &req, ChainLength::STANDALONE);
            assert_eq!(steps.last().unwrap().operator, Operation::Subtract);
        }
    }

    #[test]
    fn test_steps_are_not_repeated() {
        let mut rng = seeded_rng(14);
        for target in 0..=9 {
            let req = request(target, Difficulty::Medium, OperationSet::ADD_SUBTRACT, 5);
            if let Some(steps) = try_build(&mut rng, &req) {
                let keys: HashSet<_> = steps.iter().map(MathStep::key).collect();
                assert_eq!(keys.len(), steps.len());
            }
        }
    }

    #[test]
    fn test_invert_add_from_zero_fails() {
        let mut rng = seeded_rng(15);
        let constraints = Difficulty::Easy.constraints();
        assert_eq!(invert(&mut rng, Operation::Add, 0, &constraints), None);
        let step = invert(&mut rng, Operation::Subtract, 0, &constraints).unwrap();
        assert_eq!(step.result, 0);
        assert!(step.left <= 10);
    }

    #[test]
    fn test_unsatisfiable_request_falls_back() {
        // Only subtraction on easy cannot walk back from 9 more than once.
        let mut rng = seeded_rng(16);
        let req = request(9, Difficulty::Easy, OperationSet::SUBTRACT, 5);
        let steps = build(&mut rng, &req, ChainLength::STANDALONE);
        assert_eq!(steps.len(), ChainLength::STANDALONE.min());
        assert_eq!(steps.last().unwrap().result, 9);
        assert!(steps.iter().all(MathStep::is_correct));
        assert_values_within(&steps, 10);
    }

    #[test]
    fn test_fallback_lengths() {
        let mut rng = seeded_rng(17);
        for difficulty in [Difficulty::Easy, Difficulty::Medium] {
            let constraints = difficulty.constraints();
            for target in 0..=9 {
                for min in 1..=8 {
                    let range = ChainLength::new(min, min + 2).unwrap();
                    let steps = fallback(&mut rng, target, &constraints, range);
                    assert_eq!(steps.len(), min);
                    assert_eq!(steps.last().unwrap().result, target);
                    assert!(steps.iter().all(MathStep::is_correct));
                    assert_values_within(&steps, constraints.max_value);
                    assert_chain_linked(&steps);
                }
            }
        }
    }

    #[test]
    fn test_fallback_padding_varies() {
        let mut rng = seeded_rng(18);
        let constraints = Difficulty::Medium.constraints();
        let range = ChainLength::new(9, 9).unwrap();
        let steps = fallback(&mut rng, 4, &constraints, range);
        for pair in steps[1..].chunks(2).collect::<Vec<_>>().windows(2) {
            assert_ne!(pair[0][0].right, pair[1][0].right);
        }
    }
}
