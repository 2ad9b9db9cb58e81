//! Uniform sampling helpers shared by every generator.

use rand::{Rng, RngExt as _, distr::uniform::SampleUniform, seq::SliceRandom as _};

/// Returns a uniformly distributed integer in `min..=max`.
///
/// # Panics
///
/// Panics if `min > max`.
///
/// # Examples
///
/// ```
/// use pinquest_generator::{PuzzleSeed, random::random_int};
///
/// let mut rng = PuzzleSeed::from_phrase("dice").rng();
/// assert_eq!(random_int(&mut rng, 5, 5), 5);
/// assert!((1..=6).contains(&random_int(&mut rng, 1, 6)));
/// ```
pub fn random_int<T, R>(rng: &mut R, min: T, max: T) -> T
where
    T: SampleUniform + PartialOrd + Copy,
    R: Rng + ?Sized,
{
    assert!(min <= max, "random_int requires min <= max");
    rng.random_range(min..=max)
}

/// Returns a uniformly chosen element of a non-empty slice.
///
/// # Panics
///
/// Panics if `items` is empty.
pub fn pick<T, R>(rng: &mut R, items: &[T]) -> T
where
    T: Copy,
    R: Rng + ?Sized,
{
    items[random_int(rng, 0, items.len() - 1)]
}

/// Shuffles `items` in place with a uniform Fisher–Yates shuffle.
///
/// The result holds exactly the same elements.
pub fn shuffle<T, R>(rng: &mut R, items: &mut [T])
where
    R: Rng + ?Sized,
{
    items.shuffle(rng);
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::testing::seeded_rng;

    #[test]
    fn test_random_int_degenerate_range() {
        let mut rng = seeded_rng(1);
        for k in 0..20_u32 {
            assert_eq!(random_int(&mut rng, k, k), k);
        }
    }

    #[test]
    fn test_random_int_covers_range() {
        let mut rng = seeded_rng(2);
        let mut seen = [false; 5];
        for _ in 0..500 {
            let v = random_int(&mut rng, 3_usize, 7);
            assert!((3..=7).contains(&v));
            seen[v - 3] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    #[should_panic(expected = "random_int requires min <= max")]
    fn test_random_int_rejects_inverted_range() {
        let mut rng = seeded_rng(3);
        let _ = random_int(&mut rng, 4, 3);
    }

    #[test]
    fn test_pick() {
        let mut rng = seeded_rng(4);
        assert_eq!(pick(&mut rng, &['x']), 'x');
        for _ in 0..50 {
            assert!([1, 2, 3].contains(&pick(&mut rng, &[1, 2, 3])));
        }
    }

    proptest! {
        #[test]
        fn shuffle_is_a_permutation(mut items in proptest::collection::vec(0u8..20, 0..40), seed in any::<u64>()) {
            let mut shuffled = items.clone();
            shuffle(&mut seeded_rng(seed), &mut shuffled);
            prop_assert_eq!(shuffled.len(), items.len());
            shuffled.sort_unstable();
            items.sort_unstable();
            prop_assert_eq!(shuffled, items);
        }

        #[test]
        fn random_int_stays_in_range(a in 0u32..1000, span in 0u32..1000, seed in any::<u64>()) {
            let v = random_int(&mut seeded_rng(seed), a, a + span);
            prop_assert!(a <= v && v <= a + span);
        }
    }
}
