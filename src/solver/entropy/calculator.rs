//! Entropy and information gain over a candidate pool
//!
//! Every pool member is assumed equally likely to be the solution, so a pool of
//! `n` words carries `log2(n)` bits of uncertainty.

use crate::core::{Clue, Word};
use rustc_hash::FxHashMap;
use std::fmt;

/// Error type for entropy queries on an empty pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntropyError {
    EmptyPool,
}

impl fmt::Display for EntropyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPool => write!(f, "Entropy is undefined for an empty candidate pool"),
        }
    }
}

impl std::error::Error for EntropyError {}

/// Entropy of a pool under a uniform prior, from its size alone
///
/// H = log₂(|pool|)
///
/// # Errors
/// Returns `EntropyError::EmptyPool` for an empty pool.
///
/// # Examples
/// ```
/// use infogain_wordle::solver::entropy::pool_entropy;
///
/// assert_eq!(pool_entropy(&["apple"]).unwrap(), 0.0);
/// assert!((pool_entropy(&["a", "b", "c", "d"]).unwrap() - 2.0).abs() < 1e-12);
/// assert!(pool_entropy::<&str>(&[]).is_err());
/// ```
pub fn pool_entropy<T>(pool: &[T]) -> Result<f64, EntropyError> {
    if pool.is_empty() {
        return Err(EntropyError::EmptyPool);
    }
    Ok(uniform_entropy(pool.len()))
}

/// Entropy of a pool summed member by member
///
/// H = -Σ p(x) · log₂(p(x)), with p(x) = 1/|pool| for every member.
/// Agrees with [`pool_entropy`] up to floating-point rounding.
///
/// # Errors
/// Returns `EntropyError::EmptyPool` for an empty pool.
pub fn pool_entropy_by_member<T>(pool: &[T]) -> Result<f64, EntropyError> {
    if pool.is_empty() {
        return Err(EntropyError::EmptyPool);
    }

    let p = 1.0 / pool.len() as f64;
    Ok(pool.iter().map(|_| -p * p.log2()).sum())
}

/// log₂ of a non-zero bucket size
#[inline]
fn uniform_entropy(size: usize) -> f64 {
    (size as f64).log2()
}

/// Information gain of a partition of `total` words into buckets of the given sizes
///
/// IG = H(pool) - Σ (|bucket| / |pool|) · H(bucket)
///
/// Sizes are summed in ascending order, so two partitions with the same shape
/// score bit-for-bit the same regardless of hash map iteration order.
fn gain_from_sizes(total: usize, mut sizes: Vec<usize>) -> f64 {
    sizes.sort_unstable();

    let total_f = total as f64;
    let weighted: f64 = sizes
        .into_iter()
        .map(|size| (size as f64 / total_f) * uniform_entropy(size))
        .sum();

    uniform_entropy(total) - weighted
}

/// Outcome of simulating one prospective guess against a pool
#[derive(Debug, Clone)]
pub struct GuessSimulation<'a> {
    /// Pool members bucketed by the clue the guess would receive, in pool order
    pub groups: FxHashMap<Clue, Vec<&'a Word>>,
    /// Expected reduction in pool entropy (bits)
    pub information_gain: f64,
    pool_size: usize,
}

impl GuessSimulation<'_> {
    /// Number of distinct clue patterns
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.groups.len()
    }

    /// Size of the largest bucket (worst-case remaining pool)
    #[must_use]
    pub fn largest_bucket(&self) -> usize {
        self.groups.values().map(Vec::len).max().unwrap_or(0)
    }

    /// Expected pool size after observing the clue
    #[must_use]
    pub fn expected_remaining(&self) -> f64 {
        let total = self.pool_size as f64;
        self.groups
            .values()
            .map(|group| {
                let size = group.len() as f64;
                size * size / total
            })
            .sum()
    }

    /// Size of the simulated pool
    #[must_use]
    pub const fn pool_size(&self) -> usize {
        self.pool_size
    }
}

/// Simulate guessing `candidate` against every possible solution in `pool`
///
/// Each pool member is treated in turn as the hidden solution; members are bucketed
/// by the clue `candidate` would receive and the information gain of the split
/// is computed.
///
/// # Errors
/// Returns `EntropyError::EmptyPool` for an empty pool.
///
/// # Examples
/// ```
/// use infogain_wordle::core::Word;
/// use infogain_wordle::solver::entropy::simulate_guess;
///
/// let words: Vec<Word> = ["apple", "angle", "ample", "amble"]
///     .iter()
///     .map(|w| Word::new(*w, 5).unwrap())
///     .collect();
/// let pool: Vec<&Word> = words.iter().collect();
///
/// // AMPLE tells all four words apart: a full 2 bits
/// let simulation = simulate_guess(&words[2], &pool).unwrap();
/// assert_eq!(simulation.bucket_count(), 4);
/// assert!((simulation.information_gain - 2.0).abs() < 1e-12);
/// ```
pub fn simulate_guess<'a>(
    candidate: &Word,
    pool: &[&'a Word],
) -> Result<GuessSimulation<'a>, EntropyError> {
    if pool.is_empty() {
        return Err(EntropyError::EmptyPool);
    }

    let mut groups: FxHashMap<Clue, Vec<&'a Word>> = FxHashMap::default();
    for &hypothetical in pool {
        groups
            .entry(Clue::encode(hypothetical, candidate))
            .or_default()
            .push(hypothetical);
    }

    let sizes = groups.values().map(Vec::len).collect();

    Ok(GuessSimulation {
        information_gain: gain_from_sizes(pool.len(), sizes),
        groups,
        pool_size: pool.len(),
    })
}

/// Information gain of `candidate` against `pool`, without keeping the buckets
///
/// Scores identically to [`simulate_guess`].
///
/// # Errors
/// Returns `EntropyError::EmptyPool` for an empty pool.
pub fn information_gain(candidate: &Word, pool: &[&Word]) -> Result<f64, EntropyError> {
    if pool.is_empty() {
        return Err(EntropyError::EmptyPool);
    }

    Ok(gain_from_sizes(
        pool.len(),
        clue_counts(candidate, pool).into_values().collect(),
    ))
}

/// Count pool members per clue pattern
fn clue_counts(candidate: &Word, pool: &[&Word]) -> FxHashMap<Clue, usize> {
    let mut counts = FxHashMap::default();

    for &hypothetical in pool {
        *counts
            .entry(Clue::encode(hypothetical, candidate))
            .or_insert(0) += 1;
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t, t.len()).unwrap()).collect()
    }

    const APPLES: [&str; 4] = ["apple", "angle", "ample", "amble"];

    #[test]
    fn pool_entropy_singleton_is_zero() {
        assert!(pool_entropy(&["apple"]).unwrap().abs() < f64::EPSILON);
        assert!(pool_entropy_by_member(&["apple"]).unwrap().abs() < f64::EPSILON);
    }

    #[test]
    fn pool_entropy_empty_is_error() {
        let empty: [&Word; 0] = [];
        assert_eq!(pool_entropy(&empty), Err(EntropyError::EmptyPool));
        assert_eq!(pool_entropy_by_member(&empty), Err(EntropyError::EmptyPool));
    }

    #[test]
    fn pool_entropy_forms_agree() {
        for size in [1, 2, 3, 7, 100, 621, 4096] {
            let pool = vec![0u8; size];
            let by_count = pool_entropy(&pool).unwrap();
            let by_member = pool_entropy_by_member(&pool).unwrap();

            assert!((by_count - (size as f64).log2()).abs() < 1e-12);
            assert!((by_count - by_member).abs() < 1e-9);
        }
    }

    #[test]
    fn simulate_matches_reference_scores() {
        let words = words(&APPLES);
        let pool: Vec<&Word> = words.iter().collect();

        let expected = [1.5, 0.811_278_124_459_132_9, 2.0, 1.5];
        for (candidate, expected) in words.iter().zip(expected) {
            let simulation = simulate_guess(candidate, &pool).unwrap();
            assert!((simulation.information_gain - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn simulate_buckets_keep_pool_order() {
        let words = words(&APPLES);
        let pool: Vec<&Word> = words.iter().collect();

        let simulation = simulate_guess(&words[1], &pool).unwrap();
        let clue = Clue::parse(&words[1], "A__LE").unwrap();
        let bucket: Vec<&str> = simulation.groups[&clue].iter().map(|w| w.text()).collect();

        assert_eq!(bucket, ["apple", "ample", "amble"]);
        assert_eq!(simulation.bucket_count(), 2);
        assert_eq!(simulation.largest_bucket(), 3);
        assert!((simulation.expected_remaining() - 2.5).abs() < 1e-12);
        assert_eq!(simulation.pool_size(), 4);
    }

    #[test]
    fn gain_is_zero_when_all_clues_agree() {
        let words = words(&["aaaaa", "bbbbb", "ccccc"]);
        let pool: Vec<&Word> = words.iter().collect();
        let guess = Word::new("zzzzz", 5).unwrap();

        let simulation = simulate_guess(&guess, &pool).unwrap();
        assert_eq!(simulation.bucket_count(), 1);
        assert!(simulation.information_gain.abs() < f64::EPSILON);
    }

    #[test]
    fn gain_is_nonnegative_and_bounded() {
        let words = words(&["crane", "slate", "irate", "trace", "raise", "grate", "crate"]);
        let pool: Vec<&Word> = words.iter().collect();
        let bound = pool_entropy(&pool).unwrap();

        for candidate in &words {
            let gain = information_gain(candidate, &pool).unwrap();
            assert!(gain >= 0.0);
            assert!(gain <= bound + 1e-12);
        }
    }

    #[test]
    fn perfect_split_reaches_pool_entropy() {
        let words = words(&["slate", "zzzzz"]);
        let pool: Vec<&Word> = words.iter().collect();

        let gain = information_gain(&words[0], &pool).unwrap();
        assert!((gain - 1.0).abs() < 1e-12);
    }

    #[test]
    fn information_gain_matches_simulation() {
        let words = words(&["crane", "slate", "irate", "trace", "raise"]);
        let pool: Vec<&Word> = words.iter().collect();

        for candidate in &words {
            let simulated = simulate_guess(candidate, &pool).unwrap().information_gain;
            assert_eq!(information_gain(candidate, &pool).unwrap().to_bits(), simulated.to_bits());
        }
    }

    #[test]
    fn simulate_empty_pool_is_error() {
        let guess = Word::new("crane", 5).unwrap();
        assert!(matches!(simulate_guess(&guess, &[]), Err(EntropyError::EmptyPool)));
        assert_eq!(information_gain(&guess, &[]), Err(EntropyError::EmptyPool));
    }
}
