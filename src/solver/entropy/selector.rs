//! Information-gain based word selection
//!
//! Selects the word whose clue would, on average, remove the most uncertainty
//! about the solution.

use super::calculator::{EntropyError, information_gain};
use crate::core::Word;
use rayon::prelude::*;

/// A guess together with its score
#[derive(Debug, Clone, Copy)]
pub struct ScoredGuess<'a> {
    pub word: &'a Word,
    /// Expected information gain (bits)
    pub information_gain: f64,
    /// Position of the word in the guess pool it was picked from
    pub index: usize,
}

/// Select the guess with maximal information gain against `candidates`
///
/// Scoring runs in parallel. Ties go to the word that comes first in `guess_pool`,
/// so the result is deterministic for a given pool order.
///
/// # Errors
/// Returns `EntropyError::EmptyPool` if either pool is empty.
///
/// # Examples
/// ```
/// use infogain_wordle::core::Word;
/// use infogain_wordle::solver::entropy::select_best_guess;
///
/// let words: Vec<Word> = ["apple", "angle", "ample", "amble"]
///     .iter()
///     .map(|w| Word::new(*w, 5).unwrap())
///     .collect();
/// let pool: Vec<&Word> = words.iter().collect();
///
/// let best = select_best_guess(&pool, &pool).unwrap();
/// assert_eq!(best.word.text(), "ample");
/// assert!((best.information_gain - 2.0).abs() < 1e-12);
/// ```
pub fn select_best_guess<'a>(
    guess_pool: &[&'a Word],
    candidates: &[&Word],
) -> Result<ScoredGuess<'a>, EntropyError> {
    if candidates.is_empty() {
        return Err(EntropyError::EmptyPool);
    }

    guess_pool
        .par_iter()
        .enumerate()
        .map(|(index, &word)| {
            information_gain(word, candidates).map(|gain| ScoredGuess {
                word,
                information_gain: gain,
                index,
            })
        })
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .max_by(|a, b| {
            a.information_gain
                .total_cmp(&b.information_gain)
                .then_with(|| b.index.cmp(&a.index))
        })
        .ok_or(EntropyError::EmptyPool)
}
