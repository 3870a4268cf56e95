//! Word analysis command
//!
//! Scores a single word as an opening guess against the whole corpus.

use crate::core::Word;
use crate::solver::entropy::{pool_entropy, simulate_guess};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub pool_size: usize,
    /// Entropy of the corpus before guessing (bits)
    pub pool_entropy: f64,
    pub information_gain: f64,
    pub bucket_count: usize,
    pub largest_bucket: usize,
    pub expected_remaining: f64,
}

/// Analyze the information gain of `word` against `corpus`
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid for the puzzle length
/// - The word is not in the corpus
/// - The corpus is empty
pub fn analyze_word(word: &str, corpus: &[Word], letters: usize) -> Result<AnalysisResult, String> {
    let word_obj = Word::new(word, letters).map_err(|e| format!("Invalid word: {e}"))?;

    if !corpus.contains(&word_obj) {
        return Err(format!("Word '{word}' not in word list"));
    }

    let pool: Vec<&Word> = corpus.iter().collect();
    let simulation = simulate_guess(&word_obj, &pool).map_err(|e| e.to_string())?;

    Ok(AnalysisResult {
        word: word_obj.text().to_string(),
        pool_size: pool.len(),
        pool_entropy: pool_entropy(&pool).map_err(|e| e.to_string())?,
        information_gain: simulation.information_gain,
        bucket_count: simulation.bucket_count(),
        largest_bucket: simulation.largest_bucket(),
        expected_remaining: simulation.expected_remaining(),
    })
}
