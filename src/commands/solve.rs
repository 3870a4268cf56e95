//! Word solving command
//!
//! Runs the solver against a specific solution and returns the full path.

use crate::core::Word;
use crate::solver::entropy::pool_entropy;
use crate::solver::{Outcome, RoundReport, SolveConfig, Solver};

/// Result of solving a word
pub struct SolveResult {
    pub target: String,
    pub steps: Vec<RoundReport>,
    pub outcome: Outcome,
    pub corpus_size: usize,
    /// Entropy of the starting pool (bits)
    pub initial_entropy: f64,
    /// Whether the solution appears in the corpus at all
    pub in_corpus: bool,
}

impl SolveResult {
    #[must_use]
    pub const fn success(&self) -> bool {
        self.outcome.is_solved()
    }
}

/// Solve `target` over `corpus`
///
/// # Errors
///
/// Returns an error if:
/// - The target is not a valid word of the configured length
/// - The corpus is empty or the budget is zero
/// - The clues empty the candidate pool before the session ends
pub fn solve_word(target: &str, corpus: &[Word], config: SolveConfig) -> Result<SolveResult, String> {
    let solver = Solver::new(corpus, target, config).map_err(|e| e.to_string())?;

    let initial_entropy = pool_entropy(solver.start().pool()).map_err(|e| e.to_string())?;
    let in_corpus = corpus.contains(solver.solution());

    let run = solver.run().map_err(|e| e.to_string())?;

    Ok(SolveResult {
        target: solver.solution().text().to_string(),
        steps: run.rounds,
        outcome: run.outcome,
        corpus_size: corpus.len(),
        initial_entropy,
        in_corpus,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::CORPUS;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn solve_reference_scenario() {
        let corpus = words_from_slice(&["apple", "angle", "ample", "amble"], 5, false);
        let result = solve_word("APPLE", &corpus, SolveConfig::default()).unwrap();

        assert!(result.success());
        assert!(result.in_corpus);
        assert_eq!(result.target, "apple");
        assert_eq!(result.steps.len(), 2);
        assert!((result.initial_entropy - 2.0).abs() < 1e-12);
    }

    #[test]
    fn solve_embedded_corpus_records_contraction() {
        let corpus = words_from_slice(CORPUS, 5, false);
        let result = solve_word("crane", &corpus, SolveConfig::new(5, 8)).unwrap();

        assert!(result.success());
        for step in &result.steps {
            assert!(step.pool_after <= step.pool_before);
            assert!(step.information_gain >= 0.0);
        }
        assert_eq!(result.steps.last().unwrap().guess.text(), "crane");
    }

    #[test]
    fn solve_respects_budget() {
        let corpus = words_from_slice(CORPUS, 5, false);
        let result = solve_word("crane", &corpus, SolveConfig::new(5, 1)).unwrap();

        assert!(result.steps.len() <= 1);
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let corpus = words_from_slice(&["apple"], 5, false);

        assert!(solve_word("appl", &corpus, SolveConfig::default()).is_err());
        assert!(solve_word("a pple", &corpus, SolveConfig::default()).is_err());
        assert!(solve_word("apple", &[], SolveConfig::default()).is_err());
    }
}
