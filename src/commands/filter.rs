//! Clue filtering command
//!
//! Applies clues observed elsewhere (for example in a puzzle played by hand) to a
//! corpus and reports which words remain, plus the best next guess.

use crate::core::{Clue, Word};
use crate::solver::entropy::{pool_entropy, select_best_guess};
use crate::solver::filter_pool;

/// Result of filtering a corpus by clues
pub struct FilterResult {
    pub history: Vec<(Word, Clue)>,
    pub remaining: Vec<Word>,
    /// Entropy of the remaining pool, `None` when nothing remains
    pub pool_entropy: Option<f64>,
    /// Highest information gain word among the remaining, with its gain
    pub suggestion: Option<(Word, f64)>,
}

/// Parse one `guess=clue` argument, e.g. `crane=__A_E`
///
/// # Errors
///
/// Returns an error if the `=` separator is missing, the guess is not a valid
/// word, or the clue does not fit the guess.
pub fn parse_clue_arg(arg: &str, letters: usize) -> Result<(Word, Clue), String> {
    let (guess, rendered) = arg
        .split_once('=')
        .ok_or_else(|| format!("Expected GUESS=CLUE, got '{arg}'"))?;

    let guess = Word::new(guess.trim(), letters).map_err(|e| format!("Invalid guess: {e}"))?;
    let clue = Clue::parse(&guess, rendered.trim()).map_err(|e| format!("Invalid clue: {e}"))?;

    Ok((guess, clue))
}

/// Keep the corpus words consistent with every clue
///
/// The excluded letters come from the latest clue, as in the solver loop.
///
/// # Errors
///
/// Returns an error if no clues are given or any clue argument is malformed.
pub fn filter_words(corpus: &[Word], letters: usize, clues: &[String]) -> Result<FilterResult, String> {
    if clues.is_empty() {
        return Err("At least one GUESS=CLUE pair is required".to_string());
    }

    let history = clues
        .iter()
        .map(|arg| parse_clue_arg(arg, letters))
        .collect::<Result<Vec<_>, _>>()?;

    let excluded = history
        .last()
        .map(|(_, clue)| clue.excluded_letters())
        .unwrap_or_default();

    let pool: Vec<&Word> = corpus.iter().filter(|w| w.len() == letters).collect();
    let remaining = filter_pool(&pool, &history, &excluded);

    let suggestion = select_best_guess(&remaining, &remaining)
        .ok()
        .map(|best| (best.word.clone(), best.information_gain));

    Ok(FilterResult {
        pool_entropy: pool_entropy(&remaining).ok(),
        remaining: remaining.into_iter().cloned().collect(),
        history,
        suggestion,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::CORPUS;
    use crate::wordlists::loader::words_from_slice;

    fn args(pairs: &[&str]) -> Vec<String> {
        pairs.iter().map(|p| (*p).to_string()).collect()
    }

    #[test]
    fn parse_clue_arg_valid() {
        let (guess, clue) = parse_clue_arg("ample=A_PLE", 5).unwrap();
        assert_eq!(guess.text(), "ample");
        assert_eq!(clue.to_string(), "A_PLE");
    }

    #[test]
    fn parse_clue_arg_invalid() {
        assert!(parse_clue_arg("ample", 5).is_err());
        assert!(parse_clue_arg("ampl=A_PL", 5).is_err());
        assert!(parse_clue_arg("ample=A_PL", 5).is_err());
        assert!(parse_clue_arg("ample=Z_PLE", 5).is_err());
    }

    #[test]
    fn filter_reference_words() {
        let corpus = words_from_slice(&["apple", "angle", "ample", "amble"], 5, false);

        let result = filter_words(&corpus, 5, &args(&["ample=A_PLE"])).unwrap();

        let remaining: Vec<&str> = result.remaining.iter().map(Word::text).collect();
        assert_eq!(remaining, ["apple"]);
        assert_eq!(result.pool_entropy, Some(0.0));
        assert_eq!(result.suggestion.map(|(w, _)| w.text().to_string()), Some("apple".to_string()));
    }

    #[test]
    fn filter_keeps_solution_in_embedded_corpus() {
        let corpus = words_from_slice(CORPUS, 5, false);

        let result = filter_words(&corpus, 5, &args(&["crane=__A_E", "plate=__ATE"])).unwrap();

        assert!(result.remaining.iter().any(|w| w.text() == "state"));
        assert!(result.remaining.iter().all(|w| w.text().ends_with("ate")));
        assert!(result.suggestion.is_some());
    }

    #[test]
    fn filter_contradiction_leaves_nothing() {
        let corpus = words_from_slice(&["apple", "angle"], 5, false);

        let result = filter_words(&corpus, 5, &args(&["apple=_____"])).unwrap();

        assert!(result.remaining.is_empty());
        assert!(result.pool_entropy.is_none());
        assert!(result.suggestion.is_none());
    }

    #[test]
    fn filter_requires_clues() {
        let corpus = words_from_slice(&["apple"], 5, false);
        assert!(filter_words(&corpus, 5, &[]).is_err());
    }
}
