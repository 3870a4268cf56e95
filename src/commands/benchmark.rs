//! Benchmark command
//!
//! Solves a sample of corpus words and aggregates how the solver fared.

use crate::core::Word;
use crate::solver::{Outcome, SolveConfig, Solver};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub exhausted: Vec<String>,
    /// Targets whose run failed, with the error
    pub errors: Vec<(String, String)>,
    /// Guesses used by solved runs -> number of runs
    pub distribution: BTreeMap<usize, usize>,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick `count` distinct targets from the corpus, or all of it if `count` is larger
pub fn sample_targets<R: Rng + ?Sized>(corpus: &[Word], count: usize, rng: &mut R) -> Vec<Word> {
    if count >= corpus.len() {
        return corpus.to_vec();
    }
    corpus.choose_multiple(rng, count).cloned().collect()
}

/// Run the solver on `count` targets sampled from `corpus`
///
/// A `seed` makes the sample reproducible.
pub fn run_benchmark(
    corpus: &[Word],
    config: SolveConfig,
    count: usize,
    seed: Option<u64>,
) -> BenchmarkResult {
    let targets = match seed {
        Some(seed) => sample_targets(corpus, count, &mut StdRng::seed_from_u64(seed)),
        None => sample_targets(corpus, count, &mut rand::rng()),
    };

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let result = benchmark_targets(corpus, config, &targets, |target| {
        pb.set_message(target.to_uppercase());
        pb.inc(1);
    });

    pb.finish_with_message("done");
    result
}

/// Solve each target in turn, calling `on_target` after every run
fn benchmark_targets<F>(
    corpus: &[Word],
    config: SolveConfig,
    targets: &[Word],
    mut on_target: F,
) -> BenchmarkResult
where
    F: FnMut(&str),
{
    let start = Instant::now();
    let mut solved_counts = Vec::new();
    let mut exhausted = Vec::new();
    let mut errors = Vec::new();
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();

    for target in targets {
        let run = Solver::new(corpus, target.text(), config).and_then(|solver| solver.run());

        match run {
            Ok(run) => match run.outcome {
                Outcome::Solved { guesses } => {
                    *distribution.entry(guesses.len()).or_insert(0) += 1;
                    solved_counts.push(guesses.len());
                }
                Outcome::Exhausted { solution, .. } => exhausted.push(solution.text().to_string()),
            },
            Err(e) => errors.push((target.text().to_string(), e.to_string())),
        }

        on_target(target.text());
    }

    let duration = start.elapsed();
    let total_guesses: usize = solved_counts.iter().sum();
    let average_guesses = if solved_counts.is_empty() {
        0.0
    } else {
        total_guesses as f64 / solved_counts.len() as f64
    };
    let secs = duration.as_secs_f64();

    BenchmarkResult {
        total_words: targets.len(),
        solved: solved_counts.len(),
        exhausted,
        errors,
        distribution,
        average_guesses,
        min_guesses: solved_counts.iter().copied().min().unwrap_or(0),
        max_guesses: solved_counts.iter().copied().max().unwrap_or(0),
        duration,
        words_per_second: if secs > 0.0 { targets.len() as f64 / secs } else { 0.0 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    const SMALL: [&str; 12] = [
        "crane", "slate", "irate", "trace", "raise", "grate", "crate", "brave", "shake", "flame",
        "grape", "plate",
    ];

    #[test]
    fn sample_targets_is_reproducible() {
        let corpus = words_from_slice(&SMALL, 5, false);

        let a = sample_targets(&corpus, 5, &mut StdRng::seed_from_u64(7));
        let b = sample_targets(&corpus, 5, &mut StdRng::seed_from_u64(7));

        assert_eq!(a, b);
        assert_eq!(a.len(), 5);
        assert!(a.iter().all(|w| corpus.contains(w)));
    }

    #[test]
    fn sample_targets_caps_at_corpus_size() {
        let corpus = words_from_slice(&SMALL, 5, false);
        let all = sample_targets(&corpus, 100, &mut StdRng::seed_from_u64(1));
        assert_eq!(all, corpus);
    }

    #[test]
    fn every_target_in_small_corpus_is_solved() {
        let corpus = words_from_slice(&SMALL, 5, false);
        let mut seen = Vec::new();

        let result = benchmark_targets(&corpus, SolveConfig::new(5, 6), &corpus, |t| {
            seen.push(t.to_string());
        });

        assert_eq!(result.total_words, SMALL.len());
        assert_eq!(result.solved, SMALL.len());
        assert!(result.exhausted.is_empty());
        assert!(result.errors.is_empty());
        assert_eq!(result.distribution.values().sum::<usize>(), SMALL.len());
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= 6);
        assert!(result.average_guesses >= 1.0);
        assert_eq!(seen, SMALL);
    }

    #[test]
    fn tight_budget_is_reported_as_exhausted() {
        let corpus = words_from_slice(&SMALL, 5, false);

        let result = benchmark_targets(&corpus, SolveConfig::new(5, 1), &corpus, |_| {});

        // only the opening guess itself can be solved in one round
        assert_eq!(result.solved, 1);
        assert_eq!(result.exhausted.len(), SMALL.len() - 1);
        assert_eq!(result.distribution.get(&1), Some(&1));
    }

    #[test]
    fn run_benchmark_with_seed() {
        let corpus = words_from_slice(&SMALL, 5, false);
        let result = run_benchmark(&corpus, SolveConfig::new(5, 6), 4, Some(42));

        assert_eq!(result.total_words, 4);
        assert_eq!(result.solved + result.exhausted.len() + result.errors.len(), 4);
    }
}
