//! Guess-selection loop
//!
//! Drives rounds of select / encode / filter until the solution is found or the
//! guess budget runs out. Each round takes a [`SessionState`] and returns a fresh
//! one; the caller keeps whichever state it needs.

use super::entropy::{EntropyError, select_best_guess};
use crate::core::{Clue, ExcludedLetters, Word, WordError, is_consistent_with_all};
use rustc_hash::FxHashSet;
use std::fmt;

/// Puzzle parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveConfig {
    /// Letters per word
    pub letters: usize,
    /// Guess budget
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(letters: usize, max_guesses: usize) -> Self {
        Self {
            letters,
            max_guesses,
        }
    }
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self::new(5, 5)
    }
}

/// Error type for malformed input and contradictory clues
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    EmptyCorpus,
    ZeroBudget,
    InvalidSolution(WordError),
    CorpusWordLength { word: String, expected: usize },
    /// No candidate is consistent with the clues seen so far
    EmptyPool { round: usize },
    SessionFinished,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCorpus => write!(f, "Corpus must contain at least one word"),
            Self::ZeroBudget => write!(f, "Guess budget must be at least 1"),
            Self::InvalidSolution(e) => write!(f, "Invalid solution: {e}"),
            Self::CorpusWordLength { word, expected } => {
                write!(f, "Corpus word '{word}' is not {expected} letters long")
            }
            Self::EmptyPool { round } => write!(
                f,
                "No candidates remain before round {round}: clues and corpus contradict each other"
            ),
            Self::SessionFinished => write!(f, "Session has already finished"),
        }
    }
}

impl std::error::Error for SolveError {}

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Full corpus, nothing guessed yet
    Ready,
    /// At least one round played, budget left
    Guessing,
    /// Latest clue is all EXACT
    Solved,
    /// Budget spent without solving
    Exhausted,
}

impl Phase {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted)
    }
}

/// Session state between rounds
#[derive(Debug, Clone)]
pub struct SessionState<'a> {
    pool: Vec<&'a Word>,
    history: Vec<(Word, Clue)>,
    phase: Phase,
}

impl<'a> SessionState<'a> {
    /// Words still consistent with every clue
    #[must_use]
    pub fn pool(&self) -> &[&'a Word] {
        &self.pool
    }

    /// Guesses and their clues, oldest first
    #[must_use]
    pub fn history(&self) -> &[(Word, Clue)] {
        &self.history
    }

    /// Rounds played so far
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// The guesses made so far
    #[must_use]
    pub fn guesses(&self) -> Vec<Word> {
        self.history.iter().map(|(guess, _)| guess.clone()).collect()
    }
}

/// What one round did
#[derive(Debug, Clone)]
pub struct RoundReport {
    /// 1-based round number
    pub round: usize,
    pub guess: Word,
    pub clue: Clue,
    pub pool_before: usize,
    pub pool_after: usize,
    /// Expected information gain of the guess against the pool it was chosen from
    pub information_gain: f64,
}

/// A played round: the report and the state it produced
#[derive(Debug, Clone)]
pub struct RoundOutcome<'a> {
    pub state: SessionState<'a>,
    pub report: RoundReport,
}

/// Terminal result of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Solved { guesses: Vec<Word> },
    Exhausted { solution: Word, guesses: Vec<Word> },
}

impl Outcome {
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        match self {
            Self::Solved { guesses } | Self::Exhausted { guesses, .. } => guesses,
        }
    }

    /// Number of guesses made
    #[must_use]
    pub fn count(&self) -> usize {
        self.guesses().len()
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved { .. })
    }
}

/// A complete session: every round report plus the terminal outcome
#[derive(Debug, Clone)]
pub struct SolveRun {
    pub rounds: Vec<RoundReport>,
    pub outcome: Outcome,
}

/// Information-gain solver for one hidden solution
pub struct Solver<'a> {
    corpus: &'a [Word],
    solution: Word,
    config: SolveConfig,
}

impl<'a> Solver<'a> {
    /// Create a solver for `solution` over `corpus`
    ///
    /// # Errors
    /// Returns `SolveError` if the corpus is empty, the budget is zero, the
    /// solution is not a valid word of `config.letters` letters, or a corpus word
    /// has the wrong length.
    pub fn new(corpus: &'a [Word], solution: &str, config: SolveConfig) -> Result<Self, SolveError> {
        if corpus.is_empty() {
            return Err(SolveError::EmptyCorpus);
        }
        if config.max_guesses == 0 {
            return Err(SolveError::ZeroBudget);
        }

        let solution = Word::new(solution, config.letters).map_err(SolveError::InvalidSolution)?;

        if let Some(word) = corpus.iter().find(|w| w.len() != config.letters) {
            return Err(SolveError::CorpusWordLength {
                word: word.text().to_string(),
                expected: config.letters,
            });
        }

        Ok(Self {
            corpus,
            solution,
            config,
        })
    }

    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }

    #[must_use]
    pub const fn config(&self) -> SolveConfig {
        self.config
    }

    /// Fresh READY state: the whole corpus, duplicates dropped, corpus order kept
    #[must_use]
    pub fn start(&self) -> SessionState<'a> {
        let mut seen = FxHashSet::default();
        let pool = self
            .corpus
            .iter()
            .filter(|&word| seen.insert(word))
            .collect();

        SessionState {
            pool,
            history: Vec::new(),
            phase: Phase::Ready,
        }
    }

    /// Play one round from `state`
    ///
    /// Picks the pool word with the highest information gain, encodes its clue
    /// against the solution, and keeps the pool words consistent with every clue
    /// so far (using the latest clue's ABSENT letters as the excluded set).
    ///
    /// # Errors
    /// Returns `SolveError::SessionFinished` if `state` is terminal and
    /// `SolveError::EmptyPool` if no candidates remain to choose from.
    pub fn play_round(&self, state: &SessionState<'a>) -> Result<RoundOutcome<'a>, SolveError> {
        if state.phase.is_terminal() {
            return Err(SolveError::SessionFinished);
        }

        let round = state.rounds() + 1;
        let best = select_best_guess(&state.pool, &state.pool).map_err(|e| match e {
            EntropyError::EmptyPool => SolveError::EmptyPool { round },
        })?;

        let guess = best.word.clone();
        let clue = Clue::encode(&self.solution, &guess);

        let mut history = state.history.clone();
        history.push((guess.clone(), clue.clone()));

        let excluded = clue.excluded_letters();
        let pool = filter_pool(&state.pool, &history, &excluded);

        let phase = if clue.is_solved() {
            Phase::Solved
        } else if round >= self.config.max_guesses {
            Phase::Exhausted
        } else {
            Phase::Guessing
        };

        let report = RoundReport {
            round,
            guess,
            clue,
            pool_before: state.pool.len(),
            pool_after: pool.len(),
            information_gain: best.information_gain,
        };

        Ok(RoundOutcome {
            state: SessionState {
                pool,
                history,
                phase,
            },
            report,
        })
    }

    /// Terminal outcome of a finished state, `None` while still playing
    #[must_use]
    pub fn outcome(&self, state: &SessionState<'_>) -> Option<Outcome> {
        match state.phase {
            Phase::Solved => Some(Outcome::Solved {
                guesses: state.guesses(),
            }),
            Phase::Exhausted => Some(Outcome::Exhausted {
                solution: self.solution.clone(),
                guesses: state.guesses(),
            }),
            Phase::Ready | Phase::Guessing => None,
        }
    }

    /// Play rounds from the start until the session ends
    ///
    /// # Errors
    /// Returns `SolveError::EmptyPool` if the clues empty the pool before the
    /// session ends.
    ///
    /// # Examples
    /// ```
    /// use infogain_wordle::core::Word;
    /// use infogain_wordle::solver::{SolveConfig, Solver};
    ///
    /// let corpus: Vec<Word> = ["apple", "angle", "ample", "amble"]
    ///     .iter()
    ///     .map(|w| Word::new(*w, 5).unwrap())
    ///     .collect();
    ///
    /// let solver = Solver::new(&corpus, "apple", SolveConfig::default()).unwrap();
    /// let run = solver.run().unwrap();
    ///
    /// assert!(run.outcome.is_solved());
    /// assert_eq!(run.outcome.count(), 2);
    /// ```
    pub fn run(&self) -> Result<SolveRun, SolveError> {
        let mut state = self.start();
        let mut rounds = Vec::new();

        loop {
            if let Some(outcome) = self.outcome(&state) {
                return Ok(SolveRun { rounds, outcome });
            }

            let RoundOutcome {
                state: next,
                report,
            } = self.play_round(&state)?;
            rounds.push(report);
            state = next;
        }
    }
}

/// Keep the pool words consistent with every clue in `history`
///
/// `excluded` is applied alongside each clue. Pool order is preserved.
#[must_use]
pub fn filter_pool<'a>(
    pool: &[&'a Word],
    history: &[(Word, Clue)],
    excluded: &ExcludedLetters,
) -> Vec<&'a Word> {
    pool.iter()
        .copied()
        .filter(|word| is_consistent_with_all(word, history.iter().map(|(_, clue)| clue), excluded))
        .collect()
}
