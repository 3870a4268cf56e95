//! Entropy engine
//!
//! Pool entropy under a uniform prior, clue-pattern partitioning of a pool and the
//! expected information gain of a prospective guess.

mod calculator;
mod selector;

pub use calculator::{
    EntropyError, GuessSimulation, information_gain, pool_entropy, pool_entropy_by_member,
    simulate_guess,
};
pub use selector::{ScoredGuess, select_best_guess};
