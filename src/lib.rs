//! Information Gain Word Solver
//!
//! Solves a hidden-word puzzle by always guessing the word whose clue is expected
//! to split the remaining candidates the most.
//!
//! # Quick Start
//!
//! ```rust
//! use infogain_wordle::core::Word;
//! use infogain_wordle::solver::{Outcome, SolveConfig, Solver};
//! use infogain_wordle::wordlists::loader::words_from_slice;
//!
//! let corpus = words_from_slice(&["apple", "angle", "ample", "amble"], 5, false);
//! let solver = Solver::new(&corpus, "apple", SolveConfig::default()).unwrap();
//!
//! let run = solver.run().unwrap();
//! let guesses: Vec<&str> = run.outcome.guesses().iter().map(Word::text).collect();
//! assert_eq!(guesses, ["ample", "apple"]);
//! assert!(matches!(run.outcome, Outcome::Solved { .. }));
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
