//! Core domain types for the word puzzle
//!
//! Words, clues and the consistency check between them. Everything here is pure
//! and independent of the solver.

mod clue;
mod consistency;
mod word;

pub use clue::{Clue, ClueError, ExcludedLetters, Mark};
pub use consistency::{is_consistent, is_consistent_with_all};
pub use word::{Word, WordError};
