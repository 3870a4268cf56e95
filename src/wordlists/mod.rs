//! Corpus construction
//!
//! Provides the embedded dictionary and loaders that turn a dictionary into a
//! corpus for one word length.

mod embedded;
pub mod loader;

pub use embedded::{CORPUS, CORPUS_COUNT};
