//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod filter;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use filter::{FilterResult, filter_words};
pub use solve::{SolveResult, solve_word};
