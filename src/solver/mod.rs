//! Guess selection
//!
//! The entropy engine scores prospective guesses; the engine drives the greedy
//! one-step-lookahead loop on top of it.

mod engine;
pub mod entropy;

pub use engine::{
    Outcome, Phase, RoundOutcome, RoundReport, SessionState, SolveConfig, SolveError, SolveRun,
    Solver, filter_pool,
};
