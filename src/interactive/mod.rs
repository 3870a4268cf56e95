//! Interactive terminal session

mod app;
mod rendering;

pub use app::{App, Game, InputMode, Message, MessageStyle, Statistics, run_tui};
