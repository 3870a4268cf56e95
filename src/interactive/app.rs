//! TUI application state and logic

use crate::core::Word;
use crate::solver::entropy::pool_entropy;
use crate::solver::{Phase, RoundReport, SessionState, SolveConfig, Solver};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;
use std::io;

/// A game in progress: the solver and the latest session state
pub struct Game<'a> {
    pub solver: Solver<'a>,
    pub state: SessionState<'a>,
    pub rounds: Vec<RoundReport>,
    /// Entropy of the full corpus when the game started
    pub initial_entropy: f64,
}

/// Application state
pub struct App<'a> {
    pub corpus: &'a [Word],
    pub config: SolveConfig,
    pub input_mode: InputMode,
    pub target_input: String,
    pub game: Option<Game<'a>>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing the hidden target word
    TargetEntry,
    /// Solver is stepping through rounds
    Playing,
    /// Game over, waiting for a new game
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Guesses used -> games solved with that many
    pub guess_distribution: BTreeMap<usize, usize>,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(corpus: &'a [Word], config: SolveConfig) -> Self {
        Self {
            corpus,
            config,
            input_mode: InputMode::TargetEntry,
            target_input: String::new(),
            game: None,
            messages: vec![
                Message {
                    text: format!(
                        "Type a {}-letter target word and press Enter (Tab: random word)",
                        config.letters
                    ),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "The solver picks each guess by expected information gain.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Start a game for the word in the input buffer
    pub fn start_game(&mut self) {
        let target = self.target_input.clone();

        match Solver::new(self.corpus, &target, self.config) {
            Ok(solver) => {
                let state = solver.start();
                let initial_entropy = pool_entropy(state.pool()).unwrap_or(0.0);
                if !self.corpus.contains(solver.solution()) {
                    self.add_message(
                        "Target is not in the word list: the solver cannot find it",
                        MessageStyle::Error,
                    );
                }
                self.add_message(
                    &format!(
                        "Game started: {} candidates, {initial_entropy:.2} bits",
                        state.pool().len()
                    ),
                    MessageStyle::Info,
                );
                self.game = Some(Game {
                    solver,
                    state,
                    rounds: Vec::new(),
                    initial_entropy,
                });
                self.input_mode = InputMode::Playing;
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Fill the input buffer with a random corpus word
    pub fn random_target(&mut self) {
        if let Some(word) = self.corpus.choose(&mut rand::rng()) {
            self.target_input = word.text().to_string();
        }
    }

    /// Play one solver round
    pub fn step(&mut self) {
        let Some(game) = self.game.as_mut() else {
            return;
        };

        match game.solver.play_round(&game.state) {
            Ok(outcome) => {
                let report = outcome.report;
                game.state = outcome.state;
                let text = format!(
                    "Round {}: {} → {} ({:.2} bits expected)",
                    report.round,
                    report.guess.text().to_uppercase(),
                    report.clue,
                    report.information_gain
                );
                game.rounds.push(report);
                self.add_message(&text, MessageStyle::Info);
                self.finish_if_terminal();
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                self.input_mode = InputMode::Finished;
            }
        }
    }

    /// Play rounds until the game ends
    pub fn auto_play(&mut self) {
        while self.input_mode == InputMode::Playing && self.game.is_some() {
            self.step();
        }
    }

    fn finish_if_terminal(&mut self) {
        let Some(game) = &self.game else {
            return;
        };

        let rounds = game.state.rounds();
        let message = match game.state.phase() {
            Phase::Solved => {
                self.stats.games_won += 1;
                *self.stats.guess_distribution.entry(rounds).or_insert(0) += 1;
                (
                    format!("🎉 Solved in {rounds} guesses!"),
                    MessageStyle::Success,
                )
            }
            Phase::Exhausted => (
                format!(
                    "Out of guesses! The solution was {}",
                    game.solver.solution().text().to_uppercase()
                ),
                MessageStyle::Error,
            ),
            Phase::Ready | Phase::Guessing => return,
        };

        self.stats.total_games += 1;
        self.input_mode = InputMode::Finished;
        self.add_message(&message.0, message.1);
        self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        self.game = None;
        self.target_input.clear();
        self.messages.clear();
        self.input_mode = InputMode::TargetEntry;
        self.add_message("New game: type a target word.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 6 messages
        if self.messages.len() > 6 {
            self.messages.remove(0);
        }
    }

    /// Words still in the candidate pool (the whole corpus before a game starts)
    #[must_use]
    pub fn remaining(&self) -> Vec<&'a Word> {
        self.game.as_ref().map_or_else(
            || self.corpus.iter().collect(),
            |game| game.state.pool().to_vec(),
        )
    }

    /// Entropy of the current pool, `None` when it is empty
    #[must_use]
    pub fn current_entropy(&self) -> Option<f64> {
        pool_entropy(&self.remaining()).ok()
    }

    /// Remaining words counted by first letter, alphabetically
    #[must_use]
    pub fn first_letter_distribution(&self) -> Vec<(char, u64)> {
        let mut counts: BTreeMap<char, u64> = BTreeMap::new();
        for word in self.remaining() {
            if let Some(letter) = word.first_letter() {
                *counts.entry(letter as char).or_insert(0) += 1;
            }
        }
        counts.into_iter().collect()
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match app.input_mode {
                InputMode::TargetEntry => match key.code {
                    KeyCode::Esc => app.should_quit = true,
                    KeyCode::Tab => app.random_target(),
                    KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                        if app.target_input.len() < app.config.letters {
                            app.target_input.push(c.to_ascii_lowercase());
                        }
                    }
                    KeyCode::Backspace => {
                        app.target_input.pop();
                    }
                    KeyCode::Enter => app.start_game(),
                    _ => {}
                },
                InputMode::Playing => match key.code {
                    KeyCode::Char(' ' | 'g') | KeyCode::Enter => app.step(),
                    KeyCode::Char('a') => app.auto_play(),
                    KeyCode::Char('n') => app.new_game(),
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    _ => {}
                },
                InputMode::Finished => match key.code {
                    KeyCode::Char('n') => app.new_game(),
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
