//! TUI rendering with ratatui
//!
//! Session panels for watching the solver close in on a target word.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Clue, Mark};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        BarChart, Block, BorderType, Borders, Cell, Gauge, List, ListItem, Paragraph, Row, Table,
        Wrap,
    },
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 INFORMATION GAIN WORDLE - Solver Session")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Session stats
            Constraint::Length(3), // Information gauge
            Constraint::Min(5),    // History
        ])
        .split(area);

    render_session_stats(f, app, chunks[0]);
    render_information_gauge(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn render_session_stats(f: &mut Frame, app: &App, area: Rect) {
    let remaining = app.remaining().len();
    let entropy = app
        .current_entropy()
        .map_or_else(|| "-".to_string(), |h| format!("{h:.3} bits"));
    let guesses = app.game.as_ref().map_or(0, |game| game.state.rounds());

    let target = app.game.as_ref().map_or_else(
        || "-".to_string(),
        |game| game.solver.solution().text().to_uppercase(),
    );

    let content = vec![
        Line::from(vec![
            Span::raw("Target:     "),
            Span::styled(
                target,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Remaining:  {remaining} words")),
        Line::from(format!("Entropy:    {entropy}")),
        Line::from(format!(
            "Guesses:    {guesses}/{}",
            app.config.max_guesses
        )),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Session ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_information_gauge(f: &mut Frame, app: &App, area: Rect) {
    let (gained, total) = app.game.as_ref().map_or((0.0, 0.0), |game| {
        let current = app.current_entropy().unwrap_or(0.0);
        (game.initial_entropy - current, game.initial_entropy)
    });
    let ratio = if total > 0.0 {
        (gained / total).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Information Gained ")
                .borders(Borders::ALL),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio)
        .label(format!("{gained:.2}/{total:.2} bits"));

    f.render_widget(gauge, area);
}

fn clue_spans(clue: &Clue) -> Vec<Span<'static>> {
    clue.marks()
        .iter()
        .map(|mark| {
            let bg = match mark {
                Mark::Exact(_) => Color::Green,
                Mark::Present(_) => Color::Yellow,
                Mark::Absent(_) => Color::DarkGray,
            };
            Span::styled(
                format!(" {} ", (mark.letter() as char).to_ascii_uppercase()),
                Style::default()
                    .fg(Color::Black)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect()
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let rounds = app.game.as_ref().map_or(&[][..], |game| game.rounds.as_slice());

    let rows: Vec<Row> = rounds
        .iter()
        .map(|report| {
            Row::new(vec![
                Cell::from(report.round.to_string()),
                Cell::from(report.guess.text().to_uppercase()),
                Cell::from(Line::from(clue_spans(&report.clue))),
                Cell::from(format!("{} → {}", report.pool_before, report.pool_after)),
                Cell::from(format!("{:.3}", report.information_gain)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Length(7),
            Constraint::Length(16),
            Constraint::Length(12),
            Constraint::Length(7),
        ],
    )
    .header(
        Row::new(vec!["#", "Guess", "Clue", "Pool", "Bits"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(table, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40), // First-letter distribution
            Constraint::Percentage(30), // Pool preview
            Constraint::Percentage(30), // Messages
        ])
        .split(area);

    render_letter_distribution(f, app, chunks[0]);
    render_pool_preview(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_letter_distribution(f: &mut Frame, app: &App, area: Rect) {
    let distribution = app.first_letter_distribution();
    let labels: Vec<String> = distribution
        .iter()
        .map(|(letter, _)| letter.to_ascii_uppercase().to_string())
        .collect();
    let data: Vec<(&str, u64)> = labels
        .iter()
        .zip(&distribution)
        .map(|(label, &(_, count))| (label.as_str(), count))
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" First Letters ")
                .borders(Borders::ALL),
        )
        .data(data.as_slice())
        .bar_width(2)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Green))
        .value_style(Style::default().fg(Color::Black).bg(Color::Green));

    f.render_widget(chart, area);
}

fn render_pool_preview(f: &mut Frame, app: &App, area: Rect) {
    let remaining = app.remaining();
    let shown = usize::from(area.height.saturating_sub(2)).max(1) * 4;

    let mut text: Vec<String> = remaining
        .iter()
        .take(shown)
        .map(|word| word.text().to_uppercase())
        .collect();
    if remaining.len() > shown {
        text.push(format!("… (+{} more)", remaining.len() - shown));
    }

    let paragraph = Paragraph::new(text.join("  "))
        .style(Style::default().fg(Color::Green))
        .block(
            Block::default()
                .title(" Candidate Pool ")
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::TargetEntry => (
            " Target Word | Enter: start  Tab: random  Esc: quit ",
            app.target_input.to_uppercase(),
            Color::Yellow,
        ),
        InputMode::Playing => (
            " Solving | Space: next round  a: auto-play  n: new game ",
            String::new(),
            Color::Cyan,
        ),
        InputMode::Finished => (
            " Game Over | n: new game  q: quit ",
            String::new(),
            Color::Green,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let win_rate = if app.stats.total_games > 0 {
        app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
    } else {
        0.0
    };

    let distribution = app
        .stats
        .guess_distribution
        .iter()
        .map(|(guesses, games)| format!("{guesses}:{games}"))
        .collect::<Vec<_>>()
        .join(" ");

    let status = Paragraph::new(format!(
        "Corpus: {} words | Games: {} | Win Rate: {win_rate:.0}% | {distribution}",
        app.corpus.len(),
        app.stats.total_games,
    ))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));

    f.render_widget(status, area);
}
