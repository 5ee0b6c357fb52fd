//! TUI rendering with ratatui
//!
//! Board, keyboard and session panels for the Numberle interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{ALPHABET, Classification, EQUATION_LENGTH, TileColor};
use crate::game::GameState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

const ORANGE: Color = Color::Rgb(255, 165, 0);

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board + keyboard
            Constraint::Percentage(45), // Session info
        ])
        .split(chunks[1]);

    render_play_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔢 NUMBERLE - Guess the Equation")
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

fn render_play_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Board
            Constraint::Length(6), // Keyboard
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
}

fn tile_style(color: Option<TileColor>) -> Style {
    match color {
        Some(TileColor::Green) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(TileColor::Orange) => Style::default()
            .fg(Color::Black)
            .bg(ORANGE)
            .add_modifier(Modifier::BOLD),
        Some(TileColor::Gray) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    }
}

const fn classification_color(classification: Classification) -> TileColor {
    match classification {
        Classification::Correct => TileColor::Green,
        Classification::Present => TileColor::Orange,
        Classification::Absent => TileColor::Gray,
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let history = app.game.history();
    let rows = app.game.config().max_attempts as usize;
    let mut lines = Vec::with_capacity(rows * 2);

    for row in 0..rows {
        let mut spans = vec![Span::raw("  ")];

        if let Some(attempt) = history.get(row) {
            for (ch, classification) in attempt
                .guess
                .chars()
                .iter()
                .zip(attempt.feedback.classifications())
            {
                spans.push(Span::styled(
                    format!(" {ch} "),
                    tile_style(Some(classification_color(*classification))),
                ));
                spans.push(Span::raw(" "));
            }
        } else if row == history.len() && app.input_mode == InputMode::Guessing {
            let typed: Vec<char> = app.input_buffer.chars().collect();
            for i in 0..EQUATION_LENGTH {
                let text = typed.get(i).map_or_else(|| " _ ".to_string(), |c| format!(" {c} "));
                spans.push(Span::styled(
                    text,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::raw(" "));
            }
        } else {
            for _ in 0..EQUATION_LENGTH {
                spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let tiles = app.game.classification_sets();

    let key_row = |keys: &[char]| {
        let mut spans = vec![Span::raw("  ")];
        for &key in keys {
            let style = if key == '=' {
                Style::default().fg(Color::Cyan)
            } else {
                tile_style(tiles.color_of(key))
            };
            spans.push(Span::styled(format!(" {key} "), style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    };

    let (digits, operators) = ALPHABET.split_at(10);
    let mut operator_keys = operators.to_vec();
    operator_keys.push('=');

    let keyboard = Paragraph::new(vec![
        key_row(digits),
        Line::from(""),
        key_row(&operator_keys),
    ])
    .block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Attempts gauge
            Constraint::Min(6),    // Statistics
            Constraint::Length(7), // Messages
        ])
        .split(area);

    render_attempts(f, app, chunks[0]);
    render_statistics(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let max = app.game.config().max_attempts;
    let remaining = app.game.remaining_attempts();
    let percent = (u64::from(remaining) * 100 / u64::from(max.max(1))) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{remaining}/{max} remaining"));

    f.render_widget(gauge, area);
}

fn render_statistics(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let mut lines = vec![
        Line::from(format!(
            "Played: {}  Won: {}  Win rate: {:.0}%",
            stats.total_games,
            stats.games_won,
            stats.win_rate()
        )),
        Line::from(""),
    ];

    let max_count = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for guesses in 1..=app.game.config().max_attempts as usize {
        let count = stats.guess_distribution.get(guesses).copied().unwrap_or(0);
        let bar_len = if max_count > 0 {
            (count * 20).div_ceil(max_count)
        } else {
            0
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{guesses}: ")),
            Span::styled("█".repeat(bar_len), Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }

    if (app.reveal_target || app.game.state() == GameState::Lost)
        && let Some(target) = app.game.target()
    {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("Answer: "),
            Span::styled(
                target.text().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
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
        InputMode::GameOver if app.game.is_won() => (
            " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::GameOver => (
            " Out of attempts | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Red,
        ),
        InputMode::Guessing => (
            " Enter Equation (7 characters) | Enter to submit ",
            app.input_buffer.as_str(),
            Color::Yellow,
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
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let mode_text = match app.game.state() {
        GameState::NotStarted => "Mode: Ready",
        GameState::InProgress => "Mode: Playing",
        GameState::Won => "Mode: Won",
        GameState::Lost => "Mode: Lost",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let target_text = if app.game.config().random_target {
        "Target: random"
    } else {
        "Target: fixed"
    };
    let target = Paragraph::new(target_text).alignment(Alignment::Center);
    f.render_widget(target, chunks[1]);

    let help_text = if app.input_mode == InputMode::GameOver {
        "q: Quit | n: New Game"
    } else {
        "Esc: Quit | n: New Game (forfeits) | f: Fixed/Random | r: Reveal | Enter: Submit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
