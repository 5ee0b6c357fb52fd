//! Formatting utilities for terminal output

use crate::core::{Classification, Equation, Feedback, TileColor, TileSets};
use colored::{ColoredString, Colorize};

/// Format feedback as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback.to_emoji()
}

/// Paint one guessed character with its classification colour
#[must_use]
pub fn paint_tile(ch: char, classification: Classification) -> ColoredString {
    let text = format!(" {ch} ");
    match classification {
        Classification::Correct => text.black().on_green().bold(),
        Classification::Present => text.black().on_truecolor(255, 165, 0).bold(),
        Classification::Absent => text.white().on_bright_black(),
    }
}

/// Render a guess as a row of coloured tiles
#[must_use]
pub fn feedback_row(guess: &Equation, feedback: &Feedback) -> String {
    guess
        .chars()
        .iter()
        .zip(feedback.classifications())
        .map(|(&ch, &classification)| paint_tile(ch, classification).to_string())
        .collect()
}

/// Format characters as `[a, b, c]`
#[must_use]
pub fn char_list(chars: &[char]) -> String {
    let items: Vec<String> = chars.iter().map(char::to_string).collect();
    format!("[{}]", items.join(", "))
}

/// One line per colour: `Green: [...]`, `Orange: [...]`, `Gray: [...]`
#[must_use]
pub fn tile_summary(sets: &TileSets) -> String {
    [
        ("Green", TileColor::Green),
        ("Orange", TileColor::Orange),
        ("Gray", TileColor::Gray),
    ]
    .iter()
    .map(|&(name, color)| format!("{name}: {}", char_list(&sets.sorted(color))))
    .collect::<Vec<_>>()
    .join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
