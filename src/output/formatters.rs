//! Formatting utilities for terminal output

use crate::core::{GuessResult, LetterFeedback, Word};
use colored::{ColoredString, Colorize};

/// A single letter tile, colored by its feedback
#[must_use]
pub fn tile(letter: u8, feedback: LetterFeedback) -> ColoredString {
    let text = format!(" {} ", char::from(letter).to_ascii_uppercase());
    match feedback {
        LetterFeedback::Exact => text.black().on_green().bold(),
        LetterFeedback::Present => text.black().on_yellow().bold(),
        LetterFeedback::Absent => text.white().on_bright_black(),
    }
}

/// A full guess rendered as colored tiles
#[must_use]
pub fn render_row(word: &Word, result: &GuessResult) -> String {
    word.chars()
        .iter()
        .zip(result.letters())
        .map(|(&letter, &feedback)| tile(letter, feedback).to_string())
        .collect()
}

/// Colored tiles when color output is enabled, letter codes otherwise
#[must_use]
pub fn render_guess(word: &Word, result: &GuessResult) -> String {
    if colored::control::SHOULD_COLORIZE.should_colorize() {
        render_row(word, result)
    } else {
        render_plain(word, result)
    }
}

/// Plain-text row with letter codes beneath, for uncolored terminals
#[must_use]
pub fn render_plain(word: &Word, result: &GuessResult) -> String {
    format!("{}\n{result}", word.text().to_uppercase())
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
