//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterScore, WORD_LENGTH, Word};
use colored::Colorize;

/// Format a word as space-separated letters
///
/// # Examples
/// ```
/// use wordle_game::core::Word;
/// use wordle_game::output::formatters::spaced_letters;
///
/// let word = Word::new("crane").unwrap();
/// assert_eq!(spaced_letters(&word), "c r a n e");
/// ```
#[must_use]
pub fn spaced_letters(word: &Word) -> String {
    let mut result = String::with_capacity(2 * WORD_LENGTH - 1);

    for (i, c) in word.text().chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(c);
    }

    result
}

/// Format feedback as space-separated code symbols
///
/// One of `G` (exact), `Y` (present), `B` (absent) per position.
#[must_use]
pub fn feedback_symbols(feedback: &Feedback) -> String {
    let mut result = String::with_capacity(2 * WORD_LENGTH - 1);

    for (i, code) in feedback.scores().iter().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(code.symbol());
    }

    result
}

/// Render a guess with each letter colored by its feedback code
#[must_use]
pub fn colored_guess(word: &Word, feedback: &Feedback) -> String {
    let mut parts = Vec::with_capacity(WORD_LENGTH);

    for (c, code) in word.text().chars().zip(feedback.scores()) {
        let letter = c.to_ascii_uppercase().to_string();
        let piece = match code {
            LetterScore::Exact => letter.green().bold(),
            LetterScore::Present => letter.yellow().bold(),
            LetterScore::Absent => letter.dimmed(),
        };
        parts.push(piece.to_string());
    }

    parts.join(" ")
}
