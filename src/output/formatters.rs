//! Formatting utilities for terminal output

use crate::core::{GuessRow, KeyboardState, LetterStatus, key_label};
use colored::{ColoredString, Colorize};

/// Color one letter tile according to its status
#[must_use]
pub fn letter_tile(letter: char, status: Option<LetterStatus>) -> ColoredString {
    let tile = format!(" {letter} ");
    match status {
        Some(LetterStatus::Correct) => tile.black().on_green().bold(),
        Some(LetterStatus::Present) => tile.black().on_yellow().bold(),
        Some(LetterStatus::Absent) => tile.white().on_bright_black(),
        None => tile.bold(),
    }
}

/// A scored row as colored tiles
#[must_use]
pub fn row_tiles(row: &GuessRow) -> String {
    row.cells()
        .map(|(letter, status)| letter_tile(letter, Some(status)).to_string())
        .collect()
}

/// A row in progress, padded with placeholders
#[must_use]
pub fn draft_tiles(draft: &[char], width: usize) -> String {
    (0..width)
        .map(|i| {
            draft
                .get(i)
                .map_or_else(|| " · ".dimmed().to_string(), |&ch| letter_tile(ch, None).to_string())
        })
        .collect()
}

/// One keyboard row with each key colored by its best status
#[must_use]
pub fn keyboard_line(keys: &[&str], keyboard: &KeyboardState) -> String {
    keys.iter()
        .map(|key| {
            let label = key_label(key);
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(letter), None) => letter_tile(letter, keyboard.status_of(letter)).to_string(),
                _ => format!(" {label} ").dimmed().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("")
}

/// Format seconds as `m:ss`
#[must_use]
pub fn format_duration(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
