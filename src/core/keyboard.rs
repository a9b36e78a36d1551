//! On-screen keyboard layout and per-letter status tracking

use super::feedback::{GuessRow, LetterStatus};
use super::word::to_upper_letter;
use rustc_hash::FxHashMap;

/// Name of the submit key in the layout
pub const ENTER: &str = "ENTER";
/// Name of the erase key in the layout
pub const BACKSPACE: &str = "BACKSPACE";

/// ЙЦУКЕН rows as shown on screen
pub const KEY_ROWS: [&[&str]; 3] = [
    &["Й", "Ц", "У", "К", "Е", "Н", "Г", "Ш", "Щ", "З", "Х", "Ъ"],
    &["Ф", "Ы", "В", "А", "П", "Р", "О", "Л", "Д", "Ж", "Э"],
    &[ENTER, "Я", "Ч", "С", "М", "И", "Т", "Ь", "Б", "Ю", BACKSPACE],
];

/// Text printed on a key cap
#[must_use]
pub fn key_label(key: &str) -> &str {
    match key {
        ENTER => "ВВОД",
        BACKSPACE => "⌫",
        other => other,
    }
}

/// Best status observed for each letter across all scored rows
///
/// A letter never downgrades: correct beats present, present beats absent.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    statuses: FxHashMap<char, LetterStatus>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a scored row into the keyboard
    pub fn record(&mut self, row: &GuessRow) {
        for (letter, status) in row.cells() {
            self.statuses
                .entry(letter)
                .and_modify(|current| *current = (*current).max(status))
                .or_insert(status);
        }
    }

    /// Status of a letter, or `None` if it has not been guessed yet
    #[must_use]
    pub fn status_of(&self, letter: char) -> Option<LetterStatus> {
        self.statuses.get(&to_upper_letter(letter)).copied()
    }

    pub fn reset(&mut self) {
        self.statuses.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }
}
