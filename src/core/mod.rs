//! Core domain types for the guessing game
//!
//! This module contains the fundamental domain types with no I/O.
//! Everything here is pure and deterministic.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{Feedback, GuessRow, LetterStatus, evaluate};
pub use keyboard::{BACKSPACE, ENTER, KEY_ROWS, KeyboardState, key_label};
pub use word::{WORD_LENGTH, Word, WordError, is_alphabet_letter, to_upper_letter};
