//! Word lists for the game
//!
//! Provides the embedded dictionary compiled into the binary and a
//! [`Dictionary`] type for membership checks and random target selection.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{WORDS, WORDS_COUNT};
