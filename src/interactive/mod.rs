//! Full-screen terminal game

pub mod app;
pub mod rendering;

pub use app::{App, Message, MessageStyle, Statistics, latin_to_cyrillic, run_tui};
