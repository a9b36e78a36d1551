//! Slovo
//!
//! A Russian five-letter word-guessing game with a terminal front end and a
//! small HTTP relay that forwards finished games to a webhook.
//!
//! # Quick Start
//!
//! ```rust
//! use slovo::core::{LetterStatus, Word, evaluate};
//!
//! let guess = Word::new("волна").unwrap();
//! let target = Word::new("слово").unwrap();
//!
//! let feedback = evaluate(&guess, &target);
//! assert_eq!(feedback.status_at(0), LetterStatus::Present);
//! assert_eq!(feedback.to_emoji(), "🟨🟨🟨⬜⬜");
//! ```

// Core domain types
pub mod core;

// Session state machine and game controller
pub mod game;

// Word lists
pub mod wordlists;

// HTTP result relay
pub mod relay;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing subscriber setup
pub mod logging;
