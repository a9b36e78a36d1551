//! Command implementations

pub mod evaluate;
pub mod serve;
pub mod simple;

pub use evaluate::evaluate_words;
pub use serve::{relay_config, run_serve};
pub use simple::{Command, parse_command, run_simple};
