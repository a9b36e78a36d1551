//! Display functions for the line-based commands

use super::formatters::{draft_tiles, format_duration, keyboard_line, row_tiles};
use crate::core::{GuessRow, KEY_ROWS, WORD_LENGTH};
use crate::game::{GameResult, Session};
use colored::Colorize;

/// Print every scored row, the current draft and the empty rows left
pub fn print_board(session: &Session) {
    println!();
    for (i, row) in session.rows().iter().enumerate() {
        println!("  {}  {}", i + 1, row_tiles(row));
    }

    if !session.is_over() {
        let row = session.rows().len();
        println!(
            "  {}  {}",
            (row + 1).to_string().bright_cyan().bold(),
            draft_tiles(session.draft(), WORD_LENGTH)
        );
        for i in row + 1..session.max_attempts() {
            println!("  {}  {}", (i + 1).to_string().bright_black(), draft_tiles(&[], WORD_LENGTH));
        }
    }
    println!();
}

/// Print the on-screen keyboard with letter statuses
pub fn print_keyboard(session: &Session) {
    for keys in KEY_ROWS {
        println!("  {}", keyboard_line(keys, session.keyboard()));
    }
    println!();
}

/// Print the end-of-game banner
pub fn print_result(result: &GameResult) {
    println!("{}", "═".repeat(50).bright_cyan());
    if result.is_win() {
        println!(
            "  {}",
            "Поздравляем! Вы угадали слово!".bright_green().bold()
        );
        println!(
            "  Попыток: {}   Время: {}",
            result.attempts.to_string().bright_cyan().bold(),
            format_duration(result.duration_secs)
        );
    } else {
        println!(
            "  {} {}",
            "Вы проиграли. Загаданное слово:".red().bold(),
            result.word.bright_yellow().bold()
        );
        println!("  Время: {}", format_duration(result.duration_secs));
    }
    println!("{}", "═".repeat(50).bright_cyan());
}

/// Print a one-off evaluation
pub fn print_evaluation(row: &GuessRow) {
    let feedback = row.feedback();
    println!("\n  {}  {}", row_tiles(row), feedback.to_emoji());
    println!(
        "  {} correct, {} present",
        feedback.count_correct().to_string().green().bold(),
        feedback.count_present().to_string().yellow().bold()
    );
}
