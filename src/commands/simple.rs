//! Simple interactive CLI mode
//!
//! Line-based game without the full-screen UI: one guess per line.

use crate::game::{Game, KeyOutcome, Rejection};
use crate::output::{print_board, print_keyboard, print_result};
use crate::relay::ResultReporter;
use anyhow::{Result, bail};
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};
use tracing::info;

/// What a line of input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    NewGame,
    Guess(String),
}

/// Interpret one line of input
#[must_use]
pub fn parse_command(input: &str) -> Command {
    let trimmed = input.trim();
    match trimmed.to_lowercase().as_str() {
        "quit" | "q" | "exit" | "выход" => Command::Quit,
        "new" | "n" | "новая" => Command::NewGame,
        _ => Command::Guess(trimmed.to_string()),
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if the dictionary is empty or reading from stdin fails.
pub fn run_simple<R: Rng>(game: &mut Game<R>, reporter: Option<&ResultReporter>) -> Result<()> {
    if game.is_locked() {
        bail!("Не удалось получить слово для начала игры: словарь пуст");
    }

    println!("\n╔══════════════════════════════════════════════╗");
    println!("║            ПЯТЬ БУКВ - угадай слово           ║");
    println!("╚══════════════════════════════════════════════╝\n");
    println!("Введите слово из пяти букв и нажмите Enter.");
    println!("Команды: 'new' - новая игра, 'quit' - выход\n");

    loop {
        let Some(session) = game.session() else {
            bail!("game locked");
        };
        print_board(session);
        print_keyboard(session);

        let Some(line) = get_user_input("Слово")? else {
            return Ok(());
        };

        match parse_command(&line) {
            Command::Quit => {
                println!("\nДо встречи!\n");
                return Ok(());
            }
            Command::NewGame => {
                game.new_game()?;
                println!("\nНовая игра!\n");
            }
            Command::Guess(text) => match game.enter_word(&text) {
                Err(e) => println!("{} {e}", "✗".red().bold()),
                Ok(KeyOutcome::Rejected {
                    reason: Rejection::NotInDictionary,
                    ..
                }) => println!("{} Такого слова нет в словаре", "✗".red().bold()),
                Ok(KeyOutcome::Scored { status, .. }) if status.is_over() => {
                    finish_game(game, reporter)?;
                    if !play_again()? {
                        println!("\nДо встречи!\n");
                        return Ok(());
                    }
                    game.new_game()?;
                    println!("\nНовая игра!\n");
                }
                Ok(_) => {}
            },
        }
    }
}

fn finish_game<R: Rng>(game: &Game<R>, reporter: Option<&ResultReporter>) -> Result<()> {
    let Some(session) = game.session() else {
        return Ok(());
    };
    print_board(session);

    if let Some(result) = session.result() {
        info!(outcome = %result.outcome, attempts = result.attempts, "game finished");
        print_result(&result);
        if let Some(reporter) = reporter {
            reporter.send_best_effort(&result);
        }
    }
    Ok(())
}

fn play_again() -> Result<bool> {
    Ok(get_user_input("Сыграть ещё? (да/нет)")?
        .is_some_and(|answer| matches!(answer.to_lowercase().as_str(), "да" | "д" | "yes" | "y")))
}

/// Get user input with a prompt; `None` on end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
