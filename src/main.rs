//! Slovo - CLI
//!
//! Russian five-letter word game with TUI and CLI modes, plus the result relay.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use slovo::{
    commands::{evaluate_words, relay_config, run_serve, run_simple},
    game::{Game, GameConfig},
    interactive::{App, run_tui},
    logging::{self, LogTarget},
    output::print_evaluation,
    relay::{ResultReporter, config::DEFAULT_BIND},
    wordlists::{Dictionary, loader::load_from_file},
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "slovo",
    about = "Guess the five-letter Russian word in six attempts",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a JSON array / text file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Reject guesses that are not in the word list
    #[arg(long, global = true)]
    strict: bool,

    /// Relay URL that receives finished games
    #[arg(long, global = true, env = "SLOVO_REPORT_URL")]
    report_url: Option<String>,

    /// Telegram user id attached to reported games
    #[arg(long, global = true)]
    telegram_id: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Also write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line)
    Simple,

    /// Score a guess against a target word
    Evaluate {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },

    /// Run the HTTP relay that forwards results to a webhook
    Serve {
        /// Address to listen on
        #[arg(short, long, env = "SLOVO_BIND", default_value = DEFAULT_BIND)]
        bind: String,

        /// Webhook that receives forwarded results
        #[arg(long, env = "WEBHOOK_URL")]
        webhook_url: Option<String>,
    },
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    let dictionary = match wordlist {
        "embedded" => Dictionary::embedded(),
        path => Dictionary::new(
            load_from_file(path).with_context(|| format!("could not load word list {path}"))?,
        ),
    };
    info!(words = dictionary.len(), source = wordlist, "dictionary loaded");
    Ok(dictionary)
}

fn build_reporter(cli: &Cli) -> Result<Option<ResultReporter>> {
    cli.report_url
        .as_deref()
        .filter(|url| !url.trim().is_empty())
        .map(|url| ResultReporter::new(url, cli.telegram_id.clone()))
        .transpose()
        .context("invalid --report-url")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let target = match cli.command {
        None | Some(Commands::Play) => LogTarget::Silent,
        _ => LogTarget::Stderr,
    };
    logging::init(cli.verbose, target, cli.log_file.as_deref())?;

    let config = GameConfig {
        strict: cli.strict,
        ..GameConfig::default()
    };

    match &cli.command {
        None | Some(Commands::Play) => {
            let game = Game::with_os_rng(load_dictionary(&cli.wordlist)?, config);
            let app = App::new(game, build_reporter(&cli)?);
            run_tui(app)
        }
        Some(Commands::Simple) => {
            let mut game = Game::with_os_rng(load_dictionary(&cli.wordlist)?, config);
            let reporter = build_reporter(&cli)?;
            run_simple(&mut game, reporter.as_ref())
        }
        Some(Commands::Evaluate { guess, target }) => {
            let row = evaluate_words(guess, target)?;
            print_evaluation(&row);
            Ok(())
        }
        Some(Commands::Serve { bind, webhook_url }) => {
            run_serve(relay_config(bind, webhook_url.clone())?)
        }
    }
}
