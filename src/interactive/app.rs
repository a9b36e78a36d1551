//! TUI application state and logic

use crate::core::{WORD_LENGTH, is_alphabet_letter};
use crate::game::{Game, Key, KeyOutcome, MAX_ATTEMPTS, Rejection, Status};
use crate::relay::ResultReporter;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, info};

/// Application state
pub struct App<R = StdRng> {
    pub game: Game<R>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    /// Row refused on the last Enter; drawn shaken until the next edit
    pub rejected_row: Option<usize>,
    reporter: Option<ResultReporter>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of attempts; index 0 is unused
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }

    /// Wins per attempt count, e.g. `1:0 2:1 3:4 4:2 5:0 6:1`
    #[must_use]
    pub fn distribution_line(&self) -> String {
        self.guess_distribution
            .iter()
            .enumerate()
            .skip(1)
            .map(|(attempts, wins)| format!("{attempts}:{wins}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Map a key on a Latin layout to the ЙЦУКЕН letter in the same place
#[must_use]
pub fn latin_to_cyrillic(ch: char) -> Option<char> {
    let mapped = match ch.to_ascii_lowercase() {
        'q' => 'й',
        'w' => 'ц',
        'e' => 'у',
        'r' => 'к',
        't' => 'е',
        'y' => 'н',
        'u' => 'г',
        'i' => 'ш',
        'o' => 'щ',
        'p' => 'з',
        '[' => 'х',
        ']' => 'ъ',
        'a' => 'ф',
        's' => 'ы',
        'd' => 'в',
        'f' => 'а',
        'g' => 'п',
        'h' => 'р',
        'j' => 'о',
        'k' => 'л',
        'l' => 'д',
        ';' => 'ж',
        '\'' => 'э',
        'z' => 'я',
        'x' => 'ч',
        'c' => 'с',
        'v' => 'м',
        'b' => 'и',
        'n' => 'т',
        'm' => 'ь',
        ',' => 'б',
        '.' => 'ю',
        '`' => 'ё',
        _ => return None,
    };
    Some(mapped)
}

impl<R: Rng> App<R> {
    #[must_use]
    pub fn new(game: Game<R>, reporter: Option<ResultReporter>) -> Self {
        let mut app = Self {
            game,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            rejected_row: None,
            reporter,
        };

        if app.game.is_locked() {
            app.add_message(
                "Словарь пуст: игра недоступна. Esc - выход",
                MessageStyle::Error,
            );
        } else {
            app.add_message(
                "Угадайте слово из пяти букв за шесть попыток!",
                MessageStyle::Info,
            );
            app.add_message("Enter - проверить, Ctrl-N - новая игра", MessageStyle::Info);
        }

        app
    }

    /// Translate a terminal key event into an action
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::F(2) => self.new_game(),
            KeyCode::Enter => self.press(Key::Enter),
            KeyCode::Backspace | KeyCode::Delete => self.press(Key::Backspace),
            KeyCode::Char(c) if !ctrl => {
                let letter = if is_alphabet_letter(c) {
                    Some(c)
                } else {
                    latin_to_cyrillic(c)
                };
                if let Some(key) = letter.and_then(Key::from_char) {
                    self.press(key);
                }
            }
            _ => {}
        }
    }

    /// Feed one game key and react to the outcome
    pub fn press(&mut self, key: Key) {
        match self.game.handle_key(key) {
            KeyOutcome::Typed { .. } | KeyOutcome::Erased { .. } => self.rejected_row = None,
            KeyOutcome::Rejected { row, reason } => {
                self.rejected_row = Some(row);
                let text = match reason {
                    Rejection::Incomplete => format!("Нужно {WORD_LENGTH} букв"),
                    Rejection::NotInDictionary => "Такого слова нет в словаре".to_string(),
                };
                self.add_message(&text, MessageStyle::Error);
            }
            KeyOutcome::Scored { status, .. } => {
                self.rejected_row = None;
                if status.is_over() {
                    self.finish(status);
                }
            }
            KeyOutcome::Ignored => {}
        }
    }

    fn finish(&mut self, status: Status) {
        self.stats.total_games += 1;

        match status {
            Status::Won { attempts } => {
                self.stats.games_won += 1;
                if let Some(slot) = self.stats.guess_distribution.get_mut(attempts) {
                    *slot += 1;
                }
                let celebration = match attempts {
                    1 => "Невероятно! С первой попытки!",
                    2 => "Великолепно! Всего две попытки!",
                    3 => "Отлично! Три попытки!",
                    4 => "Хорошо! Четыре попытки!",
                    5 => "Неплохо! Пять попыток!",
                    _ => "Фух! В последний момент!",
                };
                self.add_message(celebration, MessageStyle::Success);
            }
            Status::Lost => {
                let target = self
                    .game
                    .session()
                    .map(|s| s.target().text().to_string())
                    .unwrap_or_default();
                self.add_message(
                    &format!("Вы проиграли. Загаданное слово: {target}"),
                    MessageStyle::Error,
                );
            }
            Status::Playing => return,
        }

        if let Some(result) = self.game.session().and_then(|s| s.result()) {
            info!(outcome = %result.outcome, attempts = result.attempts, "game finished");
            if let Some(reporter) = &self.reporter
                && !reporter.send_best_effort(&result)
            {
                self.add_message("Не удалось отправить результат", MessageStyle::Error);
            }
        }

        self.add_message("Ctrl-N - новая игра, Esc - выход", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        self.rejected_row = None;
        self.messages.clear();
        match self.game.new_game() {
            Ok(_) => {
                debug!("new game from TUI");
                self.add_message("Новая игра! Удачи!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key_event(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use crate::wordlists::Dictionary;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;

    fn app_with(words: &[&str]) -> App {
        let game = Game::new(
            Dictionary::new(words_from_slice(words)),
            GameConfig::default(),
            StdRng::seed_from_u64(7),
        );
        App::new(game, None)
    }

    fn type_chars(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    fn enter(app: &mut App) {
        app.handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    }

    #[test]
    fn latin_layout_maps_to_cyrillic() {
        assert_eq!(latin_to_cyrillic('q'), Some('й'));
        assert_eq!(latin_to_cyrillic('C'), Some('с'));
        assert_eq!(latin_to_cyrillic(';'), Some('ж'));
        assert_eq!(latin_to_cyrillic('1'), None);
    }

    #[test]
    fn typing_fills_draft() {
        let mut app = app_with(&["СЛОВО"]);
        type_chars(&mut app, "сл");
        type_chars(&mut app, "jd"); // о, в on a Latin layout
        let session = app.game.session().unwrap();
        assert_eq!(session.draft(), &['С', 'Л', 'О', 'В']);
    }

    #[test]
    fn incomplete_row_is_marked_rejected() {
        let mut app = app_with(&["СЛОВО"]);
        type_chars(&mut app, "сло");
        enter(&mut app);
        assert_eq!(app.rejected_row, Some(0));
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);

        app.handle_key_event(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
        assert_eq!(app.rejected_row, None);
        assert_eq!(app.game.session().unwrap().current_col(), 2);
    }

    #[test]
    fn winning_updates_statistics() {
        let mut app = app_with(&["СЛОВО"]);
        type_chars(&mut app, "слово");
        enter(&mut app);

        assert!(app.game.session().unwrap().is_over());
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);
        assert!((app.stats.win_rate() - 100.0).abs() < f64::EPSILON);
        assert_eq!(app.stats.distribution_line(), "1:1 2:0 3:0 4:0 5:0 6:0");
    }

    #[test]
    fn delete_erases_like_backspace() {
        let mut app = app_with(&["СЛОВО"]);
        type_chars(&mut app, "сло");
        app.handle_key_event(KeyEvent::new(KeyCode::Delete, KeyModifiers::NONE));

        let session = app.game.session().unwrap();
        assert_eq!(session.draft(), &['С', 'Л']);
        assert_eq!(session.current_col(), 2);
    }

    #[test]
    fn losing_reveals_target() {
        let mut app = app_with(&["СЛОВО"]);
        for _ in 0..MAX_ATTEMPTS {
            type_chars(&mut app, "лампа");
            enter(&mut app);
        }

        assert_eq!(app.game.session().unwrap().status(), Status::Lost);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(app.messages.iter().any(|m| m.text.contains("СЛОВО")));
    }

    #[test]
    fn ctrl_n_starts_new_game() {
        let mut app = app_with(&["СЛОВО"]);
        type_chars(&mut app, "лампа");
        enter(&mut app);
        app.handle_key_event(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));

        let session = app.game.session().unwrap();
        assert!(session.rows().is_empty());
        assert_eq!(session.current_col(), 0);
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let mut app = app_with(&["СЛОВО"]);
        app.handle_key_event(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert!(app.should_quit);

        let mut app = app_with(&["СЛОВО"]);
        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn empty_dictionary_locks_the_app() {
        let mut app = app_with(&[]);
        type_chars(&mut app, "слово");
        enter(&mut app);
        assert!(app.game.session().is_none());
        assert_eq!(app.stats.total_games, 0);

        app.handle_key_event(KeyEvent::new(KeyCode::F(2), KeyModifiers::NONE));
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app_with(&["СЛОВО"]);
        for i in 0..10 {
            app.add_message(&i.to_string(), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "5");
    }
}
