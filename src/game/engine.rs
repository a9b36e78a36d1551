//! Game controller: dictionary, random targets and session lifecycle

use super::session::{Key, KeyOutcome, MAX_ATTEMPTS, Rejection, Session};
use crate::core::{Word, WordError};
use crate::wordlists::Dictionary;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::{debug, error, info};

/// Errors raised by the game controller
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("dictionary is empty, no target word can be drawn")]
    EmptyDictionary,
}

/// Game rules that can be tuned from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_attempts: usize,
    /// Refuse complete rows that are not dictionary words
    pub strict: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            strict: false,
        }
    }
}

/// Owns the dictionary and the current session
///
/// With an empty dictionary the game is locked: no session exists and every
/// key is ignored.
pub struct Game<R = StdRng> {
    dictionary: Dictionary,
    config: GameConfig,
    rng: R,
    session: Option<Session>,
}

impl Game<StdRng> {
    /// Game seeded from the operating system
    #[must_use]
    pub fn with_os_rng(dictionary: Dictionary, config: GameConfig) -> Self {
        Self::new(dictionary, config, StdRng::from_os_rng())
    }
}

impl<R: Rng> Game<R> {
    /// Create a game and start the first session
    pub fn new(dictionary: Dictionary, config: GameConfig, rng: R) -> Self {
        let mut game = Self {
            dictionary,
            config,
            rng,
            session: None,
        };

        if let Err(e) = game.new_game() {
            error!(error = %e, "game locked");
        }

        game
    }

    /// Draw a new target and reset all session state
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyDictionary` if there is nothing to draw from;
    /// the game is then locked.
    pub fn new_game(&mut self) -> Result<&Session, GameError> {
        let Some(target) = self.dictionary.random_word(&mut self.rng).cloned() else {
            self.session = None;
            return Err(GameError::EmptyDictionary);
        };

        info!(words = self.dictionary.len(), "new game started");
        debug!(target = %target, "target drawn");

        Ok(self
            .session
            .insert(Session::new(target, self.config.max_attempts)))
    }

    /// Apply one key press to the current session
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        let strict = self.config.strict;
        let Some(session) = self.session.as_mut() else {
            return KeyOutcome::Ignored;
        };

        if strict
            && key == Key::Enter
            && !session.is_over()
            && let Some(word) = session.draft_word()
            && !self.dictionary.contains_word(&word)
        {
            debug!(guess = %word, "word not in dictionary");
            return KeyOutcome::Rejected {
                row: session.current_row(),
                reason: Rejection::NotInDictionary,
            };
        }

        session.handle_key(key)
    }

    /// Replace the current draft with `text` and submit it
    ///
    /// # Errors
    ///
    /// Returns `WordError` if `text` is not a five-letter Russian word; the
    /// session is left untouched in that case.
    pub fn enter_word(&mut self, text: &str) -> Result<KeyOutcome, WordError> {
        let word = Word::new(text)?;

        while self.session.as_ref().is_some_and(|s| s.current_col() > 0) {
            self.handle_key(Key::Backspace);
        }
        for &letter in word.letters() {
            self.handle_key(Key::Letter(letter));
        }

        Ok(self.handle_key(Key::Enter))
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.session.is_none()
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Status;
    use crate::wordlists::loader::words_from_slice;

    fn game(words: &[&str], config: GameConfig) -> Game<StdRng> {
        Game::new(
            Dictionary::new(words_from_slice(words)),
            config,
            StdRng::seed_from_u64(42),
        )
    }

    #[test]
    fn single_word_dictionary_fixes_target() {
        let g = game(&["СЛОВО"], GameConfig::default());
        assert_eq!(g.session().unwrap().target().text(), "СЛОВО");
        assert!(!g.is_locked());
    }

    #[test]
    fn empty_dictionary_locks_game() {
        let mut g = game(&[], GameConfig::default());
        assert!(g.is_locked());
        assert_eq!(g.handle_key(Key::Letter('А')), KeyOutcome::Ignored);
        assert_eq!(g.new_game().unwrap_err(), GameError::EmptyDictionary);
        assert!(matches!(g.enter_word("слово"), Ok(KeyOutcome::Ignored)));
    }

    #[test]
    fn enter_word_scores_a_row() {
        let mut g = game(&["СЛОВО"], GameConfig::default());
        let outcome = g.enter_word("волна").unwrap();

        assert!(matches!(outcome, KeyOutcome::Scored { row: 0, .. }));
        assert_eq!(g.session().unwrap().rows().len(), 1);
    }

    #[test]
    fn enter_word_replaces_partial_draft() {
        let mut g = game(&["СЛОВО"], GameConfig::default());
        g.handle_key(Key::Letter('Ж'));
        g.handle_key(Key::Letter('Ж'));

        let outcome = g.enter_word("слово").unwrap();
        assert!(matches!(
            outcome,
            KeyOutcome::Scored {
                status: Status::Won { attempts: 1 },
                ..
            }
        ));
    }

    #[test]
    fn enter_word_rejects_invalid_text() {
        let mut g = game(&["СЛОВО"], GameConfig::default());
        assert!(g.enter_word("слон").is_err());
        assert!(g.session().unwrap().rows().is_empty());
    }

    #[test]
    fn strict_mode_refuses_unknown_words() {
        let config = GameConfig {
            strict: true,
            ..GameConfig::default()
        };
        let mut g = game(&["СЛОВО", "ВОЛНА"], config);

        let outcome = g.enter_word("жжжжж").unwrap();
        assert!(matches!(
            outcome,
            KeyOutcome::Rejected {
                row: 0,
                reason: Rejection::NotInDictionary
            }
        ));
        // Draft stays in place, no attempt used
        assert_eq!(g.session().unwrap().current_col(), 5);
        assert!(g.session().unwrap().rows().is_empty());

        assert!(matches!(
            g.enter_word("волна").unwrap(),
            KeyOutcome::Scored { .. }
        ));
    }

    #[test]
    fn lenient_mode_accepts_unknown_words() {
        let mut g = game(&["СЛОВО"], GameConfig::default());
        assert!(matches!(
            g.enter_word("жжжжж").unwrap(),
            KeyOutcome::Scored { .. }
        ));
    }

    #[test]
    fn new_game_resets_session_and_keyboard() {
        let mut g = game(&["СЛОВО"], GameConfig::default());
        g.enter_word("волна").unwrap();
        g.enter_word("слово").unwrap();
        assert!(g.session().unwrap().is_over());

        let session = g.new_game().unwrap();
        assert!(!session.is_over());
        assert!(session.rows().is_empty());
        assert_eq!(session.current_row(), 0);
        assert_eq!(session.current_col(), 0);
        assert!(session.keyboard().is_empty());
    }

    #[test]
    fn configured_attempts_reach_session() {
        let config = GameConfig {
            max_attempts: 3,
            strict: false,
        };
        let g = game(&["СЛОВО"], config);
        assert_eq!(g.session().unwrap().max_attempts(), 3);
    }
}
