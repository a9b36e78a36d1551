//! Single game session state machine
//!
//! A session owns one target word and tracks the current row and column as
//! keys arrive. Rows are scored on submission and never change afterwards.

use super::result::{GameResult, Outcome};
use crate::core::{GuessRow, KeyboardState, WORD_LENGTH, Word, is_alphabet_letter, to_upper_letter};
use std::time::{Duration, Instant};
use tracing::debug;

/// Default number of rows on the board
pub const MAX_ATTEMPTS: usize = 6;

/// A key press understood by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Letter(char),
    Enter,
    Backspace,
}

impl Key {
    /// Parse a key name as produced by a keyboard or the on-screen layout
    ///
    /// Accepts `ENTER`, `BACKSPACE`, `DELETE` (any case) and single Russian letters.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_uppercase().as_str() {
            "ENTER" => Some(Self::Enter),
            "BACKSPACE" | "DELETE" => Some(Self::Backspace),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Self::from_char(ch),
                    _ => None,
                }
            }
        }
    }

    /// Letter key for a Russian letter, uppercased
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        is_alphabet_letter(ch).then(|| Self::Letter(to_upper_letter(ch)))
    }
}

/// Where the session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Playing,
    Won { attempts: usize },
    Lost,
}

impl Status {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Why a submission was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Fewer than five letters entered
    Incomplete,
    /// Complete word that the dictionary does not know
    NotInDictionary,
}

/// What a key press did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Game over, row full, or unknown key
    Ignored,
    Typed { row: usize, col: usize, letter: char },
    Erased { row: usize, col: usize },
    /// Row stays editable; front ends shake it
    Rejected { row: usize, reason: Rejection },
    Scored {
        row: usize,
        guess: GuessRow,
        status: Status,
    },
}

/// State of one game
#[derive(Debug, Clone)]
pub struct Session {
    target: Word,
    max_attempts: usize,
    rows: Vec<GuessRow>,
    draft: Vec<char>,
    status: Status,
    keyboard: KeyboardState,
    started_at: Instant,
    elapsed: Option<Duration>,
}

impl Session {
    /// Start a session for `target` with the given number of rows
    ///
    /// A zero row count is raised to one.
    #[must_use]
    pub fn new(target: Word, max_attempts: usize) -> Self {
        Self {
            target,
            max_attempts: max_attempts.max(1),
            rows: Vec::with_capacity(max_attempts),
            draft: Vec::with_capacity(WORD_LENGTH),
            status: Status::Playing,
            keyboard: KeyboardState::new(),
            started_at: Instant::now(),
            elapsed: None,
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        if self.status.is_over() {
            debug!(?key, "key ignored, game is over");
            return KeyOutcome::Ignored;
        }

        match key {
            Key::Enter => self.submit(),
            Key::Backspace => self.erase(),
            Key::Letter(ch) => self.type_letter(ch),
        }
    }

    fn type_letter(&mut self, ch: char) -> KeyOutcome {
        if self.draft.len() >= WORD_LENGTH || !is_alphabet_letter(ch) {
            return KeyOutcome::Ignored;
        }

        let letter = to_upper_letter(ch);
        let col = self.draft.len();
        self.draft.push(letter);
        KeyOutcome::Typed {
            row: self.current_row(),
            col,
            letter,
        }
    }

    fn erase(&mut self) -> KeyOutcome {
        if self.draft.pop().is_some() {
            KeyOutcome::Erased {
                row: self.current_row(),
                col: self.draft.len(),
            }
        } else {
            KeyOutcome::Ignored
        }
    }

    fn submit(&mut self) -> KeyOutcome {
        let row = self.current_row();

        let Some(guess) = self.draft_word() else {
            debug!(row, col = self.draft.len(), "incomplete row rejected");
            return KeyOutcome::Rejected {
                row,
                reason: Rejection::Incomplete,
            };
        };

        let scored = GuessRow::score(guess, &self.target);
        self.keyboard.record(&scored);
        self.rows.push(scored.clone());
        self.draft.clear();

        if scored.feedback().is_solved() {
            self.finish(Status::Won {
                attempts: self.rows.len(),
            });
        } else if self.rows.len() >= self.max_attempts {
            self.finish(Status::Lost);
        }

        debug!(
            row,
            guess = %scored.word(),
            feedback = %scored.feedback().to_emoji(),
            status = ?self.status,
            "row scored"
        );

        KeyOutcome::Scored {
            row,
            guess: scored,
            status: self.status,
        }
    }

    fn finish(&mut self, status: Status) {
        self.status = status;
        self.elapsed = Some(self.started_at.elapsed());
    }

    /// The current draft as a word, once all five letters are entered
    #[must_use]
    pub fn draft_word(&self) -> Option<Word> {
        if self.draft.len() == WORD_LENGTH {
            Word::from_letters(&self.draft).ok()
        } else {
            None
        }
    }

    /// Row being edited, or the last scored row once the game is over
    #[must_use]
    pub fn current_row(&self) -> usize {
        if self.status.is_over() {
            self.rows.len().saturating_sub(1)
        } else {
            self.rows.len()
        }
    }

    /// Column where the next letter lands
    #[must_use]
    pub fn current_col(&self) -> usize {
        self.draft.len()
    }

    #[must_use]
    pub fn draft(&self) -> &[char] {
        &self.draft
    }

    #[must_use]
    pub fn rows(&self) -> &[GuessRow] {
        &self.rows
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_over()
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// Time spent so far, frozen when the game ends
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed.unwrap_or_else(|| self.started_at.elapsed())
    }

    /// Summary of a finished game, `None` while still playing
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        let outcome = match self.status {
            Status::Playing => return None,
            Status::Won { .. } => Outcome::Win,
            Status::Lost => Outcome::Lose,
        };

        Some(GameResult::new(
            outcome,
            self.target.text(),
            self.rows.len(),
            self.elapsed(),
        ))
    }
}
