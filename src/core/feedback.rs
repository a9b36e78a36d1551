//! Guess evaluation and feedback representation
//!
//! Each guessed letter receives exactly one status:
//! - Correct: same letter at the same position of the target
//! - Present: letter occurs elsewhere in the target and that occurrence is still unused
//! - Absent: no unused occurrence remains

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Status of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    /// Lowercase name used in JSON and CSS-like contexts
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-position feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterStatus; WORD_LENGTH]);

impl Feedback {
    /// All positions correct
    pub const SOLVED: Self = Self([LetterStatus::Correct; WORD_LENGTH]);

    #[must_use]
    pub const fn new(statuses: [LetterStatus; WORD_LENGTH]) -> Self {
        Self(statuses)
    }

    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub const fn status_at(&self, position: usize) -> LetterStatus {
        self.0[position]
    }

    /// Check if every letter is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&s| s == LetterStatus::Correct)
    }

    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&s| s == LetterStatus::Correct).count()
    }

    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&s| s == LetterStatus::Present).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LENGTH {
            return Err(format!("Invalid feedback string: {s}"));
        }

        let mut statuses = [LetterStatus::Absent; WORD_LENGTH];
        for (slot, ch) in statuses.iter_mut().zip(chars) {
            *slot = match ch {
                'G' | 'g' | '🟩' => LetterStatus::Correct,
                'Y' | 'y' | '🟨' => LetterStatus::Present,
                '-' | '_' | '⬜' => LetterStatus::Absent,
                _ => return Err(format!("Invalid feedback string: {s}")),
            };
        }

        Ok(Self(statuses))
    }
}

/// Score `guess` against `target`
///
/// # Algorithm
/// 1. First pass: mark exact positional matches correct and consume those target positions
/// 2. Second pass: for each remaining guessed letter, left to right, mark it present
///    if an unconsumed target position holds the same letter (consuming the first
///    such position), otherwise absent
///
/// # Examples
/// ```
/// use slovo::core::{LetterStatus, Word, evaluate};
///
/// let guess = Word::new("волна").unwrap();
/// let target = Word::new("слово").unwrap();
/// let feedback = evaluate(&guess, &target);
///
/// assert_eq!(feedback.to_emoji(), "🟨🟨🟨⬜⬜");
/// assert_eq!(feedback.status_at(3), LetterStatus::Absent);
/// ```
#[must_use]
pub fn evaluate(guess: &Word, target: &Word) -> Feedback {
    let guess_letters = guess.letters();
    let target_letters = target.letters();

    let mut result: [Option<LetterStatus>; WORD_LENGTH] = [None; WORD_LENGTH];
    let mut consumed = [false; WORD_LENGTH];

    for (i, (g, t)) in guess_letters.iter().zip(target_letters).enumerate() {
        if g == t {
            result[i] = Some(LetterStatus::Correct);
            consumed[i] = true;
        }
    }

    for (i, letter) in guess_letters.iter().enumerate() {
        if result[i].is_some() {
            continue;
        }

        let available =
            (0..WORD_LENGTH).find(|&j| !consumed[j] && target_letters[j] == *letter);

        result[i] = Some(if let Some(j) = available {
            consumed[j] = true;
            LetterStatus::Present
        } else {
            LetterStatus::Absent
        });
    }

    Feedback(result.map(|s| s.unwrap_or(LetterStatus::Absent)))
}

/// A scored guess: the word together with its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRow {
    word: Word,
    feedback: Feedback,
}

impl GuessRow {
    /// Score a guess against the target and freeze the result
    #[must_use]
    pub fn score(guess: Word, target: &Word) -> Self {
        let feedback = evaluate(&guess, target);
        Self {
            word: guess,
            feedback,
        }
    }

    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }

    /// Iterate over (letter, status) pairs in position order
    pub fn cells(&self) -> impl Iterator<Item = (char, LetterStatus)> + '_ {
        self.word
            .letters()
            .iter()
            .copied()
            .zip(self.feedback.0.iter().copied())
    }
}
