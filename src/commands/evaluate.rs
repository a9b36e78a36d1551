//! One-off evaluation of a guess against a target

use crate::core::{GuessRow, Word, WordError};

/// Score `guess` against `target` without starting a game
///
/// # Errors
///
/// Returns an error if either word is not five alphabet letters.
pub fn evaluate_words(guess: &str, target: &str) -> Result<GuessRow, WordError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;
    Ok(GuessRow::score(guess, &target))
}
