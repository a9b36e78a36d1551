//! Ordered word collection with fast membership lookup

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Immutable dictionary of game words
///
/// Keeps the file order for display and random selection, plus a set for
/// membership checks.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    lookup: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary, dropping duplicate words
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let mut lookup = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|w| lookup.insert(w.text().to_string()))
            .collect();

        Self { words, lookup }
    }

    /// The dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(super::loader::words_from_slice(super::WORDS))
    }

    /// Check whether a word is in the dictionary (case-insensitive)
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|w| self.lookup.contains(w.text()))
    }

    #[must_use]
    pub fn contains_word(&self, word: &Word) -> bool {
        self.lookup.contains(word.text())
    }

    /// Pick a random target, or `None` if the dictionary is empty
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
