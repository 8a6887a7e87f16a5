//! Candidate words and random selection.

use super::types::PLACEHOLDER;
use derive_more::{Display, Error};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::sync::{Mutex, PoisonError};
use tracing::{debug, instrument};

/// Words used when no list is configured.
pub const DEFAULT_WORDS: &[&str] = &["Banana", "Canine", "Unosquare", "Airport"];

/// Supplies the secret word for each new game.
pub trait WordSource: Send + Sync + std::fmt::Debug {
    /// Picks the word for a new game.
    fn pick(&self) -> String;
}

/// Errors building a word list.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum WordListError {
    /// The list has no words.
    #[display("Word list is empty")]
    Empty,
    /// A word cannot be played.
    #[display("Word {word:?} is not playable: {reason}")]
    Unplayable {
        /// The offending word.
        word: String,
        /// Why it was rejected.
        reason: &'static str,
    },
}

/// A non-empty list of playable words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Validates and wraps a list of words.
    ///
    /// # Errors
    ///
    /// Fails if the list is empty, or if a word is empty, has no letters to
    /// guess, or contains the placeholder character.
    #[instrument(skip(words))]
    pub fn new<I, S>(words: I) -> Result<Self, WordListError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        for word in &words {
            let reason = if word.contains(PLACEHOLDER) {
                Some("contains the placeholder character")
            } else if !word.chars().any(char::is_alphanumeric) {
                Some("has no letters to guess")
            } else {
                None
            };
            if let Some(reason) = reason {
                return Err(WordListError::Unplayable {
                    word: word.clone(),
                    reason,
                });
            }
        }
        debug!(count = words.len(), "Word list validated");
        Ok(Self { words })
    }

    /// Returns the words.
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

/// Picks uniformly at random from a [`WordList`].
#[derive(Debug)]
pub struct RandomWords {
    list: WordList,
    rng: Mutex<StdRng>,
}

impl RandomWords {
    /// Creates a source seeded from the operating system.
    pub fn new(list: WordList) -> Self {
        Self::with_rng(list, StdRng::from_os_rng())
    }

    /// Creates a reproducible source.
    pub fn seeded(list: WordList, seed: u64) -> Self {
        Self::with_rng(list, StdRng::seed_from_u64(seed))
    }

    /// Creates a source drawing from `rng`.
    pub fn with_rng(list: WordList, rng: StdRng) -> Self {
        Self {
            list,
            rng: Mutex::new(rng),
        }
    }
}

impl WordSource for RandomWords {
    #[instrument(skip(self))]
    fn pick(&self) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        // WordList is never empty.
        let word = self
            .list
            .words
            .choose(&mut *rng)
            .cloned()
            .unwrap_or_default();
        debug!(len = word.chars().count(), "Picked word");
        word
    }
}

/// Always picks the same word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedWord(pub String);

impl WordSource for FixedWord {
    fn pick(&self) -> String {
        self.0.clone()
    }
}
