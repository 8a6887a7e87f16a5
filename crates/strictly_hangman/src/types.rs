//! Core domain types for hangman.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Character shown in place of a letter that has not been revealed yet.
pub const PLACEHOLDER: char = '_';

/// Number of incorrect guesses a new game allows by default.
pub const GUESS_LIMIT: u32 = 6;

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum GameStatus {
    /// Game is ongoing.
    #[serde(rename = "In Progress")]
    #[strum(serialize = "In Progress")]
    InProgress,
    /// Every letter of the word was revealed.
    Won,
    /// The guess budget ran out.
    Lost,
}

impl GameStatus {
    /// Returns true once the game has been won or lost.
    pub fn is_finished(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Complete state of one hangman game, secret word included.
///
/// Fields are only mutated by the guess transaction in [`crate::apply_guess`],
/// which keeps the masked word aligned with the secret and the status
/// transition one-way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// The word being guessed, case as drawn from the word list.
    pub(crate) secret_word: String,
    /// The word as shown to the player.
    pub(crate) masked_word: String,
    /// Incorrect guesses still allowed.
    pub(crate) remaining_guesses: u32,
    /// Game status.
    pub(crate) status: GameStatus,
    /// Wrong letters, in the order they were guessed.
    pub(crate) incorrect_guesses: Vec<String>,
}

impl Game {
    /// Creates a new game for `secret_word` with `guess_limit` incorrect guesses allowed.
    ///
    /// Only alphanumeric characters are masked; spaces and punctuation are
    /// visible from the start.
    #[instrument(skip(secret_word))]
    pub fn new(secret_word: impl Into<String>, guess_limit: u32) -> Self {
        let secret_word = secret_word.into();
        let masked_word = mask(&secret_word);
        debug!(len = secret_word.chars().count(), guess_limit, "Starting game");
        Self {
            secret_word,
            masked_word,
            remaining_guesses: guess_limit,
            status: GameStatus::InProgress,
            incorrect_guesses: Vec::new(),
        }
    }

    /// Returns the hidden word.
    pub fn secret_word(&self) -> &str {
        &self.secret_word
    }

    /// Returns the word as shown to the player.
    pub fn masked_word(&self) -> &str {
        &self.masked_word
    }

    /// Returns the number of incorrect guesses still allowed.
    pub fn remaining_guesses(&self) -> u32 {
        self.remaining_guesses
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the incorrect guesses in guess order.
    pub fn incorrect_guesses(&self) -> &[String] {
        &self.incorrect_guesses
    }

    /// Returns a client-facing snapshot with the secret word stripped.
    pub fn view(&self) -> GameView {
        GameView {
            remaining_guesses: self.remaining_guesses,
            word: self.masked_word.clone(),
            status: self.status,
            incorrect_guesses: self.incorrect_guesses.clone(),
        }
    }
}

/// What a client is allowed to see of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    /// Incorrect guesses still allowed.
    pub remaining_guesses: u32,
    /// The masked word.
    pub word: String,
    /// Game status.
    pub status: GameStatus,
    /// Wrong letters, in guess order.
    pub incorrect_guesses: Vec<String>,
}

fn mask(word: &str) -> String {
    word.chars()
        .map(|c| if c.is_alphanumeric() { PLACEHOLDER } else { c })
        .collect()
}
