//! Strictly Hangman - pure game logic.
//!
//! Everything here is synchronous and free of I/O: a [`Game`] holds the
//! secret word and what the player has uncovered so far, [`apply_guess`]
//! advances it by one letter, and a [`WordSource`] supplies words for new
//! games.
//!
//! # Example
//!
//! ```
//! use strictly_hangman::{Game, GameStatus, GuessOutcome, apply_guess};
//!
//! let mut game = Game::new("Banana", 6);
//! assert_eq!(apply_guess(&mut game, "A"), Ok(GuessOutcome::Correct('A')));
//! assert_eq!(game.masked_word(), "_a_a_a");
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod rules;
mod types;
mod words;

pub use rules::{
    GuessError, GuessOutcome, already_guessed_correctly, already_guessed_incorrectly,
    apply_guess, decrement_and_check_alive, is_complete, letter_present, matching_indexes,
    reveal_at,
};
pub use types::{GUESS_LIMIT, Game, GameStatus, GameView, PLACEHOLDER};
pub use words::{DEFAULT_WORDS, FixedWord, RandomWords, WordList, WordListError, WordSource};
