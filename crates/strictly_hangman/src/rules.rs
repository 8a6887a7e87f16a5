//! Guess evaluation for hangman.
//!
//! Every comparison between a guess and the word folds both sides with
//! [`char::to_lowercase`], so `'a'` and `'A'` are the same guess everywhere.
//! Revealed letters always keep the case of the secret word.

use super::types::{Game, GameStatus, PLACEHOLDER};
use derive_more::{Display, Error};
use tracing::{debug, info, instrument};

/// Result of a guess that was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GuessOutcome {
    /// The letter is in the word and letters are still hidden.
    #[display("Correct! '{_0}' is in the word.")]
    Correct(char),
    /// The letter revealed the last hidden characters.
    #[display("Congratulations, you won!")]
    Won(char),
    /// The letter is not in the word and guesses remain.
    #[display("Sorry, '{_0}' is not in the word.")]
    Incorrect(char),
    /// The letter is not in the word and the guess budget is spent.
    #[display("Out of guesses. Game over!")]
    Lost(char),
}

impl GuessOutcome {
    /// Returns true if the guess ended the game.
    pub fn is_final(self) -> bool {
        matches!(self, GuessOutcome::Won(_) | GuessOutcome::Lost(_))
    }
}

/// Reasons a guess is rejected. A rejected guess never changes the game.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GuessError {
    /// The game was already won or lost.
    #[display("Game is already completed.")]
    GameOver,
    /// The guess was empty or longer than one character.
    #[display("Guess must be supplied with 1 letter")]
    InvalidLetter,
    /// The letter was tried before, correctly or not.
    #[display("Letter '{letter}' has already been guessed.")]
    DuplicateGuess {
        /// The repeated letter, as submitted.
        letter: String,
    },
}

fn same_letter(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Checks whether `letter` occurs anywhere in `secret`.
pub fn letter_present(secret: &str, letter: char) -> bool {
    secret.chars().any(|c| same_letter(c, letter))
}

/// Returns every character position of `secret` that matches `letter`, in ascending order.
pub fn matching_indexes(secret: &str, letter: char) -> Vec<usize> {
    secret
        .chars()
        .enumerate()
        .filter(|&(_, c)| same_letter(c, letter))
        .map(|(i, _)| i)
        .collect()
}

/// Copies the secret's characters at `indexes` into the masked word.
///
/// Indexes outside the word are ignored.
pub fn reveal_at(masked: &str, secret: &str, indexes: &[usize]) -> String {
    masked
        .chars()
        .zip(secret.chars())
        .enumerate()
        .map(|(i, (shown, hidden))| if indexes.contains(&i) { hidden } else { shown })
        .collect()
}

/// Checks whether every character of the masked word has been revealed.
pub fn is_complete(masked: &str) -> bool {
    !masked.contains(PLACEHOLDER)
}

/// Spends one guess. Returns true while guesses remain.
pub fn decrement_and_check_alive(game: &mut Game) -> bool {
    game.remaining_guesses = game.remaining_guesses.saturating_sub(1);
    game.remaining_guesses > 0
}

/// Checks whether `letter` is already revealed in the masked word.
pub fn already_guessed_correctly(game: &Game, letter: char) -> bool {
    game.masked_word
        .chars()
        .filter(|&c| c != PLACEHOLDER)
        .any(|c| same_letter(c, letter))
}

/// Checks whether `letter` is anywhere in the incorrect-guess history.
pub fn already_guessed_incorrectly(game: &Game, letter: char) -> bool {
    game.incorrect_guesses
        .iter()
        .filter_map(|guess| guess.chars().next())
        .any(|c| same_letter(c, letter))
}

/// Applies one guess to `game`.
///
/// The game is only mutated when the guess is accepted. A correct guess
/// never spends a guess, so completing the word always wins even with no
/// guesses to spare.
///
/// # Errors
///
/// - [`GuessError::GameOver`] if the game is already won or lost.
/// - [`GuessError::InvalidLetter`] unless `letter` is exactly one character.
/// - [`GuessError::DuplicateGuess`] if the letter was tried before.
#[instrument(skip(game), fields(status = %game.status, remaining = game.remaining_guesses))]
pub fn apply_guess(game: &mut Game, letter: &str) -> Result<GuessOutcome, GuessError> {
    if game.status.is_finished() {
        return Err(GuessError::GameOver);
    }

    let mut chars = letter.chars();
    let guess = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => return Err(GuessError::InvalidLetter),
    };

    if already_guessed_correctly(game, guess) || already_guessed_incorrectly(game, guess) {
        debug!(%guess, "Letter already guessed");
        return Err(GuessError::DuplicateGuess {
            letter: letter.to_string(),
        });
    }

    if letter_present(&game.secret_word, guess) {
        let indexes = matching_indexes(&game.secret_word, guess);
        game.masked_word = reveal_at(&game.masked_word, &game.secret_word, &indexes);
        debug!(?indexes, masked = %game.masked_word, "Revealed letters");

        if is_complete(&game.masked_word) {
            game.status = GameStatus::Won;
            info!("Word fully revealed");
            return Ok(GuessOutcome::Won(guess));
        }
        return Ok(GuessOutcome::Correct(guess));
    }

    game.incorrect_guesses.push(letter.to_string());
    if decrement_and_check_alive(game) {
        debug!(remaining = game.remaining_guesses, "Incorrect guess");
        Ok(GuessOutcome::Incorrect(guess))
    } else {
        game.status = GameStatus::Lost;
        info!("Guess budget exhausted");
        Ok(GuessOutcome::Lost(guess))
    }
}
