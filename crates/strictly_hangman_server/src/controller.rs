//! Game lifecycle: creation, inspection, guessing and deletion.

use crate::error::GameError;
use crate::store::{GameId, GameStore};
use derive_new::new;
use serde::Serialize;
use std::sync::Arc;
use strictly_hangman::{Game, GameView, GuessOutcome, WordSource, apply_guess};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Result of an accepted guess, as sent to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct GuessReport {
    /// What happened, in words.
    #[serde(rename = "Message")]
    pub message: String,
    /// The game after the guess.
    #[serde(flatten)]
    pub game: GameView,
}

/// Composes the word source, the store and the guess engine.
///
/// Cheap to clone; clones share the same store.
#[derive(Debug, Clone)]
pub struct GameController {
    store: GameStore,
    words: Arc<dyn WordSource>,
    guess_limit: u32,
}

impl GameController {
    /// Creates a controller over `store`, drawing words from `words`.
    #[instrument(skip(store, words))]
    pub fn new(store: GameStore, words: Arc<dyn WordSource>, guess_limit: u32) -> Self {
        info!("Creating game controller");
        Self {
            store,
            words,
            guess_limit,
        }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &GameStore {
        &self.store
    }

    /// Starts a new game and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Store`] if the generated id is already taken.
    #[instrument(skip(self))]
    pub fn create_game(&self) -> Result<GameId, GameError> {
        let id = Uuid::new_v4().to_string();
        let game = Game::new(self.words.pick(), self.guess_limit);
        self.store.create(id.clone(), game)?;
        info!(game_id = %id, "Game created");
        Ok(id)
    }

    /// Returns the client view of a game.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotFound`] if the id is unknown.
    #[instrument(skip(self))]
    pub fn get_game(&self, id: &str) -> Result<GameView, GameError> {
        self.store
            .get(id)
            .map(|game| game.view())
            .ok_or(GameError::NotFound)
    }

    /// Applies a guess to a game.
    ///
    /// Lookup, status check, duplicate check and mutation all happen under
    /// one store lock.
    ///
    /// # Errors
    ///
    /// - [`GameError::NotFound`] if the id is unknown.
    /// - [`GameError::AlreadyCompleted`] if the game is over.
    /// - [`GameError::InvalidInput`] unless `letter` is one character.
    /// - [`GameError::DuplicateGuess`] if the letter was tried before.
    #[instrument(skip(self))]
    pub fn submit_guess(&self, id: &str, letter: &str) -> Result<GuessReport, GameError> {
        let (outcome, view) = self
            .store
            .update(id, |game| apply_guess(game, letter).map(|outcome| (outcome, game.view())))
            .ok_or_else(|| {
                warn!(game_id = id, "Guess for unknown game");
                GameError::NotFound
            })??;

        match outcome {
            GuessOutcome::Won(_) | GuessOutcome::Lost(_) => {
                info!(game_id = id, status = %view.status, "Game finished");
            }
            GuessOutcome::Correct(_) | GuessOutcome::Incorrect(_) => {
                debug!(game_id = id, %outcome, remaining = view.remaining_guesses, "Guess applied");
            }
        }

        Ok(GuessReport::new(outcome.to_string(), view))
    }

    /// Removes a game. Deleting an unknown id is not an error.
    #[instrument(skip(self))]
    pub fn delete_game(&self, id: &str) -> String {
        if self.store.delete(id) {
            info!(game_id = id, "Game deleted");
        }
        format!("Game {id} was deleted.")
    }

    /// Checks whether a game exists.
    pub fn game_exists(&self, id: &str) -> bool {
        self.store.has(id)
    }

    /// Checks whether a game exists and is still being played.
    pub fn game_in_progress(&self, id: &str) -> bool {
        self.store
            .get(id)
            .is_some_and(|game| !game.status().is_finished())
    }
}
