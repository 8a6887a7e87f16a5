//! In-memory game storage.

use derive_more::{Display, Error};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use strictly_hangman::Game;
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game.
pub type GameId = String;

/// Errors raised by the store.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum StoreError {
    /// A game with this id is already stored.
    #[display("Game {id} already exists")]
    DuplicateId {
        /// The colliding id.
        id: GameId,
    },
}

/// Manages all games.
///
/// Clones share the same map. Each call takes the map lock once, so
/// [`GameStore::update`] runs its closure with no other reader or writer
/// active.
#[derive(Debug, Clone, Default)]
pub struct GameStore {
    games: Arc<Mutex<HashMap<GameId, Game>>>,
}

impl GameStore {
    /// Creates an empty store.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating game store");
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<GameId, Game>> {
        // Mutations are all-or-nothing, so a poisoned map is still consistent.
        self.games.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stores a new game.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] if `id` is taken.
    #[instrument(skip(self, game))]
    pub fn create(&self, id: GameId, game: Game) -> Result<(), StoreError> {
        let mut games = self.lock();

        if games.contains_key(&id) {
            warn!(game_id = %id, "Game already exists");
            return Err(StoreError::DuplicateId { id });
        }

        games.insert(id.clone(), game);
        info!(game_id = %id, count = games.len(), "Stored new game");
        Ok(())
    }

    /// Returns a snapshot of a game.
    #[instrument(skip(self))]
    pub fn get(&self, id: &str) -> Option<Game> {
        let game = self.lock().get(id).cloned();

        if game.is_none() {
            debug!(game_id = id, "Game not found");
        }

        game
    }

    /// Runs `f` against the stored game while holding the lock.
    ///
    /// Returns `None` without calling `f` if the id is unknown.
    #[instrument(skip(self, f))]
    pub fn update<T>(&self, id: &str, f: impl FnOnce(&mut Game) -> T) -> Option<T> {
        let mut games = self.lock();
        let Some(game) = games.get_mut(id) else {
            debug!(game_id = id, "Game not found for update");
            return None;
        };
        Some(f(game))
    }

    /// Removes a game. Returns whether it was present.
    #[instrument(skip(self))]
    pub fn delete(&self, id: &str) -> bool {
        let removed = self.lock().remove(id).is_some();
        debug!(game_id = id, removed, "Delete requested");
        removed
    }

    /// Checks whether a game is stored.
    #[instrument(skip(self))]
    pub fn has(&self, id: &str) -> bool {
        self.lock().contains_key(id)
    }

    /// Returns the number of stored games.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Checks whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
