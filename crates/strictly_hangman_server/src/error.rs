//! Request-boundary error types.

use crate::store::StoreError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use derive_more::{Display, Error, From};
use serde::Serialize;
use strictly_hangman::GuessError;
use tracing::warn;

/// Everything a game request can fail with.
///
/// None of these are fatal: each one becomes a JSON response and leaves the
/// stored games exactly as they were.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum GameError {
    /// The game id is missing or unknown.
    #[display("Game ID does not exist.")]
    #[from(ignore)]
    NotFound,
    /// The guess is missing or not exactly one character.
    #[display("Guess must be supplied with 1 letter")]
    #[from(ignore)]
    InvalidInput,
    /// The letter was tried before.
    #[display("Letter '{letter}' has already been guessed.")]
    #[from(ignore)]
    DuplicateGuess {
        /// The repeated letter.
        letter: String,
    },
    /// The game was already won or lost.
    #[display("Game is already completed.")]
    #[from(ignore)]
    AlreadyCompleted,
    /// The store rejected a write.
    #[display("{_0}")]
    Store(StoreError),
}

impl GameError {
    /// Returns the HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            GameError::NotFound | GameError::AlreadyCompleted => StatusCode::NOT_FOUND,
            GameError::InvalidInput | GameError::DuplicateGuess { .. } => StatusCode::BAD_REQUEST,
            GameError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<GuessError> for GameError {
    fn from(err: GuessError) -> Self {
        match err {
            GuessError::GameOver => GameError::AlreadyCompleted,
            GuessError::InvalidLetter => GameError::InvalidInput,
            GuessError::DuplicateGuess { letter } => GameError::DuplicateGuess { letter },
        }
    }
}

/// Body of every message-only response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageBody {
    /// Human-readable text.
    #[serde(rename = "Message")]
    pub message: String,
}

impl MessageBody {
    /// Wraps a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl IntoResponse for GameError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        warn!(%status, error = %self, "Request rejected");
        (status, Json(MessageBody::new(self.to_string()))).into_response()
    }
}
