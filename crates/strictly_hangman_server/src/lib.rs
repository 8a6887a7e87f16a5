//! Strictly Hangman server library.
//!
//! # Architecture
//!
//! - **Store**: in-memory games keyed by id, behind one lock
//! - **Controller**: game lifecycle over the store and the guess engine
//! - **HTTP**: axum router with existence and status pre-checks
//! - **Config**: TOML configuration with command-line overrides
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use strictly_hangman::FixedWord;
//! use strictly_hangman_server::{GameController, GameStore};
//!
//! let controller = GameController::new(
//!     GameStore::new(),
//!     Arc::new(FixedWord("Canine".to_string())),
//!     6,
//! );
//! let id = controller.create_game().expect("Fresh id");
//! let report = controller.submit_guess(&id, "c").expect("Valid guess");
//! assert_eq!(report.game.word, "C_____");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod controller;
mod error;
mod http;
mod store;

// Crate-level exports - Configuration
pub use config::{ConfigError, ServerConfig};

// Crate-level exports - Lifecycle
pub use controller::{GameController, GuessReport};

// Crate-level exports - Errors
pub use error::{GameError, MessageBody};

// Crate-level exports - HTTP
pub use http::{CreatedGame, GuessRequest, router};

// Crate-level exports - Storage
pub use store::{GameId, GameStore, StoreError};
