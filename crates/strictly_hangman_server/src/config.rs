//! Server configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_hangman::{GUESS_LIMIT, RandomWords, WordList};
use tracing::{debug, info, instrument};

/// Configuration for the hangman server.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    host: String,

    /// Port to bind to.
    #[serde(default = "default_port")]
    port: u16,

    /// Incorrect guesses allowed per game.
    #[serde(default = "default_guess_limit")]
    guess_limit: u32,

    /// Candidate secret words.
    #[serde(default = "default_words")]
    words: Vec<String>,

    /// Seed for word selection. Random when absent.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4567
}

fn default_guess_limit() -> u32 {
    GUESS_LIMIT
}

fn default_words() -> Vec<String> {
    WordList::default().words().to_vec()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            guess_limit: default_guess_limit(),
            words: default_words(),
            seed: None,
        }
    }
}

impl ServerConfig {
    /// Loads configuration from a TOML file. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or parsed, or does not validate.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Fails if the text is not valid TOML for this config or does not validate.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        info!(port = config.port, words = config.words.len(), "Config loaded successfully");
        Ok(config)
    }

    /// Applies command-line overrides.
    pub fn with_overrides(
        mut self,
        host: Option<String>,
        port: Option<u16>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Checks that the values describe a playable server.
    ///
    /// # Errors
    ///
    /// Fails on a zero guess limit or an unplayable word list.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.guess_limit == 0 {
            return Err(ConfigError::new("guess_limit must be at least 1"));
        }
        self.word_list().map(|_| ())
    }

    /// Builds the validated word list.
    ///
    /// # Errors
    ///
    /// Fails if the configured words are not playable.
    pub fn word_list(&self) -> Result<WordList, ConfigError> {
        WordList::new(self.words.iter().cloned())
            .map_err(|e| ConfigError::new(format!("Invalid word list: {}", e)))
    }

    /// Builds the word source described by this config.
    ///
    /// # Errors
    ///
    /// Fails if the configured words are not playable.
    pub fn word_source(&self) -> Result<RandomWords, ConfigError> {
        let list = self.word_list()?;
        Ok(match self.seed {
            Some(seed) => RandomWords::seeded(list, seed),
            None => RandomWords::new(list),
        })
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
