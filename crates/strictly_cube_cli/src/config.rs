//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_cube::{Player, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use tracing::{debug, info, instrument};

/// Configuration for a cubic tic-tac-toe session.
///
/// ```toml
/// size = 4
/// first_player = "O"
/// seed = 7
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Edge length of the cube.
    #[serde(default = "default_size")]
    size: usize,

    /// Player who moves first after every reset.
    #[serde(default = "default_first_player")]
    first_player: Player,

    /// Seed for random playouts; a fresh seed is drawn when absent.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_size() -> usize {
    3
}

fn default_first_player() -> Player {
    Player::X
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            first_player: default_first_player(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(size = config.size, first_player = %config.first_player, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` when given, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides on top of the loaded values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        size: Option<usize>,
        first_player: Option<Player>,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        if let Some(size) = size {
            self.size = size;
        }
        if let Some(first_player) = first_player {
            self.first_player = first_player;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.size) {
            return Err(ConfigError::new(format!(
                "Board size {} must be between {} and {}",
                self.size, MIN_BOARD_SIZE, MAX_BOARD_SIZE
            )));
        }
        Ok(())
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
    /// Creates a new config error with caller location tracking.
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
