//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strum::{EnumString, IntoStaticStr};
use tracing::{debug, info, instrument};
use unbeatable_core::{AlphaBeta, Board, Mark, Minimax, Strategy};

/// Largest board the exhaustive, unpruned engine is allowed to search.
pub const MAX_MINIMAX_SIZE: usize = 3;

/// Largest board offered for play. Bigger boards are solvable in principle
/// but not at interactive speed.
pub const MAX_PLAYABLE_SIZE: usize = 4;

/// Which search the computer uses.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
    Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum StrategyKind {
    /// Plain exhaustive minimax.
    #[default]
    #[display("minimax")]
    Minimax,
    /// Alpha-beta with a transposition table.
    #[display("alpha-beta")]
    AlphaBeta,
}

impl StrategyKind {
    /// Builds a fresh searcher of this kind.
    #[instrument]
    pub fn build(self) -> Box<dyn Strategy<Board>> {
        match self {
            StrategyKind::Minimax => Box::new(Minimax::new()),
            StrategyKind::AlphaBeta => Box::new(AlphaBeta::new()),
        }
    }

    /// The strategy to use on a board of `size`: minimax gives way to
    /// alpha-beta above [`MAX_MINIMAX_SIZE`].
    pub fn for_board_size(self, size: usize) -> Self {
        match self {
            StrategyKind::Minimax if size > MAX_MINIMAX_SIZE => StrategyKind::AlphaBeta,
            kind => kind,
        }
    }
}

/// Settings for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Mark used by the human player.
    #[serde(default = "default_human_mark")]
    human_mark: Mark,

    /// Whether the human makes the opening move.
    #[serde(default = "default_human_first")]
    human_first: bool,

    /// Search used by the computer.
    #[serde(default)]
    strategy: StrategyKind,

    /// Rows and columns of the board.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_human_mark() -> Mark {
    Mark::X
}

fn default_human_first() -> bool {
    true
}

fn default_board_size() -> usize {
    Board::DEFAULT_SIZE
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_mark: default_human_mark(),
            human_first: default_human_first(),
            strategy: StrategyKind::default(),
            board_size: default_board_size(),
            log_filter: default_log_filter(),
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
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        info!(
            human_mark = %config.human_mark,
            strategy = %config.strategy,
            board_size = config.board_size,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Replaces the search strategy.
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Result<Self, ConfigError> {
        self.strategy = strategy;
        self.validate()?;
        Ok(self)
    }

    /// Replaces the board size.
    pub fn with_board_size(mut self, board_size: usize) -> Result<Self, ConfigError> {
        self.board_size = board_size;
        self.validate()?;
        Ok(self)
    }

    /// Mark used by the computer.
    pub fn engine_mark(&self) -> Mark {
        self.human_mark.opponent()
    }

    /// Mark that makes the opening move.
    pub fn first_mark(&self) -> Mark {
        if self.human_first {
            self.human_mark
        } else {
            self.engine_mark()
        }
    }

    /// Creates an empty board of the configured size.
    pub fn new_board(&self) -> Result<Board, ConfigError> {
        Board::with_size(self.board_size).map_err(|e| ConfigError::new(e.to_string()))
    }

    /// Checks the board size against the chosen strategy.
    #[instrument(skip(self), fields(board_size = self.board_size, strategy = %self.strategy))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(Board::MIN_SIZE..=MAX_PLAYABLE_SIZE).contains(&self.board_size) {
            return Err(ConfigError::new(format!(
                "board_size must be between {} and {}, got {}",
                Board::MIN_SIZE,
                MAX_PLAYABLE_SIZE,
                self.board_size
            )));
        }
        if self.strategy == StrategyKind::Minimax && self.board_size > MAX_MINIMAX_SIZE {
            return Err(ConfigError::new(format!(
                "minimax searches boards up to {size}x{size}; use strategy = \"alpha-beta\" for {0}x{0}",
                self.board_size,
                size = MAX_MINIMAX_SIZE,
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
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
