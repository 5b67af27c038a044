use std::path::Path;

use log::warn;

use crate::ai::{HeuristicWeights, WIN_SCORE};
use crate::error::{BoardError, ConfigError};
use crate::game::{Board, MIN_CONNECT, STANDARD_CONNECT, STANDARD_HEIGHT, STANDARD_WIDTH};

/// Board dimensions and the run length needed to win.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
    pub connect_length: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            width: STANDARD_WIDTH,
            height: STANDARD_HEIGHT,
            connect_length: STANDARD_CONNECT,
        }
    }
}

impl BoardConfig {
    /// Build an empty board with these dimensions.
    pub fn build(&self) -> Result<Board, BoardError> {
        Board::new(self.width, self.height, self.connect_length)
    }
}

/// Search horizon and pruning switch.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies of lookahead
    pub depth: u32,
    pub pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: 5,
            pruning: true,
        }
    }
}

/// Settings for engine-vs-opponent matches.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub games: usize,
    pub opponent_depth: u32,
    pub seed: Option<u64>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            games: 10,
            opponent_depth: 2,
            seed: None,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub search: SearchConfig,
    pub heuristic: HeuristicWeights,
    pub arena: ArenaConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let b = &self.board;
        if b.width == 0 || b.height == 0 {
            return Err(ConfigError::Validation(
                "board.width and board.height must be > 0".into(),
            ));
        }
        if b.connect_length < MIN_CONNECT {
            return Err(ConfigError::Validation(format!(
                "board.connect_length must be >= {MIN_CONNECT}"
            )));
        }
        if b.connect_length > b.width.max(b.height) {
            return Err(ConfigError::Validation(format!(
                "board.connect_length {} does not fit a {}x{} board",
                b.connect_length, b.width, b.height
            )));
        }
        if self.search.depth == 0 {
            return Err(ConfigError::Validation("search.depth must be >= 1".into()));
        }
        if self.arena.games == 0 {
            return Err(ConfigError::Validation("arena.games must be > 0".into()));
        }
        if self.arena.opponent_depth == 0 {
            return Err(ConfigError::Validation(
                "arena.opponent_depth must be >= 1".into(),
            ));
        }

        // Forced wins and losses must outrank every positional score
        let bound = self
            .heuristic
            .max_magnitude(b.width, b.height, b.connect_length);
        if bound >= i64::from(WIN_SCORE) {
            return Err(ConfigError::Validation(format!(
                "heuristic weights can reach {bound}, which does not stay below the win score {WIN_SCORE}"
            )));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).unwrap_or_default()
    }
}
