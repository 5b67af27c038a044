use std::path::PathBuf;

use crate::game::Side;

/// Errors from placing a piece.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {col} is out of range (width {width})")]
    InvalidColumn { col: usize, width: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("game is already over")]
    GameOver,
}

/// Errors from constructing or parsing a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board dimensions {width}x{height} with connect length {connect_length}")]
    InvalidDimensions {
        width: usize,
        height: usize,
        connect_length: usize,
    },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("unknown cell character {ch:?} at row {row}, column {col}")]
    UnknownCell { ch: char, row: usize, col: usize },

    #[error("piece at row {row}, column {col} has an empty cell below it")]
    Floating { row: usize, col: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors raised while two agents play a game.
#[derive(Debug, thiserror::Error)]
pub enum ArenaError {
    #[error("agent {agent} ({side:?}) returned no move on a live board")]
    NoMove { agent: String, side: Side },

    #[error("agent {agent} selected illegal column {col} (legal: {legal:?})")]
    IllegalMove {
        agent: String,
        col: usize,
        legal: Vec<usize>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(MoveError::ColumnFull(3).to_string(), "column 3 is full");
        assert_eq!(
            MoveError::InvalidColumn { col: 9, width: 7 }.to_string(),
            "column 9 is out of range (width 7)"
        );
    }

    #[test]
    fn test_board_error_display() {
        let err = BoardError::Floating { row: 2, col: 4 };
        assert_eq!(
            err.to_string(),
            "piece at row 2, column 4 has an empty cell below it"
        );
    }

    #[test]
    fn test_arena_error_display() {
        let err = ArenaError::IllegalMove {
            agent: "Random".to_string(),
            col: 5,
            legal: vec![0, 1, 2],
        };
        assert_eq!(
            err.to_string(),
            "agent Random selected illegal column 5 (legal: [0, 1, 2])"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("search.depth must be >= 1".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: search.depth must be >= 1"
        );
    }
}
