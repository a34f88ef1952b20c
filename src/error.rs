use crate::square::Square;
use std::path::PathBuf;

/// Refusals coming out of the engine. None of them are faults, a caller
/// driving the board from clicks is expected to shrug most of them off.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("invalid square notation: {0}")]
    InvalidSquare(String),

    #[error("no piece of the side to move on {0}")]
    InvalidSelection(Square),

    #[error("{0} is not a legal destination for the selected piece")]
    IllegalDestination(Square),

    #[error("no piece is selected")]
    NoSelection,

    #[error("the game is over")]
    GameOver,

    #[error("invalid position: {0}")]
    InvalidPosition(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse config {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("unknown skin: {0}")]
    UnknownSkin(String),
}
