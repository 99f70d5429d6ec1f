//! Error types shared by the game core and its I/O wrappers.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("asset '{name}' not found")]
    AssetNotFound { name: String },
    #[error("could not load asset '{name}' from {path}: {reason}")]
    AssetLoad {
        name: String,
        path: String,
        reason: String,
    },
    #[error("audio output unavailable: {0}")]
    AudioUnavailable(String),
    #[error("texture error: {0}")]
    Texture(String),
    #[error("room {room}: placed {placed} of {requested} tokens before giving up after {attempts} attempts")]
    TokenPlacement {
        room: usize,
        placed: usize,
        requested: usize,
        attempts: u32,
    },
}

pub type GameResult<T> = Result<T, GameError>;
