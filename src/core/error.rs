use thiserror::Error;

#[derive(Error, Debug)]
pub enum KombatError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid input pattern: {0}")]
    InvalidPattern(String),

    #[error("Unknown fighter: {0}")]
    UnknownFighter(String),

    #[error("Unknown move: {0}")]
    UnknownMove(String),
}

pub type Result<T> = std::result::Result<T, KombatError>;
