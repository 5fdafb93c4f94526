use std::io;

/// Errors that can occur in drills operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid range: minimum {min} is greater than maximum {max}")]
    InvalidRange { min: i32, max: i32 },

    #[error("Attempt limit must be at least 1")]
    ZeroAttemptLimit,

    #[error("Initial balance cannot be negative: {0}")]
    NegativeInitialBalance(f64),

    #[error("Initial balance must be a finite number: {0}")]
    NonFiniteInitialBalance(f64),

    #[error("Invalid menu choice: {0:?}")]
    InvalidMenuChoice(String),

    #[error("Round is already over after {attempts} attempts")]
    RoundOver { attempts: u32 },

    #[error("Round is still in progress")]
    RoundInProgress,
}

/// Result type alias for drills operations
pub type Result<T> = std::result::Result<T, Error>;
