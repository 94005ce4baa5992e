//! Error types for level construction and tuning

use thiserror::Error;

/// Malformed level constants. Raised before any brick is created.
#[derive(Debug, Error, PartialEq)]
pub enum LevelError {
    #[error("brick grid needs at least one row and one column (got {rows}x{cols})")]
    EmptyGrid { rows: usize, cols: usize },
    #[error("brick spacing must be positive (got {0})")]
    BadSpacing(f32),
    #[error("brick scale must be positive (got {0})")]
    BadScale(f32),
    #[error("boundary wall `{wall}` has no bricks")]
    EmptyWall { wall: &'static str },
}

/// Failures loading or validating [`crate::Tuning`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(String),
}
