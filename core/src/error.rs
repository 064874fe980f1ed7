use thiserror::Error;

use crate::config::{MAX_SIZE, MIN_MINES, MIN_SIZE, MIN_TIME_LIMIT};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    #[error("Invalid coordinates")]
    InvalidCoords,
}

/// Startup values that fall outside the playable ranges.
///
/// Carries the entered values and the bomb ceiling derived from the entered size, so the message can tell the
/// player what would have been accepted.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error(
    "Table size must be in range [{}, {}], bombs in range [{}, {}] and time limit >= {}s",
    MIN_SIZE,
    MAX_SIZE,
    MIN_MINES,
    .max_mines,
    MIN_TIME_LIMIT
)]
pub struct ConfigError {
    pub size: u32,
    pub mines: u32,
    pub time_limit: u32,
    pub max_mines: u32,
}

pub type Result<T> = core::result::Result<T, GameError>;
