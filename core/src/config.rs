use core::ops::RangeInclusive;
use serde::{Deserialize, Serialize};

use crate::*;

pub const MIN_SIZE: u32 = 4;
pub const MAX_SIZE: u32 = 30;
pub const MIN_MINES: u32 = 4;
pub const MIN_TIME_LIMIT: u32 = 1;

/// Largest bomb count accepted for a board of side `size`: a quarter of the cells, but never below [`MIN_MINES`].
pub const fn max_mines_for(size: u32) -> u32 {
    let quarter = size.saturating_mul(size) / 4;
    if quarter > MIN_MINES {
        quarter
    } else {
        MIN_MINES
    }
}

/// Bomb counts accepted for a board of side `size`.
pub const fn mine_range(size: u32) -> RangeInclusive<u32> {
    MIN_MINES..=max_mines_for(size)
}

/// Raw values from the startup form, before any validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigForm {
    pub table_size: u32,
    pub bombs: u32,
    pub time_limit: u32,
}

impl ConfigForm {
    pub fn validate(self) -> core::result::Result<GameConfig, ConfigError> {
        GameConfig::new(self.table_size, self.bombs, self.time_limit)
    }
}

impl Default for ConfigForm {
    fn default() -> Self {
        Self {
            table_size: 16,
            bombs: 40,
            time_limit: 300,
        }
    }
}

/// A validated game setup: square board side, mine count and countdown length in seconds.
///
/// Only obtainable through [`GameConfig::new`] (or deserializing a [`ConfigForm`] that passes it).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ConfigForm", into = "ConfigForm")]
pub struct GameConfig {
    size: Coord,
    mines: CellCount,
    time_limit: u32,
}

impl GameConfig {
    pub fn new(size: u32, mines: u32, time_limit: u32) -> core::result::Result<Self, ConfigError> {
        let max_mines = max_mines_for(size);
        let error = ConfigError {
            size,
            mines,
            time_limit,
            max_mines,
        };

        if !(MIN_SIZE..=MAX_SIZE).contains(&size)
            || !mine_range(size).contains(&mines)
            || time_limit < MIN_TIME_LIMIT
        {
            return Err(error);
        }

        let (Ok(size), Ok(mines)) = (Coord::try_from(size), CellCount::try_from(mines)) else {
            return Err(error);
        };

        Ok(Self {
            size,
            mines,
            time_limit,
        })
    }

    pub const fn size(&self) -> Coord {
        self.size
    }

    pub const fn board_size(&self) -> Coord2 {
        (self.size, self.size)
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn time_limit(&self) -> u32 {
        self.time_limit
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }
}

impl TryFrom<ConfigForm> for GameConfig {
    type Error = ConfigError;

    fn try_from(form: ConfigForm) -> core::result::Result<Self, Self::Error> {
        form.validate()
    }
}

impl From<GameConfig> for ConfigForm {
    fn from(config: GameConfig) -> Self {
        Self {
            table_size: config.size.into(),
            bombs: config.mines.into(),
            time_limit: config.time_limit,
        }
    }
}
