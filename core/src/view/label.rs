use serde::{Deserialize, Serialize};

use super::*;

/// What a renderer should draw for one cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellLabel {
    #[default]
    Blank,
    Flag,
    Count(u8),
    Mine,
}

impl CellLabel {
    pub const fn is_covered(self) -> bool {
        matches!(self, Self::Blank | Self::Flag)
    }
}

impl From<Cell> for CellLabel {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell { is_flagged: true, .. } => Self::Flag,
            Cell { is_revealed: false, .. } => Self::Blank,
            Cell { is_mine: true, .. } => Self::Mine,
            Cell {
                adjacent_mine_count,
                ..
            } => Self::Count(adjacent_mine_count.unwrap_or_default()),
        }
    }
}
