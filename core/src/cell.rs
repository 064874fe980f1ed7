use serde::{Deserialize, Serialize};

/// Player-visible state of a single position, as stored by the board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Hidden,
    Flagged,
    Revealed(u8),
}

impl CellState {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_))
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }
}

/// Read-only view of one position, joining what the player sees with what lies underneath.
///
/// `adjacent_mine_count` is only known once the cell has been revealed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub is_mine: bool,
    pub is_revealed: bool,
    pub is_flagged: bool,
    pub adjacent_mine_count: Option<u8>,
}

impl Cell {
    pub const fn new(state: CellState, is_mine: bool) -> Self {
        let adjacent_mine_count = match state {
            CellState::Revealed(count) => Some(count),
            CellState::Hidden | CellState::Flagged => None,
        };
        Self {
            is_mine,
            is_revealed: state.is_revealed(),
            is_flagged: state.is_flagged(),
            adjacent_mine_count,
        }
    }
}
