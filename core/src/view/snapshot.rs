use ndarray::Array2;
use serde::{Deserialize, Serialize};

use super::*;

/// Immutable copy of everything a renderer needs, detached from the board it was taken from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: Coord2,
    pub state: GameState,
    pub time_remaining: u32,
    pub mines_left: isize,
    pub labels: Array2<CellLabel>,
}

impl Snapshot {
    pub fn from_board(board: &Board, time_remaining: u32) -> Self {
        let size = board.size();
        let labels = Array2::from_shape_fn(size.to_nd_index(), |(x, y)| {
            CellLabel::from(board.cell((x as Coord, y as Coord)))
        });

        Self {
            size,
            state: board.state(),
            time_remaining,
            mines_left: board.mines_left(),
            labels,
        }
    }

    pub fn from_session(session: &Session) -> Self {
        Self::from_board(session.board(), session.time_remaining())
    }

    pub fn label_at(&self, coords: Coord2) -> CellLabel {
        self.labels[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_board_maps_revealed_and_flagged_cells() {
        let layout = MineLayout::from_mine_coords((4, 4), &[(0, 0), (3, 3)]).unwrap();
        let mut board = Board::new(layout);

        board.reveal((1, 1)).unwrap();
        board.toggle_flag((0, 0)).unwrap();

        let snapshot = Snapshot::from_board(&board, 42);

        assert_eq!(snapshot.size, (4, 4));
        assert_eq!(snapshot.time_remaining, 42);
        assert_eq!(snapshot.mines_left, 1);
        assert_eq!(snapshot.label_at((1, 1)), CellLabel::Count(1));
        assert_eq!(snapshot.label_at((0, 0)), CellLabel::Flag);
        assert_eq!(snapshot.label_at((3, 3)), CellLabel::Blank);
    }

    #[test]
    fn lost_board_shows_mines() {
        let layout = MineLayout::from_mine_coords((4, 4), &[(2, 2)]).unwrap();
        let mut board = Board::new(layout);
        board.reveal((2, 2)).unwrap();

        let snapshot = Snapshot::from_board(&board, 10);

        assert_eq!(snapshot.state, GameState::Lost);
        assert_eq!(snapshot.label_at((2, 2)), CellLabel::Mine);
        assert!(snapshot.labels.iter().all(|label| !label.is_covered()));
    }

    #[test]
    fn snapshot_serializes_labels() {
        let layout = MineLayout::from_mine_coords((4, 4), &[(0, 0)]).unwrap();
        let mut board = Board::new(layout);
        board.toggle_flag((0, 0)).unwrap();

        let json = serde_json::to_string(&Snapshot::from_board(&board, 5)).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();

        assert!(json.contains("\"Flag\""));
        assert_eq!(back, Snapshot::from_board(&board, 5));
    }
}
