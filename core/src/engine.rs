use alloc::collections::{BTreeSet, VecDeque};
use core::num::Saturating;
use ndarray::{Array2, Zip};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Lifecycle of a board. `Won` and `Lost` are terminal: once reached, no cell changes anymore.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Result of one flood-fill step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Ripple {
    Skipped,
    Opened(u8),
    Detonated,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    mine_layout: MineLayout,
    cells: Array2<CellState>,
    revealed_count: Saturating<CellCount>,
    flagged_count: Saturating<CellCount>,
    state: GameState,
    triggered_mine: Option<Coord2>,
}

impl Board {
    pub fn new(mine_layout: MineLayout) -> Self {
        let size = mine_layout.size();
        Self {
            mine_layout,
            cells: Array2::default(size.to_nd_index()),
            revealed_count: Saturating(0),
            flagged_count: Saturating(0),
            state: GameState::default(),
            triggered_mine: None,
        }
    }

    /// Builds a board for `config` with mines placed by `rng`.
    pub fn initialize<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Self {
        Self::new(RandomMineGenerator::new(rng).generate(config))
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.mine_layout.size()
    }

    pub fn mine_layout(&self) -> &MineLayout {
        &self.mine_layout
    }

    pub fn total_mines(&self) -> CellCount {
        self.mine_layout.mine_count()
    }

    pub fn mines_left(&self) -> isize {
        (self.mine_layout.mine_count() as isize) - (self.flagged_count.0 as isize)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count.0
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count.0
    }

    pub fn cell_at(&self, coords: Coord2) -> CellState {
        self.cells[coords.to_nd_index()]
    }

    pub fn cell(&self, coords: Coord2) -> Cell {
        Cell::new(self.cell_at(coords), self.mine_layout[coords])
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Every cell is either revealed, or flagged and actually a mine.
    pub fn is_solved(&self) -> bool {
        Zip::from(&self.cells)
            .and(self.mine_layout.mine_mask())
            .all(|&cell, &is_mine| match cell {
                CellState::Revealed(_) => true,
                CellState::Flagged => is_mine,
                CellState::Hidden => false,
            })
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        let coords = self.mine_layout.validate_coords(coords)?;
        if self.state.is_finished() {
            return Ok(FlagOutcome::Unchanged);
        }

        match self.cells[coords.to_nd_index()] {
            CellState::Hidden => {
                self.cells[coords.to_nd_index()] = CellState::Flagged;
                self.flagged_count += 1;
            }
            CellState::Flagged => {
                self.cells[coords.to_nd_index()] = CellState::Hidden;
                self.flagged_count -= 1;
            }
            CellState::Revealed(_) => return Ok(FlagOutcome::Unchanged),
        }
        log::debug!(
            "Toggled flag at {:?}, now {:?}",
            coords,
            self.cells[coords.to_nd_index()]
        );

        if self.is_solved() {
            self.finish(true);
            Ok(FlagOutcome::Won)
        } else {
            Ok(FlagOutcome::Changed)
        }
    }

    /// Direct reveal from the player.
    ///
    /// Opens the cell, flood-fills from it if it has no adjacent mines, and then checks whether the board is solved.
    /// Revealed or flagged cells and finished games are left alone.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.mine_layout.validate_coords(coords)?;
        if self.state.is_finished() || !matches!(self.cell_at(coords), CellState::Hidden) {
            return Ok(RevealOutcome::Unchanged);
        }

        let outcome = match self.reveal_rippled(coords) {
            Ripple::Skipped => return Ok(RevealOutcome::Unchanged),
            Ripple::Detonated => return Ok(RevealOutcome::Lost),
            Ripple::Opened(0) => match self.flood_fill(coords) {
                Some(opened) => RevealOutcome::RevealedCascade(opened + 1),
                None => return Ok(RevealOutcome::Lost),
            },
            Ripple::Opened(count) => RevealOutcome::RevealedSafe(count),
        };

        if self.is_solved() {
            self.finish(true);
            Ok(RevealOutcome::Won)
        } else {
            Ok(outcome)
        }
    }

    /// Ends the game and uncovers the board for the final display.
    ///
    /// Hidden cells are revealed without flood-fill or win checks, flags on safe cells are removed and those cells
    /// revealed. Flags on mines stay. Returns the terminal state, or `None` when the game had already ended.
    pub fn finish(&mut self, won: bool) -> Option<GameState> {
        if self.state.is_finished() {
            return None;
        }

        self.state = if won { GameState::Won } else { GameState::Lost };
        if won {
            self.triggered_mine = None;
        }

        let (x_end, y_end) = self.size();
        for x in 0..x_end {
            for y in 0..y_end {
                let coords = (x, y);
                match (self.cell_at(coords), self.mine_layout[coords]) {
                    (CellState::Hidden, _) => {
                        self.open_cell(coords);
                    }
                    (CellState::Flagged, false) => {
                        self.flagged_count -= 1;
                        self.open_cell(coords);
                    }
                    (CellState::Flagged, true) | (CellState::Revealed(_), _) => {}
                }
            }
        }

        log::debug!(
            "Game ended with {:?}, {} cells revealed",
            self.state,
            self.revealed_count
        );
        Some(self.state)
    }

    /// Reveal as performed by flood-fill: no win check.
    ///
    /// A mine under a ripple still loses the game on the spot. Flood-fill only ever spreads from zero cells, so this
    /// cannot happen with a consistent layout, but the step does not rely on it.
    pub(crate) fn reveal_rippled(&mut self, coords: Coord2) -> Ripple {
        if self.state.is_finished() || !matches!(self.cell_at(coords), CellState::Hidden) {
            return Ripple::Skipped;
        }

        if self.mine_layout[coords] {
            log::debug!("Mine hit at {:?}", coords);
            self.triggered_mine = Some(coords);
            self.open_cell(coords);
            self.finish(false);
            return Ripple::Detonated;
        }

        let count = self.open_cell(coords);
        log::trace!("Opened cell at {:?}, mine count: {}", coords, count);
        Ripple::Opened(count)
    }

    /// Opens everything reachable from the zero cell at `origin`. Returns how many cells were opened besides
    /// `origin`, or `None` if a mine went off on the way.
    fn flood_fill(&mut self, origin: Coord2) -> Option<CellCount> {
        let mut visited = BTreeSet::from([origin]);
        let mut to_visit: VecDeque<_> = self.hidden_neighbors(origin).collect();
        let mut opened: CellCount = 0;
        log::trace!("Starting flood-fill from {:?}, initial neighbors: {:?}", origin, to_visit);

        while let Some(visit_coords) = to_visit.pop_front() {
            if !visited.insert(visit_coords) {
                continue;
            }

            match self.reveal_rippled(visit_coords) {
                Ripple::Skipped => {}
                Ripple::Detonated => return None,
                Ripple::Opened(count) => {
                    opened += 1;
                    if count == 0 {
                        to_visit.extend(
                            self.hidden_neighbors(visit_coords)
                                .filter(|pos| !visited.contains(pos)),
                        );
                    }
                }
            }
        }

        Some(opened)
    }

    fn open_cell(&mut self, coords: Coord2) -> u8 {
        let count = self.mine_layout.adjacent_mine_count(coords);
        self.cells[coords.to_nd_index()] = CellState::Revealed(count);
        self.revealed_count += 1;
        count
    }

    fn hidden_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + '_ {
        self.mine_layout
            .iter_neighbors(coords)
            .filter(move |&pos| matches!(self.cell_at(pos), CellState::Hidden))
    }
}
