use ndarray::Array2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Uniform placement without replacement: every set of `mines` distinct cells is equally likely.
#[derive(Clone, Debug)]
pub struct RandomMineGenerator<R> {
    rng: R,
}

impl<R: Rng> RandomMineGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomMineGenerator<SmallRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MineGenerator for RandomMineGenerator<R> {
    fn generate(mut self, config: GameConfig) -> MineLayout {
        let side = usize::from(config.size());
        let total_cells = usize::from(config.total_cells());
        let requested = usize::from(config.mines());

        let mut mine_mask: Array2<bool> = Array2::default(config.board_size().to_nd_index());
        let mine_count = requested.min(total_cells);
        if mine_count < requested {
            log::warn!(
                "Minefield already full, requested {} but only fits {}",
                requested,
                total_cells
            );
        }

        for index in rand::seq::index::sample(&mut self.rng, total_cells, mine_count) {
            mine_mask[[index / side, index % side]] = true;
        }

        let layout = MineLayout::from_mine_mask(mine_mask);
        log::debug!(
            "Placed {} mines on a {}x{} board",
            layout.mine_count(),
            side,
            side
        );
        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;

    fn config(size: u32, mines: u32) -> GameConfig {
        GameConfig::new(size, mines, 60).unwrap()
    }

    #[test]
    fn places_exactly_the_configured_mines() {
        for seed in 0..32 {
            let layout = RandomMineGenerator::from_seed(seed).generate(config(30, 225));
            let distinct: BTreeSet<_> = layout.mine_coords().collect();

            assert_eq!(layout.mine_count(), 225);
            assert_eq!(distinct.len(), 225);
            assert_eq!(layout.size(), (30, 30));
        }
    }

    #[test]
    fn same_seed_gives_same_layout() {
        let first = RandomMineGenerator::from_seed(7).generate(config(16, 40));
        let second = RandomMineGenerator::from_seed(7).generate(config(16, 40));

        assert_eq!(first, second);
    }

    #[test]
    fn borrowed_rng_can_drive_generation() {
        let mut rng = SmallRng::seed_from_u64(99);
        let layout = RandomMineGenerator::new(&mut rng).generate(config(4, 4));

        assert_eq!(layout.mine_count(), 4);
    }
}
