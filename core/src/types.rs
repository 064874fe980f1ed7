use ndarray::Array2;

/// Single coordinate axis used for the board side and for positions.
pub type Coord = u8;

/// Count type used for mine, flag and cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`, `x` being the row.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let (rows, cols) = self.dim();
        let bounds = (
            Coord::try_from(rows).unwrap_or(Coord::MAX),
            Coord::try_from(cols).unwrap_or(Coord::MAX),
        );
        NeighborIter::new(index, bounds)
    }
}

/// Walks the 3x3 window around `center`, clipped to the grid, skipping the center itself.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    start: Coord2,
    end: Coord2,
    cursor: Coord2,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        let (x, y) = center;
        let start = (x.saturating_sub(1), y.saturating_sub(1));
        let end = (
            x.saturating_add(2).min(bounds.0),
            y.saturating_add(2).min(bounds.1),
        );
        Self {
            center,
            start,
            end,
            cursor: start,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (x, y) = self.cursor;
            if x >= self.end.0 {
                return None;
            }

            self.cursor = if y.saturating_add(1) >= self.end.1 {
                (x + 1, self.start.1)
            } else {
                (x, y + 1)
            };

            if y < self.end.1 && (x, y) != self.center {
                return Some((x, y));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn corner_has_three_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((0, 0), (4, 4)).collect();

        assert_eq!(neighbors, [(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn interior_has_eight_neighbors_without_center() {
        let neighbors: Vec<_> = NeighborIter::new((2, 2), (5, 5)).collect();

        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&(2, 2)));
        assert!(neighbors.iter().all(|&(x, y)| (1..=3).contains(&x) && (1..=3).contains(&y)));
    }

    #[test]
    fn far_edge_is_clipped() {
        let grid: Array2<bool> = Array2::default([4, 4]);
        let neighbors: Vec<_> = grid.iter_neighbors((3, 1)).collect();

        assert_eq!(neighbors, [(2, 0), (2, 1), (2, 2), (3, 0), (3, 2)]);
    }
}
