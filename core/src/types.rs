use ndarray::Array2;

/// Single coordinate axis, used for row and column indices and grid dimensions.
pub type Coord = usize;

/// Count type used for bomb, flag and tile counts.
pub type CellCount = usize;

/// Two-dimensional coordinates `(row, col)`, also used for grid size `(rows, cols)`.
pub type Coord2 = (Coord, Coord);

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        NeighborIter::new(index, self.dim())
    }
}

// row-major, same order a reveal visits neighbors in
const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (rows, cols) = bounds;

    let next_row = row.checked_add_signed(d_row)?;
    if next_row >= rows {
        return None;
    }

    let next_col = col.checked_add_signed(d_col)?;
    if next_col >= cols {
        return None;
    }

    Some((next_row, next_col))
}

/// Iterates the in-bounds king-move neighbors of a tile.
#[derive(Debug, Clone)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
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
        let neighbors: Vec<_> = NeighborIter::new((0, 0), (3, 3)).collect();

        assert_eq!(neighbors, [(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn center_neighbors_are_row_major() {
        let neighbors: Vec<_> = NeighborIter::new((1, 1), (3, 3)).collect();

        assert_eq!(
            neighbors,
            [(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)]
        );
    }

    #[test]
    fn single_tile_grid_has_no_neighbors() {
        assert_eq!(NeighborIter::new((0, 0), (1, 1)).count(), 0);
    }

    #[test]
    fn narrow_grid_clips_columns() {
        let grid: Array2<bool> = Array2::default((4, 1));
        let neighbors: Vec<_> = grid.iter_neighbors((2, 0)).collect();

        assert_eq!(neighbors, [(1, 0), (3, 0)]);
    }
}
