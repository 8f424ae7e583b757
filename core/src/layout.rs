use alloc::collections::BTreeSet;
use core::ops::Index;
use ndarray::Array2;

use crate::*;

/// Where the bombs are, fixed once a game is generated.
///
/// Keeps both an ordered coordinate set, which is what callers get to see, and a mask for constant time lookups.
#[derive(Clone, Debug, PartialEq)]
pub struct BombLayout {
    bomb_mask: Array2<bool>,
    bombs: BTreeSet<Coord2>,
}

impl BombLayout {
    /// Builds a layout from explicit coordinates, duplicates collapse into one bomb.
    pub fn from_bomb_coords(size: Coord2, bomb_coords: &[Coord2]) -> Result<Self> {
        Difficulty::new_unchecked(size.0, size.1, 0).checked_total_tiles()?;
        let mut bomb_mask: Array2<bool> = Array2::default(size);
        let mut bombs = BTreeSet::new();

        for &coords in bomb_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::OutOfBounds { coords, size });
            }
            bomb_mask[coords] = true;
            bombs.insert(coords);
        }

        Difficulty::new_unchecked(size.0, size.1, bombs.len()).validate()?;
        Ok(Self { bomb_mask, bombs })
    }

    /// Same as [`BombLayout::from_bomb_coords`] but with indices into the row-major flattened grid.
    pub(crate) fn from_flat_indices(
        size: Coord2,
        indices: impl IntoIterator<Item = usize>,
    ) -> Result<Self> {
        Difficulty::new_unchecked(size.0, size.1, 0).checked_total_tiles()?;
        let mut bomb_mask: Array2<bool> = Array2::default(size);
        let mut bombs = BTreeSet::new();
        let cols = size.1.max(1);

        for index in indices {
            let coords = (index / cols, index % cols);
            if coords.0 >= size.0 {
                return Err(GameError::OutOfBounds { coords, size });
            }
            bomb_mask[coords] = true;
            bombs.insert(coords);
        }

        Difficulty::new_unchecked(size.0, size.1, bombs.len()).validate()?;
        Ok(Self { bomb_mask, bombs })
    }

    pub fn difficulty(&self) -> Difficulty {
        let (rows, cols) = self.size();
        Difficulty::new_unchecked(rows, cols, self.bomb_count())
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds { coords, size })
        }
    }

    pub fn size(&self) -> Coord2 {
        self.bomb_mask.dim()
    }

    pub fn bomb_count(&self) -> CellCount {
        self.bombs.len()
    }

    pub fn safe_tile_count(&self) -> CellCount {
        self.total_tiles() - self.bomb_count()
    }

    pub fn total_tiles(&self) -> CellCount {
        self.bomb_mask.len()
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        self.bomb_mask.get(coords).copied().unwrap_or(false)
    }

    pub fn coordinates(&self) -> &BTreeSet<Coord2> {
        &self.bombs
    }

    /// Bomb coordinates in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.bombs.iter().copied()
    }

    pub fn adjacent_bomb_count(&self, coords: Coord2) -> u8 {
        // at most 8 neighbors
        self.iter_neighbors(coords).filter(|&pos| self[pos]).count() as u8
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.bomb_mask.iter_neighbors(coords)
    }
}

impl Index<Coord2> for BombLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.bomb_mask[coords]
    }
}
