use serde::{Deserialize, Serialize};

use crate::*;

/// State of a single grid cell as tracked by the engine.
///
/// `is_bomb` and `bombs_in_neighbor` are fixed when the grid is built, `is_revealed` only ever goes from `false` to
/// `true`, and `is_flagged` can only change while the tile is unrevealed. A flagged tile that gets revealed keeps
/// its flag.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    is_bomb: bool,
    bombs_in_neighbor: u8,
    is_revealed: bool,
    is_flagged: bool,
}

impl Tile {
    pub(crate) const fn new(is_bomb: bool, bombs_in_neighbor: u8) -> Self {
        Self {
            is_bomb,
            bombs_in_neighbor,
            is_revealed: false,
            is_flagged: false,
        }
    }

    pub const fn is_bomb(self) -> bool {
        self.is_bomb
    }

    /// Bombs among the up to 8 adjacent tiles, meaningless on a bomb tile.
    pub const fn bombs_in_neighbor(self) -> u8 {
        self.bombs_in_neighbor
    }

    pub const fn is_revealed(self) -> bool {
        self.is_revealed
    }

    pub const fn is_flagged(self) -> bool {
        self.is_flagged
    }

    /// A safe tile with no adjacent bombs, revealing it opens the surrounding area.
    pub const fn is_blank(self) -> bool {
        !self.is_bomb && self.bombs_in_neighbor == 0
    }

    pub(crate) fn mark_revealed(&mut self) {
        debug_assert!(!self.is_bomb);
        self.is_revealed = true;
    }

    pub(crate) fn toggle_flag(&mut self) -> bool {
        debug_assert!(!self.is_revealed);
        self.is_flagged = !self.is_flagged;
        self.is_flagged
    }
}

/// A tile uncovered by a single reveal call, in the order it was uncovered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedTile {
    pub row: Coord,
    pub col: Coord,
    pub bombs_in_neighbor: u8,
}

impl RevealedTile {
    pub(crate) const fn new((row, col): Coord2, tile: Tile) -> Self {
        Self {
            row,
            col,
            bombs_in_neighbor: tile.bombs_in_neighbor,
        }
    }

    pub const fn coords(self) -> Coord2 {
        (self.row, self.col)
    }

    /// Reveals never uncover bombs, losing leaves the bomb hidden.
    pub const fn is_bomb(self) -> bool {
        false
    }
}
