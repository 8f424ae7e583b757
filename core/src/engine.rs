use alloc::collections::{BTreeSet, VecDeque};
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Ongoing -> Win
/// - Ongoing -> Lose
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    Ongoing,
    Win,
    Lose,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Win | Self::Lose)
    }
}

/// Represents a game from the first move until it is won or lost.
///
/// Every mutating call either succeeds or returns an error without touching the board.
#[derive(Clone, Debug, PartialEq)]
pub struct GameEngine {
    bomb_layout: BombLayout,
    grid: Array2<Tile>,
    flag_count: CellCount,
    revealed_count: CellCount,
    state: GameState,
}

impl GameEngine {
    /// Starts a new game with randomly placed bombs.
    pub fn new(difficulty: Difficulty) -> Result<Self> {
        Self::with_generator(difficulty, RandomBombGenerator::from_entropy())
    }

    pub fn with_generator(difficulty: Difficulty, generator: impl BombGenerator) -> Result<Self> {
        difficulty.validate()?;
        Ok(Self::from_layout(generator.generate(&difficulty)?))
    }

    pub fn from_layout(bomb_layout: BombLayout) -> Self {
        let grid = Array2::from_shape_fn(bomb_layout.size(), |coords| {
            if bomb_layout.contains(coords) {
                Tile::new(true, 0)
            } else {
                Tile::new(false, bomb_layout.adjacent_bomb_count(coords))
            }
        });

        Self {
            bomb_layout,
            grid,
            flag_count: 0,
            revealed_count: 0,
            state: GameState::default(),
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.bomb_layout.difficulty()
    }

    pub fn size(&self) -> Coord2 {
        self.bomb_layout.size()
    }

    pub fn total_bombs(&self) -> CellCount {
        self.bomb_layout.bomb_count()
    }

    /// Bomb positions, meant for showing the whole board once the game is over.
    pub fn bomb_coordinates(&self) -> &BTreeSet<Coord2> {
        self.bomb_layout.coordinates()
    }

    pub fn has_bomb_at(&self, coords: Coord2) -> bool {
        self.bomb_layout.contains(coords)
    }

    pub fn tile(&self, coords: Coord2) -> Result<Tile> {
        let coords = self.bomb_layout.validate_coords(coords)?;
        Ok(self.grid[coords])
    }

    pub fn flag_count(&self) -> CellCount {
        self.flag_count
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    /// How many bombs have not been flagged yet, negative when there are more flags than bombs.
    pub fn bombs_left(&self) -> isize {
        (self.total_bombs() as isize) - (self.flag_count as isize)
    }

    /// Flips the flag on an unrevealed tile and returns whether it is now flagged.
    ///
    /// Placing the last flag wins the game when every bomb is covered.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<bool> {
        let coords = self.bomb_layout.validate_coords(coords)?;
        self.check_ongoing()?;

        let tile = &mut self.grid[coords];
        if tile.is_revealed() {
            return Err(GameError::InvalidOperation);
        }

        let flagged = tile.toggle_flag();
        if flagged {
            self.flag_count += 1;
            if self.flag_count == self.total_bombs() && self.all_bombs_flagged() {
                self.end_game(true);
            }
        } else {
            self.flag_count -= 1;
        }
        log::trace!("Flag at {:?} set to {}", coords, flagged);

        Ok(flagged)
    }

    /// Reveals a tile, opening the surrounding area when it has no adjacent bombs.
    ///
    /// Returns the tiles uncovered by this call, starting with `coords` itself. Hitting a bomb ends the game and
    /// uncovers nothing.
    pub fn reveal(&mut self, coords: Coord2) -> Result<Vec<RevealedTile>> {
        let coords = self.bomb_layout.validate_coords(coords)?;
        self.check_ongoing()?;

        let tile = self.grid[coords];
        if tile.is_bomb() {
            log::debug!("Bomb hit at {:?}", coords);
            self.end_game(false);
            return Ok(Vec::new());
        }

        if tile.is_revealed() {
            return Ok(Vec::new());
        }

        let mut changed = vec![self.reveal_tile(coords)];
        log::debug!(
            "Revealed tile at {:?}, bombs in neighbor: {}",
            coords,
            tile.bombs_in_neighbor()
        );

        if tile.is_blank() {
            let mut to_visit = VecDeque::from([coords]);

            while let Some(visit_coords) = to_visit.pop_front() {
                for pos in self.bomb_layout.iter_neighbors(visit_coords) {
                    let neighbor = self.grid[pos];
                    if neighbor.is_bomb() || neighbor.is_flagged() || neighbor.is_revealed() {
                        continue;
                    }

                    changed.push(self.reveal_tile(pos));
                    log::trace!(
                        "Flood revealed tile at {:?}, bombs in neighbor: {}",
                        pos,
                        neighbor.bombs_in_neighbor()
                    );

                    // numbered tiles are the edge of the flood
                    if neighbor.is_blank() {
                        to_visit.push_back(pos);
                    }
                }
            }
        }

        Ok(changed)
    }

    fn reveal_tile(&mut self, coords: Coord2) -> RevealedTile {
        let tile = &mut self.grid[coords];
        tile.mark_revealed();
        self.revealed_count += 1;
        RevealedTile::new(coords, *tile)
    }

    fn all_bombs_flagged(&self) -> bool {
        self.bomb_layout
            .iter()
            .all(|coords| self.grid[coords].is_flagged())
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        self.state = if won { GameState::Win } else { GameState::Lose };
        log::debug!(
            "Game ended: {:?}, {} flags placed, {} tiles revealed",
            self.state,
            self.flag_count,
            self.revealed_count
        );
    }

    fn check_ongoing(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::InvalidState)
        } else {
            Ok(())
        }
    }
}

/// Full solution view for logs and tests: `B` bomb, `X` flagged bomb, `F` flag on a safe tile, `_` blank.
impl fmt::Display for GameEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Difficulty { rows, cols, bombs } = self.difficulty();
        writeln!(f, "rows={} cols={} bombs={} state={:?}", rows, cols, bombs, self.state)?;

        for row in self.grid.rows() {
            for (col, tile) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                match (tile.is_bomb(), tile.is_flagged()) {
                    (true, false) => f.write_str("B")?,
                    (true, true) => f.write_str("X")?,
                    (false, true) => f.write_str("F")?,
                    (false, false) if tile.bombs_in_neighbor() > 0 => {
                        write!(f, "{}", tile.bombs_in_neighbor())?
                    }
                    (false, false) => f.write_str("_")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
