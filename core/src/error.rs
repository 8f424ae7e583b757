use alloc::string::String;
use thiserror::Error;

use crate::{Coord2, Difficulty};

/// Reasons a difficulty cannot describe a playable board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Grid needs at least one row and one column")]
    EmptyGrid,
    #[error("Grid of {rows}x{cols} tiles is too large")]
    GridTooLarge { rows: usize, cols: usize },
    #[error("At least one bomb is required")]
    NoBombs,
    #[error("Too many bombs, {bombs} requested but the grid only has {tiles} tiles")]
    TooManyBombs { bombs: usize, tiles: usize },
    #[error("Bomb layout is {actual:?} but {expected:?} was requested")]
    LayoutMismatch {
        expected: Difficulty,
        actual: Difficulty,
    },
    #[error("Unknown difficulty preset {0:?}")]
    UnknownPreset(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Game already ended, no new moves are accepted")]
    InvalidState,
    #[error("Cannot change the flag of a revealed tile")]
    InvalidOperation,
    #[error("Coordinates {coords:?} are outside of the {size:?} grid")]
    OutOfBounds { coords: Coord2, size: Coord2 },
}

pub type Result<T> = core::result::Result<T, GameError>;
