use alloc::borrow::ToOwned;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// Grid dimensions and bomb count of a game, fixed for the lifetime of an engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Difficulty {
    pub rows: Coord,
    pub cols: Coord,
    pub bombs: CellCount,
}

impl Difficulty {
    pub const fn new_unchecked(rows: Coord, cols: Coord, bombs: CellCount) -> Self {
        Self { rows, cols, bombs }
    }

    /// Builds a custom difficulty, rejecting boards that cannot be played.
    pub fn new(rows: Coord, cols: Coord, bombs: CellCount) -> Result<Self> {
        let difficulty = Self::new_unchecked(rows, cols, bombs);
        difficulty.validate()?;
        Ok(difficulty)
    }

    pub const fn easy() -> Self {
        PRESETS[0].difficulty
    }

    pub const fn medium() -> Self {
        PRESETS[1].difficulty
    }

    pub const fn hard() -> Self {
        PRESETS[2].difficulty
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_tiles(&self) -> CellCount {
        self.rows.saturating_mul(self.cols)
    }

    /// Tile count of a non-empty grid whose size an `ndarray` shape can hold.
    pub fn checked_total_tiles(&self) -> core::result::Result<CellCount, ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        self.rows
            .checked_mul(self.cols)
            .filter(|&tiles| tiles <= isize::MAX as usize)
            .ok_or(ConfigError::GridTooLarge {
                rows: self.rows,
                cols: self.cols,
            })
    }

    /// Checks `rows > 0`, `cols > 0`, that `rows * cols` does not overflow and `0 < bombs < rows * cols`.
    pub fn validate(&self) -> core::result::Result<(), ConfigError> {
        let tiles = self.checked_total_tiles()?;
        if self.bombs == 0 {
            return Err(ConfigError::NoBombs);
        }
        if self.bombs >= tiles {
            return Err(ConfigError::TooManyBombs {
                bombs: self.bombs,
                tiles,
            });
        }
        Ok(())
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::easy()
    }
}

/// Accepts preset names, case-insensitive.
impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        NamedDifficulty::find(s)
            .map(|preset| preset.difficulty)
            .ok_or_else(|| ConfigError::UnknownPreset(s.to_owned()))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NamedDifficulty {
    pub name: &'static str,
    pub difficulty: Difficulty,
}

impl NamedDifficulty {
    pub fn find(name: &str) -> Option<&'static NamedDifficulty> {
        let name = name.trim();
        let presets: &'static [NamedDifficulty] = &PRESETS;
        presets
            .iter()
            .find(|preset| preset.name.eq_ignore_ascii_case(name))
    }
}

/// Built-in difficulties, from easiest to hardest.
pub const PRESETS: [NamedDifficulty; 3] = [
    NamedDifficulty {
        name: "easy",
        difficulty: Difficulty::new_unchecked(9, 9, 10),
    },
    NamedDifficulty {
        name: "medium",
        difficulty: Difficulty::new_unchecked(16, 16, 40),
    },
    NamedDifficulty {
        name: "hard",
        difficulty: Difficulty::new_unchecked(16, 30, 99),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid_and_ordered() {
        let mut last_bombs = 0;
        for preset in PRESETS.iter() {
            assert_eq!(preset.difficulty.validate(), Ok(()));
            assert!(preset.difficulty.bombs > last_bombs);
            last_bombs = preset.difficulty.bombs;
        }
        assert_eq!(Difficulty::hard().size(), (16, 30));
    }

    #[test]
    fn new_rejects_impossible_boards() {
        assert_eq!(
            Difficulty::new(0, 5, 1),
            Err(GameError::Config(ConfigError::EmptyGrid))
        );
        assert_eq!(
            Difficulty::new(5, 5, 0),
            Err(GameError::Config(ConfigError::NoBombs))
        );
        assert_eq!(
            Difficulty::new(3, 3, 9),
            Err(GameError::Config(ConfigError::TooManyBombs { bombs: 9, tiles: 9 }))
        );
        assert_eq!(Difficulty::new(3, 3, 8), Ok(Difficulty::new_unchecked(3, 3, 8)));
    }

    #[test]
    fn new_rejects_overflowing_grid() {
        assert_eq!(
            Difficulty::new(usize::MAX, 2, 1),
            Err(GameError::Config(ConfigError::GridTooLarge {
                rows: usize::MAX,
                cols: 2
            }))
        );
        assert_eq!(
            Difficulty::new_unchecked(usize::MAX, 1, 1).validate(),
            Err(ConfigError::GridTooLarge {
                rows: usize::MAX,
                cols: 1
            })
        );
        assert_eq!(
            Difficulty::new_unchecked(0, usize::MAX, 1).validate(),
            Err(ConfigError::EmptyGrid)
        );
    }

    #[test]
    fn parses_preset_names() {
        assert_eq!(" Medium ".parse::<Difficulty>(), Ok(Difficulty::medium()));
        assert_eq!(
            "insane".parse::<Difficulty>(),
            Err(ConfigError::UnknownPreset("insane".into()))
        );
    }

    #[test]
    fn loads_custom_difficulty_from_json() {
        let difficulty: Difficulty =
            serde_json::from_str(r#"{"rows": 4, "cols": 7, "bombs": 5}"#).unwrap();

        assert_eq!(difficulty, Difficulty::new_unchecked(4, 7, 5));
        assert_eq!(difficulty.validate(), Ok(()));
        assert_eq!(
            serde_json::to_string(&difficulty).unwrap(),
            r#"{"rows":4,"cols":7,"bombs":5}"#
        );
    }
}
