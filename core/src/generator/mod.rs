use crate::*;
pub use random::*;

mod random;

/// Strategy for placing the bombs of a new game.
pub trait BombGenerator {
    fn generate(self, difficulty: &Difficulty) -> Result<BombLayout>;
}

/// A fixed layout generates itself, handy for replays and tests.
impl BombGenerator for BombLayout {
    fn generate(self, difficulty: &Difficulty) -> Result<BombLayout> {
        let actual = self.difficulty();
        if actual != *difficulty {
            return Err(ConfigError::LayoutMismatch {
                expected: *difficulty,
                actual,
            }
            .into());
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_layout_must_match_difficulty() {
        let layout = BombLayout::from_bomb_coords((3, 3), &[(2, 2)]).unwrap();

        assert_eq!(
            layout.clone().generate(&Difficulty::new_unchecked(3, 3, 2)),
            Err(GameError::Config(ConfigError::LayoutMismatch {
                expected: Difficulty::new_unchecked(3, 3, 2),
                actual: Difficulty::new_unchecked(3, 3, 1),
            }))
        );
        assert_eq!(
            layout.clone().generate(&Difficulty::new_unchecked(3, 3, 1)),
            Ok(layout)
        );
    }
}
