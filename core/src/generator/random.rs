use super::*;

/// Purely random placement: every set of `bombs` distinct tiles is equally likely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RandomBombGenerator {
    seed: u64,
}

impl RandomBombGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seeds from the thread-local OS-seeded RNG, which is not kept afterwards.
    pub fn from_entropy() -> Self {
        use rand::Rng;

        Self::new(rand::rng().random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl BombGenerator for RandomBombGenerator {
    fn generate(self, difficulty: &Difficulty) -> Result<BombLayout> {
        use rand::prelude::*;

        difficulty.validate()?;

        let total_tiles = difficulty.total_tiles();
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let indices = rand::seq::index::sample(&mut rng, total_tiles, difficulty.bombs);
        let layout = BombLayout::from_flat_indices(difficulty.size(), indices.iter())?;

        // double check bomb count
        if layout.bomb_count() != difficulty.bombs {
            log::warn!(
                "Generated layout count mismatch, actual: {}, requested: {}",
                layout.bomb_count(),
                difficulty.bombs
            );
        }
        log::debug!(
            "Generated {} bombs on a {}x{} grid with seed {}",
            layout.bomb_count(),
            difficulty.rows,
            difficulty.cols,
            self.seed
        );
        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_exact_bomb_count_in_bounds() {
        for seed in 0..32 {
            for difficulty in [
                Difficulty::easy(),
                Difficulty::medium(),
                Difficulty::hard(),
                Difficulty::new_unchecked(1, 2, 1),
                Difficulty::new_unchecked(3, 3, 8),
            ] {
                let layout = RandomBombGenerator::new(seed).generate(&difficulty).unwrap();

                assert_eq!(layout.bomb_count(), difficulty.bombs);
                assert_eq!(layout.size(), difficulty.size());
                assert!(layout
                    .iter()
                    .all(|(row, col)| row < difficulty.rows && col < difficulty.cols));
            }
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let a = RandomBombGenerator::new(42).generate(&Difficulty::hard()).unwrap();
        let b = RandomBombGenerator::new(42).generate(&Difficulty::hard()).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn rejects_impossible_difficulty() {
        let result = RandomBombGenerator::new(0).generate(&Difficulty::new_unchecked(2, 2, 4));

        assert_eq!(
            result,
            Err(GameError::Config(ConfigError::TooManyBombs { bombs: 4, tiles: 4 }))
        );
    }

    #[test]
    fn every_tile_can_hold_a_bomb() {
        let difficulty = Difficulty::new_unchecked(2, 3, 1);
        let mut seen = [[false; 3]; 2];

        for seed in 0..256 {
            let layout = RandomBombGenerator::new(seed).generate(&difficulty).unwrap();
            for (row, col) in layout.iter() {
                seen[row][col] = true;
            }
        }

        assert!(seen.iter().flatten().all(|&hit| hit));
    }
}
