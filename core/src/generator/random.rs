use super::*;

/// Purely random generation: every cell is equally likely to hold a mine.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Result<Grid> {
        use ndarray::Array2;
        use rand::seq::index;
        use rand::{SeedableRng, rngs::SmallRng};

        let GameConfig { rows, cols, mines } =
            GameConfig::new(config.rows, config.cols, config.mines)?;
        let mut mine_mask: Array2<bool> = Array2::default(config.size().to_nd_index());

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let cols_usize = usize::from(cols);
        let places = index::sample(&mut rng, config.total_cells().into(), mines.into());
        for place in places.iter() {
            mine_mask[[place / cols_usize, place % cols_usize]] = true;
        }

        let grid = Grid::from_mine_mask(&mine_mask)?;

        // double check mine count
        if grid.mine_count() != mines {
            log::warn!(
                "Generated grid count mismatch, actual: {}, requested: {}",
                grid.mine_count(),
                mines
            );
        }
        log::debug!(
            "Generated {}x{} grid with {} mines from seed {}",
            rows,
            cols,
            mines,
            self.seed
        );
        Ok(grid)
    }
}
