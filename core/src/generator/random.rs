use super::*;

/// Uniform placement without replacement, reproducible from a seed.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinePlacer {
    mines: CellCount,
    seed: u64,
}

impl RandomMinePlacer {
    pub fn new(mines: CellCount, seed: u64) -> Self {
        Self { mines, seed }
    }

    /// Seeds from the wall clock, for games that do not need to be replayed.
    pub fn from_clock(mines: CellCount) -> Self {
        Self::new(mines, clock_seed())
    }
}

impl MinePlacer for RandomMinePlacer {
    fn place(self, size: GridSize) -> Result<Vec<CellIndex>> {
        use rand::prelude::*;

        let total_cells = size.validate()?.total_cells();
        if self.mines > total_cells {
            return Err(GameError::TooManyMines);
        }

        // every draw is uniform over the cells not picked yet
        let mut pool: Vec<CellIndex> = (0..total_cells as usize).collect();
        let mut placed = Vec::with_capacity(self.mines as usize);
        let mut rng = SmallRng::seed_from_u64(self.seed);
        for _ in 0..self.mines {
            let pick = rng.random_range(0..pool.len());
            placed.push(pool.swap_remove(pick));
        }

        log::debug!(
            "Placed {} mines on {}x{} with seed {}",
            placed.len(),
            size.rows,
            size.cols,
            self.seed
        );
        Ok(placed)
    }

    fn seed(&self) -> Option<u64> {
        Some(self.seed)
    }
}

fn clock_seed() -> u64 {
    use web_time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64 ^ elapsed.as_secs().rotate_left(32))
        .unwrap_or_default()
}
