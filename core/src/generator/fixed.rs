use super::*;

/// Places mines on a caller-chosen set of cells.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMinePlacer {
    indices: Vec<CellIndex>,
}

impl FixedMinePlacer {
    pub fn new(indices: impl IntoIterator<Item = CellIndex>) -> Self {
        Self {
            indices: indices.into_iter().collect(),
        }
    }

    pub fn from_coords(size: GridSize, coords: &[Coord2]) -> Result<Self> {
        let indices = coords
            .iter()
            .map(|&pos| size.validate_coords(pos).map(|pos| size.index_of(pos)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { indices })
    }
}

impl MinePlacer for FixedMinePlacer {
    fn place(self, size: GridSize) -> Result<Vec<CellIndex>> {
        let total_cells = size.validate()?.total_cells() as usize;
        if self.indices.iter().any(|&index| index >= total_cells) {
            return Err(GameError::OutOfBounds);
        }

        let mut indices = self.indices;
        indices.sort_unstable();
        indices.dedup();
        if indices.len() > total_cells {
            return Err(GameError::TooManyMines);
        }
        Ok(indices)
    }
}
