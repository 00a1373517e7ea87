use serde::{Deserialize, Serialize};

use crate::*;

/// Everything a front end needs to draw one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub row: Coord,
    pub col: Coord,
    pub is_revealed: bool,
    pub is_flagged: bool,
    /// Only set for mines that are revealed, or for every mine once the game is over.
    pub shows_mine: bool,
    pub neighbor_mine_count: u8,
}

impl CellView {
    fn new((row, col): Coord2, cell: &Cell, finished: bool) -> Self {
        Self {
            row,
            col,
            is_revealed: cell.is_revealed,
            is_flagged: cell.is_flagged,
            shows_mine: cell.is_mine && (cell.is_revealed || finished),
            neighbor_mine_count: cell.neighbor_mine_count,
        }
    }
}

impl Board {
    /// Read-only pass over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellView> + '_ {
        let finished = self.is_finished();
        self.cell_grid()
            .indexed_iter()
            .map(move |((row, col), cell)| CellView::new((row as Coord, col as Coord), cell, finished))
    }

    pub fn view_at(&self, coords: Coord2) -> Result<CellView> {
        let cell = self.cell_at(coords)?;
        Ok(CellView::new(coords, cell, self.is_finished()))
    }
}
