use serde::{Deserialize, Serialize};

pub use board::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use tile::*;
pub use types::*;
pub use view::*;

pub mod adjacency;
mod board;
mod engine;
mod error;
mod generator;
mod tile;
mod types;
mod view;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: GridSize,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: GridSize, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        let size = GridSize::new(rows, cols).validate()?;
        if mines > size.total_cells() {
            return Err(GameError::TooManyMines);
        }
        Ok(Self::new_unchecked(size, mines))
    }

    pub const fn beginner() -> Self {
        Self::new_unchecked(GridSize::new(9, 9), 10)
    }

    pub const fn intermediate() -> Self {
        Self::new_unchecked(GridSize::new(16, 16), 40)
    }

    pub const fn expert() -> Self {
        Self::new_unchecked(GridSize::new(16, 30), 99)
    }

    pub const fn total_cells(&self) -> CellCount {
        self.size.total_cells()
    }
}

/// Builds a fresh board, with a clock seed when `seed` is `None`.
pub fn new_board(rows: Coord, cols: Coord, mine_count: CellCount, seed: Option<u64>) -> Result<Board> {
    Board::new(GameConfig::new(rows, cols, mine_count)?, seed)
}

pub fn click(board: &mut Board, row: Coord, col: Coord, button: Button) -> Result<ClickOutcome> {
    board.click(row, col, button)
}

pub fn game_status(board: &Board) -> GameStatus {
    board.status()
}
