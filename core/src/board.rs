use std::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::Playing
    }
}

/// Sole owner of the cells of one game session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    size: GridSize,
    cells: Array2<Cell>,
    mine_count: CellCount,
    seed: Option<u64>,
    pub(crate) status: GameStatus,
    pub(crate) triggered_mine: Option<CellIndex>,
}

impl Board {
    /// Builds a board with uniformly random mines; `None` seeds from the clock.
    pub fn new(config: GameConfig, seed: Option<u64>) -> Result<Self> {
        let placer = match seed {
            Some(seed) => RandomMinePlacer::new(config.mines, seed),
            None => RandomMinePlacer::from_clock(config.mines),
        };
        Self::with_placer(config.size, placer)
    }

    /// Builds the cells, wires their neighbors, places mines and counts them, in that order.
    pub fn with_placer(size: GridSize, placer: impl MinePlacer) -> Result<Self> {
        let size = size.validate()?;
        let seed = placer.seed();

        let cells = adjacency::build_cells(size)?;
        let cells = Array2::from_shape_vec(size.to_nd_index(), cells)
            .map_err(|_| GameError::InvalidDimensions)?;
        let mines = checked_layout(size, placer.place(size)?)?;

        let mut board = Self {
            size,
            cells,
            mine_count: mines.len() as CellCount,
            seed,
            status: GameStatus::Playing,
            triggered_mine: None,
        };
        for index in mines {
            board.cell_mut(index).make_mine();
        }
        board.count_neighbor_mines();

        log::debug!(
            "New {}x{} board with {} mines (seed: {:?})",
            size.rows,
            size.cols,
            board.mine_count,
            seed
        );
        Ok(board)
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn total_mines(&self) -> CellCount {
        self.mine_count
    }

    pub fn flag_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.is_flagged).count() as CellCount
    }

    /// Mines minus flags; negative once the player over-flags.
    pub fn mines_left(&self) -> i64 {
        i64::from(self.mine_count) - i64::from(self.flag_count())
    }

    /// Mine whose reveal lost the game.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine.map(|index| self.size.coords_of(index))
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<&Cell> {
        let coords = self.size.validate_coords(coords)?;
        Ok(&self.cells[coords.to_nd_index()])
    }

    pub fn tile(&self, tile: TileRef) -> Tile<'_> {
        match tile {
            TileRef::Cell(index) => Tile::Cell(&self[index]),
            TileRef::Boundary => Tile::Boundary,
        }
    }

    pub(crate) fn cell_mut(&mut self, index: CellIndex) -> &mut Cell {
        let coords = self.size.coords_of(index);
        &mut self.cells[coords.to_nd_index()]
    }

    pub(crate) fn cell_grid(&self) -> &Array2<Cell> {
        &self.cells
    }

    fn count_neighbor_mines(&mut self) {
        for index in 0..self.cells.len() {
            let count = self[index]
                .neighbors
                .iter()
                .filter(|&&tile| self.tile(tile).is_mine())
                .count();
            self.cell_mut(index).neighbor_mine_count = count as u8;
        }
    }

    /// Settles the game after a reveal: a revealed mine loses, all safe cells revealed wins.
    pub(crate) fn evaluate_status(&mut self) -> GameStatus {
        if self.status.is_finished() {
            return self.status;
        }

        if self.cells.iter().any(|cell| cell.is_mine && cell.is_revealed) {
            self.status = GameStatus::Lost;
            self.reveal_all_mines();
            log::info!("Game lost, mine at {:?}", self.triggered_mine());
        } else if self.cells.iter().all(|cell| cell.is_mine || cell.is_revealed) {
            self.status = GameStatus::Won;
            log::info!("Game won");
        }

        self.status
    }

    fn reveal_all_mines(&mut self) {
        for cell in self.cells.iter_mut().filter(|cell| cell.is_mine) {
            cell.is_revealed = true;
        }
    }
}

/// Placers are caller-provided, so their output is bounds-checked and de-duplicated here.
fn checked_layout(size: GridSize, mut mines: Vec<CellIndex>) -> Result<Vec<CellIndex>> {
    let total_cells = size.total_cells() as usize;
    if mines.iter().any(|&index| index >= total_cells) {
        return Err(GameError::OutOfBounds);
    }
    mines.sort_unstable();
    mines.dedup();
    Ok(mines)
}

impl Index<CellIndex> for Board {
    type Output = Cell;

    fn index(&self, index: CellIndex) -> &Self::Output {
        &self.cells[self.size.coords_of(index).to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: Coord, cols: Coord, mines: &[CellIndex]) -> Board {
        Board::with_placer(GridSize::new(rows, cols), FixedMinePlacer::new(mines.iter().copied())).unwrap()
    }

    #[test]
    fn counts_match_real_neighbors() {
        let board = Board::new(GameConfig::new(9, 9, 10).unwrap(), Some(99)).unwrap();

        for index in 0..81 {
            let expected = board[index]
                .real_neighbors()
                .filter(|&other| board[other].is_mine())
                .count();
            assert_eq!(board[index].neighbor_mine_count() as usize, expected, "#{index}");
        }
        assert_eq!((0..81).filter(|&index| board[index].is_mine()).count(), 10);
    }

    #[test]
    fn corner_cell_sees_one_mine() {
        let board = board(4, 4, &[4, 11, 12, 14]);

        assert_eq!(board[0].neighbor_mine_count(), 1);
        assert_eq!(board[5].neighbor_mine_count(), 1);
        assert_eq!(board[10].neighbor_mine_count(), 2);
        assert_eq!(board[13].neighbor_mine_count(), 2);
    }

    #[test]
    fn mined_cell_counts_only_neighbors() {
        let board = board(1, 3, &[0, 1]);

        assert_eq!(board[0].neighbor_mine_count(), 1);
        assert_eq!(board[1].neighbor_mine_count(), 1);
        assert_eq!(board[2].neighbor_mine_count(), 1);
    }

    #[test]
    fn same_seed_builds_identical_boards() {
        let config = GameConfig::new(16, 30, 99).unwrap();

        let first = Board::new(config, Some(5)).unwrap();
        let second = Board::new(config, Some(5)).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.seed(), Some(5));
    }

    #[test]
    fn unseeded_board_remembers_its_seed() {
        let config = GameConfig::beginner();
        let board = Board::new(config, None).unwrap();

        let seed = board.seed().unwrap();
        assert_eq!(Board::new(config, Some(seed)).unwrap(), board);
    }

    #[test]
    fn failed_placement_builds_nothing() {
        let placed = Board::with_placer(GridSize::new(2, 2), RandomMinePlacer::new(5, 0));

        assert_eq!(placed, Err(GameError::TooManyMines));
    }

    struct ListPlacer(Vec<CellIndex>);

    impl MinePlacer for ListPlacer {
        fn place(self, _size: GridSize) -> Result<Vec<CellIndex>> {
            Ok(self.0)
        }
    }

    #[test]
    fn repeated_placements_count_once() {
        let board = Board::with_placer(GridSize::new(2, 2), ListPlacer(vec![1, 1])).unwrap();

        assert_eq!(board.total_mines(), 1);
        assert_eq!((0..4).filter(|&index| board[index].is_mine()).count(), 1);
        assert_eq!(board.mines_left(), 1);
    }

    #[test]
    fn placements_off_the_grid_are_rejected() {
        let placed = Board::with_placer(GridSize::new(2, 2), ListPlacer(vec![0, 4]));

        assert_eq!(placed, Err(GameError::OutOfBounds));
    }

    #[test]
    fn seeded_four_by_four_corner_count() {
        let config = GameConfig::new(4, 4, 4).unwrap();
        let corner_mines = |board: &Board| board[0].real_neighbors().filter(|&other| board[other].is_mine()).count();

        let seed = (0..1000)
            .find(|&seed| corner_mines(&Board::new(config, Some(seed)).unwrap()) == 1)
            .expect("some seed puts exactly one mine next to the corner");
        let board = Board::new(config, Some(seed)).unwrap();

        assert_eq!(board[0].neighbor_mine_count(), 1);
        assert_eq!(Board::new(config, Some(seed)).unwrap()[0].neighbor_mine_count(), 1);
        assert_eq!(board.total_mines(), 4);
    }

    #[test]
    fn tile_resolves_boundaries() {
        let board = board(2, 2, &[3]);

        assert_eq!(board.tile(TileRef::Boundary), Tile::Boundary);
        assert!(board.tile(board[0].neighbor(Direction::SouthEast)).is_mine());
        assert!(!board.tile(board[0].neighbor(Direction::North)).is_mine());
    }

    #[test]
    fn cell_at_checks_bounds() {
        let board = board(2, 3, &[]);

        assert!(board.cell_at((1, 2)).is_ok());
        assert_eq!(board.cell_at((2, 0)).err(), Some(GameError::OutOfBounds));
        assert_eq!(board.cell_at((0, 3)).err(), Some(GameError::OutOfBounds));
    }

    #[test]
    fn status_starts_playing() {
        let board = board(3, 3, &[4]);

        assert_eq!(board.status(), GameStatus::Playing);
        assert_eq!(board.total_mines(), 1);
        assert_eq!(board.mines_left(), 1);
        assert_eq!(board.triggered_mine(), None);
    }
}
