use serde::{Deserialize, Serialize};

use crate::*;

/// Single coordinate axis used for row/column counts and positions.
pub type Coord = u32;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Linear row-major position of a cell, `row * cols + col`.
pub type CellIndex = usize;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Largest board accepted, 4096x4096 worth of cells.
pub const MAX_CELLS: CellCount = 1 << 24;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0 as usize, self.1 as usize]
    }
}

/// Compass directions, in the order neighbor slots are stored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Row and column displacement `(dr, dc)`; rows grow southwards.
    pub const fn delta(self) -> (i32, i32) {
        use Direction::*;
        match self {
            North => (-1, 0),
            NorthEast => (-1, 1),
            East => (0, 1),
            SouthEast => (1, 1),
            South => (1, 0),
            SouthWest => (1, -1),
            West => (0, -1),
            NorthWest => (-1, -1),
        }
    }

    pub const fn opposite(self) -> Self {
        use Direction::*;
        match self {
            North => South,
            NorthEast => SouthWest,
            East => West,
            SouthEast => NorthWest,
            South => North,
            SouthWest => NorthEast,
            West => East,
            NorthWest => SouthEast,
        }
    }

    /// Slot of this direction inside a cell's neighbor array.
    pub const fn slot(self) -> usize {
        self as usize
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub rows: Coord,
    pub cols: Coord,
}

impl GridSize {
    pub const fn new(rows: Coord, cols: Coord) -> Self {
        Self { rows, cols }
    }

    /// Rejects empty grids and grids with more than [`MAX_CELLS`] cells.
    pub const fn validate(self) -> Result<Self> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GameError::InvalidDimensions);
        }
        match self.rows.checked_mul(self.cols) {
            Some(cells) if cells <= MAX_CELLS => Ok(self),
            _ => Err(GameError::InvalidDimensions),
        }
    }

    pub const fn total_cells(self) -> CellCount {
        self.rows.saturating_mul(self.cols)
    }

    pub const fn contains(self, (row, col): Coord2) -> bool {
        row < self.rows && col < self.cols
    }

    pub fn validate_coords(self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub const fn index_of(self, (row, col): Coord2) -> CellIndex {
        row as usize * self.cols as usize + col as usize
    }

    pub const fn coords_of(self, index: CellIndex) -> Coord2 {
        let cols = self.cols as usize;
        ((index / cols) as Coord, (index % cols) as Coord)
    }

    /// Steps one cell in `dir`, returning a value only when it stays on the grid.
    pub fn neighbor(self, (row, col): Coord2, dir: Direction) -> Option<Coord2> {
        let (dr, dc) = dir.delta();

        let next_row = row.checked_add_signed(dr)?;
        if next_row >= self.rows {
            return None;
        }

        let next_col = col.checked_add_signed(dc)?;
        if next_col >= self.cols {
            return None;
        }

        Some((next_row, next_col))
    }
}

impl ToNdIndex for GridSize {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.rows as usize, self.cols as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_empty_and_overflowing_grids() {
        assert_eq!(GridSize::new(0, 5).validate(), Err(GameError::InvalidDimensions));
        assert_eq!(GridSize::new(5, 0).validate(), Err(GameError::InvalidDimensions));
        assert_eq!(
            GridSize::new(Coord::MAX, 2).validate(),
            Err(GameError::InvalidDimensions)
        );
        assert_eq!(GridSize::new(1, 1).validate(), Ok(GridSize::new(1, 1)));
    }

    #[test]
    fn validate_caps_total_cells() {
        assert_eq!(GridSize::new(4096, 4096).validate(), Ok(GridSize::new(4096, 4096)));
        assert_eq!(GridSize::new(4097, 4096).validate(), Err(GameError::InvalidDimensions));
        assert_eq!(GridSize::new(65535, 65535).validate(), Err(GameError::InvalidDimensions));
        assert_eq!(GridSize::new(1, MAX_CELLS + 1).validate(), Err(GameError::InvalidDimensions));
    }

    #[test]
    fn index_and_coords_are_row_major_inverses() {
        let size = GridSize::new(3, 5);

        assert_eq!(size.index_of((0, 4)), 4);
        assert_eq!(size.index_of((1, 0)), 5);
        assert_eq!(size.index_of((2, 3)), 13);
        for index in 0..size.total_cells() as usize {
            assert_eq!(size.index_of(size.coords_of(index)), index);
        }
    }

    #[test]
    fn neighbor_stops_at_every_edge() {
        let size = GridSize::new(2, 3);

        assert_eq!(size.neighbor((0, 0), Direction::North), None);
        assert_eq!(size.neighbor((0, 0), Direction::West), None);
        assert_eq!(size.neighbor((0, 0), Direction::SouthEast), Some((1, 1)));
        assert_eq!(size.neighbor((1, 2), Direction::South), None);
        assert_eq!(size.neighbor((1, 2), Direction::East), None);
        assert_eq!(size.neighbor((1, 2), Direction::NorthWest), Some((0, 1)));
    }

    #[test]
    fn opposite_reverses_delta() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.delta();
            assert_eq!(dir.opposite().delta(), (-dr, -dc));
        }
    }

    #[test]
    fn slots_follow_declaration_order() {
        for (slot, dir) in Direction::ALL.into_iter().enumerate() {
            assert_eq!(dir.slot(), slot);
        }
    }
}
