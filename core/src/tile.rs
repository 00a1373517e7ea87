use serde::{Deserialize, Serialize};

use crate::*;

/// Non-owning neighbor reference: an index into the board's cell storage, or the off-grid sentinel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileRef {
    Cell(CellIndex),
    Boundary,
}

impl TileRef {
    pub const fn is_boundary(self) -> bool {
        matches!(self, Self::Boundary)
    }

    pub const fn cell_index(self) -> Option<CellIndex> {
        match self {
            Self::Cell(index) => Some(index),
            Self::Boundary => None,
        }
    }
}

/// Playable cell with its player-visible state and wiring to the eight surrounding tiles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) is_mine: bool,
    pub(crate) is_revealed: bool,
    pub(crate) is_flagged: bool,
    pub(crate) neighbor_mine_count: u8,
    pub(crate) neighbors: [TileRef; 8],
}

impl Cell {
    pub(crate) const fn new(neighbors: [TileRef; 8]) -> Self {
        Self {
            is_mine: false,
            is_revealed: false,
            is_flagged: false,
            neighbor_mine_count: 0,
            neighbors,
        }
    }

    pub const fn is_mine(&self) -> bool {
        self.is_mine
    }

    pub const fn is_revealed(&self) -> bool {
        self.is_revealed
    }

    pub const fn is_flagged(&self) -> bool {
        self.is_flagged
    }

    pub const fn is_hidden(&self) -> bool {
        !self.is_revealed
    }

    pub const fn neighbor_mine_count(&self) -> u8 {
        self.neighbor_mine_count
    }

    /// Neighbor slots in [`Direction::ALL`] order.
    pub const fn neighbors(&self) -> &[TileRef; 8] {
        &self.neighbors
    }

    pub const fn neighbor(&self, dir: Direction) -> TileRef {
        self.neighbors[dir.slot()]
    }

    /// Indices of the neighbors that are on the grid.
    pub fn real_neighbors(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.neighbors.iter().filter_map(|tile| tile.cell_index())
    }

    pub(crate) fn make_mine(&mut self) {
        self.is_mine = true;
    }
}

/// A resolved neighbor slot.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Tile<'a> {
    Cell(&'a Cell),
    Boundary,
}

impl Tile<'_> {
    /// Boundaries are never mines.
    pub const fn is_mine(self) -> bool {
        match self {
            Self::Cell(cell) => cell.is_mine,
            Self::Boundary => false,
        }
    }

    /// Boundaries are never revealed.
    pub const fn is_revealed(self) -> bool {
        match self {
            Self::Cell(cell) => cell.is_revealed,
            Self::Boundary => false,
        }
    }
}
