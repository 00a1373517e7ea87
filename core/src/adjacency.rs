use crate::*;

/// Computes the neighbor slots of the cell at `index`, one per [`Direction::ALL`] entry.
///
/// Directions that leave the grid get [`TileRef::Boundary`]. This depends only on the grid
/// geometry, so it runs before any mine is placed.
pub fn neighbors_of(size: GridSize, index: CellIndex) -> Result<[TileRef; 8]> {
    let size = size.validate()?;
    if index >= size.total_cells() as usize {
        return Err(GameError::OutOfBounds);
    }

    let coords = size.coords_of(index);
    Ok(Direction::ALL.map(|dir| match size.neighbor(coords, dir) {
        Some(pos) => TileRef::Cell(size.index_of(pos)),
        None => TileRef::Boundary,
    }))
}

/// Wires every cell of a grid, in row-major order.
pub fn build_cells(size: GridSize) -> Result<Vec<Cell>> {
    let size = size.validate()?;
    (0..size.total_cells() as usize)
        .map(|index| neighbors_of(size, index).map(Cell::new))
        .collect()
}
