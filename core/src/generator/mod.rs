use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Chooses which cells of a grid hold mines.
pub trait MinePlacer {
    /// Returns distinct cell indices in placement order.
    ///
    /// Must fail without side effects when the layout cannot fit on the grid.
    fn place(self, size: GridSize) -> Result<Vec<CellIndex>>;

    /// Seed the placement is reproducible from, if any.
    fn seed(&self) -> Option<u64> {
        None
    }
}
