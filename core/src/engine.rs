use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Button {
    Left,
    Right,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    NoChange,
    Revealed,
    Flagged,
    Unflagged,
    HitMine,
    Won,
}

impl ClickOutcome {
    /// Whether the click could have changed what a front end draws
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

impl Board {
    /// Left click reveals a hidden unflagged cell, right click toggles the flag of a hidden cell.
    pub fn click(&mut self, row: Coord, col: Coord, button: Button) -> Result<ClickOutcome> {
        match button {
            Button::Left => self.reveal((row, col)),
            Button::Right => self.toggle_flag((row, col)),
        }
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<ClickOutcome> {
        let coords = self.size().validate_coords(coords)?;
        self.check_playing()?;

        let index = self.size().index_of(coords);
        let cell = &self[index];
        if cell.is_flagged || cell.is_revealed {
            return Ok(ClickOutcome::NoChange);
        }

        let opened = self.flood_fill(index);
        log::trace!("Opened {} cells from {:?}", opened, coords);
        if self[index].is_mine {
            self.triggered_mine = Some(index);
        }

        Ok(match self.evaluate_status() {
            GameStatus::Playing => ClickOutcome::Revealed,
            GameStatus::Won => ClickOutcome::Won,
            GameStatus::Lost => ClickOutcome::HitMine,
        })
    }

    /// Revealed cells cannot carry a flag.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<ClickOutcome> {
        let coords = self.size().validate_coords(coords)?;
        self.check_playing()?;

        let cell = self.cell_mut(self.size().index_of(coords));
        Ok(if cell.is_revealed {
            ClickOutcome::NoChange
        } else if cell.is_flagged {
            cell.is_flagged = false;
            ClickOutcome::Unflagged
        } else {
            cell.is_flagged = true;
            ClickOutcome::Flagged
        })
    }

    /// Reveals `start` and keeps opening around every revealed safe cell with no adjacent mines.
    ///
    /// A cell is marked revealed before its neighbors are queued, and revealed or flagged cells
    /// are skipped, so each cell is opened at most once and the cell states act as the visited
    /// set. Boundaries are dropped when popped. A mine with no mined neighbors expands like any
    /// other zero cell; the loss check runs before the win check to account for it.
    fn flood_fill(&mut self, start: CellIndex) -> usize {
        let mut opened = 0;
        let mut pending = vec![TileRef::Cell(start)];

        while let Some(tile) = pending.pop() {
            let TileRef::Cell(index) = tile else {
                continue;
            };

            let cell = self.cell_mut(index);
            if cell.is_flagged || cell.is_revealed {
                continue;
            }
            cell.is_revealed = true;
            opened += 1;

            if cell.neighbor_mine_count == 0 {
                pending.extend(cell.neighbors);
            }
        }

        opened
    }

    fn check_playing(&self) -> Result<()> {
        if self.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
