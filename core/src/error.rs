use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board needs at least one row and one column")]
    InvalidDimensions,
    #[error("Too many mines")]
    TooManyMines,
    #[error("Coordinates are outside the board")]
    OutOfBounds,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

/// Name used by front ends for errors raised while building or playing a board.
pub type BoardError = GameError;

pub type Result<T> = std::result::Result<T, GameError>;
