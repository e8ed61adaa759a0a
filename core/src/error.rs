use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Cannot build a {rows}x{cols} board with {mines} mines")]
    InvalidConfiguration {
        rows: Coord,
        cols: Coord,
        mines: CellCount,
    },
    #[error("Coordinates out of bounds")]
    OutOfBounds,
    #[error("Invalid coordinates: ({row}, {col})")]
    InvalidCoordinate { row: i64, col: i64 },
    #[error("Cannot reveal a flagged cell")]
    RevealFlagged,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
