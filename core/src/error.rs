use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("grid size {0} is too small, must be at least 1")]
    InvalidGridSize(Coord),
    #[error("bomb count {bombs} does not fit a {grid_size}x{grid_size} grid")]
    InvalidBombCount { grid_size: Coord, bombs: CellCount },
    #[error("bomb at ({row}, {col}) is outside the {grid_size}x{grid_size} grid")]
    BombOutOfBounds {
        row: Coord,
        col: Coord,
        grid_size: Coord,
    },
    #[error("no free cell found for a bomb after {0} attempts, board is too dense")]
    PlacementExhausted(u32),
}

pub type Result<T> = core::result::Result<T, BoardError>;
