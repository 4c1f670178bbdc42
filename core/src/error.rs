use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board must be at least 1x1")]
    EmptyBoard,
    #[error("Too many mines: requested {requested}, at most {max} fit with a safe first click")]
    TooManyMines { requested: CellCount, max: CellCount },
    #[error("Invalid coordinates")]
    InvalidCoords,
}

pub type Result<T> = core::result::Result<T, GameError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown difficulty {0:?}, expected beginner, intermediate or expert")]
pub struct ParseDifficultyError(pub String);
