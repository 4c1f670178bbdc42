use serde::{Deserialize, Serialize};

/// What the player has done to a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Closed,
    Open,
    Flagged,
}

/// One grid position. Only ever owned by a [`crate::Board`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub has_mine: bool,
    pub state: CellState,
    /// Meaningless when `has_mine` is set.
    pub neighbor_mines: u8,
}

impl Cell {
    pub const fn is_closed(self) -> bool {
        matches!(self.state, CellState::Closed)
    }

    pub const fn is_open(self) -> bool {
        matches!(self.state, CellState::Open)
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self.state, CellState::Flagged)
    }
}
