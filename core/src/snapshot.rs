use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a player is allowed to see of one cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    #[default]
    Closed,
    Flagged,
    Open(u8),
    /// An opened mine, either the one that was hit or one revealed after a loss.
    Mine,
}

impl CellView {
    pub const fn from_cell(cell: Cell) -> Self {
        match cell.state {
            CellState::Closed => Self::Closed,
            CellState::Flagged => Self::Flagged,
            CellState::Open if cell.has_mine => Self::Mine,
            CellState::Open => Self::Open(cell.neighbor_mines),
        }
    }
}

/// Read-only view of a session for renderers. Never exposes unopened mines.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: Coord2,
    pub cells: Array2<CellView>,
    pub phase: Phase,
    pub mines_remaining: i64,
    pub elapsed_secs: Option<u64>,
}

impl Snapshot {
    pub fn from_session(session: &GameSession) -> Self {
        let size = session.size();
        let mut cells = Array2::default(grid_index(size));
        for (coords, cell) in session.board().iter() {
            cells[grid_index(coords)] = CellView::from_cell(cell);
        }

        Self {
            size,
            cells,
            phase: session.phase(),
            mines_remaining: session.mines_remaining(),
            elapsed_secs: session.elapsed_secs(),
        }
    }

    pub fn cell(&self, (x, y): Coord2) -> Option<CellView> {
        self.cells.get(grid_index((x, y))).copied()
    }

    /// Rows from top (`y = 0`) to bottom, each left to right.
    pub fn rows(&self) -> impl Iterator<Item = Vec<CellView>> + '_ {
        let (width, height) = self.size;
        (0..height).map(move |y| {
            (0..width)
                .map(|x| self.cells[grid_index((x, y))])
                .collect::<Vec<_>>()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_hides_closed_and_flagged_mines() {
        let mut session = GameSession::with_mines((3, 1), &[(0, 0), (2, 0)]).unwrap();
        session.toggle_flag((0, 0));

        let snapshot = session.snapshot();

        assert_eq!(snapshot.cell((0, 0)), Some(CellView::Flagged));
        assert_eq!(snapshot.cell((1, 0)), Some(CellView::Closed));
        assert_eq!(snapshot.cell((2, 0)), Some(CellView::Closed));
        assert_eq!(snapshot.cell((3, 0)), None);
        assert_eq!(snapshot.mines_remaining, 1);
        assert_eq!(snapshot.elapsed_secs, None);
        assert_eq!(snapshot.phase, Phase::Playing);
    }

    #[test]
    fn snapshot_shows_counts_and_mines_after_loss() {
        let mut session = GameSession::with_mines((4, 1), &[(0, 0), (3, 0)]).unwrap();
        session.open((1, 0));
        assert_eq!(session.snapshot().cell((1, 0)), Some(CellView::Open(1)));

        session.open((0, 0));
        let snapshot = session.snapshot();

        assert_eq!(snapshot.phase, Phase::Lost);
        assert_eq!(snapshot.cell((0, 0)), Some(CellView::Mine));
        assert_eq!(snapshot.cell((3, 0)), Some(CellView::Mine));
        assert_eq!(snapshot.cell((2, 0)), Some(CellView::Closed));
        assert!(snapshot.elapsed_secs.is_some());
    }

    #[test]
    fn rows_are_top_to_bottom() {
        let mut session = GameSession::with_mines((2, 2), &[(1, 1)]).unwrap();
        session.open((0, 0));

        let rows: Vec<_> = session.snapshot().rows().collect();

        assert_eq!(
            rows,
            vec![
                vec![CellView::Open(1), CellView::Closed],
                vec![CellView::Closed, CellView::Closed],
            ]
        );
    }
}
