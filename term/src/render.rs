use std::fmt::{self, Write};

use sweeper_core::{CellView, Phase, Snapshot};

fn glyph(cell: CellView) -> char {
    match cell {
        CellView::Closed => '#',
        CellView::Flagged => 'F',
        CellView::Mine => '*',
        CellView::Open(0) => '.',
        CellView::Open(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
    }
}

fn status(phase: Phase) -> &'static str {
    match phase {
        Phase::Playing => "o X Y: open, f X Y: flag, h: help",
        Phase::Won => "YOU WIN! r to restart",
        Phase::Lost => "GAME OVER! r to restart",
    }
}

/// Text form of a [`Snapshot`]: the header line followed by the board, one text row per
/// board row.
pub struct BoardView<'a>(pub &'a Snapshot);

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.0;
        let (width, height) = snapshot.size;
        let label_width = height.saturating_sub(1).to_string().len();

        writeln!(
            f,
            "Mines: {}  Time: {}  {}",
            snapshot.mines_remaining,
            snapshot.elapsed_secs.unwrap_or(0),
            status(snapshot.phase)
        )?;

        // column numbers, last digit only
        write!(f, "{:label_width$} ", "")?;
        for x in 0..width {
            write!(f, "{}", x % 10)?;
        }
        f.write_char('\n')?;

        for (y, row) in snapshot.rows().enumerate() {
            write!(f, "{y:>label_width$} ")?;
            for cell in row {
                f.write_char(glyph(cell))?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}
