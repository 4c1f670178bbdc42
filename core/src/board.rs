use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Fixed-size grid of cells. Dimensions never change after construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    pub fn new(size: Coord2) -> Self {
        Self {
            cells: Array2::default(grid_index(size)),
        }
    }

    /// Builds a board with mines at exactly `mine_coords`, neighbor counts already computed.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::EmptyBoard);
        }
        let mut board = Self::new(size);
        if mine_coords.iter().any(|&coords| !board.contains(coords)) {
            return Err(GameError::InvalidCoords);
        }
        board.place_mines(mine_coords);
        Ok(board)
    }

    pub fn size(&self) -> Coord2 {
        let (x, y) = self.cells.dim();
        (x as Coord, y as Coord)
    }

    pub fn contains(&self, (x, y): Coord2) -> bool {
        let (width, height) = self.size();
        x < width && y < height
    }

    pub fn cell(&self, coords: Coord2) -> Option<Cell> {
        self.contains(coords)
            .then(|| self.cells[grid_index(coords)])
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> Option<&mut Cell> {
        if self.contains(coords) {
            Some(&mut self.cells[grid_index(coords)])
        } else {
            None
        }
    }

    /// The up-to-8 in-bounds cells around `(x, y)`. Edges have 5, corners 3.
    pub fn neighbors(&self, (x, y): Coord2) -> impl Iterator<Item = Coord2> + '_ {
        let columns = x.saturating_sub(1)..=x.saturating_add(1);
        columns
            .flat_map(move |nx| (y.saturating_sub(1)..=y.saturating_add(1)).map(move |ny| (nx, ny)))
            .filter(move |&pos| pos != (x, y) && self.contains(pos))
    }

    /// All cells with their coordinates, column by column.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((x, y), &cell)| ((x as Coord, y as Coord), cell))
    }

    pub fn mine_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.has_mine).count() as CellCount
    }

    /// Sets `has_mine` on every listed cell and recomputes all neighbor counts.
    /// Coordinates outside the board are skipped.
    pub(crate) fn place_mines(&mut self, mine_coords: &[Coord2]) {
        for &coords in mine_coords {
            if let Some(cell) = self.cell_mut(coords) {
                cell.has_mine = true;
            }
        }
        self.compute_neighbor_counts();
        self.debug_check_invariants();
    }

    pub fn compute_neighbor_counts(&mut self) {
        let (width, height) = self.size();
        for x in 0..width {
            for y in 0..height {
                let count = self.count_adjacent_mines((x, y));
                let cell = &mut self.cells[grid_index((x, y))];
                cell.neighbor_mines = if cell.has_mine { 0 } else { count };
            }
        }
    }

    pub fn count_adjacent_mines(&self, coords: Coord2) -> u8 {
        self.neighbors(coords)
            .filter(|&pos| self.cells[grid_index(pos)].has_mine)
            .count() as u8
    }

    /// Opens `start` and cascades through every connected zero-count cell, spilling one
    /// ring into the bordering numbered cells. Only closed cells are touched, so each
    /// cell is opened at most once. Returns how many cells were opened, 0 when `start`
    /// is off the board.
    pub fn flood_open(&mut self, start: Coord2) -> CellCount {
        if !self.contains(start) {
            return 0;
        }
        let mut opened = 0;
        let mut to_visit = vec![start];

        while let Some(coords) = to_visit.pop() {
            let cell = &mut self.cells[grid_index(coords)];
            if !cell.is_closed() {
                continue;
            }
            debug_assert!(!cell.has_mine, "cascade reached a mine at {coords:?}");
            cell.state = CellState::Open;
            let neighbor_mines = cell.neighbor_mines;
            opened += 1;

            if neighbor_mines == 0 {
                to_visit.extend(
                    self.neighbors(coords)
                        .filter(|&pos| self.cells[grid_index(pos)].is_closed()),
                );
            }
        }

        log::trace!("Flood opened {} cells from {:?}", opened, start);
        opened
    }

    /// Forces every mine cell open. Flag bookkeeping is left untouched.
    pub fn reveal_mines(&mut self) {
        for cell in self.cells.iter_mut().filter(|cell| cell.has_mine) {
            cell.state = CellState::Open;
        }
    }

    /// Every non-mine cell is open.
    pub fn is_cleared(&self) -> bool {
        self.cells.iter().all(|cell| cell.has_mine || cell.is_open())
    }

    pub fn debug_check_invariants(&self) {
        if cfg!(debug_assertions) {
            for (coords, cell) in self.iter() {
                if !cell.has_mine {
                    assert_eq!(
                        cell.neighbor_mines,
                        self.count_adjacent_mines(coords),
                        "stale neighbor count at {coords:?}"
                    );
                }
            }
        }
    }
}
