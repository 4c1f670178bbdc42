/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u16;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

/// Number of cells on a `width x height` board.
pub const fn area((width, height): Coord2) -> CellCount {
    width as CellCount * height as CellCount
}

/// Storage index for `ndarray`, which keeps `x` on the first axis.
pub(crate) fn grid_index((x, y): Coord2) -> [usize; 2] {
    [usize::from(x), usize::from(y)]
}

/// Whether `a` and `b` are within Chebyshev distance 1 of each other (including equal).
pub const fn is_adjacent_or_same(a: Coord2, b: Coord2) -> bool {
    a.0.abs_diff(b.0) <= 1 && a.1.abs_diff(b.1) <= 1
}
