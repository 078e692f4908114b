use core::fmt;
use core::ops::{Add, Neg, Sub};
use grid_util::point::Point;

/// A (row, column) position on the board. Coordinates are signed so that applying a
/// [MoveOffset] near the border produces a cell that is simply out of bounds instead of wrapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Cell {
        Cell { row, col }
    }

    /// Checks whether the cell lies within `[0, grid_size)` on both axes.
    pub fn in_bounds(&self, grid_size: usize) -> bool {
        self.row >= 0
            && self.col >= 0
            && (self.row as usize) < grid_size
            && (self.col as usize) < grid_size
    }

    /// Applies an offset, returning [None] if a coordinate overflows.
    pub fn checked_add(&self, offset: MoveOffset) -> Option<Cell> {
        Some(Cell::new(
            self.row.checked_add(offset.d_row)?,
            self.col.checked_add(offset.d_col)?,
        ))
    }

    /// Row-major index of the cell. Only meaningful for cells that are [in_bounds](Self::in_bounds).
    #[inline]
    pub(crate) fn ix(&self, grid_size: usize) -> usize {
        self.row as usize * grid_size + self.col as usize
    }

    #[inline]
    pub(crate) fn from_ix(ix: usize, grid_size: usize) -> Cell {
        Cell::new((ix / grid_size) as i32, (ix % grid_size) as i32)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Cell {
        Cell::new(row, col)
    }
}

// Points use x for the column and y for the row.
impl From<Cell> for Point {
    fn from(cell: Cell) -> Point {
        Point::new(cell.col, cell.row)
    }
}

impl From<Point> for Cell {
    fn from(point: Point) -> Cell {
        Cell::new(point.y, point.x)
    }
}

/// A single relative step (delta_row, delta_col) a piece may take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveOffset {
    pub d_row: i32,
    pub d_col: i32,
}

impl MoveOffset {
    pub const fn new(d_row: i32, d_col: i32) -> MoveOffset {
        MoveOffset { d_row, d_col }
    }

    /// The opposite step, or [None] when a component is `i32::MIN`.
    pub fn checked_neg(&self) -> Option<MoveOffset> {
        Some(MoveOffset::new(
            self.d_row.checked_neg()?,
            self.d_col.checked_neg()?,
        ))
    }
}

impl fmt::Display for MoveOffset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:+},{:+})", self.d_row, self.d_col)
    }
}

impl From<(i32, i32)> for MoveOffset {
    fn from((d_row, d_col): (i32, i32)) -> MoveOffset {
        MoveOffset::new(d_row, d_col)
    }
}

// The operators below use plain integer arithmetic and overflow like it does. Use
// `MoveOffset::checked_neg` and `Cell::checked_add` for untrusted values.
impl Neg for MoveOffset {
    type Output = MoveOffset;
    fn neg(self) -> MoveOffset {
        MoveOffset::new(-self.d_row, -self.d_col)
    }
}

impl Add<MoveOffset> for Cell {
    type Output = Cell;
    fn add(self, offset: MoveOffset) -> Cell {
        Cell::new(self.row + offset.d_row, self.col + offset.d_col)
    }
}

impl Sub<MoveOffset> for Cell {
    type Output = Cell;
    fn sub(self, offset: MoveOffset) -> Cell {
        Cell::new(self.row - offset.d_row, self.col - offset.d_col)
    }
}

/// The offset that leads from `other` to `self`.
impl Sub<Cell> for Cell {
    type Output = MoveOffset;
    fn sub(self, other: Cell) -> MoveOffset {
        MoveOffset::new(self.row - other.row, self.col - other.col)
    }
}
