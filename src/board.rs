use crate::blocked::BlockedCells;
use crate::cell::{Cell, MoveOffset};
use crate::components::ComponentMap;
use crate::error::{PathError, Result};
use crate::moves::Piece;
use crate::search::{self, Path};
use crate::DEFAULT_GRID_SIZE;
use core::fmt;
use grid_util::grid::{BoolGrid, Grid};
use itertools::iproduct;
use log::info;

/// [Board] is the square grid of blocked cells that a user edits before asking for a path. The
/// blocked state is stored in a [BoolGrid] where [true] means blocked. Reading a cell outside
/// the board yields [false]; editing one is an error.
#[derive(Clone, Debug)]
pub struct Board {
    grid: BoolGrid,
}

impl Default for Board {
    fn default() -> Board {
        Board::new(DEFAULT_GRID_SIZE)
    }
}

// Cells only address rows and columns up to `i32::MAX`.
fn addressable(size: usize) -> i32 {
    i32::try_from(size).unwrap_or(i32::MAX)
}

impl Board {
    pub fn new(size: usize) -> Board {
        Board {
            grid: BoolGrid::new(size, size, false),
        }
    }

    /// Wraps an existing [BoolGrid], which has to be square and non-empty.
    pub fn from_bool_grid(grid: BoolGrid) -> Result<Board> {
        if grid.width() != grid.height() || grid.width() == 0 {
            return Err(PathError::InvalidInput(format!(
                "board must be square and non-empty, got {}x{}",
                grid.width(),
                grid.height()
            )));
        }
        Ok(Board { grid })
    }

    pub fn size(&self) -> usize {
        self.grid.width()
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.in_bounds(self.size())
    }

    fn check(&self, cell: Cell) -> Result<()> {
        if self.in_bounds(cell) {
            Ok(())
        } else {
            Err(PathError::InvalidInput(format!(
                "{} is outside the {}x{} board",
                cell,
                self.size(),
                self.size()
            )))
        }
    }

    pub fn is_blocked(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && self.grid.get_point(cell.into())
    }

    pub fn set_blocked(&mut self, cell: Cell, blocked: bool) -> Result<()> {
        self.check(cell)?;
        self.grid.set_point(cell.into(), blocked);
        Ok(())
    }

    /// Flips a cell between blocked and free and returns the new state.
    pub fn toggle(&mut self, cell: Cell) -> Result<bool> {
        let blocked = !self.is_blocked(cell);
        self.set_blocked(cell, blocked)?;
        Ok(blocked)
    }

    /// Blocks a cell regardless of its current state, as when dragging across the board.
    pub fn paint(&mut self, cell: Cell) -> Result<()> {
        self.set_blocked(cell, true)
    }

    /// Frees every cell.
    pub fn clear(&mut self) {
        info!("Clearing {} blocked cells", self.blocked_count());
        self.grid = BoolGrid::new(self.size(), self.size(), false);
    }

    /// All blocked cells in row-major order.
    pub fn blocked_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let n = addressable(self.size());
        iproduct!(0..n, 0..n)
            .map(|(row, col)| Cell::new(row, col))
            .filter(move |cell| self.is_blocked(*cell))
    }

    pub fn blocked_count(&self) -> usize {
        self.blocked_cells().count()
    }

    /// Finds a shortest path for `piece`, see [search::find_path].
    pub fn find_path(&self, piece: Piece, start: Cell, end: Cell) -> Result<Option<Path>> {
        self.find_path_with(piece.offsets(), start, end)
    }

    pub fn find_path_with(
        &self,
        offsets: &[MoveOffset],
        start: Cell,
        end: Cell,
    ) -> Result<Option<Path>> {
        search::find_path(start, end, self.size(), offsets, self)
    }

    /// Finds a shortest path for `piece` to the closest of `goals`, see [search::find_path_to_any].
    pub fn find_path_to_any(
        &self,
        piece: Piece,
        start: Cell,
        goals: &[Cell],
    ) -> Result<Option<(Cell, Path)>> {
        search::find_path_to_any(start, goals, self.size(), piece.offsets(), self)
    }

    /// Move counts from `start` to every cell, see [search::distance_map].
    pub fn distances(&self, piece: Piece, start: Cell) -> Result<Vec<Option<u32>>> {
        search::distance_map(start, self.size(), piece.offsets(), self)
    }

    /// Connected components of the free cells for `piece`.
    pub fn components(&self, piece: Piece) -> Result<ComponentMap> {
        ComponentMap::new(self.size(), piece.offsets(), self)
    }
}

impl BlockedCells for Board {
    fn is_blocked(&self, cell: Cell) -> bool {
        Board::is_blocked(self, cell)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let n = addressable(self.size());
        for row in 0..n {
            let line = (0..n)
                .map(|col| {
                    if self.is_blocked(Cell::new(row, col)) {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
