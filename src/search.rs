//! Breadth-first search over the implicit move graph of a piece.
//!
//! Every step costs the same, so the first time the search dequeues a goal it has found a path
//! with the fewest possible moves. Offsets are expanded in the order they are given, which makes
//! the returned path deterministic.
use crate::blocked::BlockedCells;
use crate::cell::{Cell, MoveOffset};
use crate::error::{PathError, Result};
use crate::N_SMALLVEC_SIZE;
use core::fmt;
use itertools::Itertools;
use log::{debug, trace};
use smallvec::SmallVec;
use std::collections::VecDeque;

/// Marks the root of the parent array.
const NO_PARENT: usize = usize::MAX;
/// Depth of a cell that has not been enqueued.
const UNREACHED: u32 = u32::MAX;

/// An ordered sequence of cells from a start to an end cell, both included. Consecutive cells
/// are one move apart.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }
    pub fn start(&self) -> Cell {
        self.cells[0]
    }
    pub fn end(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }
    /// Number of cells on the path, including start and end.
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    /// A path always holds at least its start cell.
    pub fn is_empty(&self) -> bool {
        false
    }
    /// Number of moves, one less than the number of cells.
    pub fn moves(&self) -> usize {
        self.cells.len() - 1
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Checks that every step of the path is one of `offsets` and that no cell strictly between
    /// start and end is blocked.
    pub fn is_valid_for<B>(&self, offsets: &[MoveOffset], blocked: &B) -> bool
    where
        B: BlockedCells + ?Sized,
    {
        let steps_valid = self
            .cells
            .iter()
            .tuple_windows()
            .all(|(a, b)| offsets.contains(&(*b - *a)));
        let interior = &self.cells[1..self.cells.len().saturating_sub(1).max(1)];
        steps_valid && !interior.iter().any(|c| blocked.is_blocked(*c))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.cells.iter().join(" -> "))
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;
    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl IntoIterator for Path {
    type Item = Cell;
    type IntoIter = std::vec::IntoIter<Cell>;
    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

fn check_grid(grid_size: usize, offsets: &[MoveOffset]) -> Result<()> {
    if grid_size == 0 {
        return Err(PathError::InvalidInput("grid size must be positive".to_owned()));
    }
    if grid_size > i32::MAX as usize || grid_size.checked_mul(grid_size).is_none() {
        return Err(PathError::InvalidInput(format!(
            "grid size {grid_size} is too large"
        )));
    }
    if offsets.is_empty() {
        return Err(PathError::InvalidInput("move set is empty".to_owned()));
    }
    Ok(())
}

fn check_cell(cell: Cell, grid_size: usize, what: &str) -> Result<()> {
    if cell.in_bounds(grid_size) {
        Ok(())
    } else {
        trace!("Rejecting {what} {cell} on a grid of size {grid_size}");
        Err(PathError::InvalidInput(format!(
            "{what} {cell} is outside the {grid_size}x{grid_size} grid"
        )))
    }
}

/// The per-call state of a search: the depth array doubles as the visited set, the parent array
/// is used for reconstruction. Dropped when the search returns.
struct SearchContext {
    grid_size: usize,
    depth: Vec<u32>,
    parents: Vec<usize>,
    queue: VecDeque<usize>,
}

impl SearchContext {
    fn new(grid_size: usize, start: Cell) -> SearchContext {
        let n = grid_size * grid_size;
        let mut ct = SearchContext {
            grid_size,
            depth: vec![UNREACHED; n],
            parents: vec![NO_PARENT; n],
            queue: VecDeque::new(),
        };
        let start_ix = start.ix(grid_size);
        ct.depth[start_ix] = 0;
        ct.queue.push_back(start_ix);
        ct
    }

    fn visited(&self, ix: usize) -> bool {
        self.depth[ix] != UNREACHED
    }

    fn successors<FP>(
        &self,
        ix: usize,
        offsets: &[MoveOffset],
        passable: &FP,
    ) -> SmallVec<[usize; N_SMALLVEC_SIZE]>
    where
        FP: Fn(Cell) -> bool,
    {
        let cell = Cell::from_ix(ix, self.grid_size);
        offsets
            .iter()
            .filter_map(|offset| cell.checked_add(*offset))
            .filter(|n| n.in_bounds(self.grid_size))
            .map(|n| (n, n.ix(self.grid_size)))
            .filter(|&(n, n_ix)| !self.visited(n_ix) && passable(n))
            .map(|(_, n_ix)| n_ix)
            .collect()
    }

    /// Runs the search until `success` holds for a dequeued cell, returning its index, or until
    /// every reachable cell has been dequeued.
    fn run<FP, FS>(&mut self, offsets: &[MoveOffset], passable: FP, mut success: FS) -> Option<usize>
    where
        FP: Fn(Cell) -> bool,
        FS: FnMut(usize) -> bool,
    {
        while let Some(ix) = self.queue.pop_front() {
            if success(ix) {
                return Some(ix);
            }
            let next_depth = self.depth[ix] + 1;
            // Duplicate offsets are harmless: the visited check happens again on insertion.
            for n_ix in self.successors(ix, offsets, &passable) {
                if !self.visited(n_ix) {
                    self.depth[n_ix] = next_depth;
                    self.parents[n_ix] = ix;
                    self.queue.push_back(n_ix);
                }
            }
        }
        None
    }

    fn reached(&self) -> usize {
        self.depth.iter().filter(|&&d| d != UNREACHED).count()
    }

    fn reverse_path(&self, end_ix: usize) -> Path {
        let mut cells: Vec<Cell> = std::iter::successors(Some(end_ix), |&ix| {
            Some(self.parents[ix]).filter(|&p| p != NO_PARENT)
        })
        .map(|ix| Cell::from_ix(ix, self.grid_size))
        .collect();
        cells.reverse();
        Path { cells }
    }
}

/// Computes a shortest path from `start` to `end` for a piece moving by `offsets` on a
/// `grid_size` x `grid_size` grid. Cells in `blocked` are never entered, except `start` and `end`
/// themselves, which are always treated as free. The blocked set is only read.
///
/// Returns `Ok(None)` if `end` cannot be reached and [PathError::InvalidInput] if a cell is out
/// of bounds, the grid is empty or there are no offsets.
pub fn find_path<B>(
    start: Cell,
    end: Cell,
    grid_size: usize,
    offsets: &[MoveOffset],
    blocked: &B,
) -> Result<Option<Path>>
where
    B: BlockedCells + ?Sized,
{
    check_grid(grid_size, offsets)?;
    check_cell(start, grid_size, "start")?;
    check_cell(end, grid_size, "end")?;

    let end_ix = end.ix(grid_size);
    let mut ct = SearchContext::new(grid_size, start);
    let found = ct.run(
        offsets,
        |cell| cell == start || cell == end || !blocked.is_blocked(cell),
        |ix| ix == end_ix,
    );
    match found {
        Some(ix) => {
            let path = ct.reverse_path(ix);
            debug!(
                "Found a path from {} to {} with {} moves",
                start,
                end,
                path.moves()
            );
            Ok(Some(path))
        }
        None => {
            debug!(
                "{} is not reachable from {}, {} cells explored",
                end,
                start,
                ct.reached()
            );
            Ok(None)
        }
    }
}

/// Computes a shortest path from `start` to whichever of `goals` is fewest moves away and
/// returns the selected goal in addition to the path. Ties are broken by the offset order, as
/// in [find_path]. The start and every goal are exempt from `blocked`.
pub fn find_path_to_any<B>(
    start: Cell,
    goals: &[Cell],
    grid_size: usize,
    offsets: &[MoveOffset],
    blocked: &B,
) -> Result<Option<(Cell, Path)>>
where
    B: BlockedCells + ?Sized,
{
    check_grid(grid_size, offsets)?;
    check_cell(start, grid_size, "start")?;
    for goal in goals {
        check_cell(*goal, grid_size, "goal")?;
    }
    if goals.is_empty() {
        return Ok(None);
    }

    let mut is_goal = vec![false; grid_size * grid_size];
    for goal in goals {
        is_goal[goal.ix(grid_size)] = true;
    }
    let mut ct = SearchContext::new(grid_size, start);
    let found = ct.run(
        offsets,
        |cell| cell == start || is_goal[cell.ix(grid_size)] || !blocked.is_blocked(cell),
        |ix| is_goal[ix],
    );
    let result = found.map(|ix| {
        let path = ct.reverse_path(ix);
        (path.end(), path)
    });
    match &result {
        Some((goal, path)) => debug!(
            "Selected goal {} of {} from {} with {} moves",
            goal,
            goals.len(),
            start,
            path.moves()
        ),
        None => debug!("None of {} goals is reachable from {}", goals.len(), start),
    }
    Ok(result)
}

/// Floods the grid from `start` and returns the number of moves needed to reach every cell,
/// indexed row-major (`row * grid_size + col`). Unreachable and blocked cells hold `None`.
pub fn distance_map<B>(
    start: Cell,
    grid_size: usize,
    offsets: &[MoveOffset],
    blocked: &B,
) -> Result<Vec<Option<u32>>>
where
    B: BlockedCells + ?Sized,
{
    check_grid(grid_size, offsets)?;
    check_cell(start, grid_size, "start")?;

    let mut ct = SearchContext::new(grid_size, start);
    ct.run(
        offsets,
        |cell| cell == start || !blocked.is_blocked(cell),
        |_| false,
    );
    debug!("Flooded {} cells from {}", ct.reached(), start);
    Ok(ct
        .depth
        .into_iter()
        .map(|d| (d != UNREACHED).then_some(d))
        .collect())
}
