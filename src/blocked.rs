use crate::cell::Cell;
use fxhash::FxHashSet;
use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;

/// The default hash set for collections of cells.
pub type CellSet = FxHashSet<Cell>;

/// Read access to a set of cells that a search may not enter. The search only ever queries
/// cells that are in bounds.
pub trait BlockedCells {
    fn is_blocked(&self, cell: Cell) -> bool;
}

impl<S: BuildHasher> BlockedCells for HashSet<Cell, S> {
    fn is_blocked(&self, cell: Cell) -> bool {
        self.contains(&cell)
    }
}

impl BlockedCells for BTreeSet<Cell> {
    fn is_blocked(&self, cell: Cell) -> bool {
        self.contains(&cell)
    }
}

impl BlockedCells for [Cell] {
    fn is_blocked(&self, cell: Cell) -> bool {
        self.contains(&cell)
    }
}

impl BlockedCells for Vec<Cell> {
    fn is_blocked(&self, cell: Cell) -> bool {
        self.as_slice().is_blocked(cell)
    }
}

impl<const N: usize> BlockedCells for [Cell; N] {
    fn is_blocked(&self, cell: Cell) -> bool {
        self.as_slice().is_blocked(cell)
    }
}

impl<B: BlockedCells + ?Sized> BlockedCells for &B {
    fn is_blocked(&self, cell: Cell) -> bool {
        (**self).is_blocked(cell)
    }
}
