use crate::blocked::BlockedCells;
use crate::cell::{Cell, MoveOffset};
use crate::error::{PathError, Result};
use crate::moves::is_symmetric;
use crate::N_SMALLVEC_SIZE;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// [ComponentMap] links up the free cells of a board into connected components under a
/// symmetric move set using a [UnionFind] structure. Two cells are in the same component exactly
/// when a search between them finds a path, so reachability can be answered without a search.
///
/// The map is a snapshot: it has to be rebuilt after the blocked cells change.
#[derive(Clone, Debug)]
pub struct ComponentMap {
    grid_size: usize,
    offsets: SmallVec<[MoveOffset; N_SMALLVEC_SIZE]>,
    free: Vec<bool>,
    components: UnionFind<usize>,
}

impl ComponentMap {
    /// Generates the components of the cells not in `blocked`. Fails if the move set is empty or
    /// not symmetric, since components of a directed move graph say nothing about reachability.
    pub fn new<B>(grid_size: usize, offsets: &[MoveOffset], blocked: &B) -> Result<ComponentMap>
    where
        B: BlockedCells + ?Sized,
    {
        if grid_size == 0 || grid_size > i32::MAX as usize || offsets.is_empty() {
            return Err(PathError::InvalidInput(format!(
                "cannot build components for grid size {} with {} offsets",
                grid_size,
                offsets.len()
            )));
        }
        if !is_symmetric(offsets) {
            return Err(PathError::AsymmetricMoveSet);
        }
        let n = grid_size
            .checked_mul(grid_size)
            .ok_or_else(|| PathError::InvalidInput(format!("grid size {grid_size} is too large")))?;
        info!("Generating connected components on a {grid_size}x{grid_size} grid");
        let free: Vec<bool> = (0..n)
            .map(|ix| !blocked.is_blocked(Cell::from_ix(ix, grid_size)))
            .collect();
        let mut components = UnionFind::new(n);
        for ix in (0..n).filter(|&ix| free[ix]) {
            let cell = Cell::from_ix(ix, grid_size);
            for offset in offsets {
                if let Some(n_ix) = cell
                    .checked_add(*offset)
                    .filter(|n| n.in_bounds(grid_size))
                    .map(|n| n.ix(grid_size))
                {
                    if free[n_ix] {
                        components.union(ix, n_ix);
                    }
                }
            }
        }
        Ok(ComponentMap {
            grid_size,
            offsets: offsets.iter().copied().collect(),
            free,
            components,
        })
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Retrieves the component id of a free cell. Blocked and out of bounds cells have none.
    pub fn component(&self, cell: Cell) -> Option<usize> {
        if !cell.in_bounds(self.grid_size) {
            return None;
        }
        let ix = cell.ix(self.grid_size);
        self.free[ix].then(|| self.components.find(ix))
    }

    /// Components a search starting from (or ending at) `cell` can continue in. A blocked cell is
    /// still usable as an endpoint, so its free neighbours stand in for it.
    fn entry_components(&self, cell: Cell) -> SmallVec<[usize; N_SMALLVEC_SIZE]> {
        match self.component(cell) {
            Some(c) => SmallVec::from_slice(&[c]),
            None => self
                .offsets
                .iter()
                .filter_map(|offset| cell.checked_add(*offset))
                .filter_map(|n| self.component(n))
                .collect(),
        }
    }

    /// Checks whether a search from start to goal would find a path, treating both endpoints as
    /// free like the search does. Out of bounds cells are never reachable.
    pub fn reachable(&self, start: &Cell, goal: &Cell) -> bool {
        if !start.in_bounds(self.grid_size) || !goal.in_bounds(self.grid_size) {
            return false;
        }
        if start == goal || self.offsets.contains(&(*goal - *start)) {
            return true;
        }
        let goal_components = self.entry_components(*goal);
        self.entry_components(*start)
            .iter()
            .any(|c| goal_components.contains(c))
    }

    pub fn unreachable(&self, start: &Cell, goal: &Cell) -> bool {
        !self.reachable(start, goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocked::CellSet;
    use crate::moves::{Piece, ROOK_OFFSETS};

    /// Tests whether cells are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // |.#|
        // |.#|
        let wall: CellSet = [Cell::new(0, 1), Cell::new(1, 1)].into_iter().collect();
        let map = ComponentMap::new(2, &ROOK_OFFSETS, &wall).unwrap();
        assert_eq!(map.component(Cell::new(0, 1)), None);
        assert!(map.component(Cell::new(0, 0)).is_some());
        assert_eq!(map.component(Cell::new(0, 0)), map.component(Cell::new(1, 0)));

        // |.#.|
        // |.#.|
        // |.#.|
        let column: CellSet = (0..3).map(|row| Cell::new(row, 1)).collect();
        let map = ComponentMap::new(3, &ROOK_OFFSETS, &column).unwrap();
        assert_ne!(map.component(Cell::new(0, 0)), map.component(Cell::new(0, 2)));
        assert_eq!(map.component(Cell::new(0, 2)), map.component(Cell::new(2, 2)));
        assert!(map.unreachable(&Cell::new(0, 0), &Cell::new(1, 2)));
    }

    #[test]
    fn reachable_around_wall() {
        let wall: CellSet = [Cell::new(0, 1), Cell::new(1, 1)].into_iter().collect();
        let map = ComponentMap::new(3, &ROOK_OFFSETS, &wall).unwrap();
        // Row 2 is open, so both sides connect.
        assert!(map.reachable(&Cell::new(0, 0), &Cell::new(0, 2)));
        let king = ComponentMap::new(3, Piece::King.offsets(), &wall).unwrap();
        assert!(king.reachable(&Cell::new(0, 0), &Cell::new(0, 2)));
    }

    #[test]
    fn blocked_endpoints_are_exempt() {
        // |S#.|
        // |##.|
        // |..E|
        let wall: CellSet = [
            Cell::new(0, 0),
            Cell::new(0, 1),
            Cell::new(1, 0),
            Cell::new(1, 1),
            Cell::new(2, 2),
        ]
        .into_iter()
        .collect();
        let rook = ComponentMap::new(3, &ROOK_OFFSETS, &wall).unwrap();
        assert!(rook.unreachable(&Cell::new(0, 0), &Cell::new(2, 2)));
        assert!(rook.reachable(&Cell::new(0, 2), &Cell::new(2, 2)));
        assert!(rook.reachable(&Cell::new(0, 1), &Cell::new(0, 2)));
        let king = ComponentMap::new(3, Piece::King.offsets(), &wall).unwrap();
        assert!(king.reachable(&Cell::new(1, 1), &Cell::new(2, 2)));
        assert!(king.reachable(&Cell::new(0, 0), &Cell::new(1, 1)));
        assert!(king.unreachable(&Cell::new(0, 0), &Cell::new(2, 2)));
    }

    #[test]
    fn rejects_asymmetric_and_empty_moves() {
        let none = CellSet::default();
        assert_eq!(
            ComponentMap::new(3, &[MoveOffset::new(1, 0)], &none).unwrap_err(),
            PathError::AsymmetricMoveSet
        );
        assert!(matches!(
            ComponentMap::new(3, &[], &none),
            Err(PathError::InvalidInput(_))
        ));
        assert!(ComponentMap::new(0, &ROOK_OFFSETS, &none).is_err());
    }

    #[test]
    fn rejects_offsets_without_negation() {
        let offsets = [
            MoveOffset::new(i32::MIN, 0),
            MoveOffset::new(0, 1),
            MoveOffset::new(0, -1),
        ];
        let none = CellSet::default();
        assert_eq!(
            ComponentMap::new(3, &offsets, &none).unwrap_err(),
            PathError::AsymmetricMoveSet
        );
        // The search itself still works with such a move set.
        let path = crate::search::find_path(Cell::new(1, 0), Cell::new(1, 2), 3, &offsets, &none)
            .unwrap()
            .unwrap();
        assert_eq!(path.moves(), 2);
    }

    #[test]
    fn out_of_bounds_is_unreachable() {
        let map = ComponentMap::new(2, &ROOK_OFFSETS, &CellSet::default()).unwrap();
        assert!(map.unreachable(&Cell::new(0, 0), &Cell::new(2, 0)));
        assert_eq!(map.component(Cell::new(-1, 0)), None);
    }
}
