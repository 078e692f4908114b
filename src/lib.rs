//! # piece_pathfinding
//!
//! Shortest move sequences for chess-like pieces on a square grid with blocked cells. A piece is
//! described by a fixed set of single-step offsets (see [moves]) and paths are found with a
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search), which is optimal
//! in the number of moves since every move has the same cost. For symmetric move sets,
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory)) can be computed
//! up front to answer reachability queries without flood-filling.
//!
//! ```
//! use piece_pathfinding::{find_path, Board, Cell, Piece};
//!
//! let mut board = Board::new(5);
//! board.set_blocked(Cell::new(0, 1), true).unwrap();
//! let path = board
//!     .find_path(Piece::Knight, Cell::new(0, 0), Cell::new(4, 4))
//!     .unwrap()
//!     .expect("the knight can reach the far corner");
//! assert_eq!(path.moves(), 4);
//!
//! let direct = find_path(Cell::new(0, 0), Cell::new(0, 2), 5, Piece::Rook.offsets(), &board);
//! assert!(direct.unwrap().is_some());
//! ```
pub mod blocked;
pub mod board;
pub mod cell;
pub mod components;
pub mod error;
pub mod moves;
pub mod search;

pub use blocked::{BlockedCells, CellSet};
pub use board::Board;
pub use cell::{Cell, MoveOffset};
pub use components::ComponentMap;
pub use error::{PathError, Result};
pub use moves::{is_symmetric, offsets_for, Piece};
pub use search::{distance_map, find_path, find_path_to_any, Path};

/// Side length of a [Board] created with [Default].
pub const DEFAULT_GRID_SIZE: usize = 45;

/// Inline capacity for successor lists; no piece in the catalog has more offsets.
const N_SMALLVEC_SIZE: usize = 8;
