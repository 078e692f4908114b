use thiserror::Error;

/// Errors reported by the move catalog, the search and the board. Failing to find a path is
/// not an error: searches return `Ok(None)` in that case.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The piece identifier is not part of the move catalog.
    #[error("unknown piece: {0:?}")]
    UnknownPiece(String),

    /// Caller contract violation, e.g. a cell outside the grid or an empty move set.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Connected components only describe reachability when every move can be reversed.
    #[error("move set is not symmetric")]
    AsymmetricMoveSet,
}

pub type Result<T> = std::result::Result<T, PathError>;
