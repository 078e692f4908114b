//! The move catalog: every supported piece and the single steps it may take.
//!
//! Pieces never slide. A rook, bishop or queen moves exactly one cell per step, which makes the
//! king and the queen share the same eight offsets.
use crate::cell::MoveOffset;
use crate::error::{PathError, Result};
use core::fmt;
use core::str::FromStr;

const fn o(d_row: i32, d_col: i32) -> MoveOffset {
    MoveOffset::new(d_row, d_col)
}

pub const ROOK_OFFSETS: [MoveOffset; 4] = [o(0, 1), o(0, -1), o(1, 0), o(-1, 0)];

pub const BISHOP_OFFSETS: [MoveOffset; 4] = [o(1, 1), o(1, -1), o(-1, 1), o(-1, -1)];

pub const QUEEN_OFFSETS: [MoveOffset; 8] = [
    o(0, 1),
    o(0, -1),
    o(1, 0),
    o(-1, 0),
    o(1, 1),
    o(1, -1),
    o(-1, 1),
    o(-1, -1),
];

pub const KING_OFFSETS: [MoveOffset; 8] = QUEEN_OFFSETS;

pub const KNIGHT_OFFSETS: [MoveOffset; 8] = [
    o(2, 1),
    o(2, -1),
    o(-2, 1),
    o(-2, -1),
    o(1, 2),
    o(1, -2),
    o(-1, 2),
    o(-1, -2),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Piece {
    Rook,
    Bishop,
    Queen,
    King,
    Knight,
}

impl Piece {
    pub const ALL: [Piece; 5] = [
        Piece::Rook,
        Piece::Bishop,
        Piece::Queen,
        Piece::King,
        Piece::Knight,
    ];

    /// The offsets of the piece in the order in which the search enumerates them. This order
    /// decides which of several equally short paths is returned.
    pub fn offsets(self) -> &'static [MoveOffset] {
        match self {
            Piece::Rook => &ROOK_OFFSETS,
            Piece::Bishop => &BISHOP_OFFSETS,
            Piece::Queen => &QUEEN_OFFSETS,
            Piece::King => &KING_OFFSETS,
            Piece::Knight => &KNIGHT_OFFSETS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Piece::Rook => "Rook",
            Piece::Bishop => "Bishop",
            Piece::Queen => "Queen",
            Piece::King => "King",
            Piece::Knight => "Knight",
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Piece {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Piece> {
        let id = s.trim();
        Piece::ALL
            .into_iter()
            .find(|piece| piece.name().eq_ignore_ascii_case(id))
            .ok_or_else(|| PathError::UnknownPiece(s.to_owned()))
    }
}

/// Looks up the offsets of a piece by its identifier, e.g. `"Knight"`.
pub fn offsets_for(piece_id: &str) -> Result<&'static [MoveOffset]> {
    piece_id.parse::<Piece>().map(Piece::offsets)
}

/// Checks whether every offset can be undone by another offset of the same set, in which case
/// the move graph is undirected. An offset without a representable negation cannot be undone.
pub fn is_symmetric(offsets: &[MoveOffset]) -> bool {
    offsets.iter().all(|offset| {
        offset
            .checked_neg()
            .map_or(false, |back| offsets.contains(&back))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxhash::FxHashSet;

    #[test]
    fn lookup_by_name() {
        assert_eq!(offsets_for("Rook").unwrap(), &ROOK_OFFSETS);
        assert_eq!(offsets_for("knight").unwrap(), &KNIGHT_OFFSETS);
        assert_eq!(offsets_for(" BISHOP ").unwrap(), &BISHOP_OFFSETS);
        assert_eq!(
            offsets_for("Pawn"),
            Err(PathError::UnknownPiece("Pawn".to_owned()))
        );
        assert!(offsets_for("").is_err());
    }

    #[test]
    fn names_round_trip() {
        for piece in Piece::ALL {
            assert_eq!(piece.to_string().parse::<Piece>().unwrap(), piece);
        }
    }

    /// King and queen step identically, and the queen is the union of rook and bishop.
    #[test]
    fn queen_and_king_share_moves() {
        assert_eq!(Piece::King.offsets(), Piece::Queen.offsets());
        let union: FxHashSet<MoveOffset> = ROOK_OFFSETS
            .iter()
            .chain(BISHOP_OFFSETS.iter())
            .copied()
            .collect();
        let queen: FxHashSet<MoveOffset> = QUEEN_OFFSETS.iter().copied().collect();
        assert_eq!(union, queen);
    }

    #[test]
    fn offsets_are_distinct_single_steps() {
        for piece in Piece::ALL {
            let offsets = piece.offsets();
            let unique: FxHashSet<&MoveOffset> = offsets.iter().collect();
            assert_eq!(unique.len(), offsets.len(), "{piece}");
            assert!(offsets.iter().all(|o| *o != MoveOffset::new(0, 0)));
        }
        assert!(KNIGHT_OFFSETS
            .iter()
            .all(|o| o.d_row.abs() + o.d_col.abs() == 3));
    }

    #[test]
    fn symmetry() {
        assert!(Piece::ALL.iter().all(|p| is_symmetric(p.offsets())));
        assert!(!is_symmetric(&[MoveOffset::new(1, 0)]));
        assert!(is_symmetric(&[]));
    }

    #[test]
    fn symmetry_with_extreme_offsets() {
        let offsets = [
            MoveOffset::new(i32::MIN, 0),
            MoveOffset::new(0, 1),
            MoveOffset::new(0, -1),
        ];
        assert!(!is_symmetric(&offsets));
        assert!(!is_symmetric(&[MoveOffset::new(3, i32::MIN)]));
        assert!(is_symmetric(&[
            MoveOffset::new(i32::MAX, 0),
            MoveOffset::new(-i32::MAX, 0),
        ]));
    }
}
