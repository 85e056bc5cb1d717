//! Attack detection.
//!
//! These predicates only read the board. They are the threat subset of the
//! movement rules: a pawn threatens its two forward diagonals but not the
//! square in front of it, and a king threatens adjacent squares only, never
//! its castling destinations.

use crate::board::Board;
use crate::types::{Color, Coord, PieceKind};

/// Rank and file distance from `from` to `to`.
pub(crate) fn delta(from: Coord, to: Coord) -> (i8, i8) {
    (
        to.rank() as i8 - from.rank() as i8,
        to.file() as i8 - from.file() as i8,
    )
}

#[inline]
pub(crate) fn is_knight_jump(dr: i8, df: i8) -> bool {
    (dr.abs() == 2 && df.abs() == 1) || (dr.abs() == 1 && df.abs() == 2)
}

#[inline]
pub(crate) fn is_king_step(dr: i8, df: i8) -> bool {
    dr.abs() <= 1 && df.abs() <= 1 && (dr, df) != (0, 0)
}

impl Board {
    /// Every square strictly between `from` and `to` is empty. The two squares
    /// must share a rank, file or diagonal.
    pub fn path_clear(&self, from: Coord, to: Coord) -> bool {
        let (dr, df) = delta(from, to);
        let (sr, sf) = (dr.signum(), df.signum());
        let mut at = from;
        loop {
            at = match at.offset(sr, sf) {
                Some(next) => next,
                None => return false,
            };
            if at == to {
                return true;
            }
            if self.piece_at(at).is_some() {
                return false;
            }
        }
    }

    /// Whether the piece on `from` threatens `target`, whoever stands there.
    pub fn attacks(&self, from: Coord, target: Coord) -> bool {
        let Some(piece) = self.piece_at(from) else {
            return false;
        };
        let (dr, df) = delta(from, target);
        if (dr, df) == (0, 0) {
            return false;
        }
        let diagonal = dr.abs() == df.abs();
        let straight = dr == 0 || df == 0;
        match piece.kind {
            PieceKind::Pawn => dr == piece.color.forward() && df.abs() == 1,
            PieceKind::Knight => is_knight_jump(dr, df),
            PieceKind::King => is_king_step(dr, df),
            PieceKind::Bishop => diagonal && self.path_clear(from, target),
            PieceKind::Rook => straight && self.path_clear(from, target),
            PieceKind::Queen => (diagonal || straight) && self.path_clear(from, target),
        }
    }

    pub fn is_square_attacked(&self, target: Coord, by: Color) -> bool {
        self.pieces(by).any(|p| self.attacks(p.coord, target))
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
