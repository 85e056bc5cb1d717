//! Material and piece-square evaluation, phase aware.

use chess_core::{Board, Color, Coord, GameStatus, PieceKind};

/// Score of a decided game. Larger than any material sum.
pub const INF: i32 = 1_000_000;

/// Non-king material (both sides, centipawns) below which the position is
/// scored with the endgame tables.
pub const ENDGAME_MATERIAL: i32 = 3000;

/// Material values in centipawns, indexed by PieceKind::idx().
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
const PIECE_VALUES: [i32; 6] = [100, 320, 330, 500, 900, 0];

// Piece-square tables in centipawns, from white's perspective.
// Index is rank * 8 + file with rank 0 (white's back rank) first.

#[rustfmt::skip]
const PAWN_PST: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10,-20,-20, 10, 10,  5,
     5, -5,-10,  0,  0,-10, -5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5,  5, 10, 25, 25, 10,  5,  5,
    10, 10, 20, 30, 30, 20, 10, 10,
    50, 50, 50, 50, 50, 50, 50, 50,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const PAWN_PST_ENDGAME: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5,  5,  5,  5,  5,  5,  5,  5,
    10, 10, 10, 10, 10, 10, 10, 10,
    20, 20, 20, 20, 20, 20, 20, 20,
    35, 35, 35, 35, 35, 35, 35, 35,
    55, 55, 55, 55, 55, 55, 55, 55,
    80, 80, 80, 80, 80, 80, 80, 80,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_PST: [i32; 64] = [
   -50,-40,-30,-30,-30,-30,-40,-50,
   -40,-20,  0,  5,  5,  0,-20,-40,
   -30,  5, 10, 15, 15, 10,  5,-30,
   -30,  0, 15, 20, 20, 15,  0,-30,
   -30,  5, 15, 20, 20, 15,  5,-30,
   -30,  0, 10, 15, 15, 10,  0,-30,
   -40,-20,  0,  0,  0,  0,-20,-40,
   -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP_PST: [i32; 64] = [
   -20,-10,-10,-10,-10,-10,-10,-20,
   -10,  5,  0,  0,  0,  0,  5,-10,
   -10, 10, 10, 10, 10, 10, 10,-10,
   -10,  0, 10, 10, 10, 10,  0,-10,
   -10,  5,  5, 10, 10,  5,  5,-10,
   -10,  0,  5, 10, 10,  5,  0,-10,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK_PST: [i32; 64] = [
     0,  0,  0,  5,  5,  0,  0,  0,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     5, 10, 10, 10, 10, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_PST: [i32; 64] = [
   -20,-10,-10, -5, -5,-10,-10,-20,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -10,  5,  5,  5,  5,  5,  0,-10,
     0,  0,  5,  5,  5,  5,  0, -5,
    -5,  0,  5,  5,  5,  5,  0, -5,
   -10,  0,  5,  5,  5,  5,  0,-10,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const KING_PST: [i32; 64] = [
    20, 30, 10,  0,  0, 10, 30, 20,
    20, 20,  0,  0,  0,  0, 20, 20,
   -10,-20,-20,-20,-20,-20,-20,-10,
   -20,-30,-30,-40,-40,-30,-30,-20,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
];

#[rustfmt::skip]
const KING_PST_ENDGAME: [i32; 64] = [
   -50,-30,-30,-30,-30,-30,-30,-50,
   -30,-30,  0,  0,  0,  0,-30,-30,
   -30,-10, 20, 30, 30, 20,-10,-30,
   -30,-10, 30, 40, 40, 30,-10,-30,
   -30,-10, 30, 40, 40, 30,-10,-30,
   -30,-10, 20, 30, 30, 20,-10,-30,
   -30,-20,-10,  0,  0,-10,-20,-30,
   -50,-40,-30,-20,-20,-30,-40,-50,
];

/// Which set of positional tables applies to an evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Opening,
    Endgame,
}

impl Phase {
    /// Classifies the whole board by its remaining non-king material.
    pub fn of(board: &Board) -> Phase {
        let material: i32 = board.all_pieces().map(|p| piece_value(p.kind)).sum();
        if material < ENDGAME_MATERIAL {
            Phase::Endgame
        } else {
            Phase::Opening
        }
    }
}

pub fn piece_value(kind: PieceKind) -> i32 {
    PIECE_VALUES[kind.idx()]
}

/// Positional bonus of a piece standing on `at`.
///
/// Tables are written for white; black reads them with the rank mirrored.
pub fn positional_bonus(kind: PieceKind, phase: Phase, color: Color, at: Coord) -> i32 {
    let table = match (kind, phase) {
        (PieceKind::Pawn, Phase::Opening) => &PAWN_PST,
        (PieceKind::Pawn, Phase::Endgame) => &PAWN_PST_ENDGAME,
        (PieceKind::Knight, _) => &KNIGHT_PST,
        (PieceKind::Bishop, _) => &BISHOP_PST,
        (PieceKind::Rook, _) => &ROOK_PST,
        (PieceKind::Queen, _) => &QUEEN_PST,
        (PieceKind::King, Phase::Opening) => &KING_PST,
        (PieceKind::King, Phase::Endgame) => &KING_PST_ENDGAME,
    };
    let rank = match color {
        Color::White => at.rank(),
        Color::Black => 7 - at.rank(),
    };
    table[rank as usize * 8 + at.file() as usize]
}

/// Evaluates the position from `perspective`'s point of view.
///
/// Returns a score in centipawns:
/// - Positive = good for `perspective`
/// - Negative = bad for `perspective`
/// - `INF` / `-INF` when the recorded status is checkmate, 0 for stalemate
pub fn evaluate(board: &Board, perspective: Color) -> i32 {
    match board.status() {
        GameStatus::Checkmate => {
            // The side to move is the one mated.
            return if board.side_to_move() == perspective {
                -INF
            } else {
                INF
            };
        }
        GameStatus::Stalemate => return 0,
        GameStatus::Ongoing => {}
    }

    let phase = Phase::of(board);
    let mut totals = [0i32; 2];
    for piece in board.all_pieces() {
        totals[piece.color.idx()] +=
            piece_value(piece.kind) + positional_bonus(piece.kind, phase, piece.color, piece.coord);
    }

    let score = totals[Color::White.idx()] - totals[Color::Black.idx()];
    match perspective {
        Color::White => score,
        Color::Black => -score,
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
