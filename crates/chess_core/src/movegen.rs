use crate::attacks::{delta, is_king_step, is_knight_jump};
use crate::board::Board;
use crate::types::*;

/// Pseudo-legal check of `mv` for whichever piece stands on its start square.
///
/// Returns what executing the move would involve, or `None` if the piece
/// cannot make it. Never mutates the board; the caller decides whether to
/// execute the returned kind.
pub fn classify(board: &Board, mv: Move) -> Option<MoveKind> {
    let piece = board.piece_at(mv.start)?;
    if mv.start == mv.end {
        return None;
    }
    let landing = match board.piece_at(mv.end) {
        Some(t) if t.color == piece.color => return None,
        Some(_) => MoveKind::Capture,
        None => MoveKind::Quiet,
    };
    let (dr, df) = delta(mv.start, mv.end);
    match piece.kind {
        PieceKind::Pawn => pawn_move(board, &piece, mv, landing),
        PieceKind::Knight => is_knight_jump(dr, df).then_some(landing),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            board.attacks(mv.start, mv.end).then_some(landing)
        }
        PieceKind::King if is_king_step(dr, df) => Some(landing),
        PieceKind::King => castle(board, &piece, mv),
    }
}

fn pawn_move(board: &Board, pawn: &Piece, mv: Move, landing: MoveKind) -> Option<MoveKind> {
    let fwd = pawn.color.forward();
    let (dr, df) = delta(mv.start, mv.end);

    if df == 0 {
        if landing != MoveKind::Quiet {
            return None;
        }
        if dr == fwd {
            return Some(MoveKind::Quiet);
        }
        if dr == 2 * fwd && mv.start.rank() == pawn.color.pawn_rank() {
            let between = mv.start.offset(fwd, 0)?;
            if board.piece_at(between).is_none() {
                return Some(MoveKind::DoubleStep);
            }
        }
        return None;
    }

    if dr != fwd || df.abs() != 1 {
        return None;
    }
    if landing == MoveKind::Capture {
        return Some(MoveKind::Capture);
    }
    let victim = Coord::new(mv.start.rank(), mv.end.file());
    board
        .is_en_passant_victim(victim, pawn.color)
        .then_some(MoveKind::EnPassant { captured: victim })
}

fn castle(board: &Board, king: &Piece, mv: Move) -> Option<MoveKind> {
    let home = king.color.back_rank();
    let (dr, df) = delta(mv.start, mv.end);
    if king.moved || dr != 0 || df.abs() != 2 || mv.start != Coord::new(home, 4) {
        return None;
    }

    let (rook_file, rook_to_file) = if df > 0 { (7, 5) } else { (0, 3) };
    let rook_from = Coord::new(home, rook_file);
    match board.piece_at(rook_from) {
        Some(r) if r.kind == PieceKind::Rook && r.color == king.color && !r.moved => {}
        _ => return None,
    }
    if !board.path_clear(mv.start, rook_from) {
        return None;
    }

    // The king may not castle out of, through, or into check.
    let enemy = king.color.other();
    let step = df.signum();
    for i in 0..=2 {
        let sq = mv.start.offset(0, step * i)?;
        if board.is_square_attacked(sq, enemy) {
            return None;
        }
    }

    Some(MoveKind::Castle {
        rook_from,
        rook_to: Coord::new(home, rook_to_file),
    })
}

/// Full legality: pseudo-legal, and the mover's king is not attacked once the
/// move has been played on a scratch copy of the board.
pub fn legal_kind(board: &Board, mv: Move) -> Option<MoveKind> {
    let mover = board.piece_at(mv.start)?.color;
    let kind = classify(board, mv)?;
    let mut future = board.clone();
    future.execute(mv, kind);
    (!future.in_check(mover)).then_some(kind)
}

pub fn is_valid_move(board: &Board, mv: Move) -> bool {
    legal_kind(board, mv).is_some()
}

/// Every (start, end) pair for the pieces of `color`, ordered by start square
/// then end square, both rank-major from a1.
fn candidates(board: &Board, color: Color) -> impl Iterator<Item = Move> + '_ {
    board
        .pieces(color)
        .flat_map(|p| Coord::all().map(move |end| Move::new(p.coord, end)))
}

/// Generate all legal moves for `color`, in candidate order.
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    candidates(board, color)
        .filter(|&mv| is_valid_move(board, mv))
        .collect()
}

pub fn has_legal_move(board: &Board, color: Color) -> bool {
    candidates(board, color).any(|mv| is_valid_move(board, mv))
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
