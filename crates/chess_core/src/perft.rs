use crate::{board::Board, movegen::legal_moves, types::*};

/// Plays `mv` on a copy of `board` the way a game driver does between plies:
/// apply, promote a far-rank pawn to a queen, hand over the move, and expire
/// the new mover's en-passant flags.
pub fn successor(board: &Board, mv: Move) -> Board {
    let promoting = board
        .piece_at(mv.start)
        .is_some_and(|p| p.kind == PieceKind::Pawn && mv.end.rank() == p.color.promotion_rank());
    let mut next = board.clone();
    next.push(mv);
    if promoting {
        // Cannot fail: a pawn now stands on its promotion rank.
        let _ = next.promote(mv.end, None);
    }
    next.switch_players();
    next.reset_pawn_flags();
    next
}

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`.
///
/// Promotions count once (as a queen) since moves carry no promotion piece.
pub fn perft(board: &Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = legal_moves(board, board.side_to_move());
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .into_iter()
        .map(|mv| perft(&successor(board, mv), depth - 1))
        .sum()
}
