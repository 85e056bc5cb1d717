//! Tests for the end-of-game classification
//!
//! - Checkmate: in check and no legal moves
//! - Stalemate: not in check and no legal moves
//! - `end_turn` recording the status for the side to move

use chess_core::{legal_moves, Board, Color, Coord, GameStatus};

fn c(s: &str) -> Coord {
    s.parse().unwrap()
}

// =============================================================================
// Stalemate Tests
// =============================================================================

#[test]
fn test_stalemate_king_in_corner() {
    // Black king in corner, white queen stalemates
    // Position: Black king on a8, White queen on b6, White king on c7
    let board = Board::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();

    assert!(legal_moves(&board, Color::Black).is_empty());
    assert!(board.has_no_legal_moves(Color::Black));
    assert!(
        !board.in_check(Color::Black),
        "Stalemate means king is not in check"
    );
    assert!(board.is_stalemate(Color::Black));
    assert!(!board.is_checkmate(Color::Black));
    assert_eq!(board.evaluate_status(), GameStatus::Stalemate);
}

#[test]
fn test_stalemate_king_and_pawn_endgame() {
    // White king on g6, white pawn on g7, black king on g8
    let board = Board::from_fen("6k1/6P1/6K1/8/8/8/8/8 b - - 0 1").unwrap();

    assert!(board.is_mate(Color::Black));
    assert!(board.is_stalemate(Color::Black));
}

// =============================================================================
// Checkmate Tests
// =============================================================================

#[test]
fn test_scholars_mate_is_checkmate() {
    let board =
        Board::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1")
            .unwrap();

    assert!(board.in_check(Color::Black));
    assert!(board.has_no_legal_moves(Color::Black));
    assert!(board.is_checkmate(Color::Black));
    assert!(!board.is_stalemate(Color::Black));
}

#[test]
fn test_back_rank_mate() {
    let board = Board::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
    assert!(board.is_checkmate(Color::Black));
}

#[test]
fn test_check_that_is_not_mate() {
    let board = Board::from_fen("4k2R/8/8/8/8/8/8/4K3 b - - 0 1").unwrap();
    assert!(board.in_check(Color::Black));
    assert!(!board.has_no_legal_moves(Color::Black));
    assert_eq!(board.evaluate_status(), GameStatus::Ongoing);
}

// =============================================================================
// Driver post-move classification
// =============================================================================

#[test]
fn test_end_turn_records_checkmate() {
    let mut board =
        Board::from_fen("r1bqkbnr/pppp1ppp/2n5/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 0 1")
            .unwrap();
    board.reset_pawn_flags();
    board.move_piece(c("h5"), c("f7"), Color::White).unwrap();

    assert_eq!(board.end_turn(), GameStatus::Checkmate);
    assert_eq!(board.side_to_move(), Color::Black);
    assert!(board.is_game_over());
}

#[test]
fn test_end_turn_records_stalemate() {
    let mut board = Board::from_fen("k7/2K5/8/1Q6/8/8/8/8 w - - 0 1").unwrap();
    board.move_piece(c("b5"), c("b6"), Color::White).unwrap();

    assert_eq!(board.end_turn(), GameStatus::Stalemate);
    assert!(board.is_game_over());
}

#[test]
fn test_end_turn_ongoing() {
    let mut board = Board::startpos();
    board.move_piece(c("e2"), c("e4"), Color::White).unwrap();
    assert_eq!(board.end_turn(), GameStatus::Ongoing);
    assert!(!board.is_game_over());
}
