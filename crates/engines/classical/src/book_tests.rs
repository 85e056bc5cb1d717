use std::collections::HashSet;

use super::*;
use chess_core::{is_valid_move, Board};

fn m(s: &str) -> Move {
    s.parse().unwrap()
}

fn play(board: &mut Board, mv: Move) {
    board.reset_pawn_flags();
    let mover = board.side_to_move();
    board.move_piece(mv.start, mv.end, mover).unwrap();
    board.end_turn();
}

#[test]
fn test_start_position_entry() {
    let moves = BOOK.probe(&Board::startpos()).unwrap();
    assert_eq!(moves, &[m("e2e4"), m("d2d4")]);
}

#[test]
fn test_replies_after_e4() {
    let mut board = Board::startpos();
    play(&mut board, m("e2e4"));
    assert_eq!(BOOK.probe(&board).unwrap(), &[m("e7e5"), m("c7c5")]);

    play(&mut board, m("e7e5"));
    assert_eq!(BOOK.probe(&board).unwrap(), &[m("g1f3")]);

    play(&mut board, m("g1f3"));
    assert!(BOOK.probe(&board).is_none());
}

#[test]
fn test_every_entry_is_reachable_and_legal() {
    let mut reached = HashSet::new();
    let mut frontier = vec![Board::startpos()];

    while let Some(board) = frontier.pop() {
        let key = board.export_position_key();
        let Some(moves) = BOOK.lookup(&key) else {
            continue;
        };
        reached.insert(key);
        for &mv in moves {
            assert!(is_valid_move(&board, mv), "{mv} is illegal in book position");
            assert_eq!(board.piece_at(mv.start).unwrap().color, board.side_to_move());
            let mut next = board.clone();
            play(&mut next, mv);
            frontier.push(next);
        }
    }

    let all: HashSet<String> = BOOK.keys().map(str::to_string).collect();
    assert_eq!(reached, all);
    assert_eq!(BOOK.len(), 5);
}

#[test]
fn test_lookup_misses() {
    assert!(BOOK.lookup("8/8/8/8/8/8/8/8 w KQkq - 0 1").is_none());
    // the key carries the side to move
    assert!(BOOK
        .lookup("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1")
        .is_none());

    let mut book = OpeningBook::default();
    assert!(book.is_empty());
    book.insert("k7/8/8/8/8/8/8/K7 w KQkq - 0 1", Vec::new());
    assert!(book.lookup("k7/8/8/8/8/8/8/K7 w KQkq - 0 1").is_none());
}
