//! Exact-position opening book.
//!
//! Keys are [`Board::export_position_key`] strings. The book is built once
//! per process and only read afterwards.

use std::collections::HashMap;
use std::sync::LazyLock;

use chess_core::{Board, Coord, Move};

const fn mv(from: (u8, u8), to: (u8, u8)) -> Move {
    Move::new(Coord::new(from.0, from.1), Coord::new(to.0, to.1))
}

const E2E4: Move = mv((1, 4), (3, 4));
const D2D4: Move = mv((1, 3), (3, 3));
const E7E5: Move = mv((6, 4), (4, 4));
const C7C5: Move = mv((6, 2), (4, 2));
const D7D5: Move = mv((6, 3), (4, 3));
const G8F6: Move = mv((7, 6), (5, 5));
const G1F3: Move = mv((0, 6), (2, 5));
const C2C4: Move = mv((1, 2), (3, 2));

const ENTRIES: &[(&str, &[Move])] = &[
    (
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        &[E2E4, D2D4],
    ),
    // 1.e4
    (
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1",
        &[E7E5, C7C5],
    ),
    // 1.d4
    (
        "rnbqkbnr/pppppppp/8/8/3P4/8/PPP1PPPP/RNBQKBNR b KQkq - 0 1",
        &[D7D5, G8F6],
    ),
    // 1.e4 e5
    (
        "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 1",
        &[G1F3],
    ),
    // 1.d4 d5
    (
        "rnbqkbnr/ppp1pppp/8/3p4/3P4/8/PPP1PPPP/RNBQKBNR w KQkq - 0 1",
        &[C2C4],
    ),
];

/// The book every [`crate::Player`] consults.
pub static BOOK: LazyLock<OpeningBook> = LazyLock::new(OpeningBook::standard);

#[derive(Debug, Clone, Default)]
pub struct OpeningBook {
    entries: HashMap<String, Vec<Move>>,
}

impl OpeningBook {
    /// The built-in repertoire: the two central pawn openings and their
    /// main replies.
    pub fn standard() -> Self {
        let mut book = Self::default();
        for (key, moves) in ENTRIES {
            book.insert(key, moves.to_vec());
        }
        book
    }

    pub fn insert(&mut self, key: &str, moves: Vec<Move>) {
        self.entries.insert(key.to_string(), moves);
    }

    /// Candidate moves for an exact key match, in book order.
    pub fn lookup(&self, key: &str) -> Option<&[Move]> {
        self.entries
            .get(key)
            .map(Vec::as_slice)
            .filter(|moves| !moves.is_empty())
    }

    pub fn probe(&self, board: &Board) -> Option<&[Move]> {
        self.lookup(&board.export_position_key())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

#[cfg(test)]
#[path = "book_tests.rs"]
mod book_tests;
