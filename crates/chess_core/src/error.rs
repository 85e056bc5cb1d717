//! Error types for board setup and move execution.

use thiserror::Error;

use crate::types::{Color, Coord, Move};

/// Why `Board::move_piece` or `Board::promote` refused to touch the board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("no piece on {0}")]
    EmptySquare(Coord),

    #[error("piece on {square} belongs to {owner}, not {mover}")]
    WrongColor {
        square: Coord,
        owner: Color,
        mover: Color,
    },

    #[error("illegal move {0}")]
    Illegal(Move),

    #[error("no pawn awaiting promotion on {0}")]
    NothingToPromote(Coord),
}

/// Malformed text handed to one of the parsers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid coordinate: {0:?}")]
    InvalidCoord(String),

    #[error("invalid move: {0:?}")]
    InvalidMove(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),
}
