use tracing::debug;

use crate::error::{MoveError, ParseError};
use crate::movegen::{classify, has_legal_move, legal_kind};
use crate::types::*;

/// Castling, en-passant and clock fields of the position key. They are fixed
/// because the board does not track move history.
const KEY_PLACEHOLDERS: &str = "KQkq - 0 1";

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Square {
    pub piece: Option<Piece>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [[Square; 8]; 8],
    side_to_move: Color,
    status: GameStatus,
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Board {
    /// A board with no pieces, white to move.
    pub fn empty() -> Self {
        Board {
            squares: [[Square::default(); 8]; 8],
            side_to_move: Color::White,
            status: GameStatus::Ongoing,
        }
    }

    pub fn startpos() -> Self {
        let mut b = Board::empty();
        for file in 0..8u8 {
            for color in [Color::White, Color::Black] {
                b.put(
                    Coord::new(color.pawn_rank(), file),
                    PieceKind::Pawn,
                    color,
                );
                b.put(
                    Coord::new(color.back_rank(), file),
                    BACK_RANK[file as usize],
                    color,
                );
            }
        }
        b
    }

    /// Forsyth-Edwards Notation parser used by tests and runners.
    ///
    /// Only placement and side to move are required. A missing castling right
    /// marks the king or rook as moved; an en-passant target flags the pawn
    /// that just advanced two squares. Clock fields are ignored.
    pub fn from_fen(fen: &str) -> Result<Self, ParseError> {
        let invalid = |why: &str| ParseError::InvalidFen(format!("{why} in {fen:?}"));

        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 2 {
            return Err(invalid("expected at least 2 fields"));
        }
        let castle_part = parts.get(2).copied().unwrap_or("-");
        let ep_part = parts.get(3).copied().unwrap_or("-");

        let mut b = Board::empty();
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(invalid("board section needs 8 ranks"));
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx as i8; // FEN lists rank 8 .. 1
            let mut file: i8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    if d == 0 || file + d as i8 > 8 {
                        return Err(invalid("rank does not cover 8 files"));
                    }
                    file += d as i8;
                } else {
                    let kind = PieceKind::from_letter(ch).ok_or_else(|| invalid("bad piece"))?;
                    let color = if ch.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let at = Coord::try_new(rank, file).ok_or_else(|| invalid("too many files"))?;
                    b.put(at, kind, color);
                    file += 1;
                }
            }
            if file != 8 {
                return Err(invalid("rank does not cover 8 files"));
            }
        }

        b.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(invalid("bad side to move")),
        };

        if castle_part != "-" && castle_part.chars().any(|c| !"KQkq".contains(c)) {
            return Err(invalid("bad castling field"));
        }
        for at in Coord::all() {
            let Some(piece) = b.piece_mut(at) else {
                continue;
            };
            let (king_side, queen_side) = match piece.color {
                Color::White => (castle_part.contains('K'), castle_part.contains('Q')),
                Color::Black => (castle_part.contains('k'), castle_part.contains('q')),
            };
            let home = at.rank() == piece.color.back_rank();
            piece.moved = match piece.kind {
                PieceKind::King => !(home && at.file() == 4 && (king_side || queen_side)),
                PieceKind::Rook => {
                    !(home && ((at.file() == 7 && king_side) || (at.file() == 0 && queen_side)))
                }
                PieceKind::Pawn => at.rank() != piece.color.pawn_rank(),
                _ => false,
            };
        }

        if ep_part != "-" {
            let target: Coord = ep_part.parse().map_err(|_| invalid("bad en-passant square"))?;
            let owner = b.side_to_move.other();
            let pawn_at = target
                .offset(owner.forward(), 0)
                .ok_or_else(|| invalid("bad en-passant square"))?;
            match b.piece_mut(pawn_at) {
                Some(p) if p.kind == PieceKind::Pawn && p.color == owner => p.advanced_two = true,
                _ => return Err(invalid("no pawn behind en-passant square")),
            }
        }

        Ok(b)
    }

    fn put(&mut self, at: Coord, kind: PieceKind, color: Color) {
        self.set_piece(at, Some(Piece::new(kind, color, at)));
    }

    pub fn square(&self, at: Coord) -> &Square {
        &self.squares[at.rank() as usize][at.file() as usize]
    }

    fn square_mut(&mut self, at: Coord) -> &mut Square {
        &mut self.squares[at.rank() as usize][at.file() as usize]
    }

    pub fn piece_at(&self, at: Coord) -> Option<Piece> {
        self.square(at).piece
    }

    fn piece_mut(&mut self, at: Coord) -> Option<&mut Piece> {
        self.square_mut(at).piece.as_mut()
    }

    /// Places (or clears) a piece, rewriting its stored coordinate to `at`.
    pub fn set_piece(&mut self, at: Coord, piece: Option<Piece>) {
        self.square_mut(at).piece = piece.map(|mut p| {
            p.coord = at;
            p
        });
    }

    /// Every piece of `color`, scanned rank by rank from a1.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.squares
            .iter()
            .flatten()
            .filter_map(|sq| sq.piece)
            .filter(move |p| p.color == color)
    }

    /// Every piece on the board regardless of color.
    pub fn all_pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.squares.iter().flatten().filter_map(|sq| sq.piece)
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn switch_players(&mut self) {
        self.side_to_move = self.side_to_move.other();
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status != GameStatus::Ongoing
    }

    pub fn king_position(&self, c: Color) -> Option<Coord> {
        self.pieces(c)
            .find(|p| p.kind == PieceKind::King)
            .map(|p| p.coord)
    }

    pub fn in_check(&self, c: Color) -> bool {
        match self.king_position(c) {
            Some(k) => self.is_square_attacked(k, c.other()),
            None => false,
        }
    }

    pub fn has_no_legal_moves(&self, c: Color) -> bool {
        !has_legal_move(self, c)
    }

    /// True when `c` cannot move at all: checkmate or stalemate.
    pub fn is_mate(&self, c: Color) -> bool {
        self.has_no_legal_moves(c)
    }

    pub fn is_checkmate(&self, c: Color) -> bool {
        self.in_check(c) && self.has_no_legal_moves(c)
    }

    pub fn is_stalemate(&self, c: Color) -> bool {
        !self.in_check(c) && self.has_no_legal_moves(c)
    }

    /// Clears the en-passant flags of the side about to move. Run once per
    /// ply before generating that side's moves.
    pub fn reset_pawn_flags(&mut self) {
        let mover = self.side_to_move;
        for sq in self.squares.iter_mut().flatten() {
            if let Some(p) = sq.piece.as_mut() {
                if p.kind == PieceKind::Pawn && p.color == mover {
                    p.advanced_two = false;
                }
            }
        }
    }

    /// Applies `mv` without checking legality. Castling, en passant and the
    /// double-step flag are honored when the move matches those patterns;
    /// promotion is left to the caller.
    pub fn push(&mut self, mv: Move) {
        match classify(self, mv) {
            Some(kind) => self.execute(mv, kind),
            None => self.relocate(mv.start, mv.end),
        }
    }

    pub(crate) fn execute(&mut self, mv: Move, kind: MoveKind) {
        match kind {
            MoveKind::EnPassant { captured } => self.set_piece(captured, None),
            MoveKind::Castle { rook_from, rook_to } => self.relocate(rook_from, rook_to),
            _ => {}
        }
        self.relocate(mv.start, mv.end);
        if kind == MoveKind::DoubleStep {
            if let Some(p) = self.piece_mut(mv.end) {
                p.advanced_two = true;
            }
        }
    }

    fn relocate(&mut self, from: Coord, to: Coord) {
        if let Some(mut piece) = self.square_mut(from).piece.take() {
            piece.moved = true;
            self.set_piece(to, Some(piece));
        }
    }

    /// Plays `start -> end` for `color` if it is that side's piece and the move
    /// is legal. Leaves the board untouched on error.
    pub fn move_piece(
        &mut self,
        start: Coord,
        end: Coord,
        color: Color,
    ) -> Result<MoveOutcome, MoveError> {
        let piece = self.piece_at(start).ok_or(MoveError::EmptySquare(start))?;
        if piece.color != color {
            return Err(MoveError::WrongColor {
                square: start,
                owner: piece.color,
                mover: color,
            });
        }
        let mv = Move::new(start, end);
        let Some(kind) = legal_kind(self, mv) else {
            debug!(%mv, %color, "rejected illegal move");
            return Err(MoveError::Illegal(mv));
        };
        self.execute(mv, kind);

        if piece.kind == PieceKind::Pawn && end.rank() == color.promotion_rank() {
            Ok(MoveOutcome::PromotionDue(end))
        } else {
            Ok(MoveOutcome::Moved)
        }
    }

    /// Replaces the pawn waiting on its far rank. Anything but a knight,
    /// bishop, rook or queen (including no choice) becomes a queen.
    pub fn promote(&mut self, at: Coord, choice: Option<PieceKind>) -> Result<PieceKind, MoveError> {
        let kind = choice
            .filter(|k| k.can_promote_to())
            .unwrap_or(PieceKind::Queen);
        match self.piece_mut(at) {
            Some(p) if p.kind == PieceKind::Pawn && at.rank() == p.color.promotion_rank() => {
                p.kind = kind;
                Ok(kind)
            }
            _ => Err(MoveError::NothingToPromote(at)),
        }
    }

    /// Status of the side to move, computed from scratch.
    pub fn evaluate_status(&self) -> GameStatus {
        let mover = self.side_to_move;
        if !self.has_no_legal_moves(mover) {
            GameStatus::Ongoing
        } else if self.in_check(mover) {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        }
    }

    /// Hands the move to the other side and records whether it is mated or
    /// stalemated.
    pub fn end_turn(&mut self) -> GameStatus {
        self.switch_players();
        self.status = self.evaluate_status();
        self.status
    }

    /// Piece placement plus side to move in FEN layout, followed by fixed
    /// placeholder fields. Only meant as an opening-book key.
    pub fn export_position_key(&self) -> String {
        let mut key = String::with_capacity(64);
        for rank in (0..8u8).rev() {
            let mut empty = 0;
            for file in 0..8u8 {
                match self.piece_at(Coord::new(rank, file)) {
                    None => empty += 1,
                    Some(p) => {
                        if empty > 0 {
                            key.push_str(&empty.to_string());
                            empty = 0;
                        }
                        key.push(p.symbol());
                    }
                }
            }
            if empty > 0 {
                key.push_str(&empty.to_string());
            }
            if rank > 0 {
                key.push('/');
            }
        }
        key.push(' ');
        key.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });
        key.push(' ');
        key.push_str(KEY_PLACEHOLDERS);
        key
    }

    /// True if `mv` lands on an opposing piece or is an en-passant capture.
    pub fn is_capture(&self, mv: Move) -> bool {
        let Some(mover) = self.piece_at(mv.start) else {
            return false;
        };
        match self.piece_at(mv.end) {
            Some(target) => target.color != mover.color,
            None => {
                mover.kind == PieceKind::Pawn
                    && mv.end.rank() as i8 - mv.start.rank() as i8 == mover.color.forward()
                    && (mv.end.file() as i8 - mv.start.file() as i8).abs() == 1
                    && self.is_en_passant_victim(
                        Coord::new(mv.start.rank(), mv.end.file()),
                        mover.color,
                    )
            }
        }
    }

    /// A pawn of the other color that just advanced two squares sits on `at`.
    pub(crate) fn is_en_passant_victim(&self, at: Coord, mover: Color) -> bool {
        matches!(
            self.piece_at(at),
            Some(p) if p.kind == PieceKind::Pawn && p.color != mover && p.advanced_two
        )
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
