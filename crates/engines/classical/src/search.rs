//! Minimax search with alpha-beta pruning and a captures-only quiescence
//! extension.
//!
//! Every node works on its own cloned board; the caller's board is never
//! touched.

use std::cmp::Reverse;

use chess_core::{legal_moves, successor, Board, Color, Move};
use tracing::trace;

use crate::eval::{evaluate, INF};

/// Default captures-only plies searched below the nominal depth.
pub const DEFAULT_QUIESCENCE_DEPTH: u8 = 4;

/// Fixed-depth searcher for one player.
///
/// Scores returned by [`Searcher::minimax`] are from `color`'s point of view;
/// the maximizing nodes are the ones where `color` is to move.
#[derive(Debug, Clone)]
pub struct Searcher {
    color: Color,
    quiescence_depth: u8,
    nodes: u64,
    prunes: u64,
}

impl Searcher {
    pub fn new(color: Color, quiescence_depth: u8) -> Self {
        Self {
            color,
            quiescence_depth,
            nodes: 0,
            prunes: 0,
        }
    }

    /// Positions visited (search and quiescence nodes).
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Beta cutoffs taken.
    pub fn prunes(&self) -> u64 {
        self.prunes
    }

    /// Picks the best move for `color` in `board`, searching each candidate
    /// `depth - 1` plies deep with the opponent to reply.
    ///
    /// Ties go to the candidate that sorted first.
    pub fn search_root(&mut self, board: &Board, depth: u8) -> Option<(Move, i32)> {
        let moves = legal_moves(board, self.color);
        let mut best: Option<(Move, i32)> = None;

        for (mv, child) in order_moves(board, moves) {
            let score = self.minimax(&child, depth.saturating_sub(1), -INF, INF, false);
            trace!(%mv, score, "root move scored");
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }

        best
    }

    /// Alpha-beta minimax.
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 || board.is_game_over() {
            return self.leaf(board, alpha, beta);
        }

        let moves = legal_moves(board, board.side_to_move());
        if moves.is_empty() {
            return if maximizing { -INF } else { INF };
        }

        if maximizing {
            let mut best = -INF;
            for (_, child) in order_moves(board, moves) {
                let score = self.minimax(&child, depth - 1, alpha, beta, false);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    self.prunes += 1;
                    break;
                }
            }
            best
        } else {
            let mut best = INF;
            for (_, child) in order_moves(board, moves) {
                let score = self.minimax(&child, depth - 1, alpha, beta, true);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    self.prunes += 1;
                    break;
                }
            }
            best
        }
    }

    /// Plain minimax over the same tree, without a window.
    pub fn minimax_unpruned(&mut self, board: &Board, depth: u8, maximizing: bool) -> i32 {
        self.nodes += 1;

        if depth == 0 || board.is_game_over() {
            return self.leaf(board, -INF, INF);
        }

        let moves = legal_moves(board, board.side_to_move());
        if moves.is_empty() {
            return if maximizing { -INF } else { INF };
        }

        let scores = order_moves(board, moves)
            .into_iter()
            .map(|(_, child)| self.minimax_unpruned(&child, depth - 1, !maximizing))
            .collect::<Vec<_>>();
        let best = if maximizing {
            scores.into_iter().max()
        } else {
            scores.into_iter().min()
        };
        best.unwrap_or(0)
    }

    /// Captures-only search from the side to move's point of view.
    ///
    /// Fail-hard: the result is clamped to `[alpha, beta]` except when
    /// `depth` is 0, where the stand-pat score is returned as is.
    pub fn quiescence(&mut self, board: &Board, mut alpha: i32, beta: i32, depth: u8) -> i32 {
        self.nodes += 1;

        let mover = board.side_to_move();
        let stand_pat = evaluate(board, mover);
        if depth == 0 {
            return stand_pat;
        }
        if stand_pat >= beta {
            return beta;
        }
        alpha = alpha.max(stand_pat);

        let captures = legal_moves(board, mover)
            .into_iter()
            .filter(|&mv| board.is_capture(mv))
            .collect();

        for (_, child) in order_moves(board, captures) {
            let score = -self.quiescence(&child, -beta, -alpha, depth - 1);
            if score >= beta {
                self.prunes += 1;
                return beta;
            }
            alpha = alpha.max(score);
        }

        alpha
    }

    /// Leaf score from `self.color`'s point of view.
    fn leaf(&mut self, board: &Board, alpha: i32, beta: i32) -> i32 {
        let depth = self.quiescence_depth;
        if board.side_to_move() == self.color {
            self.quiescence(board, alpha, beta, depth)
        } else {
            -self.quiescence(board, -beta, -alpha, depth)
        }
    }
}

/// Builds the child position of every move and sorts them best first for the
/// side to move in `board`, by one-ply static evaluation.
///
/// The sort is stable: equal scores keep generation order.
pub fn order_moves(board: &Board, moves: Vec<Move>) -> Vec<(Move, Board)> {
    let mover = board.side_to_move();
    let mut scored: Vec<(i32, Move, Board)> = moves
        .into_iter()
        .map(|mv| {
            let child = successor(board, mv);
            (evaluate(&child, mover), mv, child)
        })
        .collect();
    scored.sort_by_key(|(score, _, _)| Reverse(*score));
    scored.into_iter().map(|(_, mv, child)| (mv, child)).collect()
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
