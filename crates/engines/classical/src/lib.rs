//! Classical Chess Player
//!
//! Minimax with alpha-beta pruning over cloned boards, a captures-only
//! quiescence extension at the leaves, one-ply move ordering and an
//! exact-position opening book.

pub mod book;
pub mod eval;
pub mod search;

use chess_core::{Board, Color, Engine, Move, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

pub use book::{OpeningBook, BOOK};
pub use eval::{evaluate, Phase, INF};
pub use search::{order_moves, Searcher, DEFAULT_QUIESCENCE_DEPTH};

/// An automated player for one color.
///
/// The random source only breaks ties between book moves; inject a seeded
/// one with [`Player::seeded`] or [`Player::with_rng`] for reproducible play.
#[derive(Debug, Clone)]
pub struct Player<R = StdRng> {
    color: Color,
    rng: R,
    quiescence_depth: u8,
    use_book: bool,
    /// Statistics of the last search
    nodes: u64,
    prunes: u64,
}

impl Player<StdRng> {
    pub fn new(color: Color) -> Self {
        Self::with_rng(color, StdRng::from_entropy())
    }

    pub fn seeded(color: Color, seed: u64) -> Self {
        Self::with_rng(color, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Player<R> {
    pub fn with_rng(color: Color, rng: R) -> Self {
        Self {
            color,
            rng,
            quiescence_depth: DEFAULT_QUIESCENCE_DEPTH,
            use_book: true,
            nodes: 0,
            prunes: 0,
        }
    }

    pub fn with_quiescence_depth(mut self, depth: u8) -> Self {
        self.quiescence_depth = depth;
        self
    }

    /// Always search, even in book positions.
    pub fn without_book(mut self) -> Self {
        self.use_book = false;
        self
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Beta cutoffs taken by the last search.
    pub fn pruning_counter(&self) -> u64 {
        self.prunes
    }

    /// Chooses a move for this player, or `None` when it has no legal move or
    /// it is not this player's turn.
    pub fn select_move(&mut self, board: &Board, depth: u8) -> Option<Move> {
        self.think(board, depth).best_move
    }

    fn think(&mut self, board: &Board, depth: u8) -> SearchResult {
        self.nodes = 0;
        self.prunes = 0;

        if board.side_to_move() != self.color {
            warn!(
                player = %self.color,
                to_move = %board.side_to_move(),
                "asked to move out of turn"
            );
            return SearchResult {
                depth,
                ..SearchResult::default()
            };
        }

        if self.use_book {
            if let Some(&mv) = BOOK.probe(board).and_then(|moves| moves.choose(&mut self.rng)) {
                debug!(%mv, player = %self.color, "book move");
                return SearchResult {
                    best_move: Some(mv),
                    depth,
                    from_book: true,
                    ..SearchResult::default()
                };
            }
        }

        let mut searcher = Searcher::new(self.color, self.quiescence_depth);
        let best = searcher.search_root(board, depth);
        self.nodes = searcher.nodes();
        self.prunes = searcher.prunes();

        let (best_move, score) = match best {
            Some((mv, score)) => (Some(mv), score),
            None => (None, 0),
        };
        debug!(
            player = %self.color,
            depth,
            nodes = self.nodes,
            prunes = self.prunes,
            score,
            best = ?best_move.map(|mv| mv.to_string()),
            "search finished"
        );

        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
            prunes: self.prunes,
            from_book: false,
        }
    }
}

impl<R: Rng + Send> Engine for Player<R> {
    fn search(&mut self, board: &Board, depth: u8) -> SearchResult {
        self.think(board, depth)
    }

    fn name(&self) -> &str {
        "Classical minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
        self.prunes = 0;
    }
}
