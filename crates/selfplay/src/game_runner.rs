//! Game runner for playing the automated player against itself

use chess_core::{Board, Color, Engine, GameStatus, MoveError, MoveOutcome};
use classical_engine::Player;
use tracing::{debug, info};

use crate::config::SelfPlayConfig;
use crate::results::{GameRecord, GameResult, SelfPlayReport, Termination};

/// Plays games on one live board per game, the way an interactive driver
/// would, with an engine on each side.
pub struct GameRunner {
    config: SelfPlayConfig,
}

impl GameRunner {
    pub fn new(config: SelfPlayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SelfPlayConfig {
        &self.config
    }

    /// Run every configured game with fresh players.
    ///
    /// Game `n` seeds white with `seed + 2n` and black with `seed + 2n + 1`.
    pub fn run(&self, seed: u64) -> Result<SelfPlayReport, MoveError> {
        let mut report = SelfPlayReport::new(self.config.clone(), seed);

        for game_num in 0..u64::from(self.config.games) {
            let base = seed.wrapping_add(game_num * 2);
            let mut white = self.player(Color::White, base);
            let mut black = self.player(Color::Black, base.wrapping_add(1));

            let record = self.play_game(&mut white, &mut black)?;
            info!(
                game = game_num + 1,
                of = self.config.games,
                result = record.result.as_str(),
                termination = ?record.termination,
                plies = record.plies,
                "game finished"
            );
            report.games.push(record);
        }

        Ok(report)
    }

    fn player(&self, color: Color, seed: u64) -> Player {
        let player =
            Player::seeded(color, seed).with_quiescence_depth(self.config.quiescence_depth);
        if self.config.use_book {
            player
        } else {
            player.without_book()
        }
    }

    /// Play a single game from the initial position.
    ///
    /// Each ply: expire the mover's en-passant flags, ask the mover's engine
    /// for a move, apply it through the legality check, promote to a queen if
    /// due, then hand over the turn and classify the position.
    pub fn play_game(
        &self,
        white: &mut dyn Engine,
        black: &mut dyn Engine,
    ) -> Result<GameRecord, MoveError> {
        let mut board = Board::startpos();
        white.new_game();
        black.new_game();

        let mut moves = Vec::new();
        let mut book_moves = 0;
        let mut nodes = 0;
        let mut outcome = None;

        while moves.len() < self.config.max_plies as usize {
            board.reset_pawn_flags();
            let mover = board.side_to_move();
            let engine: &mut dyn Engine = match mover {
                Color::White => &mut *white,
                Color::Black => &mut *black,
            };

            let result = engine.search(&board, self.config.depth);
            nodes += result.nodes;
            if result.from_book {
                book_moves += 1;
            }
            let Some(mv) = result.best_move else {
                outcome = Some((GameResult::Draw, Termination::NoMove));
                break;
            };

            if let MoveOutcome::PromotionDue(at) = board.move_piece(mv.start, mv.end, mover)? {
                board.promote(at, None)?;
            }
            debug!(ply = moves.len() + 1, %mover, %mv, score = result.score, "played");
            moves.push(mv.to_string());

            match board.end_turn() {
                GameStatus::Ongoing => {}
                GameStatus::Checkmate => {
                    let result = match mover {
                        Color::White => GameResult::WhiteWins,
                        Color::Black => GameResult::BlackWins,
                    };
                    outcome = Some((result, Termination::Checkmate));
                    break;
                }
                GameStatus::Stalemate => {
                    outcome = Some((GameResult::Draw, Termination::Stalemate));
                    break;
                }
            }
        }

        let (result, termination) = outcome.unwrap_or((GameResult::Draw, Termination::MaxPlies));
        Ok(GameRecord {
            plies: moves.len() as u32,
            moves,
            result,
            termination,
            book_moves,
            nodes,
            final_position: board.export_position_key(),
        })
    }
}

#[cfg(test)]
#[path = "game_runner_tests.rs"]
mod game_runner_tests;
