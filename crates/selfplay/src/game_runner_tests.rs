use super::*;
use chess_core::{Move, SearchResult};

fn m(s: &str) -> Move {
    s.parse().unwrap()
}

/// Plays a fixed list of moves, then gives up.
struct Scripted {
    moves: Vec<Move>,
    next: usize,
}

impl Scripted {
    fn new(moves: &[&str]) -> Self {
        Self {
            moves: moves.iter().map(|s| m(s)).collect(),
            next: 0,
        }
    }
}

impl Engine for Scripted {
    fn search(&mut self, _board: &Board, depth: u8) -> SearchResult {
        let best_move = self.moves.get(self.next).copied();
        self.next += 1;
        SearchResult {
            best_move,
            depth,
            ..SearchResult::default()
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

fn runner(max_plies: u32) -> GameRunner {
    GameRunner::new(SelfPlayConfig {
        games: 1,
        depth: 1,
        quiescence_depth: 2,
        max_plies,
        ..SelfPlayConfig::default()
    })
}

#[test]
fn test_checkmate_ends_game() {
    let mut white = Scripted::new(&["f2f3", "g2g4"]);
    let mut black = Scripted::new(&["e7e5", "d8h4"]);

    let record = runner(20).play_game(&mut white, &mut black).unwrap();
    assert_eq!(record.result, GameResult::BlackWins);
    assert_eq!(record.termination, Termination::Checkmate);
    assert_eq!(record.plies, 4);
    assert_eq!(record.moves, vec!["f2f3", "e7e5", "g2g4", "d8h4"]);
}

#[test]
fn test_en_passant_through_the_driver() {
    let mut white = Scripted::new(&["e2e4", "e4e5", "e5d6"]);
    let mut black = Scripted::new(&["a7a6", "d7d5"]);

    let record = runner(5).play_game(&mut white, &mut black).unwrap();
    assert_eq!(record.plies, 5);
    assert_eq!(record.termination, Termination::MaxPlies);
    // the d5 pawn is gone and white stands on d6
    assert_eq!(
        record.final_position,
        "rnbqkbnr/1pp1pppp/p2P4/8/8/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1"
    );
}

#[test]
fn test_engine_without_move_ends_game() {
    let mut white = Scripted::new(&["e2e4"]);
    let mut black = Scripted::new(&[]);

    let record = runner(20).play_game(&mut white, &mut black).unwrap();
    assert_eq!(record.termination, Termination::NoMove);
    assert_eq!(record.result, GameResult::Draw);
    assert_eq!(record.plies, 1);
}

#[test]
fn test_illegal_engine_move_is_an_error() {
    let mut white = Scripted::new(&["e2e5"]);
    let mut black = Scripted::new(&[]);

    let err = runner(20).play_game(&mut white, &mut black).unwrap_err();
    assert_eq!(err, MoveError::Illegal(m("e2e5")));
}

#[test]
fn test_players_follow_the_book_then_search() {
    let runner = runner(6);
    let mut white = runner.player(Color::White, 5);
    let mut black = runner.player(Color::Black, 6);

    let record = runner.play_game(&mut white, &mut black).unwrap();
    assert_eq!(record.plies, 6);
    assert!(record.book_moves >= 2);
    assert!(record.nodes > 0);
    assert!(record.moves[0] == "e2e4" || record.moves[0] == "d2d4");

    // every recorded move replays legally
    let mut board = Board::startpos();
    for text in &record.moves {
        let mv = m(text);
        board.reset_pawn_flags();
        let mover = board.side_to_move();
        if let MoveOutcome::PromotionDue(at) = board.move_piece(mv.start, mv.end, mover).unwrap() {
            board.promote(at, None).unwrap();
        }
        board.end_turn();
    }
    assert_eq!(board.export_position_key(), record.final_position);
}

#[test]
fn test_run_is_reproducible() {
    let runner = GameRunner::new(SelfPlayConfig {
        games: 2,
        depth: 1,
        quiescence_depth: 1,
        max_plies: 8,
        ..SelfPlayConfig::default()
    });

    let first = runner.run(42).unwrap();
    let second = runner.run(42).unwrap();
    assert_eq!(first.games.len(), 2);
    assert_eq!(first.seed, 42);
    for (a, b) in first.games.iter().zip(&second.games) {
        assert_eq!(a.moves, b.moves);
    }
}
