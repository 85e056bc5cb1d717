use selfplay::{GameRecord, GameResult, GameRunner, SelfPlayConfig, SelfPlayReport, Termination};

fn record(result: GameResult, termination: Termination) -> GameRecord {
    GameRecord {
        moves: vec!["e2e4".to_string(), "e7e5".to_string()],
        result,
        termination,
        plies: 2,
        book_moves: 2,
        nodes: 0,
        final_position: "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 1"
            .to_string(),
    }
}

#[test]
fn test_tally_and_text_report() {
    let mut report = SelfPlayReport::new(SelfPlayConfig::default(), 3);
    report.games.push(record(GameResult::WhiteWins, Termination::Checkmate));
    report.games.push(record(GameResult::Draw, Termination::MaxPlies));
    report.games.push(record(GameResult::Draw, Termination::Stalemate));

    assert_eq!(report.tally(), (1, 0, 2));
    let text = report.generate_report();
    assert!(text.contains("3 games"));
    assert!(text.contains("seed 3"));
    assert!(text.contains("White 1 - Black 0 - Draws 2"));
}

#[test]
fn test_json_uses_game_notation() {
    let mut report = SelfPlayReport::new(SelfPlayConfig::default(), 0);
    report.games.push(record(GameResult::BlackWins, Termination::Checkmate));

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["games"][0]["result"], "0-1");
    assert_eq!(json["games"][0]["termination"], "checkmate");
    assert_eq!(json["games"][0]["moves"][1], "e7e5");
    assert_eq!(json["config"]["depth"], 3);
}

#[test]
fn test_save_and_load_report() {
    let config = SelfPlayConfig {
        games: 1,
        depth: 1,
        quiescence_depth: 1,
        max_plies: 4,
        seed: Some(17),
        ..SelfPlayConfig::default()
    };
    let report = GameRunner::new(config.clone()).run(17).unwrap();

    let path = std::env::temp_dir().join(format!("selfplay_report_{}.json", std::process::id()));
    report.save(&path).unwrap();
    let loaded = SelfPlayReport::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.config, config);
    assert_eq!(loaded.seed, 17);
    assert_eq!(loaded.games.len(), 1);
    assert_eq!(loaded.games[0].moves, report.games[0].moves);
    assert_eq!(loaded.games[0].plies, 4);
}
