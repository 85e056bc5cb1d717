use super::*;

#[test]
fn test_partial_file_keeps_defaults() {
    let config = SelfPlayConfig::from_toml_str("games = 5\nseed = 11\n").unwrap();
    assert_eq!(config.games, 5);
    assert_eq!(config.seed, Some(11));
    assert_eq!(config.depth, SelfPlayConfig::default().depth);
    assert_eq!(config.quiescence_depth, DEFAULT_QUIESCENCE_DEPTH);
    assert!(config.use_book);
    assert_eq!(config.output, None);
}

#[test]
fn test_empty_file_is_default() {
    assert_eq!(
        SelfPlayConfig::from_toml_str("").unwrap(),
        SelfPlayConfig::default()
    );
}

#[test]
fn test_full_file() {
    let text = r#"
        games = 3
        depth = 2
        quiescence_depth = 1
        max_plies = 40
        seed = 9
        use_book = false
        output = "out/report.json"
    "#;
    let config = SelfPlayConfig::from_toml_str(text).unwrap();
    assert_eq!(
        config,
        SelfPlayConfig {
            games: 3,
            depth: 2,
            quiescence_depth: 1,
            max_plies: 40,
            seed: Some(9),
            use_book: false,
            output: Some(PathBuf::from("out/report.json")),
        }
    );
}

#[test]
fn test_rejects_bad_input() {
    assert!(SelfPlayConfig::from_toml_str("depth = -1").is_err());
    assert!(SelfPlayConfig::from_toml_str("games = \"many\"").is_err());
    assert!(SelfPlayConfig::from_toml_str("time_per_move = 5").is_err());
}

#[test]
fn test_load_missing_file() {
    let err = SelfPlayConfig::load(Path::new("does/not/exist.toml")).unwrap_err();
    assert!(err.to_string().contains("does/not/exist.toml"));
}
