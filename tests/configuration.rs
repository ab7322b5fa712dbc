use nibbles::config::Config;
use nibbles_shared::Location;
use temp_dir::TempDir;

#[test]
fn test_missing_config_file_falls_back_to_seed_defaults() {
    let config = Config::load(Some("does-not-exist.toml".to_string())).unwrap();

    assert_eq!(config.observability.log_level, "info");
    assert_eq!(config.shelf_life.fresh.old_days, Some(7));
    assert_eq!(config.shelf_life.frozen.old_days, None);
    assert_eq!(config.synonyms.canonical("scallions"), Some("spring onions"));
    assert_eq!(config.location_hints.location_for("milk"), Location::Fridge);
    config.validate().unwrap();
}

#[test]
fn test_config_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("override.toml");
    std::fs::write(
        &path,
        r#"
[observability]
log_level = "debug"

[shelf_life.meat_fish]
old_days = 1
very_old_days = 2

[synonyms]
"capsicums" = "pepper"
"#,
    )
    .unwrap();

    let config = Config::load(Some(path.to_string_lossy().into_owned())).unwrap();
    assert_eq!(config.observability.log_level, "debug");
    assert_eq!(config.shelf_life.meat_fish.old_days, Some(1));
    // Unlisted categories keep their defaults
    assert_eq!(config.shelf_life.fresh.old_days, Some(7));
    assert_eq!(config.synonyms.canonical("capsicums"), Some("pepper"));
    config.validate().unwrap();
}

#[test]
fn test_validation_rejects_inverted_shelf_life_rule() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("bad.toml");
    std::fs::write(
        &path,
        r#"
[shelf_life.chilled]
old_days = 14
very_old_days = 10
"#,
    )
    .unwrap();

    let config = Config::load(Some(path.to_string_lossy().into_owned())).unwrap();
    assert!(config.validate().is_err());
}
