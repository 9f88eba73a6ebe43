use rasreport::config::Config;
use rasreport::errors::AppError;
use std::fs;

#[test]
fn test_missing_config_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let cfg = Config::load_from(&dir.path().join("rasreport.conf")).unwrap();

    assert_eq!(cfg.hours_per_workday, 8);
    assert_eq!(cfg.log_level, "warn");
    assert!(cfg.database.ends_with("ras.sqlite"));
}

#[test]
fn test_relative_database_is_resolved_next_to_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rasreport.conf");
    fs::write(&path, "database: data/ras.sqlite\nhours_per_workday: 7\n").unwrap();

    let cfg = Config::load_from(&path).unwrap();

    assert_eq!(
        cfg.database,
        dir.path().join("data/ras.sqlite").to_string_lossy()
    );
    assert_eq!(cfg.hours_per_workday, 7);
    assert_eq!(cfg.log_level, "warn");
}

#[test]
fn test_malformed_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rasreport.conf");
    fs::write(&path, "hours_per_workday: [not, a, number]\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();

    assert!(matches!(err, AppError::Config(_)));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_config_round_trips_through_yaml() {
    let cfg = Config {
        database: "/var/lib/ras/ras.sqlite".to_string(),
        hours_per_workday: 6,
        log_level: "debug".to_string(),
    };

    let yaml = cfg.to_yaml().unwrap();

    assert!(yaml.contains("hours_per_workday: 6"));
    assert!(yaml.contains("/var/lib/ras/ras.sqlite"));
}
