use std::fs;
use std::path::Path;
use std::time::Duration;

use riskpulse::error::{ConfigError, Error};
use riskpulse::infrastructure::config::Config;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("riskpulse.toml");
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn config_file_drives_engine_settings() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
database = "data/risk.db"

[engine]
fx_window = 14
repository_timeout_ms = 250

[alerts]
critical_index = 30.0
extreme_inflation = 40.0
"#,
    );

    let config = Config::resolve(Some(&path)).unwrap();
    let settings = config.engine_settings();

    assert_eq!(settings.fx_window, 14);
    assert_eq!(settings.repository_timeout, Duration::from_millis(250));
    assert_eq!(settings.alerts.critical_index, 30.0);
    assert_eq!(settings.alerts.extreme_inflation, 40.0);
    assert_eq!(settings.alerts.drop_points, 15.0);
}

#[test]
fn config_rejects_negative_drop_threshold() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[alerts]\ndrop_points = -5.0\n");

    match Config::load(&path) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "alerts.drop_points",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid drop_points error, got {err}"),
        Ok(_) => panic!("Expected invalid drop_points error, got Ok"),
    }
}

#[test]
fn explicit_config_path_must_exist() {
    let result = Config::resolve(Some(Path::new("/nonexistent/riskpulse.toml")));
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::ReadFile(_)))
    ));
}

#[test]
fn unknown_keys_are_ignored() {
    let config = Config::parse_toml("[engine]\nfx_window = 7\nlegacy_mode = true\n").unwrap();
    assert_eq!(config.engine.fx_window, 7);
}
