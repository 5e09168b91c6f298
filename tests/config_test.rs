//! Integration tests for Settings loading from an explicit config file.
//!
//! These run without a global config (temp directories only) and must not
//! set RANDTREE_* variables; see config_env_test.rs for env overrides.

use std::fs;

use tempfile::TempDir;

use randtree::application::ApplicationError;
use randtree::config::Settings;

#[test]
fn given_no_config_file_when_load_then_defaults() {
    let settings = Settings::load(None).expect("load settings");
    assert_eq!(settings.max_depth, 5);
    assert_eq!(settings.min_width, 1);
    assert_eq!(settings.max_width, 2);
    assert_eq!(settings.root, "0");
}

#[test]
fn given_partial_config_file_when_load_then_overrides_only_given_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("randtree.toml");
    fs::write(
        &path,
        r#"
max_depth = 2
max_width = 4
seed = 7
"#,
    )
    .unwrap();

    let settings = Settings::load(Some(&path)).expect("load settings");

    assert_eq!(settings.max_depth, 2);
    assert_eq!(settings.max_width, 4);
    assert_eq!(settings.seed, Some(7));
    assert_eq!(settings.min_width, 1, "unspecified key keeps default");
}

#[test]
fn given_missing_config_file_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let result = Settings::load(Some(&dir.path().join("nope.toml")));
    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_malformed_config_file_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "max_depth = \"deep\"\n").unwrap();

    let err = Settings::load(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("bad.toml"));
}

#[test]
fn given_settings_when_to_toml_then_parses_back() {
    let settings = Settings {
        seed: Some(3),
        ..Default::default()
    };
    let text = settings.to_toml().unwrap();
    let parsed: Settings = toml::from_str(&text).unwrap();
    assert_eq!(parsed, settings);
}
