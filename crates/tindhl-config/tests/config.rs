//! Integration tests for config loading and first-run creation.

use std::fs;

use tempfile::tempdir;
use tindhl_config::{
    CONFIG_FILENAME, ConfigError, ConfigStatus, default_sender, load_config, load_or_create,
};

#[test]
fn first_run_creates_placeholder_and_stops() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join(CONFIG_FILENAME);

    let status = load_or_create(&path).unwrap();

    assert_eq!(status, ConfigStatus::Created(path.clone()));
    assert!(path.is_file());
    let config = load_config(&path).unwrap();
    assert_eq!(config.sender, default_sender());
}

#[test]
fn existing_config_is_loaded() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILENAME);
    fs::write(
        &path,
        r#"
[sender]
name = "Tinker Shop"
name2 = ""
street = "Werkstattweg"
"house number" = "7b"
zipcode = "80331"
city = "Muenchen"
country = "DEU"
email = "shop@example.com"
"#,
    )
    .unwrap();

    let ConfigStatus::Loaded(config) = load_or_create(&path).unwrap() else {
        panic!("expected existing config to load");
    };
    assert_eq!(config.sender.name, "Tinker Shop");
    assert_eq!(config.sender.name2, "");
    assert_eq!(config.sender.house_number, "7b");
    assert_eq!(config.sender.postal_code, "80331");
}

#[test]
fn missing_key_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILENAME);
    fs::write(&path, "[sender]\nname = \"Only Name\"\n").unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains(CONFIG_FILENAME));
}
