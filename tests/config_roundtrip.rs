//! Configuration and profile file handling against temp directories.

use folio::config::{self, AppConfig, CONFIG_FILE_NAME};
use tempfile::tempdir;

#[test]
fn config_round_trips_through_toml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    let config = AppConfig {
        reduce_motion: true,
        profile_file: Some("me.toml".into()),
    };
    config::save_to_path(&config, &path).unwrap();

    let loaded = config::load_from(&path).unwrap();
    assert!(loaded.reduce_motion);
    assert_eq!(loaded.profile_file.as_deref(), Some("me.toml"));
}

#[test]
fn unknown_future_fields_are_tolerated() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "reduce_motion = true\nshiny_new_toggle = 3\n").unwrap();
    let loaded = config::load_from(&path).unwrap();
    assert!(loaded.reduce_motion);
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join(CONFIG_FILE_NAME);
    config::save_to_path(&AppConfig::default(), &path).unwrap();
    assert!(path.is_file());
}

#[test]
fn partial_profile_file_keeps_defaults_for_the_rest() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("profile.toml");
    std::fs::write(
        &path,
        "owner_name = \"Ada Lovelace\"\nrole = \"Engineer\"\n",
    )
    .unwrap();

    let profile = config::load_profile_from(&path).unwrap();
    assert_eq!(profile.owner_name, "Ada Lovelace");
    assert_eq!(profile.initials(), "AL");
    // Untouched fields fall back to the built-in content.
    assert_eq!(profile.nav_links.len(), 2);
    assert!(!profile.skills.is_empty());
}

#[test]
fn missing_profile_file_is_an_error() {
    let dir = tempdir().unwrap();
    let result = config::load_profile_from(&dir.path().join("absent.toml"));
    assert!(result.is_err());
}
