//! Unit tests for the SettingsEngine public API.
//!
//! Validates default loading when no file exists, persistence across engine
//! instances, and the error on a malformed settings file.

use linkshelf::services::settings::{ClientSettings, SettingsEngine, SettingsEngineTrait};
use linkshelf::types::errors::SettingsError;
use tempfile::TempDir;

/// Helper: create a SettingsEngine backed by a temp directory that lives for
/// the duration of the test (the caller holds the `TempDir` handle).
fn engine_in_temp(dir: &TempDir) -> SettingsEngine {
    let path = dir
        .path()
        .join("settings.json")
        .to_string_lossy()
        .to_string();
    SettingsEngine::new(Some(path))
}

/// When no config file exists on disk, `load()` must return the built-in
/// defaults so the client can start without prior configuration.
#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let settings = engine.load().unwrap();

    assert_eq!(settings, ClientSettings::default());
    assert_eq!(settings.server_url, "http://localhost:5000");
    assert_eq!(settings.request_timeout_ms, None);
}

/// A saved server URL must be visible to a completely new engine instance
/// reading the same file.
#[test]
fn test_save_persists_across_instances() {
    let dir = TempDir::new().unwrap();

    {
        let mut engine = engine_in_temp(&dir);
        engine.load().unwrap();
        engine.set_server_url("http://bookmarks.example:8080");
        engine.save().unwrap();
    }

    let mut fresh = engine_in_temp(&dir);
    let settings = fresh.load().unwrap();
    assert_eq!(settings.server_url, "http://bookmarks.example:8080");
}

/// A malformed settings file is a serialization error, not silent defaults.
#[test]
fn test_malformed_file_is_serialization_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    let mut engine = SettingsEngine::new(Some(path.to_string_lossy().to_string()));
    match engine.load() {
        Err(SettingsError::SerializationError(_)) => {}
        other => panic!("expected SerializationError, got {:?}", other.map(|_| ())),
    }
}

/// `save()` creates missing parent directories.
#[test]
fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir
        .path()
        .join("nested")
        .join("deeper")
        .join("settings.json");

    let engine = SettingsEngine::new(Some(path.to_string_lossy().to_string()));
    engine.save().unwrap();

    assert!(path.exists());
}
