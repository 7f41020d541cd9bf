//! Unit tests for settings loading.

use crate::helpers::TestEditorBuilder;
use barplan::settings::{default_settings_path, EditorSettings, SettingsError};
use barplan::{RoomId, SeatCount};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_load_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(
        &path,
        r#"{"room_size": [400.0, 250.0], "table_position": [20.0, 30.0], "default_seats": 2}"#,
    )
    .unwrap();

    let settings = EditorSettings::load_from(&path).unwrap();
    assert_eq!(settings.room_size, (400.0, 250.0));
    assert_eq!(settings.table_position, (20.0, 30.0));
    assert_eq!(settings.default_seats, SeatCount::Two);
    assert_eq!(settings.room_position, (100.0, 100.0));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let result = EditorSettings::load_from(&dir.path().join("absent.json"));
    assert!(matches!(result, Err(SettingsError::Io { .. })));
}

#[test]
fn test_malformed_file_is_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        EditorSettings::load_from(&path),
        Err(SettingsError::Parse(_))
    ));
}

#[test]
fn test_out_of_set_default_seats_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"default_seats": 3}"#).unwrap();

    assert!(matches!(
        EditorSettings::load_from(&path),
        Err(SettingsError::Parse(_))
    ));
}

#[test]
fn test_negative_table_size_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"table_size": -1.0}"#).unwrap();

    assert!(matches!(
        EditorSettings::load_from(&path),
        Err(SettingsError::Invalid { field: "table_size", .. })
    ));
}

#[test]
fn test_settings_drive_creation_defaults() {
    let settings = EditorSettings {
        room_size: (100.0, 80.0),
        room_position: (5.0, 6.0),
        table_position: (7.0, 8.0),
        default_seats: SeatCount::Eight,
        ..Default::default()
    };
    let mut editor = TestEditorBuilder::new()
        .with_settings(settings)
        .selecting_room(RoomId(1))
        .build();

    let room = editor.add_room();
    let table = editor.add_table().unwrap();

    let room = editor.room(room).unwrap();
    assert_eq!((room.width, room.height, room.x, room.y), (100.0, 80.0, 5.0, 6.0));
    let table = editor.table(table).unwrap();
    assert_eq!((table.x, table.y, table.seats), (7.0, 8.0, SeatCount::Eight));
}

#[test]
fn test_default_path() {
    let path = default_settings_path();
    assert!(path.is_none() || path.unwrap().ends_with("barplan/settings.json"));
}
