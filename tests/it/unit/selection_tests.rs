//! Unit tests for selection tracking.

use crate::helpers::editor_with_table;
use barplan::{LayoutEditor, RoomId, TableId};

#[test]
fn test_nothing_selected_initially() {
    let editor = LayoutEditor::default();
    assert_eq!(editor.selected_room(), None);
    assert_eq!(editor.selected_table(), None);
}

#[test]
fn test_selecting_table_keeps_room() {
    let (mut editor, table) = editor_with_table();
    editor.select_table(table);

    assert_eq!(editor.selected_room(), Some(RoomId(1)));
    assert!(editor.is_table_selected(table));
}

#[test]
fn test_selecting_room_keeps_table() {
    let (mut editor, table) = editor_with_table();
    editor.select_table(table);
    let second = editor.add_room();
    editor.select_room(second);

    assert_eq!(editor.selected_table(), Some(table));
    assert!(editor.is_room_selected(second));
    assert!(!editor.is_room_selected(RoomId(1)));
}

#[test]
fn test_selection_is_not_validated() {
    let mut editor = LayoutEditor::default();
    editor.select_table(TableId(99));

    assert_eq!(editor.selected_table(), Some(TableId(99)));
    // No such table, so the edit panel stays hidden
    assert!(editor.seat_panel().is_none());
}

#[test]
fn test_dragging_room_keeps_table_selection() {
    let (mut editor, table) = editor_with_table();
    editor.select_table(table);

    editor.pointer_down_on_room(RoomId(1));
    assert_eq!(editor.selected_table(), Some(table));
}
