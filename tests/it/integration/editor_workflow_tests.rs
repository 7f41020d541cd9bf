//! Editor Workflow Integration Tests

use crate::helpers::{assert_table_at, canvas_at, viewport_for, TestEditorBuilder};
use barplan::{LayoutEditor, RoomId, SeatCount};

#[test]
fn test_add_table_without_room_selection() {
    let mut editor = LayoutEditor::default();
    assert_eq!(editor.room(RoomId(1)).map(|room| (room.x, room.y)), Some((50.0, 50.0)));

    assert_eq!(editor.add_table(), None);
    assert!(editor.tables().is_empty());
}

#[test]
fn test_add_table_in_selected_room() {
    let mut editor = LayoutEditor::default();
    editor.select_room(RoomId(1));

    let table = editor.add_table().unwrap();

    assert_eq!(editor.tables().len(), 1);
    let table = editor.table(table).unwrap();
    assert_eq!(table.room_id, RoomId(1));
    assert_eq!(table.seats, SeatCount::Four);
    assert_eq!((table.x, table.y), (150.0, 150.0));
}

#[test]
fn test_drag_table_then_release() {
    let mut editor = LayoutEditor::default();
    editor.select_room(RoomId(1));
    let table = editor.add_table().unwrap();
    let canvas = canvas_at(24.0, 96.0);

    editor.pointer_down_on_table(table);
    editor.pointer_move(viewport_for(&canvas, 200.0, 220.0), &canvas);
    assert_table_at(&editor, table, 200.0, 220.0);

    editor.pointer_up();
    editor.pointer_move(viewport_for(&canvas, 400.0, 400.0), &canvas);
    assert_table_at(&editor, table, 200.0, 220.0);
}

#[test]
fn test_set_seats_on_selected_table() {
    let mut editor = TestEditorBuilder::new()
        .with_tables_in(RoomId(1), 3)
        .build();
    let ids: Vec<_> = editor.tables().iter().map(|table| table.id).collect();

    editor.select_table(ids[1]);
    editor.set_selected_table_seats(6).unwrap();

    assert_eq!(editor.table(ids[0]).unwrap().seats, SeatCount::Four);
    assert_eq!(editor.table(ids[1]).unwrap().seats, SeatCount::Six);
    assert_eq!(editor.table(ids[2]).unwrap().seats, SeatCount::Four);
    assert_eq!(editor.seat_panel().unwrap().seats, SeatCount::Six);
}

#[test]
fn test_click_selects_without_drag() {
    let mut editor = TestEditorBuilder::new().with_tables_in(RoomId(1), 1).build();
    let table = editor.tables()[0].id;

    editor.select_table(table);

    assert!(editor.drag_state().is_idle());
    assert_eq!(editor.seat_panel().map(|panel| panel.table_id), Some(table));
}

#[test]
fn test_full_session() {
    let mut editor = LayoutEditor::default();
    let canvas = canvas_at(0.0, 60.0);

    // Drag the hall by its body, then add a second room and drag that
    editor.pointer_down_at(viewport_for(&canvas, 100.0, 100.0), &canvas);
    editor.pointer_move(viewport_for(&canvas, 20.0, 20.0), &canvas);
    editor.pointer_up();

    let patio = editor.add_room();
    editor.pointer_down_on_room(patio);
    editor.pointer_move(viewport_for(&canvas, 400.0, 200.0), &canvas);
    editor.pointer_up();

    // New table lands under the last selected room
    let table = editor.add_table().unwrap();
    assert_eq!(editor.table(table).unwrap().room_id, patio);

    // Press on the table: it is drawn above the hall
    editor.pointer_down_at(viewport_for(&canvas, 170.0, 170.0), &canvas);
    editor.pointer_move(viewport_for(&canvas, 450.0, 250.0), &canvas);
    editor.pointer_up();
    editor.set_selected_table_seats(8).unwrap();

    let snapshot = editor.snapshot();
    assert_eq!(snapshot.rooms.len(), 2);
    assert_eq!((snapshot.rooms[0].x, snapshot.rooms[0].y), (20.0, 20.0));
    assert_eq!((snapshot.rooms[1].x, snapshot.rooms[1].y), (400.0, 200.0));
    assert_eq!(snapshot.tables.len(), 1);
    assert_eq!((snapshot.tables[0].x, snapshot.tables[0].y), (450.0, 250.0));
    assert_eq!(snapshot.tables[0].seats, SeatCount::Eight);
    assert_eq!(snapshot.selected_room_id, Some(patio));
    assert_eq!(snapshot.selected_table_id, Some(table));
}
