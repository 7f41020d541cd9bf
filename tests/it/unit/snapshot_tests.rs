//! Snapshot tests using the insta crate.
//!
//! These pin the serialized view state handed to the render layer. To
//! update after an intentional change:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::{canvas_at, editor_with_table};
use barplan::{LayoutEditor, Point};

fn pretty<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap()
}

#[test]
fn snapshot_initial_layout() {
    let editor = LayoutEditor::default();
    insta::assert_snapshot!(pretty(&editor.snapshot()), @r#"
    {
      "rooms": [
        {
          "id": 1,
          "name": "Main Hall",
          "width": 300.0,
          "height": 200.0,
          "x": 50.0,
          "y": 50.0
        }
      ],
      "tables": [],
      "selected_room_id": null,
      "selected_table_id": null,
      "drag": {
        "state": "idle"
      }
    }
    "#);
}

#[test]
fn snapshot_layout_mid_drag() {
    let (mut editor, table) = editor_with_table();
    editor.pointer_down_on_table(table);
    editor.pointer_move(Point::new(250.0, 270.0), &canvas_at(50.0, 50.0));

    insta::assert_snapshot!(pretty(&editor.snapshot()), @r#"
    {
      "rooms": [
        {
          "id": 1,
          "name": "Main Hall",
          "width": 300.0,
          "height": 200.0,
          "x": 50.0,
          "y": 50.0
        }
      ],
      "tables": [
        {
          "id": 1,
          "x": 200.0,
          "y": 220.0,
          "seats": 4,
          "room_id": 1
        }
      ],
      "selected_room_id": 1,
      "selected_table_id": 1,
      "drag": {
        "state": "dragging_table",
        "table_id": 1
      }
    }
    "#);
}

#[test]
fn snapshot_seat_panel() {
    let (mut editor, table) = editor_with_table();
    editor.select_table(table);
    editor.set_selected_table_seats(6).unwrap();

    insta::assert_snapshot!(pretty(&editor.seat_panel()), @r#"
    {
      "table_id": 1,
      "seats": 6,
      "options": [
        2,
        4,
        6,
        8
      ]
    }
    "#);
}
