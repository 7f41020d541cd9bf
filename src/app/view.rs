//! Read-only view state for the render layer and the edit panel.

use super::LayoutEditor;
use crate::input::DragState;
use crate::selection::SelectionState;
use crate::spatial_index::HitTarget;
use crate::types::{Point, Room, RoomId, SeatCount, Table, TableId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::rc::Rc;

/// Everything the canvas needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub rooms: Vec<Room>,
    pub tables: Vec<Table>,
    pub selected_room_id: Option<RoomId>,
    pub selected_table_id: Option<TableId>,
    pub drag: DragState,
}

/// State of the seat-count control. Only exists while a table is selected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeatPanel {
    pub table_id: TableId,
    /// Current value, used to pre-populate the control
    pub seats: SeatCount,
    pub options: [SeatCount; 4],
}

impl LayoutEditor {
    /// Room collection. Compare with [`Rc::ptr_eq`] to detect change.
    pub fn rooms(&self) -> &Rc<Vec<Room>> {
        self.store.rooms()
    }

    /// Table collection. Compare with [`Rc::ptr_eq`] to detect change.
    pub fn tables(&self) -> &Rc<Vec<Table>> {
        self.store.tables()
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.store.room(id)
    }

    pub fn table(&self, id: TableId) -> Option<&Table> {
        self.store.table(id)
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn selected_room(&self) -> Option<RoomId> {
        self.selection.selected_room()
    }

    pub fn selected_table(&self) -> Option<TableId> {
        self.selection.selected_table()
    }

    pub fn is_room_selected(&self, id: RoomId) -> bool {
        self.selection.is_room_selected(id)
    }

    pub fn is_table_selected(&self, id: TableId) -> bool {
        self.selection.is_table_selected(id)
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            rooms: self.store.rooms().to_vec(),
            tables: self.store.tables().to_vec(),
            selected_room_id: self.selection.selected_room(),
            selected_table_id: self.selection.selected_table(),
            drag: self.drag,
        }
    }

    /// The edit panel for the selected table, or `None` to hide it.
    pub fn seat_panel(&self) -> Option<SeatPanel> {
        let table = self.store.table(self.selection.selected_table()?)?;
        Some(SeatPanel {
            table_id: table.id,
            seats: table.seats,
            options: SeatCount::ALL,
        })
    }

    /// Topmost entity at a canvas point.
    ///
    /// Tables paint above rooms, and later entities above earlier ones of
    /// the same kind, so candidates are checked in reverse paint order.
    pub fn hit_test(&self, canvas_pos: Point) -> Option<HitTarget> {
        let candidates: HashSet<HitTarget> = self
            .hit_index
            .query_point(canvas_pos.x, canvas_pos.y)
            .into_iter()
            .collect();
        if candidates.is_empty() {
            return None;
        }

        let tables = self
            .store
            .tables()
            .iter()
            .rev()
            .map(|table| HitTarget::Table(table.id));
        let rooms = self
            .store
            .rooms()
            .iter()
            .rev()
            .map(|room| HitTarget::Room(room.id));

        tables.chain(rooms).find(|target| candidates.contains(target))
    }
}
