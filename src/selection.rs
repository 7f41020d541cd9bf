//! Selection tracking.
//!
//! One slot per entity kind. The slots are independent: selecting a table
//! leaves the room selection alone and vice versa. There is no deselect;
//! the last selection of each kind wins.

use crate::types::{RoomId, TableId};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    room: Option<RoomId>,
    table: Option<TableId>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the room slot. The id is not checked against the store.
    pub fn select_room(&mut self, id: RoomId) {
        debug!(room = %id, "Room selected");
        self.room = Some(id);
    }

    /// Overwrite the table slot. The id is not checked against the store.
    pub fn select_table(&mut self, id: TableId) {
        debug!(table = %id, "Table selected");
        self.table = Some(id);
    }

    pub fn selected_room(&self) -> Option<RoomId> {
        self.room
    }

    pub fn selected_table(&self) -> Option<TableId> {
        self.table
    }

    pub fn is_room_selected(&self, id: RoomId) -> bool {
        self.room == Some(id)
    }

    pub fn is_table_selected(&self, id: TableId) -> bool {
        self.table == Some(id)
    }
}
