//! Edit panel commands and direct store operations.

use super::LayoutEditor;
use crate::error::LayoutResult;
use crate::spatial_index::HitTarget;
use crate::types::{RoomId, SeatCount, TableId};
use tracing::trace;

impl LayoutEditor {
    /// "Add room": append a room with the configured defaults.
    pub fn add_room(&mut self) -> RoomId {
        let id = self.store.create_room();
        self.index_room(id);
        id
    }

    /// "Add table": append a table under the selected room.
    ///
    /// Does nothing when no room is selected.
    pub fn add_table(&mut self) -> Option<TableId> {
        let id = self.store.create_table(self.selection.selected_room())?;
        self.index_table(id);
        Some(id)
    }

    /// "Set seats" from the edit panel, applied to the selected table.
    ///
    /// Values outside {2, 4, 6, 8} are rejected before anything changes.
    /// Without a selected table the command is a no-op.
    pub fn set_selected_table_seats(&mut self, seats: u32) -> LayoutResult<()> {
        let seats = SeatCount::try_from(seats)?;
        match self.selection.selected_table() {
            Some(id) => {
                self.store.update_seats(id, seats);
            }
            None => trace!("Set seats ignored: no table selected"),
        }
        Ok(())
    }

    pub fn update_seats(&mut self, id: TableId, seats: SeatCount) -> bool {
        self.store.update_seats(id, seats)
    }

    pub fn update_room_position(&mut self, id: RoomId, x: f32, y: f32) -> bool {
        let updated = self.store.update_room_position(id, x, y);
        if updated {
            self.hit_index.update_position(HitTarget::Room(id), (x, y));
        }
        updated
    }

    pub fn update_table_position(&mut self, id: TableId, x: f32, y: f32) -> bool {
        let updated = self.store.update_table_position(id, x, y);
        if updated {
            self.hit_index.update_position(HitTarget::Table(id), (x, y));
        }
        updated
    }

    /// Select a room without starting a drag (a click).
    pub fn select_room(&mut self, id: RoomId) {
        self.selection.select_room(id);
    }

    /// Select a table without starting a drag (a click).
    pub fn select_table(&mut self, id: TableId) {
        self.selection.select_table(id);
    }
}
