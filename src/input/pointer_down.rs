//! Pointer down handling - selection and drag initiation.

use crate::app::LayoutEditor;
use crate::input::coords::{CanvasBounds, CoordinateConverter};
use crate::profile_scope;
use crate::spatial_index::HitTarget;
use crate::types::{Point, RoomId, TableId};
use tracing::{debug, trace};

impl LayoutEditor {
    /// Pointer pressed over a room: select it and bind it to pointer moves.
    ///
    /// The room does not move until the first pointer move.
    pub fn pointer_down_on_room(&mut self, id: RoomId) {
        debug!(room = %id, "Room drag started");
        self.drag.start_room_drag(id);
        self.selection.select_room(id);
    }

    /// Pointer pressed over a table: select it and bind it to pointer moves.
    pub fn pointer_down_on_table(&mut self, id: TableId) {
        debug!(table = %id, "Table drag started");
        self.drag.start_table_drag(id);
        self.selection.select_table(id);
    }

    /// Pointer pressed at a viewport position: route to the topmost entity.
    ///
    /// Returns the entity that received the press, or `None` on empty canvas,
    /// in which case nothing changes.
    pub fn pointer_down_at(&mut self, viewport_pos: Point, bounds: &CanvasBounds) -> Option<HitTarget> {
        profile_scope!("pointer_down_at");

        let canvas_pos = CoordinateConverter::viewport_to_canvas(viewport_pos, bounds);
        let Some(target) = self.hit_test(canvas_pos) else {
            trace!(x = canvas_pos.x, y = canvas_pos.y, "Pointer down on empty canvas");
            return None;
        };

        match target {
            HitTarget::Room(id) => self.pointer_down_on_room(id),
            HitTarget::Table(id) => self.pointer_down_on_table(id),
        }
        Some(target)
    }
}
