//! Pointer move handling - entity dragging.
//!
//! Dragging is direct assignment: the dragged entity's top-left corner is
//! set to the pointer's canvas position on every move, with no grab offset.
//! Grabbing a room away from its corner therefore makes it jump so that
//! the corner lands under the pointer.

use crate::app::LayoutEditor;
use crate::input::DragState;
use crate::input::coords::{CanvasBounds, CoordinateConverter};
use crate::profile_scope;
use crate::types::Point;
use tracing::trace;

impl LayoutEditor {
    /// Pointer moved over the canvas. Returns true if an entity moved.
    pub fn pointer_move(&mut self, viewport_pos: Point, bounds: &CanvasBounds) -> bool {
        // Early exit: most moves happen with no drag active
        if self.drag.is_idle() {
            return false;
        }

        profile_scope!("pointer_move");

        let canvas_pos = CoordinateConverter::viewport_to_canvas(viewport_pos, bounds);
        trace!(x = canvas_pos.x, y = canvas_pos.y, "Drag move");

        let drag = self.drag;
        match drag {
            DragState::Idle => false,
            DragState::DraggingRoom { room_id } => {
                self.update_room_position(room_id, canvas_pos.x, canvas_pos.y)
            }
            DragState::DraggingTable { table_id } => {
                self.update_table_position(table_id, canvas_pos.x, canvas_pos.y)
            }
        }
    }
}
