//! Pointer up handling - end the drag.

use crate::app::LayoutEditor;
use tracing::debug;

impl LayoutEditor {
    /// Pointer released anywhere on the canvas. Always returns to Idle.
    pub fn pointer_up(&mut self) {
        if self.drag.is_dragging() {
            debug!(drag = ?self.drag, "Drag finished");
        }
        self.drag.reset();
    }
}
