//! Input events and edit panel commands as data.
//!
//! The render layer can either call the editor methods directly or hand it
//! a [`LayoutEvent`]. The serialized form is what the headless driver reads,
//! one JSON object per line:
//!
//! ```text
//! {"event":"select_room","room_id":1}
//! {"event":"add_table"}
//! {"event":"pointer_down_on_table","table_id":1}
//! {"event":"pointer_move","position":{"x":200.0,"y":220.0}}
//! {"event":"pointer_up"}
//! ```

use crate::app::LayoutEditor;
use crate::error::LayoutResult;
use crate::input::CanvasBounds;
use crate::types::{Point, RoomId, TableId};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LayoutEvent {
    AddRoom,
    AddTable,
    /// Seat count chosen in the edit panel for the selected table
    SetSeats { seats: u32 },
    SelectRoom { room_id: RoomId },
    SelectTable { table_id: TableId },
    PointerDownOnRoom { room_id: RoomId },
    PointerDownOnTable { table_id: TableId },
    /// Press at a viewport position, routed by hit testing
    PointerDown {
        position: Point,
        #[serde(default)]
        canvas: CanvasBounds,
    },
    PointerMove {
        position: Point,
        #[serde(default)]
        canvas: CanvasBounds,
    },
    PointerUp,
}

impl LayoutEditor {
    /// Apply one event. Only an out-of-range seat count is an error.
    pub fn apply(&mut self, event: &LayoutEvent) -> LayoutResult<()> {
        match event {
            LayoutEvent::AddRoom => {
                self.add_room();
            }
            LayoutEvent::AddTable => {
                self.add_table();
            }
            LayoutEvent::SetSeats { seats } => self.set_selected_table_seats(*seats)?,
            LayoutEvent::SelectRoom { room_id } => self.select_room(*room_id),
            LayoutEvent::SelectTable { table_id } => self.select_table(*table_id),
            LayoutEvent::PointerDownOnRoom { room_id } => self.pointer_down_on_room(*room_id),
            LayoutEvent::PointerDownOnTable { table_id } => self.pointer_down_on_table(*table_id),
            LayoutEvent::PointerDown { position, canvas } => {
                self.pointer_down_at(*position, canvas);
            }
            LayoutEvent::PointerMove { position, canvas } => {
                self.pointer_move(*position, canvas);
            }
            LayoutEvent::PointerUp => self.pointer_up(),
        }
        Ok(())
    }
}
