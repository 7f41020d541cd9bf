//! Drag state machine - which single entity the pointer is moving.
//!
//! ## State Transitions
//!
//! ```text
//! Any  -> DraggingRoom     (pointer down on a room)
//! Any  -> DraggingTable    (pointer down on a table)
//! Any  -> Idle             (pointer up anywhere on the canvas)
//! ```
//!
//! A single tagged state replaces separate room/table slots, so one pointer
//! stream can never move two entities at once. A second pointer-down while
//! a drag is active simply retargets it.

use crate::types::{RoomId, TableId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DragState {
    /// No drag in progress
    #[default]
    Idle,

    /// A room follows the pointer
    DraggingRoom { room_id: RoomId },

    /// A table follows the pointer
    DraggingTable { table_id: TableId },
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if any entity is bound to pointer moves
    pub fn is_dragging(&self) -> bool {
        !self.is_idle()
    }

    /// Get the room being dragged, if any
    pub fn dragged_room(&self) -> Option<RoomId> {
        match self {
            Self::DraggingRoom { room_id } => Some(*room_id),
            _ => None,
        }
    }

    /// Get the table being dragged, if any
    pub fn dragged_table(&self) -> Option<TableId> {
        match self {
            Self::DraggingTable { table_id } => Some(*table_id),
            _ => None,
        }
    }

    pub fn start_room_drag(&mut self, room_id: RoomId) {
        *self = Self::DraggingRoom { room_id };
    }

    pub fn start_table_drag(&mut self, table_id: TableId) {
        *self = Self::DraggingTable { table_id };
    }

    /// Reset to Idle state
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
