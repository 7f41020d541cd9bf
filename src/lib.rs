//! Barplan - an interactive floor layout editor model.
//!
//! Rooms and tables are placed on a canvas, dragged around with the pointer
//! and edited through a seat-count control bound to the selected table. This
//! crate holds the whole interactive model; rendering is left to the caller,
//! which treats [`LayoutEditor::snapshot`] as the single source of truth and
//! forwards pointer events back in.

pub mod app;
pub mod constants;
pub mod error;
pub mod events;
pub mod input;
pub mod perf;
pub mod selection;
pub mod settings;
pub mod spatial_index;
pub mod store;
pub mod types;

pub use app::{LayoutEditor, LayoutSnapshot, SeatPanel};
pub use error::LayoutError;
pub use events::LayoutEvent;
pub use types::{Point, Room, RoomId, SeatCount, Table, TableId};
