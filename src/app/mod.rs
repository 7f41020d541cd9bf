//! Application module - the layout editor and its operations.
//!
//! - `state` - The LayoutEditor struct and constructors
//! - `commands` - Edit panel commands (add room/table, set seats, select)
//! - `view` - Snapshot, seat panel and hit testing for the render layer
//!
//! Pointer handling lives in the `input` module.

mod commands;
mod state;
mod view;

pub use state::LayoutEditor;
pub use view::{LayoutSnapshot, SeatPanel};
