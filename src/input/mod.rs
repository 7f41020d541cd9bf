//! Pointer input handling for the canvas.
//!
//! ## Architecture
//!
//! The drag controller is an explicit state machine (`DragState`) with a
//! single drag target. Pointer handlers are split by event:
//!
//! - `state` - Drag state machine enum and helper methods
//! - `coords` - Viewport to canvas coordinate conversion
//! - `pointer_down` - Selection and drag start
//! - `pointer_move` - Position updates for the dragged entity
//! - `pointer_up` - Drag termination

pub mod coords;
mod pointer_down;
mod pointer_move;
mod pointer_up;
mod state;

pub use coords::{CanvasBounds, CoordinateConverter};
pub use state::DragState;
