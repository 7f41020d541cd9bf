//! Coordinate conversion between the viewport and the canvas.
//!
//! Entity positions live in canvas space, with the origin at the canvas
//! element's own top-left corner. Pointer events arrive in viewport space.

use crate::types::Point;
use serde::{Deserialize, Serialize};

/// Where the canvas element currently sits in the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CanvasBounds {
    /// Viewport position of the canvas's top-left corner
    pub origin: Point,
}

impl CanvasBounds {
    pub const fn new(origin: Point) -> Self {
        Self { origin }
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a viewport position to canvas position
    #[inline]
    pub fn viewport_to_canvas(viewport_pos: Point, bounds: &CanvasBounds) -> Point {
        Point::new(
            viewport_pos.x - bounds.origin.x,
            viewport_pos.y - bounds.origin.y,
        )
    }

    /// Convert a canvas position to viewport position
    #[inline]
    pub fn canvas_to_viewport(canvas_pos: Point, bounds: &CanvasBounds) -> Point {
        Point::new(
            canvas_pos.x + bounds.origin.x,
            canvas_pos.y + bounds.origin.y,
        )
    }
}
