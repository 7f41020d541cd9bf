//! Core types for the layout model.
//!
//! This module defines the entities placed on the canvas (rooms and tables),
//! their identifiers, and the small geometry types shared by the input layer.

use crate::error::LayoutError;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Identifiers
// ============================================================================

/// Identifier of a room. Allocated once, never reused or changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub u64);

/// Identifier of a table. Allocated once, never reused or changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableId(pub u64);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "room#{}", self.0)
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "table#{}", self.0)
    }
}

// ============================================================================
// Geometry
// ============================================================================

/// A 2D position in logical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

// ============================================================================
// Seat Count
// ============================================================================

/// Number of seats at a table, restricted to the options the edit panel offers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum SeatCount {
    Two,
    #[default]
    Four,
    Six,
    Eight,
}

impl SeatCount {
    /// Every selectable option, in display order.
    pub const ALL: [SeatCount; 4] = [Self::Two, Self::Four, Self::Six, Self::Eight];

    pub fn get(self) -> u32 {
        match self {
            Self::Two => 2,
            Self::Four => 4,
            Self::Six => 6,
            Self::Eight => 8,
        }
    }
}

impl TryFrom<u32> for SeatCount {
    type Error = LayoutError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Self::Two),
            4 => Ok(Self::Four),
            6 => Ok(Self::Six),
            8 => Ok(Self::Eight),
            other => Err(LayoutError::InvalidSeatCount(other)),
        }
    }
}

impl From<SeatCount> for u32 {
    fn from(seats: SeatCount) -> Self {
        seats.get()
    }
}

impl fmt::Display for SeatCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

// ============================================================================
// Entities
// ============================================================================

/// A named rectangular area on the canvas.
///
/// `x`/`y` is the top-left corner in canvas coordinates. The size is fixed
/// at creation; only the position changes afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub width: f32,
    pub height: f32,
    pub x: f32,
    pub y: f32,
}

impl Room {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

/// A seat marker placed on the canvas.
///
/// `room_id` records the room that was selected when the table was created.
/// It is plain metadata: moving the table out of that room does not update it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub id: TableId,
    pub x: f32,
    pub y: f32,
    pub seats: SeatCount,
    pub room_id: RoomId,
}

impl Table {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}
