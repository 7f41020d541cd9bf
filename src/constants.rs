//! Application-wide constants.
//!
//! Centralizes creation defaults and marker geometry so the store, the hit
//! tester and the settings layer agree on the same numbers.

// ============================================================================
// Seeded Layout
// ============================================================================

/// Name of the room every new editor starts with
pub const INITIAL_ROOM_NAME: &str = "Main Hall";

/// Size of the seeded room (width, height)
pub const INITIAL_ROOM_SIZE: (f32, f32) = (300.0, 200.0);

/// Top-left position of the seeded room
pub const INITIAL_ROOM_POSITION: (f32, f32) = (50.0, 50.0);

// ============================================================================
// Room Defaults
// ============================================================================

/// Size of rooms created with "add room" (width, height)
pub const DEFAULT_ROOM_SIZE: (f32, f32) = (250.0, 180.0);

/// Top-left position of rooms created with "add room"
pub const DEFAULT_ROOM_POSITION: (f32, f32) = (100.0, 100.0);

/// Prefix for generated room names ("Room 2", "Room 3", ...)
pub const ROOM_NAME_PREFIX: &str = "Room";

// ============================================================================
// Table Defaults
// ============================================================================

/// Top-left position of tables created with "add table"
pub const DEFAULT_TABLE_POSITION: (f32, f32) = (150.0, 150.0);

/// Edge length of the square table marker in pixels
pub const TABLE_SIZE: f32 = 60.0;

// ============================================================================
// Settings
// ============================================================================

/// Directory name under the platform config dir
pub const SETTINGS_DIR_NAME: &str = "barplan";

/// Settings file name
pub const SETTINGS_FILE_NAME: &str = "settings.json";
