//! Error types for layout editing.
//!
//! Most editor operations are total: unknown ids and missing selections are
//! silent no-ops. Only values that would break an entity invariant are
//! reported.

use thiserror::Error;

/// Errors raised at the store boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Seat count outside the fixed option set
    #[error("Invalid seat count: {0} (expected one of 2, 4, 6, 8)")]
    InvalidSeatCount(u32),
}

/// Result type alias for layout operations
pub type LayoutResult<T> = Result<T, LayoutError>;
