//! Error types for grid construction and access.

use crate::geom::Point;

/// Errors raised by [`Grid`](crate::Grid) operations.
///
/// All of these indicate a contract violation at the call site (bad
/// coordinates, malformed input rows); none are transient.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A position outside `[0, width) × [0, height)` was accessed.
    #[error("position {pos} out of bounds for {width}x{height} grid")]
    OutOfBounds {
        pos: Point,
        width: i32,
        height: i32,
    },

    /// No cell satisfied a uniqueness predicate.
    #[error("no cell matches the predicate")]
    NotFound,

    /// Input rows have unequal lengths.
    #[error("row {row} has length {actual}, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A grid was constructed with non-positive dimensions.
    #[error("invalid grid size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
