//! **gridpath-core** — rectangular 2D grid container and geometry primitives.
//!
//! This crate provides the foundational types for grid-based search and
//! simulation: an integer [`Point`], a four-way [`Direction`], and a generic
//! rectangular [`Grid`] with bounds-checked access, deterministic neighbor
//! queries, and row-major iteration.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::{Error, Result};
pub use geom::{Direction, Point};
pub use grid::{Grid, GridIter};
