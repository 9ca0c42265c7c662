//! **gridpath-paths** — shortest-path search over 2D grids.
//!
//! This crate provides the search half of the *gridpath* workspace:
//!
//! - [`MinQueue`] — an indexed binary min-heap with O(log n)
//!   decrease-priority and O(1) membership lookup
//! - [`dijkstra`] — single-source shortest distances with full
//!   predecessor tracking, driven by the queue
//! - [`SearchSpace`] — the trait a search domain implements; the
//!   [`GridSpace`] adapter covers the common case of a
//!   [`Grid`](gridpath_core::Grid) with blocked cells and uniform step
//!   cost
//! - [`manhattan`] / [`chebyshev`] distance helpers
//!
//! States are not limited to bare positions: anything `Copy + Eq + Hash`
//! works, so direction-augmented searches (where turning in place has its
//! own cost) use `(Point, Direction)` states with the same machinery.

mod dijkstra;
mod distance;
mod error;
mod queue;
mod traits;

pub use dijkstra::{ShortestPaths, UNREACHABLE, dijkstra};
pub use distance::{chebyshev, manhattan};
pub use error::{Error, Result};
pub use queue::MinQueue;
pub use traits::{GridSpace, SearchSpace};
