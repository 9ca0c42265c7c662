//! Search-space traits and the grid adapter.

use std::hash::Hash;

use gridpath_core::{Grid, Point};

/// A finite search domain with non-negative edge costs.
///
/// A state is whatever the search tracks distances for: a bare [`Point`]
/// for plain grid walks, or e.g. a `(Point, Direction)` pair when turning
/// in place carries its own cost. Both methods append into a buffer that
/// the caller clears beforehand.
pub trait SearchSpace {
    type State: Copy + Eq + Hash;

    /// Append every search state into `buf`. States must be distinct.
    fn states(&self, buf: &mut Vec<Self::State>);

    /// Append the weighted successors of `s` into `buf`. Costs must be
    /// non-negative.
    fn successors(&self, s: Self::State, buf: &mut Vec<(Self::State, i32)>);
}

/// [`SearchSpace`] over a [`Grid`] with blocked cells and a uniform step
/// cost.
///
/// A cell is a state iff `blocked` returns false for its value; moves go
/// to in-bounds, non-blocked neighbors (orthogonal by default, optionally
/// including diagonals). A blocked cell has no successors, so a search
/// seeded inside a wall reaches nothing else.
pub struct GridSpace<'a, T, F> {
    grid: &'a Grid<T>,
    blocked: F,
    step_cost: i32,
    diagonal: bool,
}

impl<'a, T, F: Fn(&T) -> bool> GridSpace<'a, T, F> {
    /// Wrap `grid` with the given blocked-cell predicate. Steps cost 1 and
    /// moves are orthogonal; see [`with_step_cost`](Self::with_step_cost)
    /// and [`with_diagonals`](Self::with_diagonals).
    pub fn new(grid: &'a Grid<T>, blocked: F) -> Self {
        Self {
            grid,
            blocked,
            step_cost: 1,
            diagonal: false,
        }
    }

    /// Use a different uniform cost per move.
    pub fn with_step_cost(mut self, cost: i32) -> Self {
        self.step_cost = cost;
        self
    }

    /// Also allow the four diagonal moves.
    pub fn with_diagonals(mut self) -> Self {
        self.diagonal = true;
        self
    }

    fn is_blocked(&self, p: Point) -> bool {
        self.grid.get(p).map(&self.blocked).unwrap_or(true)
    }
}

impl<'a, T, F: Fn(&T) -> bool> SearchSpace for GridSpace<'a, T, F> {
    type State = Point;

    fn states(&self, buf: &mut Vec<Point>) {
        for (p, v) in self.grid.iter() {
            if !(self.blocked)(v) {
                buf.push(p);
            }
        }
    }

    fn successors(&self, s: Point, buf: &mut Vec<(Point, i32)>) {
        if self.is_blocked(s) {
            return;
        }
        if self.diagonal {
            for n in self.grid.neighbors8(s) {
                if !self.is_blocked(n) {
                    buf.push((n, self.step_cost));
                }
            }
        } else {
            for n in self.grid.neighbors(s) {
                if !self.is_blocked(n) {
                    buf.push((n, self.step_cost));
                }
            }
        }
    }
}
