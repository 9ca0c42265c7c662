//! The [`Grid`] type — a rectangular 2D array of cell values.
//!
//! A `Grid<T>` owns its cell storage. Cloning yields a fully independent
//! copy, so "what-if" variants (e.g. testing many single-obstacle
//! additions) never disturb the original.

use crate::error::{Error, Result};
use crate::geom::Point;

/// A rectangular, immutable-size, mutable-content 2D array of cells.
///
/// Coordinates are zero-based `(x, y)` with `x` as column and `y` as row.
/// All access is bounds-checked; out-of-range positions are reported as
/// [`Error::OutOfBounds`] rather than silently ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid<T> {
    width: i32,
    height: i32,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Create a new grid of the given dimensions, filled with `fill`.
    pub fn new(width: i32, height: i32, fill: T) -> Result<Self>
    where
        T: Clone,
    {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidSize { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![fill; (width as usize) * (height as usize)],
        })
    }

    /// Build a grid from parsed rows.
    ///
    /// Fails with [`Error::Ragged`] if the rows have unequal lengths and
    /// with [`Error::InvalidSize`] if there are no rows or no columns.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(Error::InvalidSize {
                width: width as i32,
                height: height as i32,
            });
        }
        let mut cells = Vec::with_capacity(width * height);
        for (row, r) in rows.into_iter().enumerate() {
            if r.len() != width {
                return Err(Error::Ragged {
                    row,
                    expected: width,
                    actual: r.len(),
                });
            }
            cells.extend(r);
        }
        Ok(Self {
            width: width as i32,
            height: height as i32,
            cells,
        })
    }

    /// Width (number of columns).
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height (number of rows).
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size as a `Point` (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: grids have at least one cell by construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies inside `[0, width) × [0, height)`.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Whether `p` lies on the outer ring of the grid.
    #[inline]
    pub fn on_edge(&self, p: Point) -> bool {
        p.x == 0 || p.x == self.width - 1 || p.y == 0 || p.y == self.height - 1
    }

    /// Convert a position to its packed row-major index (`y * width + x`).
    ///
    /// The encoding is bijective over the grid's cells. Returns `None` for
    /// out-of-bounds positions.
    #[inline]
    pub fn index_of(&self, p: Point) -> Option<usize> {
        if self.in_bounds(p) {
            Some((p.y as usize) * (self.width as usize) + (p.x as usize))
        } else {
            None
        }
    }

    /// Convert a packed index back to a position.
    #[inline]
    pub fn point_at(&self, idx: usize) -> Option<Point> {
        if idx >= self.cells.len() {
            return None;
        }
        let w = self.width as usize;
        Some(Point::new((idx % w) as i32, (idx / w) as i32))
    }

    fn oob(&self, p: Point) -> Error {
        Error::OutOfBounds {
            pos: p,
            width: self.width,
            height: self.height,
        }
    }

    /// Read the cell at `p`.
    pub fn get(&self, p: Point) -> Result<&T> {
        let idx = self.index_of(p).ok_or_else(|| self.oob(p))?;
        Ok(&self.cells[idx])
    }

    /// Mutable access to the cell at `p`.
    pub fn get_mut(&mut self, p: Point) -> Result<&mut T> {
        let idx = self.index_of(p).ok_or_else(|| self.oob(p))?;
        Ok(&mut self.cells[idx])
    }

    /// Replace the cell at `p`.
    pub fn set(&mut self, p: Point, value: T) -> Result<()> {
        *self.get_mut(p)? = value;
        Ok(())
    }

    /// Fill every cell with `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        for c in self.cells.iter_mut() {
            *c = value.clone();
        }
    }

    /// Row-major iterator over `(Point, &T)` pairs (y outer, x inner).
    ///
    /// Each call starts a fresh traversal; the grid is not mutated.
    pub fn iter(&self) -> GridIter<'_, T> {
        GridIter { grid: self, idx: 0 }
    }

    /// In-bounds orthogonal neighbors of `p`, in order: left, right, up,
    /// down. Candidates outside the grid are omitted.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.neighbors_4().into_iter().filter(|&n| self.in_bounds(n))
    }

    /// In-bounds neighbors of `p` including diagonals: the orthogonal four
    /// (left, right, up, down) followed by up-left, up-right, down-right,
    /// down-left.
    pub fn neighbors8(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.neighbors_8().into_iter().filter(|&n| self.in_bounds(n))
    }

    /// Scan in row-major order and return the first position whose value
    /// satisfies `pred`.
    ///
    /// Callers rely on there being exactly one match (e.g. a single start
    /// marker); if several match, the first is returned. Fails with
    /// [`Error::NotFound`] if none match.
    pub fn find_unique(&self, mut pred: impl FnMut(&T) -> bool) -> Result<Point> {
        for (p, v) in self.iter() {
            if pred(v) {
                return Ok(p);
            }
        }
        Err(Error::NotFound)
    }

    /// Count the cells satisfying a predicate.
    pub fn count(&self, mut pred: impl FnMut(&T) -> bool) -> usize {
        self.cells.iter().filter(|v| pred(v)).count()
    }
}

impl Grid<char> {
    /// Parse a character grid from newline-separated rows.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_rows(
            text.lines()
                .filter(|l| !l.is_empty())
                .map(|l| l.chars().collect())
                .collect(),
        )
    }

    /// Render the grid back to newline-separated rows.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.len() + self.height as usize);
        for (p, &c) in self.iter() {
            out.push(c);
            if p.x == self.width - 1 && p.y != self.height - 1 {
                out.push('\n');
            }
        }
        out
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = (Point, &'a T);
    type IntoIter = GridIter<'a, T>;

    fn into_iter(self) -> GridIter<'a, T> {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Row-major iterator over `(Point, &T)` pairs of a [`Grid`].
pub struct GridIter<'a, T> {
    grid: &'a Grid<T>,
    idx: usize,
}

impl<'a, T> Iterator for GridIter<'a, T> {
    type Item = (Point, &'a T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let p = self.grid.point_at(self.idx)?;
        let v = &self.grid.cells[self.idx];
        self.idx += 1;
        Some((p, v))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.grid.cells.len() - self.idx;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for GridIter<'_, T> {}
