#![forbid(unsafe_code)]

//! Immutable 2D grid backed by a flat row-major buffer.
//!
//! Cell `(x, y)` lives at index `x + y * width`. Every operation, including
//! structural edits (row/column insertion and removal, resize), returns a new
//! [`Grid`] and leaves the receiver untouched.
//!
//! # Index policy
//!
//! Row and column positions passed to the structural operations are signed
//! and never rejected:
//!
//! - **Insertion** clamps: positions at or past the end append, negative
//!   positions count back from the end, and positions at or before `-len`
//!   insert at the start.
//! - **Removal** wraps: the start position is reduced modulo the axis length
//!   (Euclidean, so negatives count from the end), and the count is clamped to
//!   what remains after the start.

use std::fmt;

use crate::error::{Error, Result};

/// Immutable rectangular container of cells stored row-major.
///
/// Construction requires positive dimensions. Removal operations may later
/// shrink an axis to zero; such a grid keeps its other dimension and can grow
/// again through insertion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    cells: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Grid<T> {
    /// Wrap an existing row-major buffer.
    ///
    /// Fails with [`Error::InvalidDimension`] if either dimension is zero or
    /// the cell count overflows `usize`, and with [`Error::LengthMismatch`] if
    /// `cells.len() != width * height`.
    pub fn from_vec(cells: Vec<T>, width: usize, height: usize) -> Result<Self> {
        let expected = cell_count(width, height)?;
        if cells.len() != expected {
            return Err(Error::LengthMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Build a grid by calling `f(x, y)` for every cell in row-major order.
    pub fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> T,
    ) -> Result<Self> {
        let mut cells = Vec::with_capacity(cell_count(width, height)?);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells (only possible after removals).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The row-major cell buffer.
    #[must_use]
    pub fn data(&self) -> &[T] {
        &self.cells
    }

    /// Consume the grid, returning its row-major buffer.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.cells
    }

    /// Get the cell at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<&T> {
        let idx = self.checked_index(x, y)?;
        Ok(&self.cells[idx])
    }

    /// Iterate over the rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        let width = self.width;
        (0..self.height).map(move |row| &self.cells[row * width..(row + 1) * width])
    }

    /// Transform every cell, keeping the shape.
    ///
    /// `f` receives the cell and its `(x, y)` and is called once per cell in
    /// row-major order.
    pub fn map_cells<U>(&self, mut f: impl FnMut(&T, usize, usize) -> U) -> Grid<U> {
        let width = self.width;
        let cells = self
            .cells
            .iter()
            .enumerate()
            .map(|(idx, cell)| f(cell, idx % width, idx / width))
            .collect();
        Grid {
            cells,
            width: self.width,
            height: self.height,
        }
    }

    fn checked_index(&self, x: usize, y: usize) -> Result<usize> {
        if x < self.width && y < self.height {
            Ok(x + y * self.width)
        } else {
            Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `fill`.
    pub fn new(width: usize, height: usize, fill: T) -> Result<Self> {
        let len = cell_count(width, height)?;
        Ok(Self {
            cells: vec![fill; len],
            width,
            height,
        })
    }

    /// Return a copy with the cell at `(x, y)` replaced by `value`.
    pub fn with_cell(&self, x: usize, y: usize, value: T) -> Result<Self> {
        let idx = self.checked_index(x, y)?;
        let mut cells = self.cells.clone();
        cells[idx] = value;
        Ok(Self {
            cells,
            width: self.width,
            height: self.height,
        })
    }

    // ── Rows ────────────────────────────────────────────────────────

    /// Insert `count` rows of `fill` before row `at`.
    ///
    /// Pass `isize::MAX` (or anything `>= height`) to append.
    #[must_use]
    pub fn insert_rows(&self, at: isize, count: usize, fill: T) -> Self {
        if count == 0 {
            return self.clone();
        }
        let row = insertion_point(at, self.height);
        let split = row * self.width;
        let mut cells = Vec::with_capacity(self.cells.len() + count * self.width);
        cells.extend_from_slice(&self.cells[..split]);
        cells.extend(std::iter::repeat_n(fill, count * self.width));
        cells.extend_from_slice(&self.cells[split..]);
        Self {
            cells,
            width: self.width,
            height: self.height + count,
        }
    }

    /// Remove up to `count` rows starting at row `at` (wrapped into range).
    #[must_use]
    pub fn remove_rows(&self, at: isize, count: usize) -> Self {
        let Some(start) = removal_start(at, self.height) else {
            return self.clone();
        };
        if count == 0 {
            return self.clone();
        }
        let n = count.min(self.height - start);
        let mut cells = Vec::with_capacity(self.cells.len() - n * self.width);
        cells.extend_from_slice(&self.cells[..start * self.width]);
        cells.extend_from_slice(&self.cells[(start + n) * self.width..]);
        Self {
            cells,
            width: self.width,
            height: self.height - n,
        }
    }

    /// Remove every row from `at` (wrapped into range) to the bottom.
    #[must_use]
    pub fn remove_rows_from(&self, at: isize) -> Self {
        self.remove_rows(at, usize::MAX)
    }

    // ── Columns ─────────────────────────────────────────────────────

    /// Insert `count` columns of `fill` before column `at`.
    ///
    /// Pass `isize::MAX` (or anything `>= width`) to append.
    #[must_use]
    pub fn insert_cols(&self, at: isize, count: usize, fill: T) -> Self {
        if count == 0 {
            return self.clone();
        }
        let col = insertion_point(at, self.width);
        let width = self.width + count;
        let mut cells = Vec::with_capacity(width * self.height);
        for row in self.rows() {
            cells.extend_from_slice(&row[..col]);
            cells.extend(std::iter::repeat_n(fill.clone(), count));
            cells.extend_from_slice(&row[col..]);
        }
        Self {
            cells,
            width,
            height: self.height,
        }
    }

    /// Remove up to `count` columns starting at column `at` (wrapped into range).
    #[must_use]
    pub fn remove_cols(&self, at: isize, count: usize) -> Self {
        let Some(start) = removal_start(at, self.width) else {
            return self.clone();
        };
        if count == 0 {
            return self.clone();
        }
        let n = count.min(self.width - start);
        let width = self.width - n;
        let mut cells = Vec::with_capacity(width * self.height);
        for row in self.rows() {
            cells.extend_from_slice(&row[..start]);
            cells.extend_from_slice(&row[start + n..]);
        }
        Self {
            cells,
            width,
            height: self.height,
        }
    }

    /// Remove every column from `at` (wrapped into range) to the right edge.
    #[must_use]
    pub fn remove_cols_from(&self, at: isize) -> Self {
        self.remove_cols(at, usize::MAX)
    }

    // ── Resize ──────────────────────────────────────────────────────

    /// Grow or shrink to `width` x `height`.
    ///
    /// Shrinking drops columns from the right and rows from the bottom;
    /// growth appends cells set to `fill`. Existing cells keep their
    /// coordinates.
    #[must_use]
    pub fn resize(&self, width: usize, height: usize, fill: T) -> Self {
        let mut grid = match width.cmp(&self.width) {
            std::cmp::Ordering::Less => self.remove_cols(to_signed(width), self.width - width),
            std::cmp::Ordering::Greater => {
                self.insert_cols(to_signed(self.width), width - self.width, fill.clone())
            }
            std::cmp::Ordering::Equal => self.clone(),
        };
        grid = match height.cmp(&grid.height) {
            std::cmp::Ordering::Less => grid.remove_rows(to_signed(height), grid.height - height),
            std::cmp::Ordering::Greater => {
                grid.insert_rows(to_signed(grid.height), height - grid.height, fill)
            }
            std::cmp::Ordering::Equal => grid,
        };
        grid
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    /// Cells right-aligned to the widest one, separated by single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.cells.iter().map(ToString::to_string).collect();
        let pad = rendered.iter().map(|s| s.chars().count()).max().unwrap_or(0);
        for y in 0..self.height {
            if y > 0 {
                writeln!(f)?;
            }
            let row = &rendered[y * self.width..(y + 1) * self.width];
            for (x, cell) in row.iter().enumerate() {
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{cell:>pad$}")?;
            }
        }
        Ok(())
    }
}

/// Cell count for a new grid. Both dimensions must be positive and their
/// product must fit in `usize`.
fn cell_count(width: usize, height: usize) -> Result<usize> {
    width
        .checked_mul(height)
        .filter(|&len| len > 0)
        .ok_or(Error::InvalidDimension { width, height })
}

/// Resolve an insertion position on an axis of length `len` to `0..=len`.
fn insertion_point(at: isize, len: usize) -> usize {
    let len_signed = to_signed(len);
    if at >= len_signed {
        len
    } else if at < 0 {
        // Non-negative after max(0), so the cast is lossless.
        (len_signed + at).max(0) as usize
    } else {
        at as usize
    }
}

/// Resolve a removal start on an axis of length `len`; `None` for an empty axis.
fn removal_start(at: isize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(at.rem_euclid(to_signed(len)) as usize)
}

fn to_signed(n: usize) -> isize {
    isize::try_from(n).unwrap_or(isize::MAX)
}
