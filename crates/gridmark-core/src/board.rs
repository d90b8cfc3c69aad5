#![forbid(unsafe_code)]

//! Square boolean boards and their text form.
//!
//! A [`BoardMap`] is a [`Grid<bool>`] whose width equals its height. Its text
//! form is one symbol for the size followed by the cells packed six per
//! symbol in row-major order (see [`codec`](crate::codec)), so a board of
//! size `n` encodes to `1 + ceil(n² / 6)` characters. Characters past that
//! length are ignored when decoding.

use std::fmt;
use std::str::FromStr;

use crate::codec::{decode_varint, encode_varint, pack_bits, packed_len, unpack_bits};
use crate::error::{Error, Result};
use crate::grid::Grid;

/// Largest size whose text form starts with a single size symbol.
pub const MAX_ENCODED_SIZE: usize = 63;

/// Board string the map editor starts from: an 11x11 layout.
pub const DEFAULT_BOARD: &str = "bU3Y1-U____-___f-0vwf0";

/// Square boolean grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardMap {
    grid: Grid<bool>,
}

impl BoardMap {
    /// Wrap a square grid.
    ///
    /// Fails with [`Error::ConstraintViolation`] if the grid is not square.
    pub fn from_grid(grid: Grid<bool>) -> Result<Self> {
        if grid.width() != grid.height() {
            return Err(Error::ConstraintViolation(format!(
                "board must be square, got {}x{}",
                grid.width(),
                grid.height()
            )));
        }
        Ok(Self { grid })
    }

    /// All-clear board of `size` x `size`.
    pub fn empty(size: usize) -> Result<Self> {
        Grid::new(size, size, false).map(|grid| Self { grid })
    }

    /// All-set board of `size` x `size`.
    pub fn full(size: usize) -> Result<Self> {
        Grid::new(size, size, true).map(|grid| Self { grid })
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.grid.width()
    }

    /// Cell at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<bool> {
        self.grid.get(x, y).copied()
    }

    /// Copy with the cell at `(x, y)` set to `value`.
    pub fn set(&self, x: usize, y: usize, value: bool) -> Result<Self> {
        self.grid.with_cell(x, y, value).map(|grid| Self { grid })
    }

    /// Same size, every cell clear.
    #[must_use]
    pub fn cleared(&self) -> Self {
        Self {
            grid: self.grid.map_cells(|_, _, _| false),
        }
    }

    /// Same size, every cell set.
    #[must_use]
    pub fn filled(&self) -> Self {
        Self {
            grid: self.grid.map_cells(|_, _, _| true),
        }
    }

    /// Copy with the rectangle spanned by two corners set to `value`.
    ///
    /// Corners are inclusive, may be given in any order, and may lie off the
    /// board; the rectangle is clamped to the board.
    #[must_use]
    pub fn set_rect(&self, start: (isize, isize), end: (isize, isize), value: bool) -> Self {
        let last = isize::try_from(self.size()).unwrap_or(isize::MAX) - 1;
        let x_min = start.0.min(end.0).max(0);
        let x_max = start.0.max(end.0).min(last);
        let y_min = start.1.min(end.1).max(0);
        let y_max = start.1.max(end.1).min(last);
        let grid = self.grid.map_cells(|&cell, x, y| {
            let (x, y) = (x as isize, y as isize);
            if (x_min..=x_max).contains(&x) && (y_min..=y_max).contains(&y) {
                value
            } else {
                cell
            }
        });
        Self { grid }
    }

    /// Grow or shrink to `size`; new cells are clear.
    pub fn resize(&self, size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidDimension {
                width: size,
                height: size,
            });
        }
        Ok(Self {
            grid: self.grid.resize(size, size, false),
        })
    }

    /// Map every cell to a value, row-major.
    pub fn map_to_vec<U>(&self, f: impl FnMut(&bool, usize, usize) -> U) -> Vec<U> {
        self.grid.map_cells(f).into_vec()
    }

    /// Number of set cells.
    #[must_use]
    pub fn count_set(&self) -> usize {
        self.grid.data().iter().filter(|&&cell| cell).count()
    }

    /// The underlying grid.
    #[must_use]
    pub fn grid(&self) -> &Grid<bool> {
        &self.grid
    }

    /// Consume the board, returning the underlying grid.
    #[must_use]
    pub fn into_grid(self) -> Grid<bool> {
        self.grid
    }

    /// Text form: size symbol followed by packed cells.
    ///
    /// Fails with [`Error::ConstraintViolation`] if the size exceeds
    /// [`MAX_ENCODED_SIZE`].
    pub fn encode(&self) -> Result<String> {
        let size = self.size();
        if size > MAX_ENCODED_SIZE {
            return Err(Error::ConstraintViolation(format!(
                "board size {size} does not fit one size symbol (max {MAX_ENCODED_SIZE})"
            )));
        }
        let mut out = encode_varint(size as u64);
        out.push_str(&pack_bits(self.grid.data()));
        Ok(out)
    }

    /// Parse the text form produced by [`encode`](Self::encode).
    pub fn decode(s: &str) -> Result<Self> {
        match Self::decode_inner(s) {
            Ok(board) => Ok(board),
            Err(err) => {
                crate::debug!(input = s, error = %err, "board decode failed");
                Err(err)
            }
        }
    }

    fn decode_inner(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        let Some(head) = chars.next() else {
            return Err(Error::MalformedBoard("empty string".into()));
        };
        let size = decode_varint(head.encode_utf8(&mut [0; 4]))? as usize;
        if size == 0 {
            return Err(Error::MalformedBoard("board size is zero".into()));
        }
        let cell_count = size * size;
        let body = chars.as_str();
        let needed = packed_len(cell_count);
        if body.chars().count() < needed {
            return Err(Error::MalformedBoard(format!(
                "size {size} needs {needed} cell symbols, got {}",
                body.chars().count()
            )));
        }
        let body: String = body.chars().take(needed).collect();
        let mut bits = unpack_bits(&body)?;
        bits.truncate(cell_count);
        let grid = Grid::from_vec(bits, size, size)?;
        Ok(Self { grid })
    }
}

impl FromStr for BoardMap {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

impl TryFrom<Grid<bool>> for BoardMap {
    type Error = Error;

    fn try_from(grid: Grid<bool>) -> Result<Self> {
        Self::from_grid(grid)
    }
}

impl fmt::Display for BoardMap {
    /// `#` for set cells, `.` for clear ones, one row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.grid.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for &cell in row {
                f.write_str(if cell { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}
