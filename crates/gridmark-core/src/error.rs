#![forbid(unsafe_code)]

//! Error type shared by every gridmark component.
//!
//! All variants are precondition violations detected at the call site. Index
//! normalization in [`Grid`](crate::Grid) and pointer saturation in
//! [`History`](crate::History) are policy and never produce an error.

use std::fmt;

/// Errors returned by grid, board, codec, and editor operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A grid was requested with a zero width or height, or with more cells
    /// than `usize` can count.
    InvalidDimension { width: usize, height: usize },
    /// A cell coordinate lies outside the grid.
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    /// A flat buffer does not hold `width * height` cells.
    LengthMismatch { expected: usize, actual: usize },
    /// A board invariant does not hold (not square, or too large to encode).
    ConstraintViolation(String),
    /// A board string cannot be decoded.
    MalformedBoard(String),
    /// An editor configuration is inconsistent.
    InvalidConfig(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { width, height } => {
                write!(f, "invalid grid dimensions {width}x{height}")
            }
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(f, "cell ({x}, {y}) is outside a {width}x{height} grid"),
            Self::LengthMismatch { expected, actual } => {
                write!(f, "expected {expected} cells, got {actual}")
            }
            Self::ConstraintViolation(msg) => write!(f, "constraint violation: {msg}"),
            Self::MalformedBoard(msg) => write!(f, "malformed board: {msg}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
