#![forbid(unsafe_code)]

//! Immutable grids, undo history, and a compact board codec.
//!
//! `gridmark-core` holds the data model behind the gridmark board editor. It
//! has no I/O and no UI; every type is a plain value and every edit returns a
//! new value.
//!
//! # Primary responsibilities
//!
//! - **Grid**: row-major 2D container with row/column insertion and removal
//!   at arbitrary positions, and resize.
//! - **History**: linear undo/redo log of snapshots.
//! - **Codec**: URL-safe base-64 integers and six-bits-per-symbol bit packing.
//! - **BoardMap**: square boolean grid with a short text form for links.
//! - **BoardEditor**: stroke-based editing session that commits into a
//!   history.
//!
//! # Example
//!
//! ```
//! use gridmark_core::{BoardMap, History};
//!
//! let board = BoardMap::empty(3).unwrap();
//! let history = History::new(board.clone());
//! let marked = board.set(1, 1, true).unwrap();
//! let history = history.set(marked.clone());
//!
//! assert_eq!(marked.encode().unwrap(), "3g0");
//! assert_eq!(history.undo().get(), &board);
//! ```

pub mod board;
pub mod codec;
pub mod config;
pub mod editor;
pub mod error;
pub mod grid;
pub mod history;
pub mod logging;

#[cfg(feature = "tracing")]
pub use logging::{debug, trace};

pub use board::{BoardMap, DEFAULT_BOARD, MAX_ENCODED_SIZE};
pub use codec::{decode_varint, encode_varint, pack_bits, unpack_bits};
pub use config::EditorConfig;
pub use editor::BoardEditor;
pub use error::{Error, Result};
pub use grid::Grid;
pub use history::History;
