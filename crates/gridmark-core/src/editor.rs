#![forbid(unsafe_code)]

//! Pointer-driven board editing session.
//!
//! A stroke starts on `pointer_down`, which flips the cell under the pointer
//! and remembers the new value. Moves then paint that value, either cell by
//! cell (freehand) or as the rectangle between the stroke's start and the
//! pointer (area mode, redrawn from the board as it was when the stroke
//! began). `pointer_up` commits the result to the undo history;
//! `pointer_leave` throws the stroke away.
//!
//! Only committed boards enter the [`History`]; intermediate stroke states
//! are visible through [`BoardEditor::board`] but cannot be undone to.

use crate::board::BoardMap;
use crate::config::EditorConfig;
use crate::error::{Error, Result};
use crate::history::History;

#[derive(Debug, Clone)]
struct Stroke {
    value: bool,
    start: (usize, usize),
    pos: (usize, usize),
    start_board: BoardMap,
}

/// Editing session over a [`BoardMap`] with undo/redo.
#[derive(Debug, Clone)]
pub struct BoardEditor {
    board: BoardMap,
    history: History<BoardMap>,
    sizes: Vec<usize>,
    area_mode: bool,
    stroke: Option<Stroke>,
}

impl BoardEditor {
    /// Start from an empty board of the configured default size.
    pub fn new(config: &EditorConfig) -> Result<Self> {
        config.validate()?;
        let board = BoardMap::empty(config.default_size)?;
        Ok(Self::from_board(board, config))
    }

    /// Start from an existing board.
    #[must_use]
    pub fn from_board(board: BoardMap, config: &EditorConfig) -> Self {
        let history = match config.history_limit {
            Some(limit) => History::with_limit(board.clone(), limit),
            None => History::new(board.clone()),
        };
        Self {
            board,
            history,
            sizes: config.sizes.clone(),
            area_mode: config.area_mode,
            stroke: None,
        }
    }

    /// The board as currently displayed, including an uncommitted stroke.
    #[must_use]
    pub fn board(&self) -> &BoardMap {
        &self.board
    }

    /// Committed boards.
    #[must_use]
    pub fn history(&self) -> &History<BoardMap> {
        &self.history
    }

    /// Whether a stroke is in progress.
    #[must_use]
    pub fn is_marking(&self) -> bool {
        self.stroke.is_some()
    }

    /// Board sizes [`set_size`](Self::set_size) accepts.
    #[must_use]
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    #[must_use]
    pub fn area_mode(&self) -> bool {
        self.area_mode
    }

    /// Switch between freehand and rectangle marking for later moves.
    pub fn set_area_mode(&mut self, on: bool) {
        self.area_mode = on;
    }

    // ── Strokes ─────────────────────────────────────────────────────

    /// Begin a stroke at `(x, y)` by flipping that cell.
    pub fn pointer_down(&mut self, x: usize, y: usize) -> Result<()> {
        let value = !self.board.get(x, y)?;
        let marked = self.board.set(x, y, value)?;
        let start_board = std::mem::replace(&mut self.board, marked);
        self.stroke = Some(Stroke {
            value,
            start: (x, y),
            pos: (x, y),
            start_board,
        });
        Ok(())
    }

    /// Extend the current stroke to `(x, y)`.
    ///
    /// Ignored when no stroke is active or the position did not change.
    /// Freehand moves off the board paint nothing; area moves clamp the
    /// rectangle to the board.
    pub fn pointer_move(&mut self, x: usize, y: usize) {
        let Some(stroke) = self.stroke.as_mut() else {
            return;
        };
        if stroke.pos == (x, y) {
            return;
        }
        if self.area_mode {
            self.board = stroke
                .start_board
                .set_rect(signed(stroke.start), signed((x, y)), stroke.value);
        } else if let Ok(marked) = self.board.set(x, y, stroke.value) {
            self.board = marked;
        }
        stroke.pos = (x, y);
    }

    /// Finish the stroke and commit the board. Returns `false` if no stroke
    /// was active.
    pub fn pointer_up(&mut self) -> bool {
        if self.stroke.take().is_none() {
            return false;
        }
        self.commit();
        true
    }

    /// Abandon the stroke, restoring the board it started from. Returns
    /// `false` if no stroke was active.
    pub fn pointer_leave(&mut self) -> bool {
        match self.stroke.take() {
            Some(stroke) => {
                self.board = stroke.start_board;
                true
            }
            None => false,
        }
    }

    // ── Whole-board edits ───────────────────────────────────────────

    /// Resize the board to one of the configured sizes and commit.
    pub fn set_size(&mut self, size: usize) -> Result<()> {
        if !self.sizes.contains(&size) {
            return Err(Error::InvalidConfig(format!(
                "board size {size} is not one of {:?}",
                self.sizes
            )));
        }
        let resized = self.board.resize(size)?;
        self.replace(resized);
        Ok(())
    }

    /// Clear every cell and commit.
    pub fn clear(&mut self) {
        let cleared = self.board.cleared();
        self.replace(cleared);
    }

    /// Set every cell and commit.
    pub fn fill(&mut self) {
        let filled = self.board.filled();
        self.replace(filled);
    }

    /// Replace the board with a decoded one and commit.
    pub fn load(&mut self, encoded: &str) -> Result<()> {
        let board = BoardMap::decode(encoded)?;
        self.replace(board);
        Ok(())
    }

    /// Text form of the current board.
    pub fn encode(&self) -> Result<String> {
        self.board.encode()
    }

    // ── Undo / redo ─────────────────────────────────────────────────

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Return to the previous committed board, dropping any active stroke.
    ///
    /// With nothing to undo, a dropped stroke still reverts the board.
    pub fn undo(&mut self) -> bool {
        self.cancel_stroke();
        if !self.history.can_undo() {
            return false;
        }
        self.history = self.history.undo();
        self.board = self.history.get().clone();
        crate::trace!(pointer = self.history.pointer(), "editor undo");
        true
    }

    /// Move to the next committed board, dropping any active stroke.
    ///
    /// With nothing to redo, a dropped stroke still reverts the board.
    pub fn redo(&mut self) -> bool {
        self.cancel_stroke();
        if !self.history.can_redo() {
            return false;
        }
        self.history = self.history.redo();
        self.board = self.history.get().clone();
        crate::trace!(pointer = self.history.pointer(), "editor redo");
        true
    }

    fn cancel_stroke(&mut self) {
        if let Some(stroke) = self.stroke.take() {
            self.board = stroke.start_board;
        }
    }

    fn replace(&mut self, board: BoardMap) {
        self.stroke = None;
        self.board = board;
        self.commit();
    }

    fn commit(&mut self) {
        self.history = self.history.set(self.board.clone());
        crate::trace!(
            size = self.board.size(),
            entries = self.history.len(),
            "editor commit"
        );
    }
}

fn signed((x, y): (usize, usize)) -> (isize, isize) {
    (
        isize::try_from(x).unwrap_or(isize::MAX),
        isize::try_from(y).unwrap_or(isize::MAX),
    )
}
