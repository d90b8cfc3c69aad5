#![forbid(unsafe_code)]

//! Immutable linear undo/redo log.
//!
//! A [`History`] is a never-empty sequence of snapshots plus a read pointer.
//! `set` drops everything after the pointer before appending, so there is a
//! single line of history and no undo tree. `undo`/`redo` only move the
//! pointer and saturate at either end.
//!
//! The log is shared behind an `Arc`: moving the pointer never copies
//! snapshots, and `set` builds a fresh log so no two values ever observe each
//! other's writes.

use std::sync::Arc;

/// Immutable undo/redo log with a movable read pointer.
#[derive(Debug, Clone)]
pub struct History<T> {
    entries: Arc<[T]>,
    pointer: usize,
    limit: Option<usize>,
}

impl<T> History<T> {
    /// Snapshot at the pointer.
    #[must_use]
    pub fn get(&self) -> &T {
        &self.entries[self.pointer]
    }

    /// Whether [`undo`](Self::undo) would move the pointer.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.pointer > 0
    }

    /// Whether [`redo`](Self::redo) would move the pointer.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.pointer + 1 < self.entries.len()
    }

    /// Step back one snapshot; stays put at the oldest one.
    #[must_use]
    pub fn undo(&self) -> Self {
        self.with_pointer(self.pointer.saturating_sub(1))
    }

    /// Step forward one snapshot; stays put at the newest one.
    #[must_use]
    pub fn redo(&self) -> Self {
        self.with_pointer((self.pointer + 1).min(self.entries.len() - 1))
    }

    /// Index of the current snapshot.
    #[must_use]
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// Number of snapshots, including redoable ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; a history holds at least its initial snapshot.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Maximum number of snapshots kept, if bounded.
    #[must_use]
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// All snapshots, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    fn with_pointer(&self, pointer: usize) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            pointer,
            limit: self.limit,
        }
    }
}

impl<T: Clone> History<T> {
    /// Start a history holding only `initial`.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            entries: Arc::from(vec![initial]),
            pointer: 0,
            limit: None,
        }
    }

    /// Start a history that keeps at most `limit` snapshots.
    ///
    /// When a [`set`](Self::set) would exceed the limit, the oldest snapshots
    /// are dropped. A limit of `0` is treated as `1`.
    #[must_use]
    pub fn with_limit(initial: T, limit: usize) -> Self {
        Self {
            limit: Some(limit.max(1)),
            ..Self::new(initial)
        }
    }

    /// Record `value` after the current snapshot, discarding any redo branch.
    #[must_use]
    pub fn set(&self, value: T) -> Self {
        let keep = self.pointer + 1;
        let drop_front = self
            .limit
            .map_or(0, |limit| (keep + 1).saturating_sub(limit));
        let mut entries = Vec::with_capacity(keep + 1 - drop_front);
        entries.extend_from_slice(&self.entries[drop_front..keep]);
        entries.push(value);
        if drop_front > 0 {
            crate::trace!(dropped = drop_front, "history limit reached");
        }
        Self {
            pointer: entries.len() - 1,
            entries: Arc::from(entries),
            limit: self.limit,
        }
    }
}
