//! Linear snapshot history for the landmark store.
//!
//! # Responsibility
//! - Keep an ordered sequence of full placement snapshots plus a cursor.
//! - Discard redo states when a new edit branches off after an undo.
//!
//! # Invariants
//! - The cursor always indexes a valid snapshot.
//! - The sequence is never empty; the baseline snapshot is position zero.

use crate::model::landmark::LandmarkId;
use crate::model::point::Point;
use std::collections::BTreeMap;

/// Placement state of the whole catalog at one point in time.
pub type PositionMap = BTreeMap<LandmarkId, Option<Point>>;

/// Linear undo stack of full-state snapshots.
///
/// Full copies are acceptable at this catalog size (a few dozen entries);
/// a structural-sharing map would be the replacement if that ever grows.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<PositionMap>,
    index: usize,
}

impl History {
    /// Starts history with `baseline` as the sole snapshot.
    pub fn new(baseline: PositionMap) -> Self {
        Self {
            snapshots: vec![baseline],
            index: 0,
        }
    }

    /// Appends a snapshot after the cursor, truncating any redo states.
    pub fn record(&mut self, snapshot: PositionMap) {
        self.snapshots.truncate(self.index + 1);
        self.snapshots.push(snapshot);
        self.index = self.snapshots.len() - 1;
    }

    /// Steps the cursor back and returns that snapshot, or `None` at the
    /// baseline (a no-op, not an error).
    pub fn undo(&mut self) -> Option<&PositionMap> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(&self.snapshots[self.index])
    }

    /// Steps the cursor forward and returns that snapshot, or `None` at the
    /// newest state (a no-op, not an error).
    pub fn redo(&mut self) -> Option<&PositionMap> {
        if self.index + 1 >= self.snapshots.len() {
            return None;
        }
        self.index += 1;
        Some(&self.snapshots[self.index])
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.snapshots.len()
    }

    /// Replaces all history with a fresh baseline.
    pub fn reset(&mut self, baseline: PositionMap) {
        self.snapshots.clear();
        self.snapshots.push(baseline);
        self.index = 0;
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }
}
