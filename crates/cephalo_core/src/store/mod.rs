//! Mutation-tracked landmark placement store.
//!
//! # Responsibility
//! - Exclusively own the placement map and its undo/redo history.
//! - Keep the placement-selection state used by the landmark panel.
//!
//! # Invariants
//! - The map always holds exactly one entry per catalog landmark; only the
//!   `position` of entries changes, entries are never added or removed.
//! - Every mutation appends a snapshot and truncates redo history.
//! - Out-of-bounds undo/redo are no-ops, not errors.

pub mod history;

use crate::model::landmark::{Landmark, LandmarkId};
use crate::model::point::Point;
use crate::registry::landmarks::{landmark_def, LANDMARK_CATALOG};
use self::history::{History, PositionMap};

/// Owns landmark placements, selection and linear history.
#[derive(Debug, Clone)]
pub struct LandmarkStore {
    positions: PositionMap,
    history: History,
    active: Option<LandmarkId>,
}

impl Default for LandmarkStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LandmarkStore {
    /// Creates a store with every catalog landmark unplaced.
    pub fn new() -> Self {
        let positions = empty_positions();
        let history = History::new(positions.clone());
        Self {
            positions,
            history,
            active: None,
        }
    }

    /// Read-only view of the placement map.
    pub fn positions(&self) -> &PositionMap {
        &self.positions
    }

    /// Placement of one landmark, `None` while unplaced.
    pub fn position(&self, id: LandmarkId) -> Option<Point> {
        self.positions.get(&id).copied().flatten()
    }

    /// Rendered view of one landmark (catalog entry + placement).
    pub fn landmark(&self, id: LandmarkId) -> Landmark {
        Landmark::from_def(landmark_def(id), self.position(id))
    }

    /// Rendered view of the whole catalog, in display order.
    pub fn landmarks(&self) -> Vec<Landmark> {
        LANDMARK_CATALOG
            .iter()
            .map(|def| Landmark::from_def(def, self.position(def.id)))
            .collect()
    }

    pub fn placed_count(&self) -> usize {
        self.positions.values().filter(|p| p.is_some()).count()
    }

    pub fn catalog_len(&self) -> usize {
        self.positions.len()
    }

    /// Landmark currently selected for placement, if any.
    pub fn active_landmark(&self) -> Option<LandmarkId> {
        self.active
    }

    /// Selects (or clears) the landmark the next canvas click will place.
    pub fn set_active_landmark(&mut self, id: Option<LandmarkId>) {
        self.active = id;
    }

    /// Places a landmark and clears the placement selection.
    pub fn place(&mut self, id: LandmarkId, position: Point) {
        self.positions.insert(id, Some(position));
        self.active = None;
        self.history.record(self.positions.clone());
    }

    /// Moves an already-placed landmark (dragging); the placement
    /// selection is left untouched.
    pub fn move_to(&mut self, id: LandmarkId, position: Point) {
        self.positions.insert(id, Some(position));
        self.history.record(self.positions.clone());
    }

    /// Resets one landmark to unplaced. The entry stays in the map.
    pub fn remove(&mut self, id: LandmarkId) {
        self.positions.insert(id, None);
        self.history.record(self.positions.clone());
    }

    /// Steps one snapshot back. Returns whether anything changed.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.positions = snapshot.clone();
                true
            }
            None => false,
        }
    }

    /// Steps one snapshot forward. Returns whether anything changed.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.positions = snapshot.clone();
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Clears every placement and starts history over from the empty
    /// baseline. A fresh start, not an undoable edit.
    pub fn reset_all(&mut self) {
        self.positions = empty_positions();
        self.active = None;
        self.history.reset(self.positions.clone());
    }
}

fn empty_positions() -> PositionMap {
    LANDMARK_CATALOG
        .iter()
        .map(|def| (def.id, None))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::LandmarkStore;
    use crate::model::landmark::LandmarkId;
    use crate::model::point::Point;

    #[test]
    fn map_size_is_constant_across_mutations() {
        let mut store = LandmarkStore::new();
        let size = store.catalog_len();

        store.place(LandmarkId::Sella, Point::new(1.0, 2.0));
        store.remove(LandmarkId::Sella);
        store.undo();
        store.reset_all();

        assert_eq!(store.catalog_len(), size);
    }

    #[test]
    fn place_clears_selection_but_move_keeps_it() {
        let mut store = LandmarkStore::new();

        store.set_active_landmark(Some(LandmarkId::Nasion));
        store.place(LandmarkId::Nasion, Point::new(3.0, 3.0));
        assert_eq!(store.active_landmark(), None);

        store.set_active_landmark(Some(LandmarkId::Sella));
        store.move_to(LandmarkId::Nasion, Point::new(4.0, 4.0));
        assert_eq!(store.active_landmark(), Some(LandmarkId::Sella));
    }
}
