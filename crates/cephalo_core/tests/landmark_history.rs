//! Integration tests for landmark placement and undo/redo history.

use cephalo_core::{LandmarkId, LandmarkStore, Point};

#[test]
fn new_store_holds_the_whole_catalog_unplaced() {
    let store = LandmarkStore::new();
    assert_eq!(store.catalog_len(), cephalo_core::LANDMARK_CATALOG.len());
    assert_eq!(store.placed_count(), 0);
    assert!(store.landmarks().iter().all(|lm| !lm.is_placed()));
}

#[test]
fn undo_then_redo_restores_the_exact_state() {
    let mut store = LandmarkStore::new();
    store.place(LandmarkId::Sella, Point::new(100.0, 100.0));
    store.place(LandmarkId::Nasion, Point::new(150.0, 80.0));
    let placed = store.positions().clone();

    assert!(store.undo(), "undo should step back");
    assert_eq!(store.position(LandmarkId::Nasion), None);
    assert_eq!(store.position(LandmarkId::Sella), Some(Point::new(100.0, 100.0)));

    assert!(store.redo(), "redo should step forward");
    assert_eq!(store.positions(), &placed);
}

#[test]
fn new_edit_after_undo_discards_redo_states() {
    let mut store = LandmarkStore::new();
    store.place(LandmarkId::Sella, Point::new(1.0, 1.0));
    store.place(LandmarkId::Nasion, Point::new(2.0, 2.0));

    assert!(store.undo());
    assert!(store.can_redo());

    store.place(LandmarkId::Menton, Point::new(3.0, 3.0));
    assert!(!store.can_redo());
    assert!(!store.redo(), "discarded states must not come back");
    assert_eq!(store.position(LandmarkId::Nasion), None);
    assert_eq!(store.position(LandmarkId::Menton), Some(Point::new(3.0, 3.0)));
}

#[test]
fn remove_is_undoable_like_any_other_edit() {
    let mut store = LandmarkStore::new();
    store.place(LandmarkId::Gonion, Point::new(50.0, 200.0));
    store.remove(LandmarkId::Gonion);
    assert_eq!(store.position(LandmarkId::Gonion), None);

    assert!(store.undo());
    assert_eq!(store.position(LandmarkId::Gonion), Some(Point::new(50.0, 200.0)));
}

#[test]
fn undo_and_redo_at_bounds_are_no_ops() {
    let mut store = LandmarkStore::new();
    assert!(!store.undo());
    assert!(!store.redo());

    store.place(LandmarkId::Sella, Point::new(1.0, 1.0));
    assert!(!store.redo(), "nothing ahead of the newest state");
    assert!(store.undo());
    assert!(!store.undo(), "nothing behind the baseline");
}

#[test]
fn reset_clears_placements_and_starts_history_over() {
    let mut store = LandmarkStore::new();
    store.place(LandmarkId::Sella, Point::new(1.0, 1.0));
    store.place(LandmarkId::Nasion, Point::new(2.0, 2.0));

    store.reset_all();
    assert_eq!(store.placed_count(), 0);
    assert!(!store.can_undo(), "reset is a fresh baseline, not an edit");
    assert!(!store.can_redo());
}
