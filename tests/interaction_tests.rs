//! Clicks and clears, both on raw items and through the `ChicletSlicer` host.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod fixtures;

use chiclet_slicer::error::ChicletError;
use chiclet_slicer::selection::{apply_click, clear_selection, ClickOptions, PersistedSelection};
use chiclet_slicer::{ChicletSlicer, Identity, Item};
use fixtures::{FixedMeasurer, UpdateBuilder};

fn items(selected: &[bool]) -> Vec<Item> {
    selected
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let mut item = Item::new(format!("id{i}"), format!("Item {i}"));
            item.selected = *s;
            item
        })
        .collect()
}

fn id(i: usize) -> Identity {
    Identity::new(format!("id{i}"))
}

fn ids(selection: &PersistedSelection) -> Vec<&str> {
    selection.iter().map(Identity::as_str).collect()
}

const SINGLE: ClickOptions = ClickOptions {
    multiselect: false,
    ctrl_key: false,
    forced_selection: false,
};

const MULTI: ClickOptions = ClickOptions {
    multiselect: true,
    ctrl_key: false,
    forced_selection: false,
};

// ============================================================================
// apply_click
// ============================================================================

#[test]
fn single_select_replaces_selection() {
    let change = apply_click(&items(&[true, false, true]), &id(1), SINGLE)
        .unwrap()
        .unwrap();
    assert_eq!(ids(&change.selection), vec!["id1"]);
    assert_eq!(change.persist.selection, r#"["id1"]"#);
}

#[test]
fn single_select_click_on_sole_selection_clears_it() {
    let change = apply_click(&items(&[false, true]), &id(1), SINGLE)
        .unwrap()
        .unwrap();
    assert!(change.selection.is_empty());
    assert_eq!(change.persist.selection, "[]");
}

#[test]
fn ctrl_click_toggles_in_single_select_mode() {
    let options = ClickOptions {
        ctrl_key: true,
        ..SINGLE
    };
    let change = apply_click(&items(&[true, false]), &id(1), options)
        .unwrap()
        .unwrap();
    assert_eq!(ids(&change.selection), vec!["id0", "id1"]);
}

#[test]
fn multiselect_toggles_clicked_item() {
    let change = apply_click(&items(&[true, true]), &id(0), MULTI)
        .unwrap()
        .unwrap();
    assert_eq!(ids(&change.selection), vec!["id1"]);
}

#[test]
fn forced_selection_refuses_to_empty() {
    let options = ClickOptions {
        forced_selection: true,
        ..MULTI
    };
    assert!(apply_click(&items(&[true, false]), &id(0), options)
        .unwrap()
        .is_none());
}

#[test]
fn disabled_items_ignore_clicks() {
    let mut list = items(&[false, false]);
    list[1].selectable = false;
    assert!(apply_click(&list, &id(1), MULTI).unwrap().is_none());
}

#[test]
fn clicking_unknown_identity_is_an_error() {
    let err = apply_click(&items(&[false]), &Identity::new("nope"), MULTI).unwrap_err();
    assert!(matches!(err, ChicletError::UnknownItem(ref key) if key == "nope"));
}

// ============================================================================
// clear_selection
// ============================================================================

#[test]
fn clear_empties_selection() {
    let change = clear_selection(&items(&[true, true]), false).unwrap();
    assert!(change.selection.is_empty());
    assert!(clear_selection(&items(&[false, false]), false).is_none());
}

#[test]
fn forced_clear_keeps_first_visible_selectable_item() {
    let mut list = items(&[false, true, true]);
    list[0].filtered_out = true;

    let change = clear_selection(&list, true).unwrap();
    assert_eq!(ids(&change.selection), vec!["id1"]);
}

// ============================================================================
// Host facade
// ============================================================================

fn slicer() -> ChicletSlicer {
    ChicletSlicer::with_measurer(Box::new(FixedMeasurer::default()))
}

#[test]
fn host_click_round_trips_through_persisted_selection() {
    let mut slicer = slicer();
    let rows = UpdateBuilder::with_rows(&["a", "b", "c"])
        .settings(|s| s.general.multiselect = false);
    slicer.apply_update(&rows.clone().build());

    let request = slicer
        .click(&Identity::new("c"), false)
        .unwrap()
        .expect("selection changed");
    assert_eq!(request.selection, r#"["c"]"#);

    // Host stores the blob and pushes it back on the next update.
    let snapshot = slicer.apply_update(&rows.persisted(&request.selection).build());
    let selected: Vec<&str> = snapshot
        .items
        .iter()
        .filter(|i| i.selected)
        .map(|i| i.identity.as_str())
        .collect();
    assert_eq!(selected, vec!["c"]);
    assert!(snapshot.is_selection_loaded);
}

#[test]
fn host_clear_with_nothing_selected_is_a_no_op() {
    let mut slicer = slicer();
    slicer.apply_update(&UpdateBuilder::with_rows(&["a"]).build());
    assert!(slicer.clear_selection().is_none());
}

#[test]
fn host_tailors_labels_against_current_layout() {
    let mut slicer = slicer();
    assert_eq!(slicer.tailor_label("Bicycles", 3), "Bicycles");

    slicer.apply_update(&UpdateBuilder::with_rows(&["a"]).viewport(100.0, 200.0).build());
    assert_eq!(slicer.resolve_cell_width(3), 61.0);
    assert_eq!(slicer.tailor_label("Bicycles", 3), "B...");
}

#[test]
fn host_waiting_latch_clears_on_stable_viewport() {
    let mut slicer = slicer();
    let input = UpdateBuilder::with_rows(&["a"]).build();
    slicer.apply_update(&input);

    slicer.mark_waiting_for_data();
    assert!(slicer.waiting_for_data());

    let snapshot = slicer.apply_update(&input);
    assert!(!snapshot.waiting_for_data);
    assert!(!slicer.waiting_for_data());
}
