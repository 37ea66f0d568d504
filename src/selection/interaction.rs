//! User-driven selection changes.
//!
//! Clicks act on the selection the current snapshot resolved, and every
//! change comes back with a [`PersistRequest`] instead of persisting directly.

use super::{PersistRequest, PersistedSelection};
use crate::error::{ChicletError, Result};
use crate::types::{Identity, Item, Settings};

/// How a click should modify the selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickOptions {
    /// Every click toggles its item
    pub multiselect: bool,
    /// Modifier held: toggle even in single-select mode
    pub ctrl_key: bool,
    /// The selection may never become empty
    pub forced_selection: bool,
}

impl ClickOptions {
    pub fn from_settings(settings: &Settings, ctrl_key: bool) -> Self {
        Self {
            multiselect: settings.general.multiselect,
            ctrl_key,
            forced_selection: settings.general.forced_selection,
        }
    }
}

/// A new selection and the request to persist it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange {
    pub selection: PersistedSelection,
    pub persist: PersistRequest,
}

impl SelectionChange {
    fn new(selection: PersistedSelection) -> Self {
        let persist = PersistRequest::for_selection(&selection);
        Self { selection, persist }
    }
}

fn current_selection(items: &[Item]) -> PersistedSelection {
    PersistedSelection::from_identities(
        items
            .iter()
            .filter(|item| item.selected)
            .map(|item| item.identity.clone()),
    )
}

/// Apply a click on `clicked` to the selection resolved in `items`.
///
/// Returns `Ok(None)` when the click changes nothing: the item is not
/// selectable, or forced selection refuses to empty the set.
///
/// # Errors
/// Returns [`ChicletError::UnknownItem`] if no item has the clicked identity.
pub fn apply_click(
    items: &[Item],
    clicked: &Identity,
    options: ClickOptions,
) -> Result<Option<SelectionChange>> {
    let item = items
        .iter()
        .find(|item| &item.identity == clicked)
        .ok_or_else(|| ChicletError::UnknownItem(clicked.to_string()))?;
    if !item.selectable {
        return Ok(None);
    }

    let current = current_selection(items);
    let mut next = current.clone();

    if options.multiselect || options.ctrl_key {
        if !next.remove(clicked) {
            next.insert(clicked.clone());
        }
    } else if current.len() == 1 && current.contains(clicked) {
        next = PersistedSelection::new();
    } else {
        next = PersistedSelection::from_identities([clicked.clone()]);
    }

    if next.is_empty() && options.forced_selection {
        return Ok(None);
    }
    if next == current {
        return Ok(None);
    }
    Ok(Some(SelectionChange::new(next)))
}

/// Clear the selection resolved in `items`.
///
/// Under forced selection the first selectable, visible item stays selected.
/// Returns `None` when the selection is already in that state.
pub fn clear_selection(items: &[Item], forced_selection: bool) -> Option<SelectionChange> {
    let next = if forced_selection {
        PersistedSelection::from_identities(
            items
                .iter()
                .find(|item| item.selectable && !item.filtered_out)
                .map(|item| item.identity.clone()),
        )
    } else {
        PersistedSelection::new()
    };

    if next == current_selection(items) {
        None
    } else {
        Some(SelectionChange::new(next))
    }
}
