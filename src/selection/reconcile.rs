//! Selection reconciliation.
//!
//! The host marks rows with a tri-state signal. The first explicit signal in
//! row order decides how unmarked rows resolve; rows are never reordered.

use std::collections::HashSet;

use super::PersistedSelection;
use crate::types::{Identity, Item};

/// How the host's selection set should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// The set lists included rows
    #[default]
    Normal,
    /// The set lists excluded rows
    Inverted,
}

impl SelectionMode {
    pub fn from_inverted(inverted: bool) -> Self {
        if inverted {
            Self::Inverted
        } else {
            Self::Normal
        }
    }
}

/// Outcome of one reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reconciliation {
    /// One decision per input row, in input order
    pub selected: Vec<bool>,
    /// Value of the first explicit signal, `None` when no row carries one
    pub has_explicit_selection: Option<bool>,
    /// Rows whose host signal resolved to selected
    pub selected_in_data: usize,
    /// The host knows of more selected identities than this pass resolved
    pub has_selection_override: bool,
}

fn resolve(signal: Option<bool>, explicit: bool, mode: SelectionMode) -> bool {
    match (mode, signal) {
        // Inversion flips the default for the whole set, not row by row.
        (SelectionMode::Inverted, _) => explicit,
        (SelectionMode::Normal, Some(selected)) => selected,
        (SelectionMode::Normal, None) => !explicit,
    }
}

/// Resolve per-row host signals into selection decisions.
///
/// `number_of_scope_ids` is the host's count of previously selected
/// identities; exceeding the resolved count raises the override flag.
pub fn reconcile(
    signals: &[Option<bool>],
    mode: SelectionMode,
    number_of_scope_ids: Option<usize>,
) -> Reconciliation {
    let has_explicit_selection = signals.iter().find_map(|signal| *signal);

    let selected: Vec<bool> = match has_explicit_selection {
        Some(explicit) => signals
            .iter()
            .map(|signal| resolve(*signal, explicit, mode))
            .collect(),
        None => vec![false; signals.len()],
    };

    let selected_in_data = selected.iter().filter(|s| **s).count();
    let has_selection_override = number_of_scope_ids.is_some_and(|n| n > selected_in_data);

    Reconciliation {
        selected,
        has_explicit_selection,
        selected_in_data,
        has_selection_override,
    }
}

/// Reconcile `items` in place, falling back to `persisted` when the host
/// carries no explicit signal for any row.
///
/// Host signals always win over the persisted set. Restored rows count
/// towards `selected_in_data` like host-signalled ones.
pub fn reconcile_items(
    items: &mut [Item],
    mode: SelectionMode,
    number_of_scope_ids: Option<usize>,
    persisted: &PersistedSelection,
) -> Reconciliation {
    let signals: Vec<Option<bool>> = items.iter().map(|item| item.raw_selected_signal).collect();
    let mut result = reconcile(&signals, mode, number_of_scope_ids);

    if result.has_explicit_selection.is_none() && !persisted.is_empty() {
        let restored: HashSet<&Identity> = persisted.iter().collect();
        result.selected = items
            .iter()
            .map(|item| restored.contains(&item.identity))
            .collect();
        result.selected_in_data = result.selected.iter().filter(|s| **s).count();
        result.has_selection_override =
            number_of_scope_ids.is_some_and(|n| n > result.selected_in_data);
    }

    for (item, selected) in items.iter_mut().zip(&result.selected) {
        item.selected = *selected;
    }

    result
}
