//! Snapshot building.
//!
//! One immutable [`Snapshot`] per host update: validated settings, reconciled
//! and filtered items, grid geometry, and the cross-cycle flags the renderer
//! acts on. Snapshots are replaced wholesale, never patched.

mod identity;
mod state;

pub use identity::same_category_identity;
pub use state::{CyclePhase, PreviousCycleState};

use serde::Serialize;

use crate::layout::{compute_layout, ChromeHeights, GridConfig, GridLayout};
use crate::projection::project_items;
use crate::selection::{reconcile_items, PersistedSelection, SelectionMode};
use crate::text::TextMeasurer;
use crate::types::{Identity, Item, Settings, ShowDisabled, UpdateInput};
use crate::validate::validate_settings;

/// Everything the renderer needs for one update cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub settings: Settings,
    pub grid: GridConfig,
    pub layout: GridLayout,
    /// Header title: configured title, or the category column's name
    pub title: String,
    /// All items in display order; check `filtered_out` before rendering
    pub items: Vec<Item>,
    pub selected_in_data: usize,
    pub has_selection_override: bool,
    pub has_highlights: bool,
    /// Row identities changed since the previous cycle
    pub reset_scroll_position: bool,
    /// Selection was already applied; don't animate it in
    pub is_selection_loaded: bool,
    pub waiting_for_data: bool,
}

impl Snapshot {
    /// True for a MissingData cycle; the renderer should clear its display.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items that pass the search filter, in display order.
    pub fn visible_items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| !item.filtered_out)
    }

    pub fn item(&self, identity: &Identity) -> Option<&Item> {
        self.items.iter().find(|item| &item.identity == identity)
    }

    /// Identities currently resolved as selected, in display order.
    pub fn selection(&self) -> PersistedSelection {
        PersistedSelection::from_identities(
            self.items
                .iter()
                .filter(|item| item.selected)
                .map(|item| item.identity.clone()),
        )
    }

    /// A copy of this snapshot showing `selection` as already applied.
    #[must_use]
    pub fn with_selection(&self, selection: &PersistedSelection) -> Self {
        let mut next = self.clone();
        for item in &mut next.items {
            item.selected = selection.contains(&item.identity);
        }
        next.is_selection_loaded = true;
        next
    }
}

fn header_title(settings: &Settings, source_name: &str) -> String {
    let title = settings.header.title.trim();
    if title.is_empty() {
        source_name.to_string()
    } else {
        title.to_string()
    }
}

fn apply_search(items: &mut [Item], settings: &Settings, search_text: Option<&str>) {
    let Some(text) = search_text.filter(|t| settings.system.self_filter_enabled && !t.is_empty())
    else {
        return;
    };
    let needle = text.to_lowercase();
    for item in items.iter_mut() {
        item.filtered_out = !item.matches_search(&needle);
    }
}

fn order_disabled(items: Vec<Item>, show_disabled: &ShowDisabled) -> Vec<Item> {
    match show_disabled {
        ShowDisabled::Bottom => {
            let (mut enabled, disabled): (Vec<Item>, Vec<Item>) =
                items.into_iter().partition(|item| item.selectable);
            enabled.extend(disabled);
            enabled
        }
        ShowDisabled::Hide => items.into_iter().filter(|item| item.selectable).collect(),
        ShowDisabled::Inplace | ShowDisabled::Unrecognized(_) => items,
    }
}

/// Build the snapshot for one update cycle.
///
/// Takes the previous cycle's state and returns the state to thread into the
/// next call. Never fails: a missing category column produces an empty
/// snapshot.
pub fn build_snapshot(
    input: &UpdateInput,
    previous: PreviousCycleState,
    measurer: &dyn TextMeasurer,
) -> (Snapshot, PreviousCycleState) {
    let settings = validate_settings(input.settings.clone());
    let grid = GridConfig::from_settings(&settings);

    let projected = project_items(&input.data);
    if let Err(e) = &projected {
        tracing::debug!(reason = %e, "building empty snapshot");
    }
    let items = projected.unwrap_or_default();

    let identities: Vec<Identity> = items.iter().map(|item| item.identity.clone()).collect();
    let reset_scroll_position = previous
        .identities()
        .map_or(true, |prev| !same_category_identity(prev, &identities));
    if reset_scroll_position {
        tracing::debug!(rows = identities.len(), "row identities changed, resetting scroll");
    }

    // Cold start adopts the incoming viewport, which then compares equal.
    let cached_viewport = previous.viewport.unwrap_or(input.viewport);
    let waiting_for_data = if cached_viewport == input.viewport {
        false
    } else {
        previous.waiting_for_data
    };

    let chrome = ChromeHeights::from_settings(&settings, measurer, input.search_box_height);
    let title = header_title(&settings, &input.data.source_name);

    if items.is_empty() {
        let layout = compute_layout(input.viewport, &chrome, &grid, false, measurer);
        let snapshot = Snapshot {
            settings,
            grid,
            layout,
            title,
            items,
            selected_in_data: 0,
            has_selection_override: false,
            has_highlights: input.data.has_highlights,
            reset_scroll_position,
            is_selection_loaded: input.data.has_highlights,
            waiting_for_data,
        };
        let next = PreviousCycleState {
            identities: Some(identities),
            viewport: Some(input.viewport),
            waiting_for_data,
            ..previous
        };
        return (snapshot, next);
    }

    let blob = input.persisted_selection();
    let persisted = PersistedSelection::from_blob(blob);

    let mut items = items;
    let reconciliation = reconcile_items(
        &mut items,
        SelectionMode::from_inverted(input.data.inverted_selection),
        input.data.number_of_scope_ids,
        &persisted,
    );
    apply_search(&mut items, &settings, input.search_text.as_deref());
    let items = order_disabled(items, &settings.general.show_disabled);

    let has_any_image = items.iter().any(Item::has_image);
    let layout = compute_layout(input.viewport, &chrome, &grid, has_any_image, measurer);

    let selection_loaded = match &previous.selection_blob {
        Some(prev_blob) => previous.selection_saved || prev_blob.as_deref() == blob,
        None => false,
    };

    let snapshot = Snapshot {
        settings,
        grid,
        layout,
        title,
        items,
        selected_in_data: reconciliation.selected_in_data,
        has_selection_override: reconciliation.has_selection_override,
        has_highlights: input.data.has_highlights,
        reset_scroll_position,
        is_selection_loaded: selection_loaded || input.data.has_highlights,
        waiting_for_data,
    };
    let next = PreviousCycleState {
        identities: Some(identities),
        viewport: Some(input.viewport),
        selection_blob: Some(blob.map(str::to_string)),
        selection_saved: false,
        waiting_for_data,
    };
    (snapshot, next)
}
