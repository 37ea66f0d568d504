use serde::{Deserialize, Serialize};

use super::Settings;
use crate::layout::ViewportSize;

/// Column bag delivered by the host's data-binding layer.
///
/// Columns are parallel sequences indexed by row. Only `categories` is
/// mandatory; shorter optional columns read as absent for the missing rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoricalData {
    /// Display name of the category column (fallback header title)
    pub source_name: String,
    /// `None` when the host bound no category column
    pub categories: Option<Vec<Option<String>>>,
    /// One scope identity key per row
    pub identities: Vec<String>,
    pub images: Vec<Option<String>>,
    pub values: Vec<Option<f64>>,
    pub urls: Vec<Option<String>>,
    /// Tri-state per-row selection signal
    pub selected: Vec<Option<bool>>,
    /// Per-row selectability; absent rows are selectable
    pub selectable: Vec<Option<bool>>,
    /// Host is applying highlight overrides to this snapshot
    pub has_highlights: bool,
    /// Selection set denotes excluded rather than included rows
    pub inverted_selection: bool,
    /// Count of previously selected identities known to the host
    pub number_of_scope_ids: Option<usize>,
}

/// Everything the host pushes for one update cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateInput {
    pub data: CategoricalData,
    pub viewport: ViewportSize,
    pub settings: Settings,
    pub search_text: Option<String>,
    /// Persisted selection blob; falls back to `settings.system.selection`
    pub persisted_selection: Option<String>,
    /// Measured height of the search box, counted only when self-filtering is on
    pub search_box_height: f64,
}

impl UpdateInput {
    /// The persisted selection string in effect for this cycle.
    pub fn persisted_selection(&self) -> Option<&str> {
        self.persisted_selection
            .as_deref()
            .or(self.settings.system.selection.as_deref())
    }
}
