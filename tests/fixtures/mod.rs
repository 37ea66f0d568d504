//! Test fixtures for building host update payloads in memory.
//!
//! # Example
//!
//! ```rust
//! use fixtures::UpdateBuilder;
//!
//! let input = UpdateBuilder::new()
//!     .row("a", "Apples")
//!     .selected_row("b", "Bananas", Some(true))
//!     .viewport(300.0, 400.0)
//!     .build();
//! ```
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic,
    clippy::cast_precision_loss
)]

use chiclet_slicer::layout::ViewportSize;
use chiclet_slicer::text::{TextMeasurer, TextProperties};
use chiclet_slicer::{CategoricalData, Settings, UpdateInput};

// ============================================================================
// Update Builder
// ============================================================================

/// Builder for one host update cycle.
#[derive(Debug, Clone)]
pub struct UpdateBuilder {
    input: UpdateInput,
    has_category: bool,
}

impl Default for UpdateBuilder {
    fn default() -> Self {
        Self {
            input: UpdateInput {
                data: CategoricalData {
                    source_name: "Category".to_string(),
                    ..CategoricalData::default()
                },
                viewport: ViewportSize::new(300.0, 400.0),
                ..UpdateInput::default()
            },
            has_category: true,
        }
    }
}

impl UpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder with one unsignalled row per identity, labelled by identity.
    #[must_use]
    pub fn with_rows(ids: &[&str]) -> Self {
        ids.iter().fold(Self::new(), |b, id| b.row(id, id))
    }

    /// Add a row with no selection signal.
    #[must_use]
    pub fn row(self, id: &str, label: &str) -> Self {
        self.selected_row(id, label, None)
    }

    /// Add a row with an explicit tri-state selection signal.
    #[must_use]
    pub fn selected_row(mut self, id: &str, label: &str, signal: Option<bool>) -> Self {
        let data = &mut self.input.data;
        data.categories
            .get_or_insert_with(Vec::new)
            .push(Some(label.to_string()));
        data.identities.push(id.to_string());
        data.selected.push(signal);
        data.images.push(None);
        data.selectable.push(None);
        self
    }

    /// Give the most recently added row an image.
    #[must_use]
    pub fn image(mut self, url: &str) -> Self {
        if let Some(last) = self.input.data.images.last_mut() {
            *last = Some(url.to_string());
        }
        self
    }

    /// Mark the most recently added row as not selectable.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        if let Some(last) = self.input.data.selectable.last_mut() {
            *last = Some(false);
        }
        self
    }

    /// Drop the category column entirely.
    #[must_use]
    pub fn no_category(mut self) -> Self {
        self.has_category = false;
        self
    }

    #[must_use]
    pub fn viewport(mut self, height: f64, width: f64) -> Self {
        self.input.viewport = ViewportSize::new(height, width);
        self
    }

    #[must_use]
    pub fn inverted(mut self) -> Self {
        self.input.data.inverted_selection = true;
        self
    }

    #[must_use]
    pub fn highlights(mut self) -> Self {
        self.input.data.has_highlights = true;
        self
    }

    #[must_use]
    pub fn scope_ids(mut self, n: usize) -> Self {
        self.input.data.number_of_scope_ids = Some(n);
        self
    }

    #[must_use]
    pub fn persisted(mut self, blob: &str) -> Self {
        self.input.persisted_selection = Some(blob.to_string());
        self
    }

    #[must_use]
    pub fn search(mut self, text: &str) -> Self {
        self.input.search_text = Some(text.to_string());
        self.input.settings.system.self_filter_enabled = true;
        self
    }

    #[must_use]
    pub fn search_box_height(mut self, height: f64) -> Self {
        self.input.search_box_height = height;
        self
    }

    /// Modify settings in place.
    #[must_use]
    pub fn settings(mut self, f: impl FnOnce(&mut Settings)) -> Self {
        f(&mut self.input.settings);
        self
    }

    #[must_use]
    pub fn build(self) -> UpdateInput {
        let mut input = self.input;
        if !self.has_category {
            input.data.categories = None;
        }
        input
    }
}

// ============================================================================
// Text Measurement
// ============================================================================

/// Deterministic measurer: every character is `char_width` wide, every line
/// `line_height` tall with no baseline adjustment.
#[derive(Debug, Clone, Copy)]
pub struct FixedMeasurer {
    pub char_width: f64,
    pub line_height: f64,
}

impl Default for FixedMeasurer {
    fn default() -> Self {
        Self {
            char_width: 10.0,
            line_height: 20.0,
        }
    }
}

impl TextMeasurer for FixedMeasurer {
    fn text_width(&self, _props: &TextProperties, text: &str) -> f64 {
        text.chars().count() as f64 * self.char_width
    }

    fn text_height(&self, _props: &TextProperties) -> f64 {
        self.line_height
    }

    fn baseline_delta(&self, _props: &TextProperties) -> f64 {
        0.0
    }
}
