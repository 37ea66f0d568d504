//! Viewport sizing: host viewport minus header, search box and borders.

use serde::{Deserialize, Serialize};

use crate::text::{TextMeasurer, TextProperties};
use crate::types::Settings;

/// Width reserved for the grid's vertical scrollbar
pub const SCROLLBAR_ALLOWANCE: f64 = 17.0;

/// A size in device-independent pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSize {
    pub height: f64,
    pub width: f64,
}

impl ViewportSize {
    pub fn new(height: f64, width: f64) -> Self {
        Self { height, width }
    }
}

/// Heights of everything stacked above the grid body.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChromeHeights {
    /// Header text line, 0 when the header is hidden
    pub header: f64,
    /// Search box, 0 when self-filtering is off
    pub search: f64,
    /// Header outline weight
    pub border_weight: f64,
    pub header_bottom_border: f64,
}

impl ChromeHeights {
    /// Derive chrome heights from validated settings.
    ///
    /// `search_box_height` is the host's measurement of its search input.
    pub fn from_settings(
        settings: &Settings,
        measurer: &dyn TextMeasurer,
        search_box_height: f64,
    ) -> Self {
        let header = if settings.header.show {
            measurer.text_height(&TextProperties::chiclet(settings.header.text_size))
        } else {
            0.0
        };
        let search = if settings.system.self_filter_enabled {
            search_box_height
        } else {
            0.0
        };

        Self {
            header,
            search,
            border_weight: settings.header.outline_weight,
            header_bottom_border: settings.header.border_bottom_width,
        }
    }

    /// Sum of all parts, each floored at zero.
    pub fn total(&self) -> f64 {
        [
            self.header,
            self.search,
            self.border_weight,
            self.header_bottom_border,
        ]
        .iter()
        .map(|h| h.max(0.0))
        .sum()
    }
}

/// Usable grid body: never negative, even when chrome exceeds the viewport.
pub fn grid_viewport(viewport: ViewportSize, chrome: &ChromeHeights) -> ViewportSize {
    ViewportSize {
        height: (viewport.height - chrome.total()).max(0.0),
        width: (viewport.width - SCROLLBAR_ALLOWANCE).max(0.0),
    }
}
