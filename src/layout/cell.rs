//! Per-cell geometry: height, width, usable text width and image/label bands.

use serde::Serialize;

use super::viewport::{grid_viewport, ChromeHeights, ViewportSize};
use crate::text::{tailor_text, TextMeasurer, TextProperties};
use crate::types::{Orientation, Settings, ShowDisabled};

/// Inner padding plus inner borders added to an auto-sized cell
pub const CELL_PADDING: f64 = 10.0;
/// Left + right padding inside a chiclet
pub const CHICLET_INNER_PADDING: f64 = 14.0;
/// Left + right inner border of a chiclet
pub const CHICLET_INNER_BORDERS: f64 = 2.0;
/// Extra height for auto-sized cells when any item has an image
pub const IMAGE_BAND_ALLOWANCE: f64 = 100.0;
/// Below this split the image band is hidden
pub const MIN_IMAGE_SPLIT_TO_SHOW: f64 = 10.0;
/// Above this split the label band is hidden
pub const MAX_IMAGE_SPLIT_TO_SHOW: f64 = 90.0;

const FULL_PERCENT: f64 = 100.0;

/// Grid configuration projected from validated settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfig {
    pub orientation: Orientation,
    /// 0 = auto
    pub columns: u32,
    /// 0 = auto
    pub rows: u32,
    /// 0 = auto from the grid viewport and the renderer's column count
    pub cell_width: f64,
    /// 0 = auto from text metrics
    pub cell_height: f64,
    pub image_split_percent: f64,
    pub show_disabled: ShowDisabled,
    /// Chiclet label size in points
    pub text_size: f64,
    pub outline_weight: f64,
}

impl GridConfig {
    /// Project validated settings; column and row counts truncate to whole cells.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_settings(settings: &Settings) -> Self {
        // Validated counts are finite and within [0, 1000].
        let count = |v: f64| v.max(0.0).trunc() as u32;
        Self {
            orientation: settings.general.orientation.clone(),
            columns: count(settings.general.columns),
            rows: count(settings.general.rows),
            cell_width: settings.slicer_text.width,
            cell_height: settings.slicer_text.height,
            image_split_percent: settings.images.image_split,
            show_disabled: settings.general.show_disabled.clone(),
            text_size: settings.slicer_text.text_size,
            outline_weight: settings.slicer_text.outline_weight,
        }
    }
}

/// Cell width, either configured or left for the renderer to settle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CellWidth {
    Fixed(f64),
    /// Resolved once the renderer reports how many columns it fitted
    Auto,
}

impl CellWidth {
    pub fn from_config(width: f64) -> Self {
        if width > 0.0 {
            Self::Fixed(width)
        } else {
            Self::Auto
        }
    }

    /// Concrete width given the renderer's computed column count.
    pub fn resolve(self, grid_width: f64, computed_columns: u32) -> f64 {
        match self {
            Self::Fixed(width) => width,
            Self::Auto => (grid_width / f64::from(computed_columns.max(1))).round(),
        }
    }
}

/// Height of an auto-sized cell: one text line plus padding, plus the image
/// band when any item carries an image.
pub fn auto_cell_height(measurer: &dyn TextMeasurer, text_size: f64, has_any_image: bool) -> f64 {
    let props = TextProperties::chiclet(text_size);
    let text = measurer.text_height(&props) + measurer.baseline_delta(&props) + CELL_PADDING;
    if has_any_image {
        text + IMAGE_BAND_ALLOWANCE
    } else {
        text
    }
}

/// Width left for label text inside a cell, floored at zero.
pub fn max_text_width(cell_width: f64, outline_weight: f64) -> f64 {
    (cell_width - CHICLET_INNER_PADDING - CHICLET_INNER_BORDERS - outline_weight).max(0.0)
}

/// Vertical split of one chiclet between image and label, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemBands {
    pub image_percent: f64,
    pub label_percent: f64,
    pub image_hidden: bool,
    pub label_hidden: bool,
}

pub fn item_bands(has_image: bool, image_split: f64) -> ItemBands {
    let image_percent = if has_image { image_split } else { 0.0 };
    ItemBands {
        image_percent,
        label_percent: FULL_PERCENT - image_percent,
        image_hidden: !has_image || image_split < MIN_IMAGE_SPLIT_TO_SHOW,
        label_hidden: image_split > MAX_IMAGE_SPLIT_TO_SHOW,
    }
}

/// Geometry the grid renderer must honor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridLayout {
    pub grid_viewport: ViewportSize,
    pub cell_height: f64,
    pub cell_width: CellWidth,
    pub image_split_percent: f64,
    pub outline_weight: f64,
    pub text_size: f64,
}

impl GridLayout {
    /// Concrete cell width once the renderer has fitted its columns.
    pub fn resolved_cell_width(&self, computed_columns: u32) -> f64 {
        self.cell_width
            .resolve(self.grid_viewport.width, computed_columns)
    }

    pub fn max_text_width(&self, computed_columns: u32) -> f64 {
        max_text_width(self.resolved_cell_width(computed_columns), self.outline_weight)
    }

    pub fn bands(&self, has_image: bool) -> ItemBands {
        item_bands(has_image, self.image_split_percent)
    }

    /// Label text truncated to the cell's usable width.
    pub fn tailor_label(
        &self,
        measurer: &dyn TextMeasurer,
        label: &str,
        computed_columns: u32,
    ) -> String {
        tailor_text(
            measurer,
            &TextProperties::chiclet(self.text_size),
            label,
            self.max_text_width(computed_columns),
        )
    }
}

/// Compute grid geometry for one update cycle.
pub fn compute_layout(
    viewport: ViewportSize,
    chrome: &ChromeHeights,
    grid: &GridConfig,
    has_any_image: bool,
    measurer: &dyn TextMeasurer,
) -> GridLayout {
    let cell_height = if grid.cell_height > 0.0 {
        grid.cell_height
    } else {
        auto_cell_height(measurer, grid.text_size, has_any_image)
    };

    GridLayout {
        grid_viewport: grid_viewport(viewport, chrome),
        cell_height,
        cell_width: CellWidth::from_config(grid.cell_width),
        image_split_percent: grid.image_split_percent,
        outline_weight: grid.outline_weight,
        text_size: grid.text_size,
    }
}
