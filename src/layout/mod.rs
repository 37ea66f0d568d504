//! Grid layout computation.
//!
//! This module handles:
//! - Subtracting header, search box and border chrome from the host viewport
//! - Auto-sizing cell height from text metrics
//! - Deferred cell width, settled against the renderer's fitted column count
//! - Usable label width and the image/label split inside each chiclet

mod cell;
mod viewport;

pub use cell::{
    auto_cell_height, compute_layout, item_bands, max_text_width, CellWidth, GridConfig,
    GridLayout, ItemBands, CELL_PADDING, CHICLET_INNER_BORDERS, CHICLET_INNER_PADDING,
    IMAGE_BAND_ALLOWANCE, MAX_IMAGE_SPLIT_TO_SHOW, MIN_IMAGE_SPLIT_TO_SHOW,
};
pub use viewport::{grid_viewport, ChromeHeights, ViewportSize, SCROLLBAR_ALLOWANCE};
