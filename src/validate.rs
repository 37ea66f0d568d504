//! Settings validation.
//!
//! Clamps every numeric field of a raw [`Settings`] into its valid range. This
//! is total: there is no failure path, and enum strings outside the known set
//! are left alone.

use crate::types::Settings;

pub const MIN_IMAGE_SPLIT: f64 = 0.0;
pub const MAX_IMAGE_SPLIT: f64 = 100.0;
pub const MAX_COLUMNS: f64 = 1000.0;
pub const MAX_ROWS: f64 = 1000.0;
pub const MAX_TRANSPARENCY: f64 = 100.0;

/// Clamp into `[min, max]`; NaN maps to `min`.
fn clamp_range(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

/// Floor at zero; NaN maps to zero.
fn non_negative(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.max(0.0)
    }
}

/// Image split percentage clamped to `[0, 100]`.
pub fn valid_image_split(image_split: f64) -> f64 {
    clamp_range(image_split, MIN_IMAGE_SPLIT, MAX_IMAGE_SPLIT)
}

/// Return a copy of `settings` with every numeric field in range.
///
/// Must run before reconciliation and layout on every update cycle.
#[must_use]
pub fn validate_settings(mut settings: Settings) -> Settings {
    settings.header.outline_weight = non_negative(settings.header.outline_weight);
    settings.header.border_bottom_width = non_negative(settings.header.border_bottom_width);

    let text = &mut settings.slicer_text;
    text.outline_weight = non_negative(text.outline_weight);
    text.padding = non_negative(text.padding);
    text.height = non_negative(text.height);
    text.width = non_negative(text.width);
    text.transparency = clamp_range(text.transparency, 0.0, MAX_TRANSPARENCY);

    settings.images.image_split = valid_image_split(settings.images.image_split);

    settings.general.columns = clamp_range(settings.general.columns, 0.0, MAX_COLUMNS);
    settings.general.rows = clamp_range(settings.general.rows, 0.0, MAX_ROWS);

    settings
}
