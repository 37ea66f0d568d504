//! Text measurement and label tailoring.
//!
//! Measurement is a black box to the layout code: anything that maps a font
//! descriptor and a string to pixel metrics can stand behind [`TextMeasurer`].
//! In the browser that is a canvas 2D context; everywhere else a ratio-based
//! estimate keeps layout deterministic.

#[cfg(target_arch = "wasm32")]
mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasTextMeasurer;

pub const DEFAULT_FONT_FAMILY: &str = "helvetica, arial, sans-serif";
pub const DEFAULT_FONT_SIZE_PT: f64 = 11.0;
pub const ELLIPSIS: &str = "...";

const PX_PER_INCH: f64 = 96.0;
const PT_PER_INCH: f64 = 72.0;

/// Font descriptor handed to the measurer.
#[derive(Debug, Clone, PartialEq)]
pub struct TextProperties {
    pub font_family: String,
    pub font_size_px: f64,
}

impl TextProperties {
    /// Font used for chiclet labels and the header, sized in points.
    ///
    /// A zero, negative or non-finite size falls back to 11pt.
    pub fn chiclet(text_size_pt: f64) -> Self {
        let pt = if text_size_pt.is_finite() && text_size_pt > 0.0 {
            text_size_pt
        } else {
            DEFAULT_FONT_SIZE_PT
        };
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size_px: pt * PX_PER_INCH / PT_PER_INCH,
        }
    }

    /// CSS `font` shorthand, e.g. `13.333px helvetica, arial, sans-serif`.
    pub fn css_font(&self) -> String {
        format!("{}px {}", self.font_size_px, self.font_family)
    }
}

/// Pure text metrics: text + font descriptor -> pixel sizes.
pub trait TextMeasurer {
    /// Advance width of `text`.
    fn text_width(&self, props: &TextProperties, text: &str) -> f64;

    /// Line height of the font.
    fn text_height(&self, props: &TextProperties) -> f64;

    /// Distance from the alphabetic baseline to the bottom of the line box.
    fn baseline_delta(&self, props: &TextProperties) -> f64;
}

/// Ratio-based metrics, proportional to the font size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatingTextMeasurer {
    /// Average glyph advance as a fraction of the font size
    pub char_width: f64,
    /// Line height as a fraction of the font size
    pub line_height: f64,
    /// Descent as a fraction of the font size
    pub descent: f64,
}

impl Default for EstimatingTextMeasurer {
    fn default() -> Self {
        Self {
            char_width: 0.55,
            line_height: 1.2,
            descent: 0.2,
        }
    }
}

impl TextMeasurer for EstimatingTextMeasurer {
    #[allow(clippy::cast_precision_loss)]
    fn text_width(&self, props: &TextProperties, text: &str) -> f64 {
        text.chars().count() as f64 * props.font_size_px * self.char_width
    }

    fn text_height(&self, props: &TextProperties) -> f64 {
        (props.font_size_px * self.line_height).round()
    }

    fn baseline_delta(&self, props: &TextProperties) -> f64 {
        (props.font_size_px * self.descent).round()
    }
}

/// Fit `text` into `max_width`, truncating with an ellipsis.
///
/// Returns the text unchanged when it fits, otherwise the longest prefix
/// followed by `...` that fits. When not even one character fits the result
/// is the bare ellipsis.
pub fn tailor_text(
    measurer: &dyn TextMeasurer,
    props: &TextProperties,
    text: &str,
    max_width: f64,
) -> String {
    if measurer.text_width(props, text) <= max_width {
        return text.to_string();
    }

    let truncated = |len: usize| -> String {
        let mut s: String = text.chars().take(len).collect();
        s.push_str(ELLIPSIS);
        s
    };

    // Prefix width is monotonic in length, so binary search the longest fit.
    let mut lo = 0;
    let mut hi = text.chars().count().saturating_sub(1);
    while lo < hi {
        let mid = lo + (hi - lo).div_ceil(2);
        if measurer.text_width(props, &truncated(mid)) <= max_width {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    truncated(lo)
}
