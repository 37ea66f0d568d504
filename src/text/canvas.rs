//! Canvas 2D text metrics (browser only).

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, TextMetrics};

use super::{EstimatingTextMeasurer, TextMeasurer, TextProperties};

/// Sample string covering ascenders and descenders
const HEIGHT_SAMPLE: &str = "Mg";

/// Measures text with an offscreen `<canvas>` context.
///
/// Any metric the browser fails to produce falls back to the estimate.
pub struct CanvasTextMeasurer {
    ctx: CanvasRenderingContext2d,
    fallback: EstimatingTextMeasurer,
}

impl CanvasTextMeasurer {
    /// Create a measurer backed by a detached canvas element.
    pub fn new() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let canvas: HtmlCanvasElement = document
            .create_element("canvas")
            .ok()?
            .dyn_into()
            .ok()?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()??
            .dyn_into()
            .ok()?;

        Some(Self {
            ctx,
            fallback: EstimatingTextMeasurer::default(),
        })
    }

    fn metrics(&self, props: &TextProperties, text: &str) -> Option<TextMetrics> {
        self.ctx.set_font(&props.css_font());
        self.ctx.measure_text(text).ok()
    }
}

impl TextMeasurer for CanvasTextMeasurer {
    fn text_width(&self, props: &TextProperties, text: &str) -> f64 {
        self.metrics(props, text)
            .map(|m| m.width())
            .unwrap_or_else(|| self.fallback.text_width(props, text))
    }

    fn text_height(&self, props: &TextProperties) -> f64 {
        self.metrics(props, HEIGHT_SAMPLE)
            .map(|m| (m.font_bounding_box_ascent() + m.font_bounding_box_descent()).round())
            .filter(|h| *h > 0.0)
            .unwrap_or_else(|| self.fallback.text_height(props))
    }

    fn baseline_delta(&self, props: &TextProperties) -> f64 {
        self.metrics(props, HEIGHT_SAMPLE)
            .map(|m| m.font_bounding_box_descent().round())
            .filter(|d| *d >= 0.0)
            .unwrap_or_else(|| self.fallback.baseline_delta(props))
    }
}
