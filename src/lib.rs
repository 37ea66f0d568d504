//! chiclet-slicer - chiclet-style slicer core for the web
//!
//! Turns a host's categorical data snapshot into a grid of toggleable
//! "chiclet" buttons:
//! - Selection reconciliation across host signals, inversion and a persisted set
//! - Grid geometry from viewport, chrome and text metrics
//! - Search filtering and disabled-item ordering
//! - Cross-cycle flags (scroll reset, selection loaded, waiting for data)
//!
//! Rendering stays with the host; this crate only computes what to draw.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { ChicletSlicer } from 'chiclet-slicer';
//! await init();
//! const slicer = new ChicletSlicer();
//! const snapshot = slicer.update({ data, viewport, settings });
//! const persist = slicer.select(identity, event.ctrlKey);
//! if (persist) host.persistProperties(persist);
//! ```

pub mod error;
pub mod host;
pub mod layout;
pub mod projection;
pub mod selection;
pub mod snapshot;
pub mod text;
pub mod types;
pub mod validate;

use wasm_bindgen::prelude::*;

pub use host::ChicletSlicer;
pub use snapshot::{build_snapshot, PreviousCycleState, Snapshot};

pub use types::*;

/// Validate a settings JSON object and return the clamped settings as JSON.
///
/// # Errors
/// Returns an error if `json` is not a settings object.
#[wasm_bindgen]
pub fn validate_settings_json(json: &str) -> Result<String, JsValue> {
    let settings: Settings = serde_json::from_str(json).map_err(error::ChicletError::from)?;
    serde_json::to_string(&validate::validate_settings(settings))
        .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {e}")))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
