//! WASM-exported `ChicletSlicer` - the host-facing layer over the snapshot core.
//!
//! The host pushes one update per cycle and forwards clicks; the slicer owns
//! the cross-cycle state and hands back snapshots and persist requests as
//! plain JS objects. It never persists anything itself.

use wasm_bindgen::prelude::*;

use crate::error::Result;
use crate::selection::{apply_click, clear_selection, ClickOptions, PersistRequest};
use crate::snapshot::{build_snapshot, PreviousCycleState, Snapshot};
use crate::text::{EstimatingTextMeasurer, TextMeasurer};
use crate::types::{Identity, UpdateInput};

#[cfg(target_arch = "wasm32")]
fn default_measurer() -> Box<dyn TextMeasurer> {
    match crate::text::CanvasTextMeasurer::new() {
        Some(canvas) => Box::new(canvas),
        None => Box::new(EstimatingTextMeasurer::default()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn default_measurer() -> Box<dyn TextMeasurer> {
    Box::new(EstimatingTextMeasurer::default())
}

#[wasm_bindgen]
pub struct ChicletSlicer {
    state: PreviousCycleState,
    snapshot: Option<Snapshot>,
    measurer: Box<dyn TextMeasurer>,
}

impl Default for ChicletSlicer {
    fn default() -> Self {
        Self::with_measurer(default_measurer())
    }
}

impl ChicletSlicer {
    /// Slicer with an explicit text measurer.
    pub fn with_measurer(measurer: Box<dyn TextMeasurer>) -> Self {
        Self {
            state: PreviousCycleState::new(),
            snapshot: None,
            measurer,
        }
    }

    /// Run one update cycle and keep its snapshot as current.
    pub fn apply_update(&mut self, input: &UpdateInput) -> &Snapshot {
        let previous = std::mem::take(&mut self.state);
        let (snapshot, next) = build_snapshot(input, previous, self.measurer.as_ref());
        self.state = next;
        self.snapshot.insert(snapshot)
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    pub fn state(&self) -> &PreviousCycleState {
        &self.state
    }

    fn record_change(&mut self, snapshot: Snapshot) {
        self.snapshot = Some(snapshot);
        self.state = std::mem::take(&mut self.state).with_selection_saved();
    }

    /// Apply a click; returns the persist request when the selection changed.
    ///
    /// # Errors
    /// Returns an error if `identity` is not in the current snapshot.
    pub fn click(&mut self, identity: &Identity, ctrl_key: bool) -> Result<Option<PersistRequest>> {
        let Some(current) = self.snapshot.as_ref() else {
            return Err(crate::error::ChicletError::UnknownItem(identity.to_string()));
        };
        let options = ClickOptions::from_settings(&current.settings, ctrl_key);
        let Some(change) = apply_click(&current.items, identity, options)? else {
            return Ok(None);
        };

        let next = current.with_selection(&change.selection);
        self.record_change(next);
        Ok(Some(change.persist))
    }

    /// Clear the selection; returns the persist request when it changed.
    pub fn clear_selection(&mut self) -> Option<PersistRequest> {
        let current = self.snapshot.as_ref()?;
        let change = clear_selection(&current.items, current.settings.general.forced_selection)?;

        let next = current.with_selection(&change.selection);
        self.record_change(next);
        Some(change.persist)
    }
}

#[wasm_bindgen]
impl ChicletSlicer {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self::default()
    }

    /// Run one update cycle from a host payload and return the snapshot.
    ///
    /// # Errors
    /// Returns an error if the payload does not match the update input shape.
    pub fn update(&mut self, input: JsValue) -> std::result::Result<JsValue, JsValue> {
        let input: UpdateInput =
            serde_wasm_bindgen::from_value(input).map_err(crate::error::ChicletError::from)?;
        let snapshot = self.apply_update(&input);
        Ok(serde_wasm_bindgen::to_value(snapshot).map_err(crate::error::ChicletError::from)?)
    }

    /// Forward a click on a chiclet. Returns a persist request or `null`.
    ///
    /// # Errors
    /// Returns an error if `identity` is not in the current snapshot.
    pub fn select(
        &mut self,
        identity: &str,
        ctrl_key: bool,
    ) -> std::result::Result<JsValue, JsValue> {
        match self.click(&Identity::new(identity), ctrl_key)? {
            Some(request) => Ok(serde_wasm_bindgen::to_value(&request)
                .map_err(crate::error::ChicletError::from)?),
            None => Ok(JsValue::NULL),
        }
    }

    /// Forward a click on the clear button. Returns a persist request or `null`.
    ///
    /// # Errors
    /// Returns an error if the request cannot be converted to a JS value.
    pub fn clear(&mut self) -> std::result::Result<JsValue, JsValue> {
        match self.clear_selection() {
            Some(request) => Ok(serde_wasm_bindgen::to_value(&request)
                .map_err(crate::error::ChicletError::from)?),
            None => Ok(JsValue::NULL),
        }
    }

    /// Cell width once the renderer has fitted `computed_columns` columns.
    pub fn resolve_cell_width(&self, computed_columns: u32) -> f64 {
        self.snapshot
            .as_ref()
            .map_or(0.0, |s| s.layout.resolved_cell_width(computed_columns))
    }

    /// Label text truncated to the resolved cell width.
    pub fn tailor_label(&self, label: &str, computed_columns: u32) -> String {
        match &self.snapshot {
            Some(s) => s
                .layout
                .tailor_label(self.measurer.as_ref(), label, computed_columns),
            None => label.to_string(),
        }
    }

    /// Host is about to change data; cleared by the next same-size update.
    pub fn mark_waiting_for_data(&mut self) {
        self.state = std::mem::take(&mut self.state).with_waiting_for_data();
    }

    pub fn waiting_for_data(&self) -> bool {
        self.state.waiting_for_data()
    }
}
