use crate::layout::ViewportSize;
use crate::types::Identity;

/// Whether a snapshot has been built before.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyclePhase {
    /// No prior snapshot; the next build always resets the scroll position
    ColdStart,
    Warm,
}

/// Cross-cycle state threaded through every update.
///
/// The host owns this value: it passes the previous one into
/// [`build_snapshot`](super::build_snapshot) and stores the one returned.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviousCycleState {
    pub(super) identities: Option<Vec<Identity>>,
    pub(super) viewport: Option<ViewportSize>,
    /// Outer `None` until a cycle produced data; inner is that cycle's blob.
    pub(super) selection_blob: Option<Option<String>>,
    pub(super) selection_saved: bool,
    pub(super) waiting_for_data: bool,
}

impl Default for PreviousCycleState {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviousCycleState {
    /// Cold-start state, waiting for the first data.
    pub fn new() -> Self {
        Self {
            identities: None,
            viewport: None,
            selection_blob: None,
            selection_saved: false,
            waiting_for_data: true,
        }
    }

    pub fn phase(&self) -> CyclePhase {
        if self.identities.is_some() {
            CyclePhase::Warm
        } else {
            CyclePhase::ColdStart
        }
    }

    /// Row identities of the last snapshot.
    pub fn identities(&self) -> Option<&[Identity]> {
        self.identities.as_deref()
    }

    /// Viewport cached by the last cycle.
    pub fn viewport(&self) -> Option<ViewportSize> {
        self.viewport
    }

    pub fn waiting_for_data(&self) -> bool {
        self.waiting_for_data
    }

    pub fn selection_saved(&self) -> bool {
        self.selection_saved
    }

    /// Set the latch; the next cycle with an unchanged viewport clears it.
    #[must_use]
    pub fn with_waiting_for_data(mut self) -> Self {
        self.waiting_for_data = true;
        self
    }

    /// Record that a persist request was sent, so the next cycle treats its
    /// selection as already applied.
    #[must_use]
    pub fn with_selection_saved(mut self) -> Self {
        self.selection_saved = true;
        self
    }
}
