//! Selection state.
//!
//! - [`PersistedSelection`]: the only state that outlives an update cycle,
//!   round-tripped through the host as a JSON array of identities
//! - [`reconcile`]: merges per-row host signals and the persisted set into one
//!   decision per item
//! - [`apply_click`] / [`clear_selection`]: user-driven changes, each yielding
//!   a [`PersistRequest`] for the host to store

mod interaction;
mod persisted;
mod reconcile;

pub use interaction::{apply_click, clear_selection, ClickOptions, SelectionChange};
pub use persisted::{PersistRequest, PersistedSelection};
pub use reconcile::{reconcile, reconcile_items, Reconciliation, SelectionMode};
