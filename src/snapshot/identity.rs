//! Row identity diffing between consecutive snapshots.

use crate::types::Identity;

/// True when both row sets list the same identities in the same order.
///
/// An empty previous set never matches, so a cycle following an empty one
/// always resets the scroll position.
pub fn same_category_identity(previous: &[Identity], current: &[Identity]) -> bool {
    !previous.is_empty() && previous == current
}
