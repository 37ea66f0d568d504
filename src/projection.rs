//! Typed row projection.
//!
//! Turns the host's parallel column bag into [`Item`]s once per update cycle,
//! so everything downstream works on one typed shape.

use std::collections::HashSet;

use crate::error::{ChicletError, Result};
use crate::types::{CategoricalData, Identity, Item};

fn cell<T: Clone>(column: &[Option<T>], row: usize) -> Option<T> {
    column.get(row).cloned().flatten()
}

/// Positional key for a row without a host identity, skipping any key the
/// host already uses.
fn positional_identity(row: usize, host_keys: &HashSet<&str>) -> Identity {
    let mut key = format!("#{row}");
    let mut attempt = 0usize;
    while host_keys.contains(key.as_str()) {
        attempt += 1;
        key = format!("#{row}~{attempt}");
    }
    Identity::new(key)
}

/// Project every category row into an [`Item`].
///
/// Rows without an identity key get a positional one that never collides
/// with a host key. A row whose identity repeats an earlier row is dropped so
/// identities stay unique.
///
/// # Errors
/// Returns [`ChicletError::MissingCategory`] if there is no category column
/// or it has no rows.
pub fn project_items(data: &CategoricalData) -> Result<Vec<Item>> {
    let categories = data
        .categories
        .as_ref()
        .filter(|values| !values.is_empty())
        .ok_or(ChicletError::MissingCategory)?;

    let host_keys: HashSet<&str> = data.identities.iter().map(String::as_str).collect();
    let mut seen: HashSet<Identity> = HashSet::with_capacity(categories.len());
    let mut items = Vec::with_capacity(categories.len());

    for (row, label) in categories.iter().enumerate() {
        let identity = data
            .identities
            .get(row)
            .map_or_else(
                || positional_identity(row, &host_keys),
                |key| Identity::new(key.as_str()),
            );
        if !seen.insert(identity.clone()) {
            tracing::warn!(%identity, row, "dropping row with duplicate identity");
            continue;
        }

        items.push(Item {
            identity,
            label: label.clone().unwrap_or_default(),
            image_url: cell(&data.images, row).filter(|url| !url.is_empty()),
            link_url: cell(&data.urls, row).filter(|url| !url.is_empty()),
            value: cell(&data.values, row),
            raw_selected_signal: cell(&data.selected, row),
            selected: false,
            selectable: cell(&data.selectable, row).unwrap_or(true),
            filtered_out: false,
        });
    }

    Ok(items)
}
