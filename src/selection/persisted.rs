use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::Identity;

/// Ordered set of identities the user last confirmed as selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersistedSelection {
    ids: Vec<Identity>,
}

impl PersistedSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from identities in order, dropping repeats.
    pub fn from_identities<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = Identity>,
    {
        let mut selection = Self::new();
        for id in ids {
            selection.insert(id);
        }
        selection
    }

    /// Strict decode of a persisted blob. `null` decodes to the empty set.
    ///
    /// # Errors
    /// Returns an error if the blob is not a JSON array of strings.
    pub fn parse(blob: &str) -> Result<Self> {
        let ids: Option<Vec<Identity>> = serde_json::from_str(blob)?;
        Ok(Self::from_identities(ids.unwrap_or_default()))
    }

    /// Lenient decode: absent, empty or malformed blobs yield the empty set.
    pub fn from_blob(blob: Option<&str>) -> Self {
        let Some(blob) = blob.filter(|b| !b.trim().is_empty()) else {
            return Self::new();
        };
        match Self::parse(blob) {
            Ok(selection) => selection,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring malformed persisted selection");
                Self::new()
            }
        }
    }

    /// Encode as a JSON array of identity strings.
    pub fn to_blob(&self) -> String {
        serde_json::to_string(&self.ids).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn contains(&self, id: &Identity) -> bool {
        self.ids.contains(id)
    }

    /// Append `id` unless already present. Returns whether it was added.
    pub fn insert(&mut self, id: Identity) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Returns whether `id` was present.
    pub fn remove(&mut self, id: &Identity) -> bool {
        let before = self.ids.len();
        self.ids.retain(|existing| existing != id);
        self.ids.len() != before
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Identity> {
        self.ids.iter()
    }
}

/// Side-channel request for the host to durably store a selection blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistRequest {
    pub selection: String,
}

impl PersistRequest {
    pub fn for_selection(selection: &PersistedSelection) -> Self {
        Self {
            selection: selection.to_blob(),
        }
    }
}
