use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque key for one category value, stable across re-binds of the same row.
///
/// Identity equality is the only join key between snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Identity {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for Identity {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One chiclet: a single category value with its resolved selection state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub identity: Identity,
    /// Label text shown under (or instead of) the image
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Host selection signal for this row: `None` means no explicit signal
    /// in the current snapshot.
    #[serde(skip)]
    pub raw_selected_signal: Option<bool>,
    pub selected: bool,
    pub selectable: bool,
    /// True when the current search text does not match the label
    pub filtered_out: bool,
}

impl Item {
    /// Create an unselected, selectable item with no image, link or value.
    pub fn new(identity: impl Into<Identity>, label: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            label: label.into(),
            image_url: None,
            link_url: None,
            value: None,
            raw_selected_signal: None,
            selected: false,
            selectable: true,
            filtered_out: false,
        }
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn with_signal(mut self, signal: Option<bool>) -> Self {
        self.raw_selected_signal = signal;
        self
    }

    /// An empty URL counts as no image.
    pub fn has_image(&self) -> bool {
        self.image_url.as_deref().is_some_and(|url| !url.is_empty())
    }

    /// Case-insensitive substring match. `needle` must already be lowercased.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.label.to_lowercase().contains(needle)
    }
}
