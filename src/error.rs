//! Structured error types for the chiclet slicer.
//!
//! The reconciliation and layout core is total and never returns these; they
//! only surface at the host boundary (decoding host payloads, interaction on
//! identities that are not in the current snapshot).

/// All errors that can occur at the host-facing boundary.
#[derive(Debug, thiserror::Error)]
pub enum ChicletError {
    /// Host payload or persisted selection failed to decode.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The data snapshot carries no category column.
    #[error("No category column in data snapshot")]
    MissingCategory,

    /// An interaction referenced an identity that is not in the snapshot.
    #[error("Unknown item identity: {0}")]
    UnknownItem(String),

    /// Conversion failure between host values and typed values.
    #[error("Host value conversion: {0}")]
    Host(String),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ChicletError>;

impl From<String> for ChicletError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for ChicletError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for ChicletError {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        Self::Host(e.to_string())
    }
}

impl From<ChicletError> for wasm_bindgen::JsValue {
    fn from(e: ChicletError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
