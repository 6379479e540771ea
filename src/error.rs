//! Editor Errors
//!
//! Only the persistence and configuration boundaries can fail; the
//! interaction engine itself degrades every edge case to a no-op.

/// Common result type for fallible boundary operations
pub type EditorResult<T> = Result<T, EditorError>;

/// Boundary-level errors
#[derive(Debug, Clone, PartialEq)]
pub enum EditorError {
    /// The backing storage rejected a read or write
    Storage(String),
    /// Data could not be (de)serialized
    Serialization(String),
    /// A browser API (window, localStorage) is not available
    Unavailable(String),
}

impl std::fmt::Display for EditorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditorError::Storage(msg) => write!(f, "Storage error: {}", msg),
            EditorError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            EditorError::Unavailable(msg) => write!(f, "Unavailable: {}", msg),
        }
    }
}

impl std::error::Error for EditorError {}

impl From<serde_json::Error> for EditorError {
    fn from(err: serde_json::Error) -> Self {
        EditorError::Serialization(err.to_string())
    }
}
