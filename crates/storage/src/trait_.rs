//! Storage trait abstraction.

use roster_core::ValidationError;
use serde_json::Value;

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Loaded document has the wrong shape
    #[error("invalid data")]
    Validation(#[from] ValidationError),

    /// Data file does not exist
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Backing store for one JSON document.
///
/// This trait allows different storage backends to be plugged in under
/// [`crate::RecordFile`].
pub trait Storage {
    /// Location of the document, used in messages.
    fn location(&self) -> String;

    /// Read the whole document, `None` if it does not exist.
    fn read(&self) -> Result<Option<Value>>;

    /// Replace the whole document.
    fn write(&mut self, document: &Value) -> Result<()>;
}
