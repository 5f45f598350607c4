//! JSON file storage implementation.
//!
//! The whole collection lives in a single UTF-8 file holding a JSON array.
//! Writes overwrite the file in place; a crash mid-write can leave it
//! truncated.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use tracing::debug;

use super::{Result, Storage};

const INDENT: &[u8] = b"    ";

/// File-based JSON storage backend.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    /// Create storage for the file at `path`. Nothing is touched on disk
    /// until the first read or write.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Storage for JsonStorage {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> Result<Option<Value>> {
        match std::fs::read_to_string(&self.path) {
            Ok(json) => {
                debug!(path = %self.path.display(), bytes = json.len(), "read data file");
                Ok(Some(serde_json::from_str(&json)?))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, document: &Value) -> Result<()> {
        let json = to_pretty_json(document)?;
        std::fs::write(&self.path, &json)?;
        debug!(path = %self.path.display(), bytes = json.len(), "wrote data file");
        Ok(())
    }
}

/// Pretty-print with four-space indentation. Non-ASCII text is written as is.
fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut ser)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(dir.path().join("absent.json"));
        assert!(storage.read().unwrap().is_none());
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path().join("staff.json"));

        let doc = json!([{"name": "Иванов", "post": null, "year": 2015}]);
        storage.write(&doc).unwrap();
        assert_eq!(storage.read().unwrap(), Some(doc));
    }

    #[test]
    fn test_output_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("staff.json");
        let mut storage = JsonStorage::new(&path);

        storage.write(&json!([{"name": "Иванов", "year": 2015}])).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "[\n    {\n        \"name\": \"Иванов\",\n        \"year\": 2015\n    }\n]"
        );
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "[{\"name\": ").unwrap();

        let storage = JsonStorage::new(&path);
        assert!(matches!(storage.read(), Err(crate::StorageError::Json(_))));
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path().join("nested").join("staff.json"));
        assert!(matches!(storage.write(&json!([])), Err(crate::StorageError::Io(_))));
    }
}
