//! Load-mutate-commit unit of work over one data file.

use roster_core::{validate, Collection, MissingFile, Record, ValidationMode};
use tracing::{debug, warn};

use super::{JsonStorage, Result, Storage, StorageError};

/// How a data file is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Behaviour when the file does not exist
    pub missing_file: MissingFile,

    /// Shape check applied to the loaded document
    pub validation: ValidationMode,
}

impl StoreConfig {
    /// Defaults declared by the record variant.
    pub fn for_record<R: Record>() -> Self {
        Self {
            missing_file: R::DEFAULT_MISSING_FILE,
            validation: ValidationMode::default(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            missing_file: MissingFile::Fail,
            validation: ValidationMode::default(),
        }
    }
}

/// A collection loaded from storage, written back on [`RecordFile::commit`]
/// if it was modified.
pub struct RecordFile<R: Record, S: Storage = JsonStorage> {
    storage: S,
    records: Collection<R>,
    pending: bool,
}

impl<R: Record, S: Storage> RecordFile<R, S> {
    /// Load the collection from `storage`.
    pub fn open(storage: S, config: StoreConfig) -> Result<Self> {
        let records = match storage.read()? {
            Some(document) => {
                validate(&document, R::SCHEMA, config.validation)?;
                let records: Vec<R> = serde_json::from_value(document)?;
                debug!(kind = R::KIND, count = records.len(), "loaded records");
                Collection::from_vec(records)
            }
            None => match config.missing_file {
                MissingFile::Fail => return Err(StorageError::NotFound(storage.location())),
                MissingFile::Empty => {
                    warn!(kind = R::KIND, path = %storage.location(), "data file not found, starting empty");
                    Collection::new()
                }
            },
        };

        Ok(Self {
            storage,
            records,
            pending: false,
        })
    }

    /// The loaded records.
    pub fn records(&self) -> &Collection<R> {
        &self.records
    }

    /// Add a record and mark the file for writing.
    pub fn add(&mut self, record: R) {
        self.records.add(record);
        self.pending = true;
    }

    /// Write the collection if it was modified. Returns whether a write happened.
    pub fn commit(&mut self) -> Result<bool> {
        if !self.pending {
            return Ok(false);
        }
        let document = serde_json::to_value(self.records.as_slice())?;
        self.storage.write(&document)?;
        debug!(kind = R::KIND, count = self.records.len(), "saved records");
        self.pending = false;
        Ok(true)
    }

    /// Give back the underlying storage.
    pub fn into_storage(self) -> S {
        self.storage
    }
}

impl<R: Record> RecordFile<R, JsonStorage> {
    /// Open the JSON file at `path`.
    pub fn open_path(path: impl AsRef<std::path::Path>, config: StoreConfig) -> Result<Self> {
        Self::open(JsonStorage::new(path), config)
    }
}
