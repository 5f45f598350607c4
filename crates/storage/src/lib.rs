//! Storage abstraction and implementations for roster data files.
//!
//! This crate provides a trait-based document storage interface with a
//! JSON file implementation, and [`RecordFile`], which loads a typed
//! collection, tracks changes and writes it back.

#![warn(missing_docs)]

pub mod trait_;
pub mod json_storage;
pub mod record_file;

pub use trait_::{Storage, StorageError, Result};
pub use json_storage::JsonStorage;
pub use record_file::{RecordFile, StoreConfig};
