//! Roster core data models.
//!
//! This crate defines the record types managed by the roster tools, the
//! ordered collection that holds them, and the shape checks applied to
//! loaded JSON documents.

#![warn(missing_docs)]

mod error;

// Record descriptors
mod record;
mod schema;

// Collections
mod collection;

// Record variants
mod student;
mod worker;

// Re-exports
pub use error::{CoreError, Result};
pub use record::{MissingFile, Record};
pub use schema::{validate, FieldKind, FieldSpec, ValidationError, ValidationMode};
pub use collection::Collection;
pub use student::{format_grade, parse_grades, Student, PASSING_MEAN};
pub use worker::{select_workers, Worker};
