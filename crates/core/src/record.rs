//! Record descriptor trait shared by every record variant.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::schema::FieldSpec;

/// What to do when a data file does not exist yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingFile {
    /// Report the file as not found
    Fail,
    /// Start from an empty collection
    Empty,
}

/// A record variant stored in a roster data file.
///
/// The associated constants describe how a collection of the variant is
/// ordered, validated and loaded, so load/save/display logic can stay
/// generic.
pub trait Record: Serialize + DeserializeOwned + Clone + std::fmt::Debug {
    /// Human readable name used in logs.
    const KIND: &'static str;

    /// Fields expected in each JSON object.
    const SCHEMA: &'static [FieldSpec];

    /// Whether the collection is kept sorted by [`Record::sort_key`].
    const SORTED: bool = false;

    /// Policy applied when the data file is missing.
    const DEFAULT_MISSING_FILE: MissingFile = MissingFile::Fail;

    /// Key used to order the collection when [`Record::SORTED`] is set.
    fn sort_key(&self) -> &str {
        ""
    }

    /// Whether the record appears in a full listing.
    fn is_listed(&self) -> bool {
        true
    }
}
