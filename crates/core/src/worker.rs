//! Worker records and seniority selection.

use serde::{Deserialize, Serialize};

use crate::record::{MissingFile, Record};
use crate::schema::{FieldKind, FieldSpec};

/// A worker with their post and year of hiring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    /// Full name
    #[serde(default)]
    pub name: String,

    /// Post, stored as `null` when not given
    #[serde(default)]
    pub post: Option<String>,

    /// Year of hiring
    #[serde(default)]
    pub year: Option<i64>,
}

impl Worker {
    /// Build a worker from command-line input.
    pub fn new(name: impl Into<String>, post: Option<String>, year: i64) -> Self {
        Self {
            name: name.into(),
            post,
            year: Some(year),
        }
    }

    /// Full years worked as of `current_year`.
    ///
    /// A worker without a hire year counts as hired this year.
    /// Saturates instead of overflowing for out-of-range years.
    pub fn seniority(&self, current_year: i32) -> i64 {
        let current_year = i64::from(current_year);
        current_year.saturating_sub(self.year.unwrap_or(current_year))
    }
}

impl Record for Worker {
    const KIND: &'static str = "worker";

    const SCHEMA: &'static [FieldSpec] = &[
        FieldSpec::new("name", FieldKind::Text),
        FieldSpec::new("post", FieldKind::NullableText),
        FieldSpec::new("year", FieldKind::Integer),
    ];

    const DEFAULT_MISSING_FILE: MissingFile = MissingFile::Empty;
}

/// Workers with at least `period` years of seniority, in collection order.
pub fn select_workers<'a, I>(staff: I, period: i64, current_year: i32) -> Vec<Worker>
where
    I: IntoIterator<Item = &'a Worker>,
{
    staff
        .into_iter()
        .filter(|w| w.seniority(current_year) >= period)
        .cloned()
        .collect()
}
