//! Student records.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::record::{MissingFile, Record};
use crate::schema::{FieldKind, FieldSpec};

/// Mean grade a student must exceed to appear in the listing.
pub const PASSING_MEAN: f64 = 4.0;

/// A student with their group and grades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Full name
    #[serde(default)]
    pub full_name: String,

    /// Group number, also the collection sort key
    #[serde(default)]
    pub group_number: String,

    /// Grades in the order they were entered
    #[serde(default)]
    pub grades: Vec<f64>,
}

impl Student {
    /// Build a student from command-line input.
    ///
    /// `grades` is a whitespace separated list of numbers.
    pub fn new(
        full_name: impl Into<String>,
        group_number: impl Into<String>,
        grades: &str,
    ) -> Result<Self> {
        Ok(Self {
            full_name: full_name.into(),
            group_number: group_number.into(),
            grades: parse_grades(grades)?,
        })
    }

    /// Arithmetic mean of the grades, `None` when there are no grades.
    pub fn mean(&self) -> Option<f64> {
        if self.grades.is_empty() {
            return None;
        }
        Some(self.grades.iter().sum::<f64>() / self.grades.len() as f64)
    }
}

impl Record for Student {
    const KIND: &'static str = "student";

    const SCHEMA: &'static [FieldSpec] = &[
        FieldSpec::new("full_name", FieldKind::Text),
        FieldSpec::new("group_number", FieldKind::Text),
        FieldSpec::new("grades", FieldKind::NumberList),
    ];

    const SORTED: bool = true;

    const DEFAULT_MISSING_FILE: MissingFile = MissingFile::Fail;

    fn sort_key(&self) -> &str {
        &self.group_number
    }

    /// Students without grades have no mean and are never listed.
    fn is_listed(&self) -> bool {
        self.mean().is_some_and(|mean| mean > PASSING_MEAN)
    }
}

/// Parse a whitespace separated list of grades.
pub fn parse_grades(input: &str) -> Result<Vec<f64>> {
    input
        .split_whitespace()
        .map(|token| {
            let grade = token.parse::<f64>().map_err(|source| CoreError::InvalidGrade {
                token: token.to_string(),
                source,
            })?;
            if !grade.is_finite() {
                return Err(CoreError::NonFiniteGrade {
                    token: token.to_string(),
                });
            }
            Ok(grade)
        })
        .collect()
}

/// Format a grade the way it was entered as a number: whole values keep a
/// trailing `.0`.
pub fn format_grade(grade: f64) -> String {
    if grade.is_finite() && grade.fract() == 0.0 && grade.abs() < 1e16 {
        format!("{:.1}", grade)
    } else {
        grade.to_string()
    }
}
