//! Shape validation for loaded JSON documents.
//!
//! A data file is a JSON array of objects. Each record variant declares the
//! fields it expects; validation runs on the raw [`Value`] before it is
//! deserialized so that errors can point at the offending element.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON type expected for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A string
    Text,
    /// A string or `null`
    NullableText,
    /// An integer number that fits in an `i64`
    Integer,
    /// An array of numbers
    NumberList,
}

impl FieldKind {
    fn matches(self, value: &Value) -> bool {
        match self {
            FieldKind::Text => value.is_string(),
            FieldKind::NullableText => value.is_string() || value.is_null(),
            FieldKind::Integer => value.is_i64(),
            FieldKind::NumberList => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_number)),
        }
    }

    fn describe(self) -> &'static str {
        match self {
            FieldKind::Text => "string",
            FieldKind::NullableText => "string or null",
            FieldKind::Integer => "integer",
            FieldKind::NumberList => "array of numbers",
        }
    }
}

/// A field declared by a record variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// JSON key
    pub name: &'static str,
    /// Expected type
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Declare a field.
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// How strictly loaded documents are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Present fields must have the right type; missing ones default
    #[default]
    Lenient,
    /// Every declared field must be present with the right type
    Strict,
}

/// A loaded document does not match the declared record shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The document root is not an array
    #[error("expected a JSON array of records, found {found}")]
    NotAnArray {
        /// JSON type found instead
        found: &'static str,
    },

    /// An element of the array is not an object
    #[error("record {index}: expected an object, found {found}")]
    NotAnObject {
        /// Position in the array
        index: usize,
        /// JSON type found instead
        found: &'static str,
    },

    /// A required field is absent
    #[error("record {index}: missing field `{field}`")]
    MissingField {
        /// Position in the array
        index: usize,
        /// Field name
        field: &'static str,
    },

    /// A field has the wrong JSON type
    #[error("record {index}: field `{field}` must be {expected}, found {found}")]
    WrongType {
        /// Position in the array
        index: usize,
        /// Field name
        field: &'static str,
        /// Expected type description
        expected: &'static str,
        /// JSON type found instead
        found: &'static str,
    },
}

/// Check that `document` is an array of objects matching `schema`.
///
/// Keys not declared in the schema are ignored.
pub fn validate(
    document: &Value,
    schema: &[FieldSpec],
    mode: ValidationMode,
) -> Result<(), ValidationError> {
    let items = document.as_array().ok_or(ValidationError::NotAnArray {
        found: type_name(document),
    })?;

    for (index, item) in items.iter().enumerate() {
        let object = item.as_object().ok_or(ValidationError::NotAnObject {
            index,
            found: type_name(item),
        })?;

        for spec in schema {
            match object.get(spec.name) {
                Some(value) if !spec.kind.matches(value) => {
                    return Err(ValidationError::WrongType {
                        index,
                        field: spec.name,
                        expected: spec.kind.describe(),
                        found: type_name(value),
                    });
                }
                Some(_) => {}
                None if mode == ValidationMode::Strict => {
                    return Err(ValidationError::MissingField {
                        index,
                        field: spec.name,
                    });
                }
                None => {}
            }
        }
    }

    Ok(())
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
