//! Error types for record construction.

/// Result alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors that can occur while building records.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A grade token could not be parsed as a number
    #[error("invalid grade {token:?}")]
    InvalidGrade {
        /// The offending token
        token: String,
        /// Underlying parse failure
        #[source]
        source: std::num::ParseFloatError,
    },

    /// A grade parsed to NaN or infinity, which JSON cannot store
    #[error("invalid grade {token:?}: not a finite number")]
    NonFiniteGrade {
        /// The offending token
        token: String,
    },
}
