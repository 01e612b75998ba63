//! Validation errors raised while assembling a run report.
//!
//! The report model itself is infallible once built; these errors only
//! surface at the edges where loosely-typed data enters:
//! - diff records carrying an unknown type tag or an empty key
//! - construction without the fields every report needs

/// A malformed value rejected while constructing or patching a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Diff type tag outside of `CREATE`, `DELETE`, `UPDATE`.
    UnknownDiffType(String),
    /// Diff record without a key.
    EmptyKey,
    /// Required report field that was never supplied.
    MissingField(&'static str),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::UnknownDiffType(tag) => write!(
                f,
                "unknown diff type '{tag}' (expected CREATE, DELETE or UPDATE)"
            ),
            ValidationError::EmptyKey => write!(f, "diff key must not be empty"),
            ValidationError::MissingField(field) => {
                write!(f, "report is missing required field '{field}'")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Result type for report construction.
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;
