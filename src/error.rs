//! Error types for the catalog core.
//!
//! Model invariants fail with [`ValidationError`]; everything else the core
//! can report is a [`CatalogError`].

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{ContentId, ContentKind};

/// A field value that violates a model invariant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    /// Name of the offending field
    pub field: &'static str,

    /// Human-readable reason
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Errors raised by the codec, store and service
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Malformed {tag} record: expected at least {expected} fields, found {found}")]
    Format {
        tag: String,
        expected: usize,
        found: usize,
    },

    #[error("Cannot parse {field} from {value:?}")]
    Parse { field: &'static str, value: String },

    #[error("Unknown record tag: {0:?}")]
    UnknownTag(String),

    #[error("Not a catalog file (expected a .csv extension): {}", path.display())]
    FormatMismatch { path: PathBuf },

    #[error("No content with id {0}")]
    NotFound(ContentId),

    #[error("A {kind} titled {title:?} already exists")]
    Duplicate { kind: ContentKind, title: String },

    #[error("Id {0} is already taken by another record")]
    IdInUse(ContentId),

    #[error("Line is not valid UTF-8")]
    Encoding,

    #[error("Invalid duration range: {min} > {max}")]
    InvalidRange { min: u32, max: u32 },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CatalogError {
    /// Wrap an IO failure with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_names_field() {
        let err = ValidationError::new("title", "must not be empty");
        assert_eq!(err.to_string(), "invalid title: must not be empty");
    }

    #[test]
    fn test_validation_converts_into_catalog_error() {
        let err: CatalogError = ValidationError::new("genre", "must not be empty").into();
        assert!(matches!(err, CatalogError::Validation(ref v) if v.field == "genre"));
    }

    #[test]
    fn test_format_mismatch_message_includes_path() {
        let err = CatalogError::FormatMismatch {
            path: PathBuf::from("data/catalog.json"),
        };
        assert!(err.to_string().contains("data/catalog.json"));
    }
}
