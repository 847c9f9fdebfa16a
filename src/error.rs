use thiserror::Error;

use crate::schema::FieldError;

/// Failures of catalog operations.
///
/// `DuplicateId` and `InvalidFields` are validation failures: the caller
/// should fix the input (or generate a fresh id) and retry. `NotFound` means
/// the tool was deleted out from under the caller; refreshing the view
/// resolves it.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("could not save: a tool with id `{0}` already exists")]
    DuplicateId(String),
    #[error("could not save: {}", describe_fields(.0))]
    InvalidFields(Vec<FieldError>),
    #[error("tool `{0}` no longer exists")]
    NotFound(String),
}

impl CatalogError {
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CatalogError::DuplicateId(_) | CatalogError::InvalidFields(_)
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound(_))
    }
}

fn describe_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Storage write failed after an in-memory change.
///
/// Not an error of the operation itself: the in-memory collection stays the
/// source of truth for the rest of the session.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("changes kept in memory but not saved under `{key}`: {message}")]
pub struct PersistenceWarning {
    pub key: String,
    pub message: String,
}
