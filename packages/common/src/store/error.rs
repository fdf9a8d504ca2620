use thiserror::Error;
use uuid::Uuid;

/// Errors raised by a [`ContentStore`](super::ContentStore) write.
///
/// Lookups that find nothing are not errors; they return `None`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Slug already in use: {0}")]
    SlugTaken(String),

    #[error("Identifier already in use: {0}")]
    DuplicateId(Uuid),
}
