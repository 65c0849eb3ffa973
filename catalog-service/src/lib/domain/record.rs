use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

/// A row-equivalent entity handled by a [`RecordStore`].
///
/// Every record has a store-generated integer identifier. `Draft` is the set of writable
/// fields used to create one; `Key` enumerates the columns a record can be looked up by.
pub trait Record: Clone + Send + Sync + 'static {
    type Draft: Send + Sync + 'static;
    type Key: fmt::Display + Send + Sync + 'static;

    /// Entity name used in errors and logs.
    const ENTITY: &'static str;

    /// Store-generated identifier.
    fn record_id(&self) -> i64;
}

/// Error for record store operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("{entity} {id} does not exist")]
    Missing { entity: &'static str, id: i64 },

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Stored {entity} is invalid: {reason}")]
    DataCorruption { entity: &'static str, reason: String },
}

impl StoreError {
    pub fn not_found<R: Record>(key: &R::Key) -> Self {
        StoreError::NotFound {
            entity: R::ENTITY,
            key: key.to_string(),
        }
    }

    pub fn missing<R: Record>(record: &R) -> Self {
        StoreError::Missing {
            entity: R::ENTITY,
            id: record.record_id(),
        }
    }
}

/// Persistence operations for any record type.
///
/// Each call is a single statement against the store; no transaction spans calls.
#[async_trait]
pub trait RecordStore<R: Record>: Send + Sync + 'static {
    /// Retrieve every stored record.
    ///
    /// # Returns
    /// All records, possibly none
    ///
    /// # Errors
    /// * `Database` - Query failed
    async fn find_all(&self) -> Result<Vec<R>, StoreError>;

    /// Retrieve the first record whose keyed column equals the key's value.
    ///
    /// # Errors
    /// * `NotFound` - No record matches
    /// * `Database` - Query failed
    async fn find_one(&self, key: &R::Key) -> Result<R, StoreError>;

    /// Persist a new record; the store assigns its identifier.
    ///
    /// # Returns
    /// The stored record, including its generated identifier
    ///
    /// # Errors
    /// * `ConstraintViolation` - A storage constraint rejected the row
    /// * `Database` - Statement failed
    async fn insert(&self, draft: R::Draft) -> Result<R, StoreError>;

    /// Replace every writable column of the row with the record's identifier.
    ///
    /// # Errors
    /// * `Missing` - The row no longer exists
    /// * `ConstraintViolation` - A storage constraint rejected the row
    /// * `Database` - Statement failed
    async fn update(&self, record: R) -> Result<R, StoreError>;

    /// Remove the row with the record's identifier.
    ///
    /// # Errors
    /// * `Missing` - The row does not exist
    /// * `Database` - Statement failed
    async fn delete(&self, record: &R) -> Result<(), StoreError>;
}
