//! Error types for Pagewright

use thiserror::Error;

/// Main error type for Pagewright core operations
#[derive(Error, Debug)]
pub enum CoreError {
    /// About record was not found in storage
    #[error("About record not found: {0}")]
    AboutNotFound(String),

    /// A draft violated the collection schema's field constraints
    #[error("Validation failed for {collection}.{field}: {reason}")]
    Validation {
        /// Collection whose schema rejected the draft
        collection: String,
        /// Field that failed its constraint
        field: String,
        /// Human-readable constraint description
        reason: String,
    },

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Network-level failure talking to the upload endpoint
    #[error("Upload transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The upload endpoint answered but did not accept the file
    #[error("Upload rejected: {0}")]
    UploadRejected(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using CoreError
pub type CoreResult<T> = Result<T, CoreError>;
