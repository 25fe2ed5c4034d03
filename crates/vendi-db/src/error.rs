//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                │
//! │                                                                     │
//! │  SQLite error (sqlx::Error)                                         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  DbError (this module) ← adds context and categorization            │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  StoreError (vendi-core) ← what the lifecycle layer sees            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;
use vendi_core::StoreError;

/// Database operation errors.
///
/// These wrap sqlx errors with enough context for debugging; the lifecycle
/// layer only ever sees them collapsed into [`StoreError`].
#[derive(Debug, Error)]
pub enum DbError {
    /// No row matched the given id.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i64 },

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file doesn't exist and can't be created
    /// - File permissions issue
    /// - Disk full
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// A stored value could not be converted to its domain type.
    ///
    /// ## When This Occurs
    /// - A decimal TEXT column holds a value Decimal cannot parse
    ///   (only possible if the table was written by something else)
    #[error("Column decode failed: {0}")]
    Decode(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// The caller's cancellation token fired mid-operation.
    #[error("Operation cancelled")]
    Cancelled,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and id.
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        DbError::NotFound { entity, id }
    }
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => DbError::QueryFailed(db_err.message().to_string()),
            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,
            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),
            sqlx::Error::ColumnDecode { index, source } => {
                DbError::Decode(format!("column {index}: {source}"))
            }
            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Collapse database failures into the storage error the core understands.
impl From<DbError> for StoreError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Cancelled => StoreError::Cancelled,
            other => StoreError::Backend(other.to_string()),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
