//! # Error Types
//!
//! Domain-specific error types for vendi-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  vendi-core errors (this file)                                      │
//! │  ├── CoreError   - pricing/aggregate rule violations                │
//! │  └── StoreError  - what SaleStore implementations may fail with     │
//! │                                                                     │
//! │  vendi-db errors (separate crate)                                   │
//! │  └── DbError     - SQLite operation failures → StoreError           │
//! │                                                                     │
//! │  vendi-service errors                                               │
//! │  └── ServiceError - caller-facing taxonomy                          │
//! │                     (Validation / NotFound / Storage)               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation rule failures are not errors in this hierarchy: the validator
//! collects them into a [`crate::validation::ValidationReport`] so a request
//! can be rejected with every problem listed at once.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These represent business rule violations inside the pricing calculator and
/// aggregate builder. They abort the operation that raised them; no partial
/// result is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// An item quantity is above the highest discount tier.
    ///
    /// ## When This Occurs
    /// - A request item carries a quantity greater than 20
    ///
    /// The calculator fails on the first offending item and discards any
    /// accumulation done so far.
    #[error("Quantity for product '{product}' cannot exceed {max}.")]
    QuantityExceeded { product: String, max: i64 },

    /// The aggregate builder was handed an empty item list.
    ///
    /// ## When This Occurs
    /// - A caller skipped validation before building the aggregate
    ///
    /// Validation already rejects empty item lists; this guards the builder's
    /// own arithmetic (the average unit price divides by the item count).
    #[error("A sale must contain at least one item.")]
    EmptyItems,
}

// =============================================================================
// Store Error
// =============================================================================

/// Failures a [`crate::store::SaleStore`] implementation may surface.
///
/// Deliberately coarse: the lifecycle layer treats every backend failure the
/// same way (propagate, never retry). Backend-specific detail stays in the
/// message.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying storage backend failed.
    #[error("storage backend failure: {0}")]
    Backend(String),

    /// The caller cancelled the operation while storage I/O was in flight.
    #[error("operation was cancelled")]
    Cancelled,
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Convenience alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_exceeded_message() {
        let err = CoreError::QuantityExceeded {
            product: "Product X".to_string(),
            max: 20,
        };
        assert_eq!(
            err.to_string(),
            "Quantity for product 'Product X' cannot exceed 20."
        );
    }

    #[test]
    fn test_store_error_messages() {
        assert_eq!(
            StoreError::Backend("disk full".to_string()).to_string(),
            "storage backend failure: disk full"
        );
        assert_eq!(StoreError::Cancelled.to_string(), "operation was cancelled");
    }
}
