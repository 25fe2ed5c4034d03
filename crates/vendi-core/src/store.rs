//! # Storage Seam
//!
//! The [`SaleStore`] trait is the boundary between the pure core and whatever
//! persists sales. The lifecycle operations in vendi-service are generic over
//! it; vendi-db provides the SQLite implementation, and test suites plug in
//! an in-memory map.
//!
//! ## Contract
//! - every method takes a [`CancellationToken`]; an implementation must
//!   abandon in-flight I/O once the token is cancelled and return
//!   [`StoreError::Cancelled`](crate::error::StoreError::Cancelled)
//! - each call is one storage transaction: a sale is written whole or not at
//!   all
//! - concurrent updates to the same id are last-writer-wins; the store does
//!   not arbitrate beyond its own write atomicity

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::StoreResult;
use crate::types::{NewSale, Sale};

/// Persistence operations for sales.
#[async_trait]
pub trait SaleStore: Send + Sync {
    /// Inserts an unsaved sale and returns it with its assigned id.
    async fn create(&self, sale: &NewSale, cancel: &CancellationToken) -> StoreResult<Sale>;

    /// Fetches a sale by id; `None` when no such record exists.
    async fn get_by_id(&self, id: i64, cancel: &CancellationToken) -> StoreResult<Option<Sale>>;

    /// Replaces a persisted sale wholesale, keyed by its id.
    async fn update(&self, sale: &Sale, cancel: &CancellationToken) -> StoreResult<Sale>;

    /// Hard-deletes a sale; `false` when no row matched the id.
    async fn delete(&self, id: i64, cancel: &CancellationToken) -> StoreResult<bool>;

    /// Returns every sale in storage order.
    async fn list_all(&self, cancel: &CancellationToken) -> StoreResult<Vec<Sale>>;
}
