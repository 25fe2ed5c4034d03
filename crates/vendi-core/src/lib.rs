//! # vendi-core: Pure Business Logic for Vendi
//!
//! This crate is the heart of the Vendi sales management system. It contains
//! the pricing, validation, and aggregate-building rules as pure functions
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Vendi Architecture                           │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                 vendi-service (Lifecycle)                     │  │
//! │  │    create_sale, update_sale, get_sale, list_sales, delete     │  │
//! │  └─────────────────────────────┬─────────────────────────────────┘  │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐  │
//! │  │               ★ vendi-core (THIS CRATE) ★                     │  │
//! │  │                                                               │  │
//! │  │  ┌─────────┐ ┌─────────┐ ┌────────────┐ ┌───────────┐         │  │
//! │  │  │  types  │ │ pricing │ │ validation │ │ aggregate │         │  │
//! │  │  │  Sale   │ │  tiers  │ │   rules    │ │  builder  │         │  │
//! │  │  └─────────┘ └─────────┘ └────────────┘ └───────────┘         │  │
//! │  │                                                               │  │
//! │  │  NO DATABASE • NO NETWORK • PURE FUNCTIONS                    │  │
//! │  └─────────────────────────────┬─────────────────────────────────┘  │
//! │                                │  SaleStore trait                   │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐  │
//! │  │                   vendi-db (SQLite Layer)                     │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (SaleItem, SaleDraft, NewSale, Sale)
//! - [`pricing`] - Tiered quantity discounts and sale totals
//! - [`validation`] - Request validation collecting field-level errors
//! - [`aggregate`] - Derives the persisted Sale shape from an item list
//! - [`store`] - The SaleStore trait implemented by storage backends
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, safe to call concurrently
//! 2. **No I/O**: database and network access is forbidden here
//! 3. **Exact Decimals**: all money is `rust_decimal::Decimal`, never floats
//! 4. **Explicit Errors**: typed errors, never strings or panics

pub mod aggregate;
pub mod error;
pub mod pricing;
pub mod store;
pub mod types;
pub mod validation;

pub use error::{CoreError, CoreResult, StoreError, StoreResult};
pub use store::SaleStore;
pub use types::{NewSale, Sale, SaleDraft, SaleItem};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum items allowed in a single sale.
///
/// ## Business Reason
/// Keeps transactions at a reviewable size; requests with more items are
/// rejected during validation, not silently truncated.
pub const MAX_SALE_ITEMS: usize = 25;

/// Maximum quantity of a single item in a sale.
///
/// ## Business Reason
/// Quantities above 20 are outside every discount tier and the pricing
/// calculator refuses them outright.
pub const MAX_ITEM_QUANTITY: i64 = 20;
