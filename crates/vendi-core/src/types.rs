//! # Domain Types
//!
//! Core data shapes for the sale domain.
//!
//! ## Shape Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     How a Sale Takes Shape                          │
//! │                                                                     │
//! │  Caller request (DTO, vendi-service)                                │
//! │       │  draft_from_request                                         │
//! │       ▼                                                             │
//! │  SaleDraft ── validate_draft ──► ValidationReport                   │
//! │       │                                                             │
//! │       │  aggregate::build_sale (pricing inside)                     │
//! │       ▼                                                             │
//! │  NewSale (unsaved, no id)                                           │
//! │       │  SaleStore::create assigns the id                           │
//! │       ▼                                                             │
//! │  Sale (persisted aggregate)                                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Line items are transient: they exist only inside a request and are
//! collapsed into the summary fields of the persisted [`Sale`].

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// Sale Item
// =============================================================================

/// One (product, quantity, unit price) line in a sale request.
///
/// Not persisted on its own; the aggregate builder folds the item list into
/// the summary columns of [`Sale`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleItem {
    /// Product name as entered by the caller.
    pub product: String,
    /// Units sold. Valid range is (0, 20]; the upper bound is the ceiling of
    /// the discount tier table.
    pub quantity: i64,
    /// Price per unit. Exact decimal, never a float.
    pub unit_price: Decimal,
}

// =============================================================================
// Sale Draft
// =============================================================================

/// The validated request shape: everything needed to build a sale, before any
/// derived field exists.
///
/// Both create and update paths produce a draft; update never patches an
/// existing record field-by-field, it rebuilds from the draft's item list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleDraft {
    /// When the sale was made, if the caller supplied it.
    pub date: Option<DateTime<Utc>>,
    /// The customer making the purchase.
    pub customer: String,
    /// The branch where the sale happened.
    pub branch: String,
    /// Line items; 1 to 25 entries once validated.
    pub items: Vec<SaleItem>,
}

// =============================================================================
// Sale (persisted aggregate)
// =============================================================================

/// A sale as it is persisted: line items collapsed into summary fields.
///
/// ## Invariants
/// - `id` is assigned by storage and immutable afterwards
/// - `products_summary`, `total_quantity`, `average_unit_price`,
///   `discount_total` and `total_amount` are always derived from one item
///   list in a single builder call, never patched independently
/// - `is_cancelled`/`cancelled_at`/`item_cancelled` are reserved for a future
///   cancellation operation; nothing sets them today
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    /// System-assigned primary key.
    pub id: i64,
    pub date: Option<DateTime<Utc>>,
    pub customer: String,
    pub branch: String,
    /// Product names joined with ", " in request order.
    pub products_summary: String,
    /// Sum of item quantities.
    pub total_quantity: i64,
    /// Simple mean of per-item unit prices. Deliberately NOT quantity-weighted;
    /// see the aggregate module.
    pub average_unit_price: Decimal,
    /// Gross amount minus the post-discount total.
    pub discount_total: Decimal,
    /// Post-discount grand total.
    pub total_amount: Decimal,
    pub is_cancelled: bool,
    pub created_at: DateTime<Utc>,
    /// Set when an update rewrites the record.
    pub modified_at: Option<DateTime<Utc>>,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub item_cancelled: bool,
}

// =============================================================================
// New Sale (unsaved aggregate)
// =============================================================================

/// A fully derived sale that has not been persisted yet: [`Sale`] without the
/// storage-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSale {
    pub date: Option<DateTime<Utc>>,
    pub customer: String,
    pub branch: String,
    pub products_summary: String,
    pub total_quantity: i64,
    pub average_unit_price: Decimal,
    pub discount_total: Decimal,
    pub total_amount: Decimal,
    pub is_cancelled: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub item_cancelled: bool,
}

impl NewSale {
    /// Attaches the storage-assigned id, producing the persisted shape.
    ///
    /// Storage backends call this once after the insert reports the new key.
    pub fn with_id(self, id: i64) -> Sale {
        Sale {
            id,
            date: self.date,
            customer: self.customer,
            branch: self.branch,
            products_summary: self.products_summary,
            total_quantity: self.total_quantity,
            average_unit_price: self.average_unit_price,
            discount_total: self.discount_total,
            total_amount: self.total_amount,
            is_cancelled: self.is_cancelled,
            created_at: self.created_at,
            modified_at: self.modified_at,
            cancelled_at: self.cancelled_at,
            item_cancelled: self.item_cancelled,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
