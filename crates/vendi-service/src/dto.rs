//! # Request and Summary Shapes
//!
//! The DTOs consumed and produced by the lifecycle operations, plus the
//! named mapping functions between them and the domain types. Mapping is
//! explicit field-by-field code, so each direction is independently testable.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vendi_core::{Sale, SaleDraft, SaleItem};

// =============================================================================
// Requests
// =============================================================================

/// One line item as submitted by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleItemRequest {
    pub product: String,
    pub quantity: i64,
    pub unit_price: Decimal,
}

/// A sale as submitted by the caller; used by both create and update.
///
/// Update never sends partial item lists: the submitted list replaces the old
/// one entirely and every derived field is recomputed from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRequest {
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    pub customer: String,
    pub branch: String,
    pub items: Vec<SaleItemRequest>,
}

// =============================================================================
// Summary
// =============================================================================

/// The subset of a sale intended for external display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleSummary {
    pub id: i64,
    pub date: Option<DateTime<Utc>>,
    pub customer: String,
    pub branch: String,
    pub total_amount: Decimal,
}

// =============================================================================
// Mapping Functions
// =============================================================================

/// Maps an incoming request to the domain draft shape.
pub fn draft_from_request(request: &SaleRequest) -> SaleDraft {
    SaleDraft {
        date: request.date,
        customer: request.customer.clone(),
        branch: request.branch.clone(),
        items: request
            .items
            .iter()
            .map(|item| SaleItem {
                product: item.product.clone(),
                quantity: item.quantity,
                unit_price: item.unit_price,
            })
            .collect(),
    }
}

/// Maps a persisted sale to its display summary.
pub fn summary_from_sale(sale: &Sale) -> SaleSummary {
    SaleSummary {
        id: sale.id,
        date: sale.date,
        customer: sale.customer.clone(),
        branch: sale.branch.clone(),
        total_amount: sale.total_amount,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
