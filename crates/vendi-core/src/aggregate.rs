//! # Sale Aggregate Builder
//!
//! Derives the persisted sale shape from a validated draft.
//!
//! Every derived column (`products_summary`, `total_quantity`,
//! `average_unit_price`, `discount_total`, `total_amount`) comes out of ONE
//! builder call over ONE item list. Nothing downstream recomputes or patches
//! them individually, which is what keeps the aggregate self-consistent.
//!
//! The builder does not validate; callers run
//! [`crate::validation::validate_draft`] first. The only guard kept here is
//! the empty item list, because the average unit price divides by the item
//! count.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::error::{CoreError, CoreResult};
use crate::pricing;
use crate::types::{NewSale, Sale, SaleDraft};

/// Builds an unsaved sale from a validated draft.
///
/// ## Derivation
/// - `products_summary`: product names joined with ", " in input order
/// - `total_quantity`: sum of item quantities
/// - `average_unit_price`: simple arithmetic mean of unit prices
/// - `discount_total` / `total_amount`: from the pricing calculator
///
/// ## Note on the average
/// The mean is over per-item unit prices, NOT weighted by quantity. That
/// matches the system of record; it is flagged with the product owner rather
/// than silently corrected here.
pub fn build_sale(draft: &SaleDraft, created_at: DateTime<Utc>) -> CoreResult<NewSale> {
    if draft.items.is_empty() {
        return Err(CoreError::EmptyItems);
    }

    let totals = pricing::compute_totals(&draft.items)?;

    let products_summary = draft
        .items
        .iter()
        .map(|i| i.product.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let total_quantity: i64 = draft.items.iter().map(|i| i.quantity).sum();

    let price_sum: Decimal = draft.items.iter().map(|i| i.unit_price).sum();
    let average_unit_price = price_sum / Decimal::from(draft.items.len() as i64);

    Ok(NewSale {
        date: draft.date,
        customer: draft.customer.clone(),
        branch: draft.branch.clone(),
        products_summary,
        total_quantity,
        average_unit_price,
        discount_total: totals.discount,
        total_amount: totals.total,
        is_cancelled: false,
        created_at,
        modified_at: None,
        cancelled_at: None,
        item_cancelled: false,
    })
}

/// Rebuilds a persisted sale from a new draft, for the update path.
///
/// All derived fields are recomputed from the draft's item list; old and new
/// item data are never merged. The record's identity (`id`, `created_at`) and
/// the reserved cancellation fields are carried through untouched, and
/// `modified_at` is stamped.
pub fn rebuild_sale(
    existing: &Sale,
    draft: &SaleDraft,
    modified_at: DateTime<Utc>,
) -> CoreResult<Sale> {
    let fresh = build_sale(draft, existing.created_at)?;
    let mut sale = fresh.with_id(existing.id);
    sale.is_cancelled = existing.is_cancelled;
    sale.cancelled_at = existing.cancelled_at;
    sale.item_cancelled = existing.item_cancelled;
    sale.modified_at = Some(modified_at);
    Ok(sale)
}

// =============================================================================
// Unit Tests
// =============================================================================
