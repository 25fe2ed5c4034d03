//! # Line-Item Pricing
//!
//! Tiered quantity discounts and sale totals.
//!
//! ## Discount Tiers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Quantity Discount Tiers                          │
//! │                                                                     │
//! │   quantity      1  2  3 │ 4 ………………… 9 │ 10 ……………………… 20 │ 21+       │
//! │   rate             0%   │     10%     │       20%       │ rejected  │
//! │                                                                     │
//! │   line total = quantity × unit_price × (1 − rate)                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The tier breakpoints live in ONE ordered table. Both the create and the
//! update path price through [`compute_totals`], so the breakpoints cannot
//! drift between call sites.
//!
//! All arithmetic is `rust_decimal::Decimal`: totals are exact, with no
//! binary floating-point rounding.

use rust_decimal::Decimal;

use crate::error::{CoreError, CoreResult};
use crate::types::SaleItem;
use crate::MAX_ITEM_QUANTITY;

// =============================================================================
// Tier Table
// =============================================================================

/// Ordered discount tiers as (minimum quantity, discount percent).
///
/// Scanned top-down; the first tier whose minimum is satisfied wins. The table
/// is total over (0, MAX_ITEM_QUANTITY] because the last tier's minimum is 0.
const DISCOUNT_TIERS: [(i64, i64); 3] = [(10, 20), (4, 10), (0, 0)];

/// Returns the discount rate for a quantity, or `None` above the tier ceiling.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use vendi_core::pricing::discount_rate;
///
/// assert_eq!(discount_rate(3), Some(Decimal::ZERO));
/// assert_eq!(discount_rate(4), Some(Decimal::new(10, 2))); // 0.10
/// assert_eq!(discount_rate(10), Some(Decimal::new(20, 2))); // 0.20
/// assert_eq!(discount_rate(21), None);
/// ```
pub fn discount_rate(quantity: i64) -> Option<Decimal> {
    if quantity > MAX_ITEM_QUANTITY {
        return None;
    }

    let (_, percent) = DISCOUNT_TIERS
        .iter()
        .find(|(min, _)| quantity >= *min)
        .copied()
        .unwrap_or((0, 0));

    Some(Decimal::new(percent, 2))
}

// =============================================================================
// Sale Totals
// =============================================================================

/// The pricing calculator's output over one item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaleTotals {
    /// Sum of quantity × unit price before any discount.
    pub gross: Decimal,
    /// Total discount granted (gross − total).
    pub discount: Decimal,
    /// Post-discount grand total.
    pub total: Decimal,
}

/// Computes the totals of a sale, applying per-item quantity discounts.
///
/// Fails fast on the first item whose quantity exceeds the tier ceiling; the
/// caller sees no partial accumulation. Pure: no side effects, safe to call
/// repeatedly and concurrently.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use vendi_core::pricing::compute_totals;
/// use vendi_core::types::SaleItem;
///
/// let items = vec![SaleItem {
///     product: "Product B".to_string(),
///     quantity: 5,
///     unit_price: Decimal::new(5000, 2), // 50.00
/// }];
///
/// // 5 × 50.00 × 0.90 = 225.00
/// let totals = compute_totals(&items).unwrap();
/// assert_eq!(totals.total, Decimal::new(22500, 2));
/// ```
pub fn compute_totals(items: &[SaleItem]) -> CoreResult<SaleTotals> {
    let mut gross = Decimal::ZERO;
    let mut total = Decimal::ZERO;

    for item in items {
        let rate = discount_rate(item.quantity).ok_or_else(|| CoreError::QuantityExceeded {
            product: item.product.clone(),
            max: MAX_ITEM_QUANTITY,
        })?;

        let line_gross = Decimal::from(item.quantity) * item.unit_price;
        gross += line_gross;
        total += line_gross * (Decimal::ONE - rate);
    }

    Ok(SaleTotals {
        gross,
        discount: gross - total,
        total,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
