//! # Validation Module
//!
//! Structural validation for incoming sale requests.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Deserialization (serde)                                   │
//! │  └── Shape and type checks                                          │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE                                               │
//! │  └── Business field rules, ALL evaluated, failures collected        │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Lifecycle operations (vendi-service)                      │
//! │  └── Existence checks against storage (NotFound, not validation)    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unlike the pricing calculator, validation does not fail fast: every broken
//! rule is reported so the caller can fix a request in one round trip. Pure
//! and side-effect free; no I/O happens here.

use serde::Serialize;

use crate::types::{SaleDraft, SaleItem};
use crate::MAX_SALE_ITEMS;

// =============================================================================
// Field Errors
// =============================================================================

/// One broken validation rule, tied to the field that broke it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Dotted path of the offending field, e.g. `items[2].quantity`.
    pub field: String,
    /// Human-readable message suitable for direct display.
    pub message: String,
}

/// The outcome of validating a request: valid, or a list of field errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }

    fn reject(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }
}

// =============================================================================
// Draft Validation
// =============================================================================

/// Validates a sale draft, collecting every failure.
///
/// ## Rules
/// - `branch` non-empty
/// - `customer` non-empty
/// - `items` non-empty and at most 25 entries
/// - per item: product non-empty, quantity > 0, unit price > 0
///
/// The pricing ceiling (quantity ≤ 20) is NOT checked here; it belongs to the
/// discount tier table and surfaces from the pricing calculator, so the bound
/// has a single owner.
pub fn validate_draft(draft: &SaleDraft) -> ValidationReport {
    let mut report = ValidationReport::default();

    if draft.branch.trim().is_empty() {
        report.reject("branch", "Branch is required.");
    }

    if draft.customer.trim().is_empty() {
        report.reject("customer", "Customer is required.");
    }

    if draft.items.is_empty() {
        report.reject("items", "At least one item is required.");
    } else if draft.items.len() > MAX_SALE_ITEMS {
        report.reject(
            "items",
            format!("A sale cannot have more than {MAX_SALE_ITEMS} items."),
        );
    }

    for (index, item) in draft.items.iter().enumerate() {
        validate_item(index, item, &mut report);
    }

    report
}

/// Validates a single line item, appending failures to the report.
///
/// Used for every item on both the create and update paths.
fn validate_item(index: usize, item: &SaleItem, report: &mut ValidationReport) {
    if item.product.trim().is_empty() {
        report.reject(format!("items[{index}].product"), "Product name is required.");
    }

    if item.quantity <= 0 {
        report.reject(
            format!("items[{index}].quantity"),
            "Quantity must be greater than zero.",
        );
    }

    if item.unit_price <= rust_decimal::Decimal::ZERO {
        report.reject(
            format!("items[{index}].unit_price"),
            "Unit price must be greater than zero.",
        );
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
