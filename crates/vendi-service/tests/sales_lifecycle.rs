//! End-to-end lifecycle tests for [`SaleService`] over an in-memory store.
//!
//! The store here is a test double, but it honors the full [`SaleStore`]
//! contract: sequential id assignment, replace-only updates, and the
//! cancellation token short-circuit.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use vendi_core::{NewSale, Sale, SaleStore, StoreError, StoreResult};
use vendi_service::{SaleItemRequest, SaleRequest, SaleService, ServiceError};

// =============================================================================
// In-Memory Store
// =============================================================================

#[derive(Debug, Clone, Default)]
struct InMemorySaleStore {
    sales: Arc<Mutex<HashMap<i64, Sale>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemorySaleStore {
    fn new() -> Self {
        InMemorySaleStore {
            sales: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    fn len(&self) -> usize {
        self.sales.lock().unwrap().len()
    }

    fn check(cancel: &CancellationToken) -> StoreResult<()> {
        if cancel.is_cancelled() {
            Err(StoreError::Cancelled)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl SaleStore for InMemorySaleStore {
    async fn create(&self, sale: &NewSale, cancel: &CancellationToken) -> StoreResult<Sale> {
        Self::check(cancel)?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let stored = sale.clone().with_id(id);
        self.sales.lock().unwrap().insert(id, stored.clone());
        Ok(stored)
    }

    async fn get_by_id(&self, id: i64, cancel: &CancellationToken) -> StoreResult<Option<Sale>> {
        Self::check(cancel)?;
        Ok(self.sales.lock().unwrap().get(&id).cloned())
    }

    async fn update(&self, sale: &Sale, cancel: &CancellationToken) -> StoreResult<Sale> {
        Self::check(cancel)?;
        let mut sales = self.sales.lock().unwrap();
        if !sales.contains_key(&sale.id) {
            return Err(StoreError::Backend(format!("no row with id {}", sale.id)));
        }
        sales.insert(sale.id, sale.clone());
        Ok(sale.clone())
    }

    async fn delete(&self, id: i64, cancel: &CancellationToken) -> StoreResult<bool> {
        Self::check(cancel)?;
        Ok(self.sales.lock().unwrap().remove(&id).is_some())
    }

    async fn list_all(&self, cancel: &CancellationToken) -> StoreResult<Vec<Sale>> {
        Self::check(cancel)?;
        let mut sales: Vec<Sale> = self.sales.lock().unwrap().values().cloned().collect();
        sales.sort_by_key(|s| s.id);
        Ok(sales)
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Captures the service's tracing output per test; `RUST_LOG` controls the
/// level. `try_init` because every test races to install the subscriber.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// The store clones share their maps, so the returned handle observes every
/// write the service makes.
fn service() -> (SaleService<InMemorySaleStore>, InMemorySaleStore) {
    init_tracing();
    let store = InMemorySaleStore::new();
    (SaleService::new(store.clone()), store)
}

fn item(product: &str, quantity: i64, unit_price: &str) -> SaleItemRequest {
    SaleItemRequest {
        product: product.to_string(),
        quantity,
        unit_price: unit_price.parse().unwrap(),
    }
}

fn request(items: Vec<SaleItemRequest>) -> SaleRequest {
    SaleRequest {
        date: None,
        customer: "Acme Corp".to_string(),
        branch: "North".to_string(),
        items,
    }
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_below_discount_threshold_charges_gross() {
    let (svc, _store) = service();
    let cancel = CancellationToken::new();

    // 3 x 50.00, below the first tier: no discount.
    let summary = svc
        .create_sale(&request(vec![item("Widget", 3, "50.00")]), &cancel)
        .await
        .unwrap();

    assert_eq!(summary.id, 1);
    assert_eq!(summary.customer, "Acme Corp");
    assert_eq!(summary.total_amount, dec("150.00"));
}

#[tokio::test]
async fn test_create_mid_tier_applies_ten_percent() {
    let (svc, _store) = service();
    let cancel = CancellationToken::new();

    // 5 x 50.00 = 250.00 gross, 10% off.
    let summary = svc
        .create_sale(&request(vec![item("Widget", 5, "50.00")]), &cancel)
        .await
        .unwrap();

    assert_eq!(summary.total_amount, dec("225.00"));
}

#[tokio::test]
async fn test_create_top_tier_applies_twenty_percent() {
    let (svc, _store) = service();
    let cancel = CancellationToken::new();

    // 12 x 50.00 = 600.00 gross, 20% off.
    let summary = svc
        .create_sale(&request(vec![item("Widget", 12, "50.00")]), &cancel)
        .await
        .unwrap();

    assert_eq!(summary.total_amount, dec("480.00"));
}

#[tokio::test]
async fn test_create_assigns_sequential_ids() {
    let (svc, _store) = service();
    let cancel = CancellationToken::new();

    let first = svc
        .create_sale(&request(vec![item("A", 1, "1.00")]), &cancel)
        .await
        .unwrap();
    let second = svc
        .create_sale(&request(vec![item("B", 1, "1.00")]), &cancel)
        .await
        .unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
}

#[tokio::test]
async fn test_create_with_empty_items_persists_nothing() {
    let (svc, store) = service();
    let cancel = CancellationToken::new();

    let err = svc.create_sale(&request(vec![]), &cancel).await.unwrap_err();
    match err {
        ServiceError::Validation(failure) => {
            assert!(failure.mentions_field("items"));
            assert!(failure.to_string().contains("At least one item is required."));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(store.len(), 0);
}

#[tokio::test]
async fn test_create_with_twenty_six_items_is_rejected() {
    let (svc, _store) = service();
    let cancel = CancellationToken::new();

    let items: Vec<SaleItemRequest> = (0..26).map(|i| item(&format!("P{i}"), 1, "1.00")).collect();
    let err = svc.create_sale(&request(items), &cancel).await.unwrap_err();
    match err {
        ServiceError::Validation(failure) => {
            assert!(failure
                .to_string()
                .contains("A sale cannot have more than 25 items."));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_collects_every_field_error() {
    let (svc, _store) = service();
    let cancel = CancellationToken::new();

    let req = SaleRequest {
        date: None,
        customer: "   ".to_string(),
        branch: String::new(),
        items: vec![item("", 0, "0.00")],
    };

    let err = svc.create_sale(&req, &cancel).await.unwrap_err();
    match err {
        ServiceError::Validation(failure) => {
            assert!(failure.mentions_field("customer"));
            assert!(failure.mentions_field("branch"));
            assert!(failure.mentions_field("items[0].product"));
            assert!(failure.mentions_field("items[0].quantity"));
            assert!(failure.mentions_field("items[0].unit_price"));
            assert_eq!(failure.errors().len(), 5);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_quantity_over_ceiling_persists_nothing() {
    let (svc, store) = service();
    let cancel = CancellationToken::new();

    let err = svc
        .create_sale(&request(vec![item("Bulk", 21, "10.00")]), &cancel)
        .await
        .unwrap_err();
    match err {
        ServiceError::Validation(failure) => {
            assert!(failure
                .to_string()
                .contains("Quantity for product 'Bulk' cannot exceed 20."));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(store.len(), 0);
}

// =============================================================================
// Get / List
// =============================================================================

#[tokio::test]
async fn test_get_returns_stored_summary() {
    let (svc, _store) = service();
    let cancel = CancellationToken::new();

    let created = svc
        .create_sale(&request(vec![item("Widget", 4, "25.00")]), &cancel)
        .await
        .unwrap();

    let fetched = svc.get_sale(created.id, &cancel).await.unwrap();
    assert_eq!(fetched, created);
    // 4 x 25.00 = 100.00 gross, 10% tier.
    assert_eq!(fetched.total_amount, dec("90.00"));
}

#[tokio::test]
async fn test_get_missing_id_is_not_found() {
    let (svc, _store) = service();
    let cancel = CancellationToken::new();

    let err = svc.get_sale(77, &cancel).await.unwrap_err();
    match err {
        ServiceError::NotFound(id) => assert_eq!(id, 77),
        other => panic!("expected NotFound, got {other:?}"),
    }
    let err = svc.get_sale(77, &cancel).await.unwrap_err();
    assert_eq!(err.to_string(), "Sale with ID 77 not found");
}

#[tokio::test]
async fn test_list_returns_all_in_id_order() {
    let (svc, _store) = service();
    let cancel = CancellationToken::new();

    for product in ["A", "B", "C"] {
        svc.create_sale(&request(vec![item(product, 1, "1.00")]), &cancel)
            .await
            .unwrap();
    }

    let all = svc.list_sales(&cancel).await.unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_list_empty_store_is_empty_vec() {
    let (svc, _store) = service();
    let cancel = CancellationToken::new();

    assert!(svc.list_sales(&cancel).await.unwrap().is_empty());
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_update_recomputes_every_derived_field() {
    let (svc, _store) = service();
    let cancel = CancellationToken::new();

    let created = svc
        .create_sale(&request(vec![item("Widget", 3, "50.00")]), &cancel)
        .await
        .unwrap();
    assert_eq!(created.total_amount, dec("150.00"));

    // Replace the item list wholesale; the new quantity lands in the 20% tier.
    let updated = svc
        .update_sale(created.id, &request(vec![item("Widget", 10, "50.00")]), &cancel)
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.total_amount, dec("400.00"));

    let fetched = svc.get_sale(created.id, &cancel).await.unwrap();
    assert_eq!(fetched.total_amount, dec("400.00"));
}

#[tokio::test]
async fn test_update_missing_id_is_not_found() {
    let (svc, _store) = service();
    let cancel = CancellationToken::new();

    let err = svc
        .update_sale(5, &request(vec![item("Widget", 1, "1.00")]), &cancel)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(5)));
}

#[tokio::test]
async fn test_update_invalid_request_leaves_sale_untouched() {
    let (svc, _store) = service();
    let cancel = CancellationToken::new();

    let created = svc
        .create_sale(&request(vec![item("Widget", 3, "50.00")]), &cancel)
        .await
        .unwrap();

    let err = svc
        .update_sale(created.id, &request(vec![]), &cancel)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    let fetched = svc.get_sale(created.id, &cancel).await.unwrap();
    assert_eq!(fetched.total_amount, dec("150.00"));
}

#[tokio::test]
async fn test_update_nonpositive_id_is_validation_error() {
    let (svc, _store) = service();
    let cancel = CancellationToken::new();

    let err = svc
        .update_sale(0, &request(vec![item("Widget", 1, "1.00")]), &cancel)
        .await
        .unwrap_err();
    match err {
        ServiceError::Validation(failure) => assert!(failure.mentions_field("id")),
        other => panic!("expected validation error, got {other:?}"),
    }
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_removes_the_sale() {
    let (svc, store) = service();
    let cancel = CancellationToken::new();

    let created = svc
        .create_sale(&request(vec![item("Widget", 1, "1.00")]), &cancel)
        .await
        .unwrap();

    svc.delete_sale(created.id, &cancel).await.unwrap();

    let err = svc.get_sale(created.id, &cancel).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
    assert_eq!(store.len(), 0);
}

#[tokio::test]
async fn test_delete_missing_id_is_not_found() {
    let (svc, _store) = service();
    let cancel = CancellationToken::new();

    let err = svc.delete_sale(123, &cancel).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(123)));
}

// =============================================================================
// Cancellation
// =============================================================================

#[tokio::test]
async fn test_cancelled_token_surfaces_as_storage_error() {
    let (svc, store) = service();
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = svc
        .create_sale(&request(vec![item("Widget", 1, "1.00")]), &cancel)
        .await
        .unwrap_err();
    match err {
        ServiceError::Storage(StoreError::Cancelled) => {}
        other => panic!("expected cancelled storage error, got {other:?}"),
    }
    assert_eq!(store.len(), 0);
}
