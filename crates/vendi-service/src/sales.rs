//! # Sale Service
//!
//! The orchestrator for sale lifecycle operations. Stateless between calls:
//! each operation validates its own request, computes everything it persists,
//! and maps the stored record to a summary.
//!
//! Persistence is an injected [`SaleStore`]; this module never opens a
//! connection or manages a schema.

use chrono::Utc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use vendi_core::validation::validate_draft;
use vendi_core::{aggregate, SaleStore};

use crate::dto::{draft_from_request, summary_from_sale, SaleRequest, SaleSummary};
use crate::error::{ServiceError, ServiceResult, ValidationFailure};

/// Sale lifecycle operations over an injected storage collaborator.
///
/// ## Concurrency
/// One request per call; no shared mutable state lives here, so a single
/// service value can serve concurrent callers. Concurrent updates to the same
/// id are last-writer-wins, resolved by the storage layer's write atomicity.
#[derive(Debug, Clone)]
pub struct SaleService<S: SaleStore> {
    store: S,
}

impl<S: SaleStore> SaleService<S> {
    /// Creates a service over the given storage collaborator.
    pub fn new(store: S) -> Self {
        SaleService { store }
    }

    /// Creates a sale: validate → compute → persist → summarize.
    pub async fn create_sale(
        &self,
        request: &SaleRequest,
        cancel: &CancellationToken,
    ) -> ServiceResult<SaleSummary> {
        debug!(customer = %request.customer, items = request.items.len(), "create_sale");

        let draft = draft_from_request(request);

        let report = validate_draft(&draft);
        if !report.is_valid() {
            let failure = ValidationFailure::new(report.into_errors());
            error!(%failure, "Sale creation rejected");
            return Err(ServiceError::Validation(failure));
        }

        // Pricing runs inside the builder; a quantity above the tier ceiling
        // aborts here with nothing persisted.
        let new_sale = aggregate::build_sale(&draft, Utc::now())?;

        let sale = self.store.create(&new_sale, cancel).await?;

        info!(sale_id = %sale.id, total = %sale.total_amount, "Sale created");
        Ok(summary_from_sale(&sale))
    }

    /// Updates a sale: validate → fetch → rebuild every derived field from
    /// the new item list → persist → summarize.
    pub async fn update_sale(
        &self,
        id: i64,
        request: &SaleRequest,
        cancel: &CancellationToken,
    ) -> ServiceResult<SaleSummary> {
        debug!(sale_id = %id, "update_sale");

        if id <= 0 {
            return Err(ServiceError::invalid_field(
                "id",
                "Sale id must be greater than zero.",
            ));
        }

        let draft = draft_from_request(request);

        let report = validate_draft(&draft);
        if !report.is_valid() {
            let failure = ValidationFailure::new(report.into_errors());
            error!(sale_id = %id, %failure, "Sale update rejected");
            return Err(ServiceError::Validation(failure));
        }

        let existing = self
            .store
            .get_by_id(id, cancel)
            .await?
            .ok_or(ServiceError::NotFound(id))?;

        let rebuilt = aggregate::rebuild_sale(&existing, &draft, Utc::now())?;
        let sale = self.store.update(&rebuilt, cancel).await?;

        info!(sale_id = %sale.id, total = %sale.total_amount, "Sale updated");
        Ok(summary_from_sale(&sale))
    }

    /// Fetches one sale; the stored record is returned as-is, without any
    /// recomputation.
    pub async fn get_sale(
        &self,
        id: i64,
        cancel: &CancellationToken,
    ) -> ServiceResult<SaleSummary> {
        let sale = self
            .store
            .get_by_id(id, cancel)
            .await?
            .ok_or(ServiceError::NotFound(id))?;

        Ok(summary_from_sale(&sale))
    }

    /// Lists every sale in storage order. No filtering or pagination.
    pub async fn list_sales(&self, cancel: &CancellationToken) -> ServiceResult<Vec<SaleSummary>> {
        let sales = self.store.list_all(cancel).await?;
        debug!(count = sales.len(), "list_sales");

        Ok(sales.iter().map(summary_from_sale).collect())
    }

    /// Hard-deletes one sale.
    ///
    /// The existence check runs first so a missing id is reported as
    /// NotFound; a delete that then matches no row gets the same answer.
    pub async fn delete_sale(&self, id: i64, cancel: &CancellationToken) -> ServiceResult<()> {
        debug!(sale_id = %id, "delete_sale");

        self.store
            .get_by_id(id, cancel)
            .await?
            .ok_or(ServiceError::NotFound(id))?;

        let deleted = self.store.delete(id, cancel).await?;
        if !deleted {
            return Err(ServiceError::NotFound(id));
        }

        info!(sale_id = %id, "Sale deleted");
        Ok(())
    }
}
