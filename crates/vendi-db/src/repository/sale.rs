//! # Sale Repository
//!
//! SQLite-backed implementation of the core's [`SaleStore`] trait.
//!
//! ## Column Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Row ⇄ Domain Conversion                         │
//! │                                                                     │
//! │  sales table                SaleRow               Sale              │
//! │  ───────────                ───────               ────              │
//! │  average_unit_price TEXT ─► String ── from_str ─► Decimal           │
//! │  discount_total     TEXT ─► String ── from_str ─► Decimal           │
//! │  total_amount       TEXT ─► String ── from_str ─► Decimal           │
//! │  created_at         TEXT ─► DateTime<Utc> (sqlx/chrono)             │
//! │                                                                     │
//! │  SQLite has no decimal affinity; TEXT keeps the values exact.       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every query is raced against the caller's cancellation token; a cancelled
//! token abandons the in-flight call with [`DbError::Cancelled`].

use std::future::Future;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::SqlitePool;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::{DbError, DbResult};
use vendi_core::{NewSale, Sale, SaleStore, StoreResult};

/// Repository for sale database operations.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    pool: SqlitePool,
}

const SALE_COLUMNS: &str = "id, sale_date, customer, branch, products_summary, total_quantity, \
     average_unit_price, discount_total, total_amount, is_cancelled, \
     created_at, modified_at, cancelled_at, item_cancelled";

impl SaleRepository {
    /// Creates a new SaleRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SaleRepository { pool }
    }

    /// Inserts a sale and returns it with the rowid SQLite assigned.
    pub async fn insert_sale(
        &self,
        sale: &NewSale,
        cancel: &CancellationToken,
    ) -> DbResult<Sale> {
        debug!(customer = %sale.customer, branch = %sale.branch, "Inserting sale");

        let query = sqlx::query(
            r#"
            INSERT INTO sales (
                sale_date, customer, branch, products_summary, total_quantity,
                average_unit_price, discount_total, total_amount, is_cancelled,
                created_at, modified_at, cancelled_at, item_cancelled
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
            "#,
        )
        .bind(sale.date)
        .bind(&sale.customer)
        .bind(&sale.branch)
        .bind(&sale.products_summary)
        .bind(sale.total_quantity)
        .bind(sale.average_unit_price.to_string())
        .bind(sale.discount_total.to_string())
        .bind(sale.total_amount.to_string())
        .bind(sale.is_cancelled)
        .bind(sale.created_at)
        .bind(sale.modified_at)
        .bind(sale.cancelled_at)
        .bind(sale.item_cancelled)
        .execute(&self.pool);

        let result = run_cancellable(cancel, query).await?;
        Ok(sale.clone().with_id(result.last_insert_rowid()))
    }

    /// Fetches a sale by id.
    pub async fn fetch_by_id(
        &self,
        id: i64,
        cancel: &CancellationToken,
    ) -> DbResult<Option<Sale>> {
        let sql = format!("SELECT {SALE_COLUMNS} FROM sales WHERE id = ?1");
        let query = sqlx::query_as::<_, SaleRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool);

        let row = run_cancellable(cancel, query).await?;
        row.map(Sale::try_from).transpose()
    }

    /// Replaces a persisted sale wholesale.
    pub async fn replace_sale(&self, sale: &Sale, cancel: &CancellationToken) -> DbResult<Sale> {
        debug!(sale_id = %sale.id, "Updating sale");

        let query = sqlx::query(
            r#"
            UPDATE sales SET
                sale_date = ?2,
                customer = ?3,
                branch = ?4,
                products_summary = ?5,
                total_quantity = ?6,
                average_unit_price = ?7,
                discount_total = ?8,
                total_amount = ?9,
                is_cancelled = ?10,
                created_at = ?11,
                modified_at = ?12,
                cancelled_at = ?13,
                item_cancelled = ?14
            WHERE id = ?1
            "#,
        )
        .bind(sale.id)
        .bind(sale.date)
        .bind(&sale.customer)
        .bind(&sale.branch)
        .bind(&sale.products_summary)
        .bind(sale.total_quantity)
        .bind(sale.average_unit_price.to_string())
        .bind(sale.discount_total.to_string())
        .bind(sale.total_amount.to_string())
        .bind(sale.is_cancelled)
        .bind(sale.created_at)
        .bind(sale.modified_at)
        .bind(sale.cancelled_at)
        .bind(sale.item_cancelled)
        .execute(&self.pool);

        let result = run_cancellable(cancel, query).await?;
        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Sale", sale.id));
        }

        Ok(sale.clone())
    }

    /// Hard-deletes a sale; returns whether a row was removed.
    pub async fn delete_by_id(&self, id: i64, cancel: &CancellationToken) -> DbResult<bool> {
        debug!(sale_id = %id, "Deleting sale");

        let query = sqlx::query("DELETE FROM sales WHERE id = ?1")
            .bind(id)
            .execute(&self.pool);

        let result = run_cancellable(cancel, query).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Fetches all sales ordered by id.
    pub async fn fetch_all(&self, cancel: &CancellationToken) -> DbResult<Vec<Sale>> {
        let sql = format!("SELECT {SALE_COLUMNS} FROM sales ORDER BY id");
        let query = sqlx::query_as::<_, SaleRow>(&sql).fetch_all(&self.pool);

        let rows = run_cancellable(cancel, query).await?;
        rows.into_iter().map(Sale::try_from).collect()
    }
}

#[async_trait]
impl SaleStore for SaleRepository {
    async fn create(&self, sale: &NewSale, cancel: &CancellationToken) -> StoreResult<Sale> {
        Ok(self.insert_sale(sale, cancel).await?)
    }

    async fn get_by_id(&self, id: i64, cancel: &CancellationToken) -> StoreResult<Option<Sale>> {
        Ok(self.fetch_by_id(id, cancel).await?)
    }

    async fn update(&self, sale: &Sale, cancel: &CancellationToken) -> StoreResult<Sale> {
        Ok(self.replace_sale(sale, cancel).await?)
    }

    async fn delete(&self, id: i64, cancel: &CancellationToken) -> StoreResult<bool> {
        Ok(self.delete_by_id(id, cancel).await?)
    }

    async fn list_all(&self, cancel: &CancellationToken) -> StoreResult<Vec<Sale>> {
        Ok(self.fetch_all(cancel).await?)
    }
}

/// Races a query future against the cancellation token.
///
/// Biased toward the token so an already-cancelled caller never starts I/O.
async fn run_cancellable<T, F>(cancel: &CancellationToken, fut: F) -> DbResult<T>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(DbError::Cancelled),
        res = fut => res.map_err(DbError::from),
    }
}

// =============================================================================
// Row Mapping
// =============================================================================

/// A raw `sales` row; decimal columns still TEXT.
#[derive(Debug, sqlx::FromRow)]
struct SaleRow {
    id: i64,
    sale_date: Option<DateTime<Utc>>,
    customer: String,
    branch: String,
    products_summary: String,
    total_quantity: i64,
    average_unit_price: String,
    discount_total: String,
    total_amount: String,
    is_cancelled: bool,
    created_at: DateTime<Utc>,
    modified_at: Option<DateTime<Utc>>,
    cancelled_at: Option<DateTime<Utc>>,
    item_cancelled: bool,
}

impl TryFrom<SaleRow> for Sale {
    type Error = DbError;

    fn try_from(row: SaleRow) -> Result<Self, Self::Error> {
        Ok(Sale {
            id: row.id,
            date: row.sale_date,
            customer: row.customer,
            branch: row.branch,
            products_summary: row.products_summary,
            total_quantity: row.total_quantity,
            average_unit_price: parse_decimal("average_unit_price", &row.average_unit_price)?,
            discount_total: parse_decimal("discount_total", &row.discount_total)?,
            total_amount: parse_decimal("total_amount", &row.total_amount)?,
            is_cancelled: row.is_cancelled,
            created_at: row.created_at,
            modified_at: row.modified_at,
            cancelled_at: row.cancelled_at,
            item_cancelled: row.item_cancelled,
        })
    }
}

fn parse_decimal(column: &str, value: &str) -> DbResult<Decimal> {
    Decimal::from_str(value).map_err(|e| DbError::Decode(format!("{column} = {value:?}: {e}")))
}

// =============================================================================
// Unit Tests
// =============================================================================
