//! # vendi-db: Database Layer for Vendi
//!
//! SQLite persistence for the Vendi sales management core, built on sqlx.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Vendi Data Flow                              │
//! │                                                                     │
//! │  SaleService (vendi-service)                                        │
//! │       │  SaleStore trait call                                       │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                   vendi-db (THIS CRATE)                       │  │
//! │  │                                                               │  │
//! │  │  ┌────────────┐   ┌────────────────┐   ┌──────────────────┐   │  │
//! │  │  │  Database  │   │ SaleRepository │   │    Migrations    │   │  │
//! │  │  │ (pool.rs)  │◄──│  (repository)  │   │    (embedded)    │   │  │
//! │  │  └────────────┘   └────────────────┘   └──────────────────┘   │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SQLite database file (or :memory: in tests)                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - The sale repository (SaleStore implementation)

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

pub use error::DbError;
pub use pool::{Database, DbConfig};
pub use repository::sale::SaleRepository;
