//! # vendi-service: Sale Lifecycle Operations
//!
//! The application layer of Vendi: each operation is an independent
//! validate → compute → persist → map pipeline with no cross-call state.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Sale Lifecycle Operations                       │
//! │                                                                     │
//! │  create_sale(request)                                               │
//! │    validate ─► price & build aggregate ─► store.create ─► summary   │
//! │                                                                     │
//! │  update_sale(id, request)                                           │
//! │    validate ─► fetch (NotFound?) ─► rebuild ALL derived fields      │
//! │               from the new item list ─► store.update ─► summary     │
//! │                                                                     │
//! │  get_sale(id)      fetch (NotFound?) ─► summary, no recomputation   │
//! │  list_sales()      fetch all ─► summaries, storage order            │
//! │  delete_sale(id)   fetch (NotFound?) ─► hard delete                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation takes a [`CancellationToken`](tokio_util::sync::CancellationToken)
//! and threads it into each storage call, so an abandoned caller abandons the
//! I/O too.
//!
//! ## Modules
//!
//! - [`sales`] - The [`SaleService`](sales::SaleService) orchestrator
//! - [`dto`] - Request/summary shapes and their named mapping functions
//! - [`error`] - Caller-facing error taxonomy

pub mod dto;
pub mod error;
pub mod sales;

pub use dto::{SaleItemRequest, SaleRequest, SaleSummary};
pub use error::{ServiceError, ServiceResult, ValidationFailure};
pub use sales::SaleService;
