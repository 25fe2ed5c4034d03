//! # Repository Module
//!
//! Database repository implementations for Vendi.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  SaleService                                                        │
//! │       │  SaleStore trait call (create / get_by_id / update / ...)   │
//! │       ▼                                                             │
//! │  SaleRepository ── SQL ──► SQLite                                   │
//! │                                                                     │
//! │  Benefits:                                                          │
//! │  • SQL is isolated in one place                                     │
//! │  • The lifecycle layer tests against an in-memory store             │
//! │  • Storage backends can be swapped behind the trait                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

pub mod sale;
