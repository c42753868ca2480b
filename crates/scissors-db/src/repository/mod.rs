//! # Repository Module
//!
//! Repository implementations for Scissors POS.
//!
//! ## Repository Pattern
//! ```text
//! ┌────────────────────────────────────────────────────────────────────────┐
//! │                     Repository Pattern                                 │
//! │                                                                        │
//! │  Terminal action                                                       │
//! │       │                                                                │
//! │       │  store.catalog().upsert_service(&service)                      │
//! │       ▼                                                                │
//! │  CatalogRepository / TransactionRepository                             │
//! │       │                                                                │
//! │       │  SQL Query                                                     │
//! │       ▼                                                                │
//! │  SQLite Database                                                       │
//! │                                                                        │
//! │  Benefits:                                                             │
//! │  • SQL is isolated in one place                                        │
//! │  • Row ↔ domain conversion lives next to the queries                   │
//! │  • Easy to test against an in-memory store                             │
//! └────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`catalog::CatalogRepository`] - Catalog entity CRUD and full loads
//! - [`transaction::TransactionRepository`] - Append-only cobro records

pub mod catalog;
pub mod transaction;
