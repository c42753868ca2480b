//! # scissors-db: Persistence Layer for Scissors POS
//!
//! This crate provides store access for the Scissors POS system.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌────────────────────────────────────────────────────────────────────────┐
//! │                     Scissors POS Data Flow                             │
//! │                                                                        │
//! │  Terminal action (submit_cobro, add_service, ...)                      │
//! │       │                                                                │
//! │       ▼                                                                │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │                   scissors-db (THIS CRATE)                     │    │
//! │  │                                                                │    │
//! │  │   ┌──────────────┐   ┌────────────────┐   ┌──────────────┐    │    │
//! │  │   │    Store     │   │  Repositories  │   │  Migrations  │    │    │
//! │  │   │  (pool.rs)   │   │ (catalog.rs,   │   │  (embedded)  │    │    │
//! │  │   │              │◄──│  transaction)  │   │              │    │    │
//! │  │   │ SqlitePool   │   │                │   │ 001_init.sql │    │    │
//! │  │   └──────────────┘   └────────────────┘   └──────────────┘    │    │
//! │  │                                                                │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! │       │                                                                │
//! │       ▼                                                                │
//! │  SQLite database file (WAL mode)                                       │
//! └────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Store error types
//! - [`repository`] - Repository implementations (catalog, transaction)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use scissors_db::{Store, StoreConfig};
//!
//! let store = Store::new(StoreConfig::new("path/to/scissors.db")).await?;
//!
//! let catalog = store.catalog().load_catalog().await?;
//! store.transactions().insert(&cobro).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use pool::{Store, StoreConfig};

// Repository re-exports for convenience
pub use repository::catalog::CatalogRepository;
pub use repository::transaction::{TransactionRepository, TransactionRow};
