//! # scissors-core: Pure Business Logic for Scissors POS
//!
//! This crate is the **heart** of Scissors POS, a barbershop point-of-sale.
//! It contains all business logic as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌────────────────────────────────────────────────────────────────────────┐
//! │                     Scissors POS Architecture                          │
//! │                                                                        │
//! │  ┌────────────────────────────────────────────────────────────────┐   │
//! │  │                       UI Shell (external)                      │   │
//! │  │   Registro UI ──► Cierre UI ──► Configuración UI              │   │
//! │  └───────────────────────────────┬────────────────────────────────┘   │
//! │                                  │                                     │
//! │  ┌───────────────────────────────▼────────────────────────────────┐   │
//! │  │                    Terminal Actions Layer                      │   │
//! │  │    add_service, submit_cobro, daily_summary, etc.             │   │
//! │  └───────────────────────────────┬────────────────────────────────┘   │
//! │                                  │                                     │
//! │  ┌───────────────────────────────▼────────────────────────────────┐   │
//! │  │              ★ scissors-core (THIS CRATE) ★                    │   │
//! │  │                                                                │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ │   │
//! │  │  │ catalog │ │ builder │ │ ledger  │ │ summary │ │ wizard  │ │   │
//! │  │  │ CRUD    │ │ Cobro   │ │ Log     │ │ Cierre  │ │ 5-stage │ │   │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘ │   │
//! │  │                                                                │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS          │   │
//! │  └────────────────────────────────────────────────────────────────┘   │
//! │                                  │                                     │
//! │  ┌───────────────────────────────▼────────────────────────────────┐   │
//! │  │                 scissors-db (Database Layer)                   │   │
//! │  │             SQLite queries, migrations, repositories           │   │
//! │  └────────────────────────────────────────────────────────────────┘   │
//! └────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Service, Barber, Transaction, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//! - [`catalog`] - Mutable catalog store (services, extras, barbers, ...)
//! - [`builder`] - Builds immutable cobro records from a selection
//! - [`ledger`] - Append-only transaction log with calendar-day filtering
//! - [`summary`] - Daily cash-closing aggregation
//! - [`wizard`] - Linear five-stage selection state machine
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are whole pesos (i64)
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use scissors_core::money::Money;
//!
//! // A service price plus one extra
//! let subtotal = Money::new(3500) + Money::new(500);
//!
//! // 20% off, rounded half up
//! let discount = subtotal.percent(20);
//! let total = subtotal.saturating_sub(discount);
//!
//! assert_eq!(total.amount(), 3200);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod builder;
pub mod catalog;
pub mod error;
pub mod ledger;
pub mod money;
pub mod summary;
pub mod types;
pub mod validation;
pub mod wizard;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use scissors_core::Money` instead of
// `use scissors_core::money::Money`.

pub use builder::{build_cobro, CobroDraft, DiscountChoice};
pub use catalog::{
    BarberPatch, Catalog, DiscountPatch, ExtraPatch, ServiceLinePatch, ServicePatch,
};
pub use error::{CoreError, CoreResult, ValidationError};
pub use ledger::TransactionLog;
pub use money::Money;
pub use summary::{summarize, BarberSummary, DailySummary};
pub use types::*;
pub use wizard::{Stage, Wizard};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Id of the protected "no discount" catalog entry.
///
/// ## Why a constant?
/// The discounts collection must always contain exactly one entry with this
/// id (0%). It represents "sin descuento", can never be deleted, and is the
/// wizard's fallback when no discount is picked.
pub const NO_DISCOUNT_ID: &str = "none";

/// Maximum length of a catalog entity name.
///
/// ## Business Reason
/// Keeps receipts and summary rows renderable; can be made configurable
/// later if a shop needs longer labels.
pub const MAX_NAME_LEN: usize = 100;
