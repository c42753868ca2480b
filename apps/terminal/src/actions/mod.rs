//! # Actions Module
//!
//! The operations a UI shell invokes.
//!
//! ## Optimistic Write Model
//! ```text
//! ┌────────────────────────────────────────────────────────────────────────┐
//! │                    Optimistic Update Flow                              │
//! │                                                                        │
//! │  1. Validate input              ── fails? return AppError, no change   │
//! │  2. Apply to the session        ── the UI sees the result immediately  │
//! │  3. Spawn the store write       ── never awaited by the action         │
//! │  4. Write fails?                ── error notification + log; the       │
//! │                                    local change is NOT rolled back     │
//! │                                                                        │
//! │  The store is a durability collaborator, not a gatekeeper: a flaky     │
//! │  disk must not stall the queue of customers at the counter.            │
//! └────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Actions
//!
//! - [`catalog`] - Catalog entity CRUD
//! - [`cobro`] - Wizard steps and cobro submission
//! - [`summary`] - Daily cierre reporting

pub mod catalog;
pub mod cobro;
pub mod summary;

use std::future::Future;

use tracing::error;

use crate::notify::Notifier;
use scissors_db::StoreResult;

/// Runs a store write in the background.
///
/// On failure the error is logged and surfaced as a notification; the
/// caller has already applied the change locally and moved on.
pub(crate) fn spawn_write<F>(notifier: &Notifier, failure_msg: &'static str, fut: F)
where
    F: Future<Output = StoreResult<()>> + Send + 'static,
{
    let notifier = notifier.clone();
    tokio::spawn(async move {
        if let Err(e) = fut.await {
            error!("Background store write failed: {}", e);
            notifier.error(failure_msg);
        }
    });
}
