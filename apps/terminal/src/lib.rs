//! # Scissors Terminal Library
//!
//! Orchestration layer for the Scissors POS terminal.
//! A UI shell drives the [`actions`] and drains the notification channel;
//! this crate owns everything in between.
//!
//! ## Module Organization
//! ```text
//! scissors_terminal/
//! ├── lib.rs          ◄─── You are here (startup & wiring)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   └── session.rs  ◄─── Session state (catalog + ledger + wizard)
//! ├── actions/
//! │   ├── mod.rs      ◄─── Optimistic write helper
//! │   ├── catalog.rs  ◄─── Catalog CRUD actions
//! │   ├── cobro.rs    ◄─── Wizard steps and cobro submission
//! │   └── summary.rs  ◄─── Daily cierre reporting
//! ├── notify.rs       ◄─── Notification channel (toasts)
//! └── error.rs        ◄─── App error type for actions
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                              │
//! │                                                                        │
//! │  1. Initialize logging ──────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter                               │
//! │     • Default: INFO, can be overridden with RUST_LOG                   │
//! │                                                                        │
//! │  2. Determine database path ─────────────────────────────────────────► │
//! │     • SCISSORS_DB_PATH override, else the platform data directory      │
//! │                                                                        │
//! │  3. Connect to the store ────────────────────────────────────────────► │
//! │     • SQLite with WAL mode, run pending migrations                     │
//! │                                                                        │
//! │  4. Load the session ────────────────────────────────────────────────► │
//! │     • Catalog + transaction history into memory, fresh wizard          │
//! │                                                                        │
//! │  5. Hand over to the shell ──────────────────────────────────────────► │
//! │     • Shell calls actions, drains notifications                        │
//! └────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod actions;
pub mod error;
pub mod notify;
pub mod state;

use std::path::PathBuf;

use directories::ProjectDirs;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;
use crate::state::{Session, SessionState};
use scissors_core::TransactionLog;
use scissors_db::Store;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=scissors=trace` - Show trace for scissors crates only
/// - Default: INFO level
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,scissors=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Determines the database file path based on the platform.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.scissors.pos/scissors.db`
/// - **Windows**: `%APPDATA%\scissors\pos\scissors.db`
/// - **Linux**: `~/.local/share/scissors-pos/scissors.db`
///
/// ## Development Override
/// Set `SCISSORS_DB_PATH` environment variable to use a custom path.
pub fn database_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Ok(path) = std::env::var("SCISSORS_DB_PATH") {
        return Ok(PathBuf::from(path));
    }

    let proj_dirs = ProjectDirs::from("com", "scissors", "pos")
        .ok_or("Could not determine app data directory")?;

    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)?;

    Ok(data_dir.join("scissors.db"))
}

/// Loads the session working set out of the store.
///
/// The catalog and the full transaction history come into memory; the
/// wizard starts fresh.
pub async fn load_session(store: &Store) -> Result<SessionState, AppError> {
    let catalog = store.catalog().load_catalog().await?;
    let history = store.transactions().all().await?;

    info!(
        services = catalog.services().len(),
        barbers = catalog.all_barbers().len(),
        transactions = history.len(),
        "Session loaded"
    );

    Ok(SessionState::from_session(Session::from_store(
        catalog,
        TransactionLog::from_entries(history),
    )))
}

// =============================================================================
// Unit Tests
// =============================================================================
