//! # Session State
//!
//! The single working set for one terminal: catalog, transaction log, wizard.
//!
//! ## Thread Safety
//! The session is wrapped in `Arc<Mutex<T>>` because:
//! 1. Actions and background tasks may touch the session concurrently
//! 2. Only one action should mutate it at a time
//! 3. Every operation under the lock is quick in-memory work
//!
//! ## Session Operations Flow
//! ```text
//! ┌────────────────────────────────────────────────────────────────────────┐
//! │                    Session State Operations                            │
//! │                                                                        │
//! │  UI event                 Action                   Session change      │
//! │  ────────                 ──────                   ──────────────      │
//! │                                                                        │
//! │  Pick barber ───────────► select_barber() ───────► wizard advances     │
//! │                                                                        │
//! │  Confirm payment ───────► submit_cobro() ────────► ledger.append()     │
//! │                                                    wizard resets       │
//! │                                                                        │
//! │  Edit catalog ──────────► add/update/delete_*() ─► catalog mutates     │
//! │                                                                        │
//! │  Open cierre ───────────► daily_summary() ───────► (read only)         │
//! │                                                                        │
//! │  NOTE: All write operations acquire the Mutex lock exclusively.        │
//! └────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use scissors_core::{Catalog, TransactionLog, Wizard};

/// The in-memory working set for one terminal session.
#[derive(Debug)]
pub struct Session {
    /// The catalog working copy (store holds the durable one).
    pub catalog: Catalog,

    /// Append-only log of cobros.
    pub ledger: TransactionLog,

    /// The selection wizard for the current customer.
    pub wizard: Wizard,
}

impl Session {
    /// Creates a session with an empty catalog and log.
    pub fn new() -> Self {
        Session {
            catalog: Catalog::new(),
            ledger: TransactionLog::new(),
            wizard: Wizard::new(),
        }
    }

    /// Creates a session from state loaded out of the store.
    pub fn from_store(catalog: Catalog, ledger: TransactionLog) -> Self {
        Session {
            catalog,
            ledger,
            wizard: Wizard::new(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared session state.
///
/// ## Why Not RwLock?
/// Session operations are quick and most of them mutate state. A RwLock
/// would add complexity with minimal benefit.
#[derive(Debug, Clone)]
pub struct SessionState {
    session: Arc<Mutex<Session>>,
}

impl SessionState {
    /// Creates a new empty session state.
    pub fn new() -> Self {
        SessionState {
            session: Arc::new(Mutex::new(Session::new())),
        }
    }

    /// Wraps an already-built session.
    pub fn from_session(session: Session) -> Self {
        SessionState {
            session: Arc::new(Mutex::new(session)),
        }
    }

    /// Executes a function with read access to the session.
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        let session = self.session.lock().expect("Session mutex poisoned");
        f(&session)
    }

    /// Executes a function with write access to the session.
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut session = self.session.lock().expect("Session mutex poisoned");
        f(&mut session)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scissors_core::Money;

    #[test]
    fn test_session_starts_empty() {
        let state = SessionState::new();
        state.with_session(|s| {
            assert!(s.catalog.services().is_empty());
            assert!(s.ledger.is_empty());
            assert!(s.wizard.barber_id().is_none());
        });
    }

    #[test]
    fn test_mutations_are_visible_across_clones() {
        let state = SessionState::new();
        let clone = state.clone();

        state.with_session_mut(|s| {
            s.catalog.add_service("Corte Clásico", Money::new(3500), None);
        });

        clone.with_session(|s| {
            assert_eq!(s.catalog.services().len(), 1);
        });
    }
}
