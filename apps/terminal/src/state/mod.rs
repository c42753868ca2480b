//! # State Module
//!
//! Shared state types for the terminal application.
//!
//! Instead of one big state object, focused types are shared separately:
//!
//! - [`SessionState`] - catalog working copy, transaction log, wizard
//! - [`scissors_db::Store`] - connection pool (cloneable, shared directly)
//! - [`crate::notify::Notifier`] - notification sender (cloneable)

pub mod session;

pub use session::{Session, SessionState};
