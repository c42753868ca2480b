//! # Cobro Actions
//!
//! Wizard steps and cobro submission.
//!
//! ## Submission Flow
//! ```text
//! ┌────────────────────────────────────────────────────────────────────────┐
//! │                       submit_cobro                                     │
//! │                                                                        │
//! │  1. wizard.submit(&catalog)  ── validates, builds, resets wizard       │
//! │  2. ledger.append(cobro)     ── the cierre sees it immediately         │
//! │  3. notifier.success(...)    ── operator feedback                      │
//! │  4. spawn store insert       ── failure becomes an error toast,        │
//! │                                 the local record stays                 │
//! │                                                                        │
//! │  On a validation or not-found error nothing is appended, the wizard    │
//! │  keeps every selection, and the error returns to the caller.           │
//! └────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};

use crate::error::AppError;
use crate::notify::Notifier;
use crate::state::SessionState;
use scissors_core::{PaymentMethod, Stage, Transaction};
use scissors_db::Store;

use super::spawn_write;

// =============================================================================
// Wizard Steps
// =============================================================================

pub fn select_barber(session: &SessionState, id: &str) {
    session.with_session_mut(|s| s.wizard.select_barber(id));
}

pub fn select_service(session: &SessionState, id: &str) {
    session.with_session_mut(|s| s.wizard.select_service(id));
}

pub fn toggle_extra(session: &SessionState, id: &str) {
    session.with_session_mut(|s| s.wizard.toggle_extra(id));
}

pub fn continue_to_discount(session: &SessionState) {
    session.with_session_mut(|s| s.wizard.continue_to_discount());
}

pub fn select_discount(session: &SessionState, id: &str) {
    session.with_session_mut(|s| s.wizard.select_discount(id));
}

pub fn select_payment(session: &SessionState, method: PaymentMethod) {
    session.with_session_mut(|s| s.wizard.select_payment(method));
}

/// Jumps to a wizard stage (backward freely, forward up to furthest).
pub fn go_to_stage(session: &SessionState, stage: Stage) {
    session.with_session_mut(|s| s.wizard.go_to(stage));
}

// =============================================================================
// Submission
// =============================================================================

/// Submits the current wizard selection as a cobro.
///
/// Returns the created record so the UI shell can show it.
pub fn submit_cobro(
    session: &SessionState,
    store: &Store,
    notifier: &Notifier,
) -> Result<Transaction, AppError> {
    debug!("submit_cobro action");

    let cobro = session.with_session_mut(|s| {
        let cobro = s.wizard.submit(&s.catalog)?;
        s.ledger.append(cobro.clone());
        Ok::<_, scissors_core::CoreError>(cobro)
    })?;

    info!(
        id = %cobro.id,
        barber = %cobro.barber_name,
        total = cobro.total.amount(),
        "Cobro registered"
    );
    notifier.success("Cobro registrado");

    let repo = store.transactions();
    let stored = cobro.clone();
    spawn_write(notifier, "Error al guardar el cobro", async move {
        repo.insert(&stored).await
    });

    Ok(cobro)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{NoticeLevel, Notifier};
    use crate::state::Session;
    use scissors_core::{Catalog, Money, TransactionLog};
    use scissors_db::StoreConfig;

    async fn fixture() -> (SessionState, Store, Notifier, tokio::sync::mpsc::UnboundedReceiver<crate::notify::Notification>) {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();
        let (notifier, rx) = Notifier::channel();

        let mut catalog = Catalog::new();
        catalog.add_barber("Carlos", true);
        catalog.add_service("Corte Clásico", Money::new(3500), None);
        catalog.add_extra("Lavado", Money::new(500));
        catalog.add_discount("20%", 20);

        let session = SessionState::from_session(Session::from_store(
            catalog,
            TransactionLog::new(),
        ));
        (session, store, notifier, rx)
    }

    #[tokio::test]
    async fn test_full_flow_appends_and_notifies() {
        let (session, store, notifier, mut rx) = fixture().await;

        let (barber_id, service_id, extra_id, discount_id) = session.with_session(|s| {
            (
                s.catalog.active_barbers()[0].id.clone(),
                s.catalog.services()[0].id.clone(),
                s.catalog.extras()[0].id.clone(),
                s.catalog.discounts()[1].id.clone(),
            )
        });

        select_barber(&session, &barber_id);
        select_service(&session, &service_id);
        toggle_extra(&session, &extra_id);
        continue_to_discount(&session);
        select_discount(&session, &discount_id);
        select_payment(&session, PaymentMethod::Efectivo);

        let cobro = submit_cobro(&session, &store, &notifier).unwrap();
        assert_eq!(cobro.subtotal.amount(), 4000);
        assert_eq!(cobro.total.amount(), 3200);

        session.with_session(|s| {
            assert_eq!(s.ledger.len(), 1);
            // Ready for the next customer
            assert_eq!(s.wizard.stage(), Stage::Barber);
        });

        let notice = rx.recv().await.unwrap();
        assert_eq!(notice.level, NoticeLevel::Success);
        assert_eq!(notice.message, "Cobro registrado");
    }

    #[tokio::test]
    async fn test_incomplete_submit_appends_nothing() {
        let (session, store, notifier, _rx) = fixture().await;

        let barber_id = session.with_session(|s| s.catalog.active_barbers()[0].id.clone());
        select_barber(&session, &barber_id);

        let err = submit_cobro(&session, &store, &notifier).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::ValidationError);

        session.with_session(|s| {
            assert!(s.ledger.is_empty());
            // Selection preserved for correction
            assert_eq!(s.wizard.barber_id(), Some(barber_id.as_str()));
        });
    }
}
