//! # Summary Actions
//!
//! Read-only reporting over the session.

use scissors_core::{summarize, DailySummary, Transaction};

use crate::state::SessionState;

/// The cierre de caja for the current local calendar day.
///
/// Derived fresh on every call; nothing is cached or stored.
pub fn daily_summary(session: &SessionState) -> DailySummary {
    session.with_session(|s| summarize(&s.ledger.today(), &s.catalog.active_barbers()))
}

/// The day's cobros most-recent-first, for the activity list.
pub fn recent_transactions(session: &SessionState) -> Vec<Transaction> {
    session.with_session(|s| s.ledger.recent_first().into_iter().cloned().collect())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Session;
    use scissors_core::{
        build_cobro, Catalog, CobroDraft, DiscountChoice, Money, PaymentMethod, TransactionLog,
    };

    fn session_with_two_cobros() -> SessionState {
        let mut catalog = Catalog::new();
        let barber = catalog.add_barber("Carlos", true);
        let service = catalog.add_service("Corte Clásico", Money::new(3500), None);
        let extra = catalog.add_extra("Lavado", Money::new(500));

        let mut ledger = TransactionLog::new();
        ledger.append(
            build_cobro(CobroDraft {
                barber: Some(&barber),
                service: Some(&service),
                extras: vec![&extra],
                discount: DiscountChoice::Percentage(20),
                payment_method: Some(PaymentMethod::Efectivo),
            })
            .unwrap(),
        );
        ledger.append(
            build_cobro(CobroDraft {
                barber: Some(&barber),
                service: Some(&service),
                extras: vec![&extra, &extra],
                discount: DiscountChoice::Percentage(0),
                payment_method: Some(PaymentMethod::MercadoPago),
            })
            .unwrap(),
        );

        SessionState::from_session(Session::from_store(catalog, ledger))
    }

    #[test]
    fn test_daily_summary_over_todays_cobros() {
        let session = session_with_two_cobros();
        let summary = daily_summary(&session);

        assert_eq!(summary.count, 2);
        assert_eq!(summary.total_efectivo.amount(), 3200);
        assert_eq!(summary.total_mercado_pago.amount(), 4500);
        assert_eq!(summary.total.amount(), 7700);
        assert_eq!(summary.per_barber.len(), 1);
        assert_eq!(summary.per_barber[0].count, 2);
    }

    #[test]
    fn test_recent_transactions_newest_first() {
        let session = session_with_two_cobros();
        let recent = recent_transactions(&session);

        assert_eq!(recent.len(), 2);
        assert!(recent[0].created_at >= recent[1].created_at);
        assert_eq!(recent[0].payment_method, PaymentMethod::MercadoPago);
    }
}
