//! # Transaction Log
//!
//! Append-only ordered collection of cobros; the source of truth for all
//! reporting.
//!
//! ## Ordering Guarantee
//! In a single-threaded session `created_at` is monotonically non-decreasing
//! across appends, so insertion order equals creation-time order. Display
//! wants most-recent-first; reporting wants the calendar-day slice.
//!
//! ## Day Boundary
//! `on_day` uses the LOCAL calendar day (midnight to midnight), not a
//! rolling 24h window. A cobro at 23:59:59.999 belongs to that day; one at
//! 00:00:00.000 belongs to the next.

use chrono::{DateTime, Local, NaiveDate, Utc};

use crate::types::Transaction;

/// Append-only log of cobros.
///
/// No update or delete operation is exposed anywhere: records are
/// immutable once appended.
#[derive(Debug, Clone, Default)]
pub struct TransactionLog {
    entries: Vec<Transaction>,
}

impl TransactionLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        TransactionLog {
            entries: Vec::new(),
        }
    }

    /// Rebuilds a log from records loaded out of the store.
    pub fn from_entries(entries: Vec<Transaction>) -> Self {
        TransactionLog { entries }
    }

    /// Appends a cobro. The only mutation this type offers.
    pub fn append(&mut self, transaction: Transaction) {
        self.entries.push(transaction);
    }

    /// All entries in insertion (creation-time) order.
    pub fn all(&self) -> &[Transaction] {
        &self.entries
    }

    /// Entries most-recent-first, for display.
    pub fn recent_first(&self) -> Vec<&Transaction> {
        self.entries.iter().rev().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose `created_at` falls on the given local calendar day.
    pub fn on_day(&self, date: NaiveDate) -> Vec<&Transaction> {
        self.entries
            .iter()
            .filter(|t| local_day(t.created_at) == date)
            .collect()
    }

    /// Today's entries (local calendar day).
    pub fn today(&self) -> Vec<&Transaction> {
        self.on_day(Local::now().date_naive())
    }
}

/// The local calendar day a UTC timestamp falls on.
fn local_day(at: DateTime<Utc>) -> NaiveDate {
    at.with_timezone(&Local).date_naive()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::{DiscountType, PaymentMethod};
    use chrono::TimeZone;

    fn tx_at(id: &str, created_at: DateTime<Utc>) -> Transaction {
        Transaction {
            id: id.to_string(),
            barber_id: "b1".to_string(),
            barber_name: "Carlos".to_string(),
            service_id: "s1".to_string(),
            service_name: "Corte".to_string(),
            service_price: Money::new(3500),
            extras: Vec::new(),
            discount: 0,
            discount_type: DiscountType::Percentage,
            payment_method: PaymentMethod::Efectivo,
            subtotal: Money::new(3500),
            total: Money::new(3500),
            created_at,
        }
    }

    /// Builds a UTC instant from local wall-clock parts, so the day-boundary
    /// assertions hold in whatever zone the tests run.
    fn local_instant(
        y: i32,
        mo: u32,
        d: u32,
        h: u32,
        mi: u32,
        s: u32,
        ms: u32,
    ) -> DateTime<Utc> {
        Local
            .with_ymd_and_hms(y, mo, d, h, mi, s)
            .single()
            .unwrap()
            .with_timezone(&Utc)
            + chrono::Duration::milliseconds(ms as i64)
    }

    #[test]
    fn test_append_preserves_order() {
        let mut log = TransactionLog::new();
        log.append(tx_at("a", Utc::now()));
        log.append(tx_at("b", Utc::now()));
        log.append(tx_at("c", Utc::now()));

        let ids: Vec<&str> = log.all().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);

        let recent: Vec<&str> = log.recent_first().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(recent, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_on_day_midnight_boundary_is_exact() {
        let mut log = TransactionLog::new();
        // 23:59:59.999 on the 15th — inside the day
        log.append(tx_at("late", local_instant(2026, 3, 15, 23, 59, 59, 999)));
        // 00:00:00.000 on the 16th — next day, excluded
        log.append(tx_at("next", local_instant(2026, 3, 16, 0, 0, 0, 0)));
        // 00:00:00.000 on the 15th — first instant of the day, included
        log.append(tx_at("first", local_instant(2026, 3, 15, 0, 0, 0, 0)));

        let day = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        let ids: Vec<&str> = log.on_day(day).iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["late", "first"]);
    }

    #[test]
    fn test_on_day_is_calendar_day_not_rolling_window() {
        let mut log = TransactionLog::new();
        // Yesterday evening, within 24h of today noon, but a different day
        log.append(tx_at("prev", local_instant(2026, 3, 14, 22, 0, 0, 0)));
        log.append(tx_at("today", local_instant(2026, 3, 15, 12, 0, 0, 0)));

        let day = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        let ids: Vec<&str> = log.on_day(day).iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["today"]);
    }

    #[test]
    fn test_empty_log() {
        let log = TransactionLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert!(log.today().is_empty());
    }
}
