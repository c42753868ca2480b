//! # Daily Aggregation
//!
//! Derives the cierre de caja (end-of-day cash reconciliation) from a slice
//! of the transaction log.
//!
//! ## Aggregation Shape
//! ```text
//! ┌────────────────────────────────────────────────────────────────────────┐
//! │                        Cierre del Día                                  │
//! │                                                                        │
//! │  count            number of cobros                                     │
//! │  total_efectivo   Σ total where payment == efectivo                    │
//! │  total_mp         Σ total where payment == mercado_pago                │
//! │  total            total_efectivo + total_mp  (only two methods exist)  │
//! │                                                                        │
//! │  per_barber       seed a zero row per active barber (catalog order),   │
//! │                   fold each cobro into its barber's row — creating     │
//! │                   ad hoc rows from the name snapshot for barbers no    │
//! │                   longer active — then drop rows with count == 0       │
//! └────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The seed-then-filter order matters only for ordering: active barbers
//! come first in catalog order, ad hoc barbers after in first-appearance
//! order, and no zero-activity row ever survives the filter.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{Barber, PaymentMethod, Transaction};

// =============================================================================
// Summary Types
// =============================================================================

/// Per-barber slice of the daily summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarberSummary {
    pub barber_id: String,
    /// Current catalog name for active barbers, snapshot name otherwise.
    pub barber_name: String,
    pub count: usize,
    pub total_efectivo: Money,
    pub total_mercado_pago: Money,
    pub total: Money,
}

impl BarberSummary {
    fn seeded(barber_id: &str, barber_name: &str) -> Self {
        BarberSummary {
            barber_id: barber_id.to_string(),
            barber_name: barber_name.to_string(),
            count: 0,
            total_efectivo: Money::zero(),
            total_mercado_pago: Money::zero(),
            total: Money::zero(),
        }
    }

    fn fold(&mut self, tx: &Transaction) {
        self.count += 1;
        match tx.payment_method {
            PaymentMethod::Efectivo => self.total_efectivo += tx.total,
            PaymentMethod::MercadoPago => self.total_mercado_pago += tx.total,
        }
        self.total += tx.total;
    }
}

/// The cierre de caja for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySummary {
    pub count: usize,
    pub total_efectivo: Money,
    pub total_mercado_pago: Money,
    pub total: Money,
    /// The day's cobros, in the order given to [`summarize`].
    pub transactions: Vec<Transaction>,
    pub per_barber: Vec<BarberSummary>,
}

// =============================================================================
// Aggregation
// =============================================================================

/// Computes the daily summary for a pre-filtered transaction slice.
///
/// The caller picks the day (normally [`crate::TransactionLog::today`]);
/// this function only aggregates.
pub fn summarize(transactions: &[&Transaction], active_barbers: &[&Barber]) -> DailySummary {
    let mut total_efectivo = Money::zero();
    let mut total_mercado_pago = Money::zero();

    // Seed a zero row per active barber, catalog order
    let mut per_barber: Vec<BarberSummary> = active_barbers
        .iter()
        .map(|b| BarberSummary::seeded(&b.id, &b.name))
        .collect();

    for tx in transactions {
        match tx.payment_method {
            PaymentMethod::Efectivo => total_efectivo += tx.total,
            PaymentMethod::MercadoPago => total_mercado_pago += tx.total,
        }

        match per_barber.iter_mut().find(|row| row.barber_id == tx.barber_id) {
            Some(row) => row.fold(tx),
            None => {
                // Deactivated or deleted barber still present in history:
                // create the row on the fly from the snapshot name
                let mut row = BarberSummary::seeded(&tx.barber_id, &tx.barber_name);
                row.fold(tx);
                per_barber.push(row);
            }
        }
    }

    // Zero-activity rows (seeded but never folded into) are dropped
    per_barber.retain(|row| row.count > 0);

    DailySummary {
        count: transactions.len(),
        total_efectivo,
        total_mercado_pago,
        total: total_efectivo + total_mercado_pago,
        transactions: transactions.iter().map(|t| (*t).clone()).collect(),
        per_barber,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
