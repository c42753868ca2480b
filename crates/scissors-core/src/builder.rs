//! # Cobro Builder
//!
//! Builds an immutable [`Transaction`] from a catalog selection.
//!
//! ## Computation
//! ```text
//! ┌────────────────────────────────────────────────────────────────────────┐
//! │                       Building a Cobro                                 │
//! │                                                                        │
//! │  1. subtotal = service.price + Σ selected extras                       │
//! │  2. resolve the discount choice:                                       │
//! │       percentage p  →  discount_amount = round_half_up(subtotal·p/100) │
//! │       flat amount f →  discount_amount = f                             │
//! │  3. total = max(0, subtotal - discount_amount)                         │
//! │  4. snapshot every name and price into the record                      │
//! │                                                                        │
//! │  Example: Corte Clásico $3.500 + Lavado $500, 20% off                  │
//! │           subtotal $4.000, descuento $800, total $3.200                │
//! └────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Building has no side effects: appending to the [`crate::TransactionLog`]
//! is the caller's separate, explicit step.

use chrono::Utc;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{
    Barber, DiscountType, Extra, PaymentMethod, Service, Transaction, TransactionExtra,
};

// =============================================================================
// Discount Choice
// =============================================================================

/// The discount applied to a draft.
///
/// Percentage discounts come from the catalog (the wizard resolves the
/// selected id through [`crate::Catalog::resolve_discount_percentage`], so
/// "none" and stale ids arrive here as `Percentage(0)`). Flat discounts are
/// kept for compatibility with historical records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountChoice {
    /// Percentage in 0–100.
    Percentage(u32),
    /// Flat amount off, in whole currency units.
    Flat(Money),
}

impl Default for DiscountChoice {
    fn default() -> Self {
        DiscountChoice::Percentage(0)
    }
}

// =============================================================================
// Cobro Draft
// =============================================================================

/// The selection a cobro is built from.
///
/// `barber`, `service` and `payment_method` are required; extras and the
/// discount are optional. Missing required fields fail validation — they
/// are never silently defaulted.
#[derive(Debug, Clone, Default)]
pub struct CobroDraft<'a> {
    pub barber: Option<&'a Barber>,
    pub service: Option<&'a Service>,
    /// Selected extras in selection order.
    pub extras: Vec<&'a Extra>,
    pub discount: DiscountChoice,
    pub payment_method: Option<PaymentMethod>,
}

// =============================================================================
// Builder
// =============================================================================

/// Builds an immutable [`Transaction`] from a draft.
///
/// ## Errors
/// [`ValidationError::MissingFields`] naming every absent required field
/// (barber, service, payment method). No partial result is produced.
///
/// ## Snapshots
/// All names and prices are copied at build time, so later catalog edits
/// never alter historical records.
pub fn build_cobro(draft: CobroDraft<'_>) -> Result<Transaction, ValidationError> {
    let mut missing = Vec::new();
    if draft.barber.is_none() {
        missing.push("barber".to_string());
    }
    if draft.service.is_none() {
        missing.push("service".to_string());
    }
    if draft.payment_method.is_none() {
        missing.push("payment_method".to_string());
    }
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields { fields: missing });
    }

    // Checked above
    let barber = draft.barber.unwrap();
    let service = draft.service.unwrap();
    let payment_method = draft.payment_method.unwrap();

    let extras: Vec<TransactionExtra> = draft
        .extras
        .iter()
        .map(|e| TransactionExtra {
            id: e.id.clone(),
            name: e.name.clone(),
            price: e.price,
        })
        .collect();

    let extras_total: Money = extras.iter().map(|e| e.price).sum();
    let subtotal = service.price + extras_total;

    let (discount_value, discount_type, discount_amount) = match draft.discount {
        DiscountChoice::Percentage(pct) => {
            (pct as i64, DiscountType::Percentage, subtotal.percent(pct))
        }
        DiscountChoice::Flat(amount) => (amount.amount(), DiscountType::Fixed, amount),
    };

    let total = subtotal.saturating_sub(discount_amount);

    Ok(Transaction {
        id: Uuid::new_v4().to_string(),
        barber_id: barber.id.clone(),
        barber_name: barber.name.clone(),
        service_id: service.id.clone(),
        service_name: service.name.clone(),
        service_price: service.price,
        extras,
        discount: discount_value,
        discount_type,
        payment_method,
        subtotal,
        total,
        created_at: Utc::now(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
