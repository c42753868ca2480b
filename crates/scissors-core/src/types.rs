//! # Domain Types
//!
//! Core domain types used throughout Scissors POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌────────────────────────────────────────────────────────────────────────┐
//! │                          Domain Types                                  │
//! │                                                                        │
//! │  Catalog entities (mutable, CRUD via Catalog):                         │
//! │  ┌─────────────┐ ┌─────────────┐ ┌─────────────┐                      │
//! │  │   Service   │ │    Extra    │ │   Barber    │                      │
//! │  │ id          │ │ id          │ │ id          │                      │
//! │  │ name        │ │ name        │ │ name        │                      │
//! │  │ price       │ │ price       │ │ active      │                      │
//! │  │ line_id     │ └─────────────┘ └─────────────┘                      │
//! │  └─────────────┘ ┌─────────────┐ ┌─────────────┐                      │
//! │                  │ ServiceLine │ │  Discount   │                      │
//! │                  └─────────────┘ └─────────────┘                      │
//! │                                                                        │
//! │  Transaction (immutable once built):                                   │
//! │  snapshots of barber/service/extras + derived subtotal/total           │
//! └────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A `Transaction` copies every human-readable name and price at build
//! time. Editing or deleting catalog entities never alters history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Service Line
// =============================================================================

/// An optional named grouping/tier for services (e.g. "Premium").
///
/// A service references zero or one line. Deleting a line detaches its
/// services; it never deletes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceLine {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name.
    pub name: String,
}

// =============================================================================
// Service
// =============================================================================

/// A billable service offered by the shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name shown during selection and on the cierre.
    pub name: String,

    /// Price in whole currency units. Non-negative.
    pub price: Money,

    /// Optional reference to a [`ServiceLine`].
    pub line_id: Option<String>,
}

// =============================================================================
// Extra
// =============================================================================

/// An add-on selectable in any combination (zero or more) per cobro.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extra {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Price in whole currency units. Non-negative.
    pub price: Money,
}

// =============================================================================
// Barber
// =============================================================================

/// A staff member.
///
/// Only `active` barbers are offered during selection. Inactive barbers are
/// retained so historical transactions still display their name; deleting a
/// barber never cascades to past transactions (those carry a name snapshot).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Barber {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Whether the barber is currently offered for selection.
    pub active: bool,
}

// =============================================================================
// Discount
// =============================================================================

/// A catalog percentage discount.
///
/// The entry with id [`crate::NO_DISCOUNT_ID`] (0%) always exists and cannot
/// be deleted; it represents "sin descuento".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discount {
    /// Unique identifier. Either `"none"` or a UUID v4.
    pub id: String,

    /// Display label, e.g. `"20%"` or `"Sin descuento"`.
    pub label: String,

    /// Percentage in 0–100.
    pub percentage: u32,
}

// =============================================================================
// Payment Method
// =============================================================================

/// The two supported payment methods. There is no other bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Physical cash payment.
    Efectivo,
    /// Mercado Pago digital payment.
    MercadoPago,
}

impl PaymentMethod {
    /// Wire/database string for this method.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Efectivo => "efectivo",
            PaymentMethod::MercadoPago => "mercado_pago",
        }
    }

    /// Parses the wire/database string.
    pub fn parse(s: &str) -> Option<PaymentMethod> {
        match s {
            "efectivo" => Some(PaymentMethod::Efectivo),
            "mercado_pago" => Some(PaymentMethod::MercadoPago),
            _ => None,
        }
    }
}

// =============================================================================
// Discount Type
// =============================================================================

/// How a transaction's `discount` field is interpreted.
///
/// The wizard only offers catalog (percentage) discounts; `Fixed` remains in
/// the model for compatibility with historical records that carried a flat
/// amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
    /// `discount` is a flat amount in whole currency units.
    Fixed,
    /// `discount` is a percentage in 0–100.
    Percentage,
}

// =============================================================================
// Transaction
// =============================================================================

/// A snapshot line for one selected extra.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionExtra {
    pub id: String,
    /// Name at time of sale (frozen).
    pub name: String,
    /// Price at time of sale (frozen).
    pub price: Money,
}

/// A completed, billed service — a "cobro".
///
/// Immutable once created: no update or delete operation exists anywhere in
/// the system. All reporting keys off `created_at`.
///
/// ## Invariants
/// - `subtotal = service_price + Σ extras[].price`
/// - `total = max(0, subtotal - discount_amount())`
/// - `created_at` is assigned at build time and never mutated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub barber_id: String,
    /// Barber name at time of sale (frozen).
    pub barber_name: String,
    pub service_id: String,
    /// Service name at time of sale (frozen).
    pub service_name: String,
    /// Service price at time of sale (frozen).
    pub service_price: Money,
    /// Selected extras in selection order (frozen).
    pub extras: Vec<TransactionExtra>,
    /// Numeric discount value: percent for `Percentage`, pesos for `Fixed`.
    pub discount: i64,
    pub discount_type: DiscountType,
    pub payment_method: PaymentMethod,
    pub subtotal: Money,
    pub total: Money,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Sum of the extras snapshot prices.
    pub fn extras_total(&self) -> Money {
        self.extras.iter().map(|e| e.price).sum()
    }

    /// The amount actually taken off the subtotal.
    ///
    /// Derived rather than stored: `subtotal - total` holds for both
    /// discount kinds because the total floors at zero.
    pub fn discount_amount(&self) -> Money {
        self.subtotal - self.total
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_method_strings() {
        assert_eq!(PaymentMethod::Efectivo.as_str(), "efectivo");
        assert_eq!(PaymentMethod::MercadoPago.as_str(), "mercado_pago");

        assert_eq!(
            PaymentMethod::parse("efectivo"),
            Some(PaymentMethod::Efectivo)
        );
        assert_eq!(
            PaymentMethod::parse("mercado_pago"),
            Some(PaymentMethod::MercadoPago)
        );
        assert_eq!(PaymentMethod::parse("tarjeta"), None);
    }

    #[test]
    fn test_payment_method_serde() {
        let json = serde_json::to_string(&PaymentMethod::MercadoPago).unwrap();
        assert_eq!(json, "\"mercado_pago\"");

        let back: PaymentMethod = serde_json::from_str("\"efectivo\"").unwrap();
        assert_eq!(back, PaymentMethod::Efectivo);
    }

    #[test]
    fn test_transaction_derived_amounts() {
        let tx = Transaction {
            id: "t1".to_string(),
            barber_id: "b1".to_string(),
            barber_name: "Carlos".to_string(),
            service_id: "s1".to_string(),
            service_name: "Corte Clásico".to_string(),
            service_price: Money::new(3500),
            extras: vec![TransactionExtra {
                id: "e1".to_string(),
                name: "Lavado".to_string(),
                price: Money::new(500),
            }],
            discount: 20,
            discount_type: DiscountType::Percentage,
            payment_method: PaymentMethod::Efectivo,
            subtotal: Money::new(4000),
            total: Money::new(3200),
            created_at: Utc::now(),
        };

        assert_eq!(tx.extras_total().amount(), 500);
        assert_eq!(tx.discount_amount().amount(), 800);
    }
}
