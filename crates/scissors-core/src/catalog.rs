//! # Catalog Store
//!
//! Mutable collections of the five catalog entity kinds, with identity
//! assignment and the mutation rules the rest of the system relies on.
//!
//! ## Mutation Contract
//! ```text
//! ┌────────────────────────────────────────────────────────────────────────┐
//! │                     Catalog Store Operations                           │
//! │                                                                        │
//! │  add_*(fields)        ──► entity with generated UUID v4 id             │
//! │  update_*(id, patch)  ──► unspecified fields preserved;                │
//! │                           unknown id is a silent no-op                 │
//! │  delete_*(id)         ──► unknown id is a silent no-op                 │
//! │                                                                        │
//! │  Guarded cases:                                                        │
//! │  • delete_discount("none")    ──► no-op, the entry is protected        │
//! │  • delete_service_line(id)    ──► detaches services first, then        │
//! │                                   removes the line                     │
//! └────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - No two entities of the same kind ever share an id
//! - `discounts` always contains exactly one entry with id `"none"` (0%)
//! - Insertion order is preserved (it drives selection lists and the
//!   per-barber summary ordering)

use uuid::Uuid;

use crate::money::Money;
use crate::types::{Barber, Discount, Extra, Service, ServiceLine};
use crate::NO_DISCOUNT_ID;

// =============================================================================
// Patch Types
// =============================================================================
// `None` means "leave the field unchanged". For `line_id` the inner Option
// is the stored value, so `Some(None)` explicitly clears the reference.

/// Partial update for a [`Service`].
#[derive(Debug, Clone, Default)]
pub struct ServicePatch {
    pub name: Option<String>,
    pub price: Option<Money>,
    pub line_id: Option<Option<String>>,
}

/// Partial update for a [`ServiceLine`].
#[derive(Debug, Clone, Default)]
pub struct ServiceLinePatch {
    pub name: Option<String>,
}

/// Partial update for an [`Extra`].
#[derive(Debug, Clone, Default)]
pub struct ExtraPatch {
    pub name: Option<String>,
    pub price: Option<Money>,
}

/// Partial update for a [`Barber`].
#[derive(Debug, Clone, Default)]
pub struct BarberPatch {
    pub name: Option<String>,
    pub active: Option<bool>,
}

/// Partial update for a [`Discount`].
#[derive(Debug, Clone, Default)]
pub struct DiscountPatch {
    pub label: Option<String>,
    pub percentage: Option<u32>,
}

// =============================================================================
// Catalog
// =============================================================================

/// The catalog store.
///
/// Owned by the application state object and mutated only through these
/// methods; there is no hidden module-level singleton.
#[derive(Debug, Clone)]
pub struct Catalog {
    service_lines: Vec<ServiceLine>,
    services: Vec<Service>,
    extras: Vec<Extra>,
    barbers: Vec<Barber>,
    discounts: Vec<Discount>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Creates an empty catalog seeded with the protected "none" discount.
    pub fn new() -> Self {
        Catalog {
            service_lines: Vec::new(),
            services: Vec::new(),
            extras: Vec::new(),
            barbers: Vec::new(),
            discounts: vec![no_discount()],
        }
    }

    /// Rebuilds a catalog from collections loaded out of the store.
    ///
    /// Re-inserts the protected "none" discount (at the front) if the loaded
    /// rows lack it, so the invariant holds regardless of what the external
    /// store contains.
    pub fn from_parts(
        service_lines: Vec<ServiceLine>,
        services: Vec<Service>,
        extras: Vec<Extra>,
        barbers: Vec<Barber>,
        mut discounts: Vec<Discount>,
    ) -> Self {
        if !discounts.iter().any(|d| d.id == NO_DISCOUNT_ID) {
            discounts.insert(0, no_discount());
        }

        Catalog {
            service_lines,
            services,
            extras,
            barbers,
            discounts,
        }
    }

    // =========================================================================
    // Read Accessors
    // =========================================================================

    pub fn service_lines(&self) -> &[ServiceLine] {
        &self.service_lines
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn extras(&self) -> &[Extra] {
        &self.extras
    }

    /// All barbers, including inactive ones (configuration view).
    pub fn all_barbers(&self) -> &[Barber] {
        &self.barbers
    }

    /// Only active barbers, in catalog order (selection view).
    pub fn active_barbers(&self) -> Vec<&Barber> {
        self.barbers.iter().filter(|b| b.active).collect()
    }

    pub fn discounts(&self) -> &[Discount] {
        &self.discounts
    }

    pub fn service_line(&self, id: &str) -> Option<&ServiceLine> {
        self.service_lines.iter().find(|l| l.id == id)
    }

    pub fn service(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn extra(&self, id: &str) -> Option<&Extra> {
        self.extras.iter().find(|e| e.id == id)
    }

    pub fn barber(&self, id: &str) -> Option<&Barber> {
        self.barbers.iter().find(|b| b.id == id)
    }

    pub fn discount(&self, id: &str) -> Option<&Discount> {
        self.discounts.iter().find(|d| d.id == id)
    }

    /// Resolves a discount selection to a percentage.
    ///
    /// `"none"` and unrecognized ids resolve to 0 rather than failing; a
    /// stale selection simply means no discount.
    pub fn resolve_discount_percentage(&self, id: &str) -> u32 {
        self.discount(id).map(|d| d.percentage).unwrap_or(0)
    }

    // =========================================================================
    // Service Lines
    // =========================================================================

    pub fn add_service_line(&mut self, name: impl Into<String>) -> ServiceLine {
        let line = ServiceLine {
            id: generate_id(),
            name: name.into(),
        };
        self.service_lines.push(line.clone());
        line
    }

    pub fn update_service_line(&mut self, id: &str, patch: ServiceLinePatch) {
        if let Some(line) = self.service_lines.iter_mut().find(|l| l.id == id) {
            if let Some(name) = patch.name {
                line.name = name;
            }
        }
    }

    /// Deletes a line, detaching (not deleting) every service that
    /// references it.
    pub fn delete_service_line(&mut self, id: &str) {
        for service in self.services.iter_mut() {
            if service.line_id.as_deref() == Some(id) {
                service.line_id = None;
            }
        }
        self.service_lines.retain(|l| l.id != id);
    }

    // =========================================================================
    // Services
    // =========================================================================

    pub fn add_service(
        &mut self,
        name: impl Into<String>,
        price: Money,
        line_id: Option<String>,
    ) -> Service {
        let service = Service {
            id: generate_id(),
            name: name.into(),
            price,
            line_id,
        };
        self.services.push(service.clone());
        service
    }

    pub fn update_service(&mut self, id: &str, patch: ServicePatch) {
        if let Some(service) = self.services.iter_mut().find(|s| s.id == id) {
            if let Some(name) = patch.name {
                service.name = name;
            }
            if let Some(price) = patch.price {
                service.price = price;
            }
            if let Some(line_id) = patch.line_id {
                service.line_id = line_id;
            }
        }
    }

    pub fn delete_service(&mut self, id: &str) {
        self.services.retain(|s| s.id != id);
    }

    // =========================================================================
    // Extras
    // =========================================================================

    pub fn add_extra(&mut self, name: impl Into<String>, price: Money) -> Extra {
        let extra = Extra {
            id: generate_id(),
            name: name.into(),
            price,
        };
        self.extras.push(extra.clone());
        extra
    }

    pub fn update_extra(&mut self, id: &str, patch: ExtraPatch) {
        if let Some(extra) = self.extras.iter_mut().find(|e| e.id == id) {
            if let Some(name) = patch.name {
                extra.name = name;
            }
            if let Some(price) = patch.price {
                extra.price = price;
            }
        }
    }

    pub fn delete_extra(&mut self, id: &str) {
        self.extras.retain(|e| e.id != id);
    }

    // =========================================================================
    // Barbers
    // =========================================================================

    pub fn add_barber(&mut self, name: impl Into<String>, active: bool) -> Barber {
        let barber = Barber {
            id: generate_id(),
            name: name.into(),
            active,
        };
        self.barbers.push(barber.clone());
        barber
    }

    pub fn update_barber(&mut self, id: &str, patch: BarberPatch) {
        if let Some(barber) = self.barbers.iter_mut().find(|b| b.id == id) {
            if let Some(name) = patch.name {
                barber.name = name;
            }
            if let Some(active) = patch.active {
                barber.active = active;
            }
        }
    }

    /// Deletes a barber. Past transactions are untouched; they carry a
    /// snapshot of the name.
    pub fn delete_barber(&mut self, id: &str) {
        self.barbers.retain(|b| b.id != id);
    }

    // =========================================================================
    // Discounts
    // =========================================================================

    pub fn add_discount(&mut self, label: impl Into<String>, percentage: u32) -> Discount {
        let discount = Discount {
            id: generate_id(),
            label: label.into(),
            percentage,
        };
        self.discounts.push(discount.clone());
        discount
    }

    pub fn update_discount(&mut self, id: &str, patch: DiscountPatch) {
        if let Some(discount) = self.discounts.iter_mut().find(|d| d.id == id) {
            if let Some(label) = patch.label {
                discount.label = label;
            }
            if let Some(percentage) = patch.percentage {
                discount.percentage = percentage;
            }
        }
    }

    /// Deletes a discount. `"none"` is protected: deleting it is a no-op.
    pub fn delete_discount(&mut self, id: &str) {
        if id == NO_DISCOUNT_ID {
            return;
        }
        self.discounts.retain(|d| d.id != id);
    }
}

/// The protected "sin descuento" entry.
fn no_discount() -> Discount {
    Discount {
        id: NO_DISCOUNT_ID.to_string(),
        label: "Sin descuento".to_string(),
        percentage: 0,
    }
}

/// Generates a new entity id.
///
/// UUID v4: globally unique without coordination, collision probability
/// negligible for the lifetime of a store.
fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_catalog_has_protected_discount() {
        let catalog = Catalog::new();
        let none = catalog.discount(NO_DISCOUNT_ID).unwrap();
        assert_eq!(none.percentage, 0);
        assert_eq!(catalog.discounts().len(), 1);
    }

    #[test]
    fn test_add_assigns_unique_ids() {
        let mut catalog = Catalog::new();
        let a = catalog.add_service("Corte Clásico", Money::new(3500), None);
        let b = catalog.add_service("Corte + Barba", Money::new(5000), None);

        assert_ne!(a.id, b.id);
        assert_eq!(catalog.services().len(), 2);
        assert_eq!(catalog.service(&a.id).unwrap().price.amount(), 3500);
    }

    #[test]
    fn test_update_preserves_unspecified_fields() {
        let mut catalog = Catalog::new();
        let service = catalog.add_service("Corte", Money::new(3500), None);

        catalog.update_service(
            &service.id,
            ServicePatch {
                price: Some(Money::new(4000)),
                ..Default::default()
            },
        );

        let updated = catalog.service(&service.id).unwrap();
        assert_eq!(updated.name, "Corte");
        assert_eq!(updated.price.amount(), 4000);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut catalog = Catalog::new();
        catalog.add_extra("Lavado", Money::new(500));

        catalog.update_extra(
            "missing",
            ExtraPatch {
                price: Some(Money::new(999)),
                ..Default::default()
            },
        );
        catalog.delete_extra("missing");

        assert_eq!(catalog.extras().len(), 1);
        assert_eq!(catalog.extras()[0].price.amount(), 500);
    }

    #[test]
    fn test_delete_discount_none_is_guarded() {
        let mut catalog = Catalog::new();
        let promo = catalog.add_discount("20%", 20);

        catalog.delete_discount(NO_DISCOUNT_ID);
        catalog.delete_discount(&promo.id);

        assert!(catalog.discount(NO_DISCOUNT_ID).is_some());
        assert!(catalog.discount(&promo.id).is_none());
    }

    #[test]
    fn test_delete_service_line_detaches_services() {
        let mut catalog = Catalog::new();
        let line = catalog.add_service_line("Premium");
        let s1 = catalog.add_service("Combo Premium", Money::new(6500), Some(line.id.clone()));
        let s2 = catalog.add_service("Corte Premium", Money::new(5500), Some(line.id.clone()));

        catalog.delete_service_line(&line.id);

        assert!(catalog.service_line(&line.id).is_none());
        // Both services survive with the reference cleared
        assert_eq!(catalog.service(&s1.id).unwrap().line_id, None);
        assert_eq!(catalog.service(&s2.id).unwrap().line_id, None);
    }

    #[test]
    fn test_active_barbers_filter() {
        let mut catalog = Catalog::new();
        catalog.add_barber("Carlos", true);
        let miguel = catalog.add_barber("Miguel", true);
        catalog.update_barber(
            &miguel.id,
            BarberPatch {
                active: Some(false),
                ..Default::default()
            },
        );

        let active: Vec<&str> = catalog
            .active_barbers()
            .into_iter()
            .map(|b| b.name.as_str())
            .collect();
        assert_eq!(active, vec!["Carlos"]);
        assert_eq!(catalog.all_barbers().len(), 2);
    }

    #[test]
    fn test_resolve_discount_percentage() {
        let mut catalog = Catalog::new();
        let promo = catalog.add_discount("20%", 20);

        assert_eq!(catalog.resolve_discount_percentage(&promo.id), 20);
        assert_eq!(catalog.resolve_discount_percentage(NO_DISCOUNT_ID), 0);
        assert_eq!(catalog.resolve_discount_percentage("stale-id"), 0);
    }

    #[test]
    fn test_from_parts_restores_protected_discount() {
        let catalog = Catalog::from_parts(
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
            vec![Discount {
                id: "10".to_string(),
                label: "10%".to_string(),
                percentage: 10,
            }],
        );

        assert_eq!(catalog.discounts()[0].id, NO_DISCOUNT_ID);
        assert_eq!(catalog.discounts().len(), 2);
    }
}
