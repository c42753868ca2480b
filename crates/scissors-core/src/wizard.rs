//! # Selection Wizard
//!
//! Stage machine guiding the operator through building a cobro.
//!
//! ## Stage Flow
//! ```text
//! ┌────────────────────────────────────────────────────────────────────────┐
//! │                         Wizard Stages                                  │
//! │                                                                        │
//! │  Barber ──► Service ──► Extras ──► Discount ──► Payment ──► submit     │
//! │    auto       auto     explicit      auto       explicit               │
//! │                                                                        │
//! │  • Selecting a barber, service, or discount advances automatically     │
//! │  • Extras is multi-select: leaving it is an explicit "continue"        │
//! │  • Picking a payment method never auto-submits                         │
//! │  • Backward navigation is free; forward only up to the furthest        │
//! │    stage already reached                                               │
//! └────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The wizard holds ids, not entities. Ids are resolved against the catalog
//! at submit time, so a selection made before a catalog edit is validated
//! against the catalog as it is now.

use crate::builder::{build_cobro, CobroDraft, DiscountChoice};
use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::types::{PaymentMethod, Transaction};
use crate::NO_DISCOUNT_ID;

// =============================================================================
// Stage
// =============================================================================

/// The five wizard stages, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Barber,
    Service,
    Extras,
    Discount,
    Payment,
}

impl Stage {
    fn next(self) -> Stage {
        match self {
            Stage::Barber => Stage::Service,
            Stage::Service => Stage::Extras,
            Stage::Extras => Stage::Discount,
            Stage::Discount => Stage::Payment,
            Stage::Payment => Stage::Payment,
        }
    }
}

// =============================================================================
// Wizard
// =============================================================================

/// Selection wizard state.
///
/// One per session. [`Wizard::submit`] is the only path that clears it,
/// and only on success; a failed submit leaves every selection intact.
#[derive(Debug, Clone)]
pub struct Wizard {
    stage: Stage,
    /// Furthest stage ever reached this round; forward jumps are capped here.
    furthest: Stage,
    barber_id: Option<String>,
    service_id: Option<String>,
    /// Toggled extras in selection order.
    extra_ids: Vec<String>,
    discount_id: String,
    payment: Option<PaymentMethod>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Wizard {
            stage: Stage::Barber,
            furthest: Stage::Barber,
            barber_id: None,
            service_id: None,
            extra_ids: Vec::new(),
            discount_id: NO_DISCOUNT_ID.to_string(),
            payment: None,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn barber_id(&self) -> Option<&str> {
        self.barber_id.as_deref()
    }

    pub fn service_id(&self) -> Option<&str> {
        self.service_id.as_deref()
    }

    pub fn extra_ids(&self) -> &[String] {
        &self.extra_ids
    }

    pub fn discount_id(&self) -> &str {
        &self.discount_id
    }

    pub fn payment(&self) -> Option<PaymentMethod> {
        self.payment
    }

    // =========================================================================
    // Selections
    // =========================================================================

    /// Selects the barber and advances to the service stage.
    pub fn select_barber(&mut self, id: impl Into<String>) {
        self.barber_id = Some(id.into());
        self.advance();
    }

    /// Selects the service and advances to the extras stage.
    pub fn select_service(&mut self, id: impl Into<String>) {
        self.service_id = Some(id.into());
        self.advance();
    }

    /// Toggles an extra on or off. Stays on the extras stage; the operator
    /// may pick several.
    pub fn toggle_extra(&mut self, id: &str) {
        if let Some(pos) = self.extra_ids.iter().position(|e| e == id) {
            self.extra_ids.remove(pos);
        } else {
            self.extra_ids.push(id.to_string());
        }
    }

    /// Leaves the extras stage, with however many extras are toggled
    /// (including none).
    pub fn continue_to_discount(&mut self) {
        if self.stage == Stage::Extras {
            self.advance();
        }
    }

    /// Selects the discount and advances to the payment stage.
    pub fn select_discount(&mut self, id: impl Into<String>) {
        self.discount_id = id.into();
        self.advance();
    }

    /// Selects the payment method. Never submits; that is a separate,
    /// explicit action.
    pub fn select_payment(&mut self, method: PaymentMethod) {
        self.payment = Some(method);
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Jumps to a stage. Backward is always allowed; forward only up to the
    /// furthest stage already reached. Out-of-range jumps are no-ops.
    pub fn go_to(&mut self, stage: Stage) {
        if stage <= self.furthest {
            self.stage = stage;
        }
    }

    fn advance(&mut self) {
        self.stage = self.stage.next();
        if self.stage > self.furthest {
            self.furthest = self.stage;
        }
    }

    // =========================================================================
    // Submit
    // =========================================================================

    /// Resolves the selection against the catalog, builds the cobro, and on
    /// success resets for the next customer.
    ///
    /// ## Errors
    /// - [`CoreError::NotFound`] if the selected barber or service was
    ///   deleted since selection
    /// - [`crate::ValidationError::MissingFields`] if required selections
    ///   are absent
    ///
    /// A deleted extra is silently dropped and a deleted discount resolves
    /// to 0%, mirroring how stale selections degrade elsewhere. On any
    /// error the wizard state is left untouched.
    pub fn submit(&mut self, catalog: &Catalog) -> CoreResult<Transaction> {
        let barber = match &self.barber_id {
            Some(id) => Some(
                catalog
                    .barber(id)
                    .ok_or_else(|| CoreError::not_found("Barber", id.clone()))?,
            ),
            None => None,
        };
        let service = match &self.service_id {
            Some(id) => Some(
                catalog
                    .service(id)
                    .ok_or_else(|| CoreError::not_found("Service", id.clone()))?,
            ),
            None => None,
        };
        let extras = self
            .extra_ids
            .iter()
            .filter_map(|id| catalog.extra(id))
            .collect();
        let percentage = catalog.resolve_discount_percentage(&self.discount_id);

        let transaction = build_cobro(CobroDraft {
            barber,
            service,
            extras,
            discount: DiscountChoice::Percentage(percentage),
            payment_method: self.payment,
        })
        .map_err(CoreError::Validation)?;

        *self = Wizard::new();
        Ok(transaction)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::{Barber, Extra, Service};

    fn catalog() -> (Catalog, Barber, Service, Extra, String) {
        let mut catalog = Catalog::new();
        let barber = catalog.add_barber("Carlos", true);
        let service = catalog.add_service("Corte Clásico", Money::new(3500), None);
        let extra = catalog.add_extra("Lavado", Money::new(500));
        let promo = catalog.add_discount("20%", 20);
        (catalog, barber, service, extra, promo.id)
    }

    #[test]
    fn test_auto_advance_path() {
        let (_, barber, service, _, promo_id) = catalog();
        let mut wizard = Wizard::new();
        assert_eq!(wizard.stage(), Stage::Barber);

        wizard.select_barber(&barber.id);
        assert_eq!(wizard.stage(), Stage::Service);

        wizard.select_service(&service.id);
        assert_eq!(wizard.stage(), Stage::Extras);

        // Toggling extras does not advance
        wizard.toggle_extra("e-whatever");
        assert_eq!(wizard.stage(), Stage::Extras);

        wizard.continue_to_discount();
        assert_eq!(wizard.stage(), Stage::Discount);

        wizard.select_discount(&promo_id);
        assert_eq!(wizard.stage(), Stage::Payment);

        // Picking a payment method does not submit or move
        wizard.select_payment(PaymentMethod::Efectivo);
        assert_eq!(wizard.stage(), Stage::Payment);
    }

    #[test]
    fn test_toggle_extra_is_idempotent_pair() {
        let mut wizard = Wizard::new();
        wizard.toggle_extra("e1");
        wizard.toggle_extra("e2");
        wizard.toggle_extra("e1");
        assert_eq!(wizard.extra_ids(), &["e2".to_string()]);
    }

    #[test]
    fn test_forward_navigation_capped_at_furthest() {
        let (_, barber, _, _, _) = catalog();
        let mut wizard = Wizard::new();
        wizard.select_barber(&barber.id);
        // Furthest reached is Service; jumping to Payment is a no-op
        wizard.go_to(Stage::Payment);
        assert_eq!(wizard.stage(), Stage::Service);

        // Backward is free, and forward again up to furthest
        wizard.go_to(Stage::Barber);
        assert_eq!(wizard.stage(), Stage::Barber);
        wizard.go_to(Stage::Service);
        assert_eq!(wizard.stage(), Stage::Service);
    }

    #[test]
    fn test_submit_full_flow_resets_on_success() {
        let (catalog, barber, service, extra, _) = catalog();
        let mut wizard = Wizard::new();
        wizard.select_barber(&barber.id);
        wizard.select_service(&service.id);
        wizard.toggle_extra(&extra.id);
        wizard.continue_to_discount();
        wizard.select_discount(NO_DISCOUNT_ID);
        wizard.select_payment(PaymentMethod::MercadoPago);

        let tx = wizard.submit(&catalog).unwrap();
        assert_eq!(tx.total.amount(), 4000);
        assert_eq!(tx.barber_name, "Carlos");

        // Fresh wizard for the next customer
        assert_eq!(wizard.stage(), Stage::Barber);
        assert!(wizard.barber_id().is_none());
        assert!(wizard.extra_ids().is_empty());
    }

    #[test]
    fn test_submit_without_payment_keeps_selections() {
        let (catalog, barber, service, _, _) = catalog();
        let mut wizard = Wizard::new();
        wizard.select_barber(&barber.id);
        wizard.select_service(&service.id);

        let err = wizard.submit(&catalog).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));

        // Nothing was cleared
        assert_eq!(wizard.barber_id(), Some(barber.id.as_str()));
        assert_eq!(wizard.service_id(), Some(service.id.as_str()));
    }

    #[test]
    fn test_submit_with_deleted_service_is_not_found() {
        let (mut catalog, barber, service, _, _) = catalog();
        let mut wizard = Wizard::new();
        wizard.select_barber(&barber.id);
        wizard.select_service(&service.id);
        wizard.select_payment(PaymentMethod::Efectivo);

        catalog.delete_service(&service.id);

        let err = wizard.submit(&catalog).unwrap_err();
        assert!(matches!(err, CoreError::NotFound { entity: "Service", .. }));
        // Selection survives so the operator can re-pick
        assert_eq!(wizard.service_id(), Some(service.id.as_str()));
    }

    #[test]
    fn test_stale_discount_degrades_to_zero() {
        let (mut catalog, barber, service, _, promo_id) = catalog();
        let mut wizard = Wizard::new();
        wizard.select_barber(&barber.id);
        wizard.select_service(&service.id);
        wizard.continue_to_discount();
        wizard.select_discount(&promo_id);
        wizard.select_payment(PaymentMethod::Efectivo);

        catalog.delete_discount(&promo_id);

        let tx = wizard.submit(&catalog).unwrap();
        assert_eq!(tx.total.amount(), 3500);
        assert_eq!(tx.discount, 0);
    }
}
