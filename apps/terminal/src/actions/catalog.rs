//! # Catalog Actions
//!
//! CRUD over the five catalog entity kinds.
//!
//! Every mutation validates first, applies to the session catalog, then
//! queues the store write in the background. Unknown ids are silent no-ops
//! locally and skip the store write entirely.

use tracing::debug;

use crate::error::AppError;
use crate::notify::Notifier;
use crate::state::SessionState;
use scissors_core::{
    validation::{validate_name, validate_percentage, validate_price},
    Barber, BarberPatch, CoreError, Discount, DiscountPatch, Extra, ExtraPatch, Money, Service,
    ServiceLine, ServiceLinePatch, ServicePatch,
};
use scissors_db::Store;

use super::spawn_write;

// =============================================================================
// Service Lines
// =============================================================================

pub fn add_service_line(
    session: &SessionState,
    store: &Store,
    notifier: &Notifier,
    name: &str,
) -> Result<ServiceLine, AppError> {
    let name = validate_name("name", name).map_err(CoreError::from)?;

    let line = session.with_session_mut(|s| s.catalog.add_service_line(name));
    debug!(id = %line.id, "Service line added");

    let repo = store.catalog();
    let stored = line.clone();
    spawn_write(notifier, "Error al guardar la línea", async move {
        repo.upsert_service_line(&stored).await
    });

    Ok(line)
}

pub fn update_service_line(
    session: &SessionState,
    store: &Store,
    notifier: &Notifier,
    id: &str,
    mut patch: ServiceLinePatch,
) -> Result<(), AppError> {
    if let Some(name) = patch.name.take() {
        patch.name = Some(validate_name("name", &name).map_err(CoreError::from)?);
    }

    let updated = session.with_session_mut(|s| {
        s.catalog.update_service_line(id, patch);
        s.catalog.service_line(id).cloned()
    });

    if let Some(line) = updated {
        let repo = store.catalog();
        spawn_write(notifier, "Error al guardar la línea", async move {
            repo.upsert_service_line(&line).await
        });
    }

    Ok(())
}

pub fn delete_service_line(
    session: &SessionState,
    store: &Store,
    notifier: &Notifier,
    id: &str,
) {
    session.with_session_mut(|s| s.catalog.delete_service_line(id));

    let repo = store.catalog();
    let id = id.to_string();
    spawn_write(notifier, "Error al eliminar la línea", async move {
        repo.delete_service_line(&id).await
    });
}

// =============================================================================
// Services
// =============================================================================

pub fn add_service(
    session: &SessionState,
    store: &Store,
    notifier: &Notifier,
    name: &str,
    price: Money,
    line_id: Option<String>,
) -> Result<Service, AppError> {
    let name = validate_name("name", name).map_err(CoreError::from)?;
    validate_price(price).map_err(CoreError::from)?;

    let service = session.with_session_mut(|s| s.catalog.add_service(name, price, line_id));
    debug!(id = %service.id, name = %service.name, "Service added");

    let repo = store.catalog();
    let stored = service.clone();
    spawn_write(notifier, "Error al guardar el servicio", async move {
        repo.upsert_service(&stored).await
    });

    Ok(service)
}

pub fn update_service(
    session: &SessionState,
    store: &Store,
    notifier: &Notifier,
    id: &str,
    mut patch: ServicePatch,
) -> Result<(), AppError> {
    if let Some(name) = patch.name.take() {
        patch.name = Some(validate_name("name", &name).map_err(CoreError::from)?);
    }
    if let Some(price) = patch.price {
        validate_price(price).map_err(CoreError::from)?;
    }

    let updated = session.with_session_mut(|s| {
        s.catalog.update_service(id, patch);
        s.catalog.service(id).cloned()
    });

    if let Some(service) = updated {
        let repo = store.catalog();
        spawn_write(notifier, "Error al guardar el servicio", async move {
            repo.upsert_service(&service).await
        });
    }

    Ok(())
}

pub fn delete_service(session: &SessionState, store: &Store, notifier: &Notifier, id: &str) {
    session.with_session_mut(|s| s.catalog.delete_service(id));

    let repo = store.catalog();
    let id = id.to_string();
    spawn_write(notifier, "Error al eliminar el servicio", async move {
        repo.delete_service(&id).await
    });
}

// =============================================================================
// Extras
// =============================================================================

pub fn add_extra(
    session: &SessionState,
    store: &Store,
    notifier: &Notifier,
    name: &str,
    price: Money,
) -> Result<Extra, AppError> {
    let name = validate_name("name", name).map_err(CoreError::from)?;
    validate_price(price).map_err(CoreError::from)?;

    let extra = session.with_session_mut(|s| s.catalog.add_extra(name, price));
    debug!(id = %extra.id, name = %extra.name, "Extra added");

    let repo = store.catalog();
    let stored = extra.clone();
    spawn_write(notifier, "Error al guardar el extra", async move {
        repo.upsert_extra(&stored).await
    });

    Ok(extra)
}

pub fn update_extra(
    session: &SessionState,
    store: &Store,
    notifier: &Notifier,
    id: &str,
    mut patch: ExtraPatch,
) -> Result<(), AppError> {
    if let Some(name) = patch.name.take() {
        patch.name = Some(validate_name("name", &name).map_err(CoreError::from)?);
    }
    if let Some(price) = patch.price {
        validate_price(price).map_err(CoreError::from)?;
    }

    let updated = session.with_session_mut(|s| {
        s.catalog.update_extra(id, patch);
        s.catalog.extra(id).cloned()
    });

    if let Some(extra) = updated {
        let repo = store.catalog();
        spawn_write(notifier, "Error al guardar el extra", async move {
            repo.upsert_extra(&extra).await
        });
    }

    Ok(())
}

pub fn delete_extra(session: &SessionState, store: &Store, notifier: &Notifier, id: &str) {
    session.with_session_mut(|s| s.catalog.delete_extra(id));

    let repo = store.catalog();
    let id = id.to_string();
    spawn_write(notifier, "Error al eliminar el extra", async move {
        repo.delete_extra(&id).await
    });
}

// =============================================================================
// Barbers
// =============================================================================

pub fn add_barber(
    session: &SessionState,
    store: &Store,
    notifier: &Notifier,
    name: &str,
    active: bool,
) -> Result<Barber, AppError> {
    let name = validate_name("name", name).map_err(CoreError::from)?;

    let barber = session.with_session_mut(|s| s.catalog.add_barber(name, active));
    debug!(id = %barber.id, name = %barber.name, "Barber added");

    let repo = store.catalog();
    let stored = barber.clone();
    spawn_write(notifier, "Error al guardar el barbero", async move {
        repo.upsert_barber(&stored).await
    });

    Ok(barber)
}

pub fn update_barber(
    session: &SessionState,
    store: &Store,
    notifier: &Notifier,
    id: &str,
    mut patch: BarberPatch,
) -> Result<(), AppError> {
    if let Some(name) = patch.name.take() {
        patch.name = Some(validate_name("name", &name).map_err(CoreError::from)?);
    }

    let updated = session.with_session_mut(|s| {
        s.catalog.update_barber(id, patch);
        s.catalog.barber(id).cloned()
    });

    if let Some(barber) = updated {
        let repo = store.catalog();
        spawn_write(notifier, "Error al guardar el barbero", async move {
            repo.upsert_barber(&barber).await
        });
    }

    Ok(())
}

pub fn delete_barber(session: &SessionState, store: &Store, notifier: &Notifier, id: &str) {
    session.with_session_mut(|s| s.catalog.delete_barber(id));

    let repo = store.catalog();
    let id = id.to_string();
    spawn_write(notifier, "Error al eliminar el barbero", async move {
        repo.delete_barber(&id).await
    });
}

// =============================================================================
// Discounts
// =============================================================================

pub fn add_discount(
    session: &SessionState,
    store: &Store,
    notifier: &Notifier,
    label: &str,
    percentage: u32,
) -> Result<Discount, AppError> {
    let label = validate_name("label", label).map_err(CoreError::from)?;
    validate_percentage(percentage).map_err(CoreError::from)?;

    let discount = session.with_session_mut(|s| s.catalog.add_discount(label, percentage));
    debug!(id = %discount.id, label = %discount.label, "Discount added");

    let repo = store.catalog();
    let stored = discount.clone();
    spawn_write(notifier, "Error al guardar el descuento", async move {
        repo.upsert_discount(&stored).await
    });

    Ok(discount)
}

pub fn update_discount(
    session: &SessionState,
    store: &Store,
    notifier: &Notifier,
    id: &str,
    mut patch: DiscountPatch,
) -> Result<(), AppError> {
    if let Some(label) = patch.label.take() {
        patch.label = Some(validate_name("label", &label).map_err(CoreError::from)?);
    }
    if let Some(percentage) = patch.percentage {
        validate_percentage(percentage).map_err(CoreError::from)?;
    }

    let updated = session.with_session_mut(|s| {
        s.catalog.update_discount(id, patch);
        s.catalog.discount(id).cloned()
    });

    if let Some(discount) = updated {
        let repo = store.catalog();
        spawn_write(notifier, "Error al guardar el descuento", async move {
            repo.upsert_discount(&discount).await
        });
    }

    Ok(())
}

/// Deletes a discount. The "none" entry is protected end to end: the
/// session catalog refuses, and no store write is queued.
pub fn delete_discount(session: &SessionState, store: &Store, notifier: &Notifier, id: &str) {
    if id == scissors_core::NO_DISCOUNT_ID {
        return;
    }

    session.with_session_mut(|s| s.catalog.delete_discount(id));

    let repo = store.catalog();
    let id = id.to_string();
    spawn_write(notifier, "Error al eliminar el descuento", async move {
        repo.delete_discount(&id).await
    });
}

// =============================================================================
// Unit Tests
// =============================================================================
