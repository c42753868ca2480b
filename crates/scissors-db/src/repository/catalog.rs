//! # Catalog Repository
//!
//! Database operations for the five catalog entity kinds.
//!
//! ## Write Model
//! ```text
//! ┌────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Persistence Model                           │
//! │                                                                        │
//! │  The in-memory catalog is the working copy. Every mutation is applied  │
//! │  there first, then the resulting entity is written here:               │
//! │                                                                        │
//! │  add / update  ──► upsert_*(entity)   (INSERT OR REPLACE)              │
//! │  delete        ──► delete_*(id)                                        │
//! │  startup       ──► load_catalog()    (full read, insertion order)      │
//! │                                                                        │
//! │  The "none" discount is an in-memory invariant and never stored.       │
//! └────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::StoreResult;
use scissors_core::{Barber, Catalog, Discount, Extra, Money, Service, ServiceLine, NO_DISCOUNT_ID};

// =============================================================================
// Row Types
// =============================================================================

#[derive(Debug, sqlx::FromRow)]
struct ServiceLineRow {
    id: String,
    name: String,
}

#[derive(Debug, sqlx::FromRow)]
struct ServiceRow {
    id: String,
    name: String,
    price: i64,
    line_id: Option<String>,
}

#[derive(Debug, sqlx::FromRow)]
struct ExtraRow {
    id: String,
    name: String,
    price: i64,
}

#[derive(Debug, sqlx::FromRow)]
struct BarberRow {
    id: String,
    name: String,
    active: bool,
}

#[derive(Debug, sqlx::FromRow)]
struct DiscountRow {
    id: String,
    label: String,
    percentage: i64,
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for catalog database operations.
#[derive(Debug, Clone)]
pub struct CatalogRepository {
    pool: SqlitePool,
}

impl CatalogRepository {
    /// Creates a new CatalogRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CatalogRepository { pool }
    }

    /// Loads the full catalog in insertion order.
    ///
    /// The protected "none" discount is re-seeded by
    /// [`Catalog::from_parts`]; it is never a stored row.
    pub async fn load_catalog(&self) -> StoreResult<Catalog> {
        let lines: Vec<ServiceLineRow> =
            sqlx::query_as("SELECT id, name FROM service_lines ORDER BY rowid")
                .fetch_all(&self.pool)
                .await?;

        let services: Vec<ServiceRow> =
            sqlx::query_as("SELECT id, name, price, line_id FROM services ORDER BY rowid")
                .fetch_all(&self.pool)
                .await?;

        let extras: Vec<ExtraRow> =
            sqlx::query_as("SELECT id, name, price FROM extras ORDER BY rowid")
                .fetch_all(&self.pool)
                .await?;

        let barbers: Vec<BarberRow> =
            sqlx::query_as("SELECT id, name, active FROM barbers ORDER BY rowid")
                .fetch_all(&self.pool)
                .await?;

        let discounts: Vec<DiscountRow> =
            sqlx::query_as("SELECT id, label, percentage FROM discounts ORDER BY rowid")
                .fetch_all(&self.pool)
                .await?;

        debug!(
            services = services.len(),
            extras = extras.len(),
            barbers = barbers.len(),
            "Catalog loaded"
        );

        Ok(Catalog::from_parts(
            lines
                .into_iter()
                .map(|r| ServiceLine {
                    id: r.id,
                    name: r.name,
                })
                .collect(),
            services
                .into_iter()
                .map(|r| Service {
                    id: r.id,
                    name: r.name,
                    price: Money::new(r.price),
                    line_id: r.line_id,
                })
                .collect(),
            extras
                .into_iter()
                .map(|r| Extra {
                    id: r.id,
                    name: r.name,
                    price: Money::new(r.price),
                })
                .collect(),
            barbers
                .into_iter()
                .map(|r| Barber {
                    id: r.id,
                    name: r.name,
                    active: r.active,
                })
                .collect(),
            discounts
                .into_iter()
                .map(|r| Discount {
                    id: r.id,
                    label: r.label,
                    percentage: r.percentage as u32,
                })
                .collect(),
        ))
    }

    // =========================================================================
    // Service Lines
    // =========================================================================

    pub async fn upsert_service_line(&self, line: &ServiceLine) -> StoreResult<()> {
        debug!(id = %line.id, "Upserting service line");

        sqlx::query("INSERT OR REPLACE INTO service_lines (id, name) VALUES (?1, ?2)")
            .bind(&line.id)
            .bind(&line.name)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Deletes a line and detaches its services, matching the in-memory rule.
    pub async fn delete_service_line(&self, id: &str) -> StoreResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("UPDATE services SET line_id = NULL WHERE line_id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM service_lines WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    // =========================================================================
    // Services
    // =========================================================================

    pub async fn upsert_service(&self, service: &Service) -> StoreResult<()> {
        debug!(id = %service.id, name = %service.name, "Upserting service");

        sqlx::query(
            "INSERT OR REPLACE INTO services (id, name, price, line_id) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(&service.id)
        .bind(&service.name)
        .bind(service.price.amount())
        .bind(&service.line_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete_service(&self, id: &str) -> StoreResult<()> {
        sqlx::query("DELETE FROM services WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    // =========================================================================
    // Extras
    // =========================================================================

    pub async fn upsert_extra(&self, extra: &Extra) -> StoreResult<()> {
        debug!(id = %extra.id, name = %extra.name, "Upserting extra");

        sqlx::query("INSERT OR REPLACE INTO extras (id, name, price) VALUES (?1, ?2, ?3)")
            .bind(&extra.id)
            .bind(&extra.name)
            .bind(extra.price.amount())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn delete_extra(&self, id: &str) -> StoreResult<()> {
        sqlx::query("DELETE FROM extras WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    // =========================================================================
    // Barbers
    // =========================================================================

    pub async fn upsert_barber(&self, barber: &Barber) -> StoreResult<()> {
        debug!(id = %barber.id, name = %barber.name, "Upserting barber");

        sqlx::query("INSERT OR REPLACE INTO barbers (id, name, active) VALUES (?1, ?2, ?3)")
            .bind(&barber.id)
            .bind(&barber.name)
            .bind(barber.active)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn delete_barber(&self, id: &str) -> StoreResult<()> {
        sqlx::query("DELETE FROM barbers WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    // =========================================================================
    // Discounts
    // =========================================================================

    /// Upserts a discount. The in-memory "none" entry is skipped; it is an
    /// invariant of the catalog, not data.
    pub async fn upsert_discount(&self, discount: &Discount) -> StoreResult<()> {
        if discount.id == NO_DISCOUNT_ID {
            return Ok(());
        }

        debug!(id = %discount.id, label = %discount.label, "Upserting discount");

        sqlx::query("INSERT OR REPLACE INTO discounts (id, label, percentage) VALUES (?1, ?2, ?3)")
            .bind(&discount.id)
            .bind(&discount.label)
            .bind(discount.percentage as i64)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn delete_discount(&self, id: &str) -> StoreResult<()> {
        if id == NO_DISCOUNT_ID {
            return Ok(());
        }
        sqlx::query("DELETE FROM discounts WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Store, StoreConfig};

    async fn store() -> Store {
        Store::new(StoreConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_catalog_round_trip() {
        let store = store().await;
        let repo = store.catalog();

        let line = ServiceLine {
            id: "l1".to_string(),
            name: "Premium".to_string(),
        };
        let service = Service {
            id: "s1".to_string(),
            name: "Corte Clásico".to_string(),
            price: Money::new(3500),
            line_id: Some("l1".to_string()),
        };
        let extra = Extra {
            id: "e1".to_string(),
            name: "Lavado".to_string(),
            price: Money::new(500),
        };
        let barber = Barber {
            id: "b1".to_string(),
            name: "Carlos".to_string(),
            active: true,
        };
        let discount = Discount {
            id: "d1".to_string(),
            label: "20%".to_string(),
            percentage: 20,
        };

        repo.upsert_service_line(&line).await.unwrap();
        repo.upsert_service(&service).await.unwrap();
        repo.upsert_extra(&extra).await.unwrap();
        repo.upsert_barber(&barber).await.unwrap();
        repo.upsert_discount(&discount).await.unwrap();

        let catalog = repo.load_catalog().await.unwrap();
        assert_eq!(catalog.service("s1").unwrap().price.amount(), 3500);
        assert_eq!(catalog.service("s1").unwrap().line_id.as_deref(), Some("l1"));
        assert_eq!(catalog.extra("e1").unwrap().name, "Lavado");
        assert!(catalog.barber("b1").unwrap().active);
        assert_eq!(catalog.resolve_discount_percentage("d1"), 20);
        // Protected entry re-seeded on load, not stored
        assert!(catalog.discount(NO_DISCOUNT_ID).is_some());
    }

    #[tokio::test]
    async fn test_upsert_updates_in_place() {
        let store = store().await;
        let repo = store.catalog();

        let mut barber = Barber {
            id: "b1".to_string(),
            name: "Carlos".to_string(),
            active: true,
        };
        repo.upsert_barber(&barber).await.unwrap();

        barber.active = false;
        repo.upsert_barber(&barber).await.unwrap();

        let catalog = repo.load_catalog().await.unwrap();
        assert_eq!(catalog.all_barbers().len(), 1);
        assert!(!catalog.barber("b1").unwrap().active);
    }

    #[tokio::test]
    async fn test_delete_service_line_detaches_services() {
        let store = store().await;
        let repo = store.catalog();

        repo.upsert_service_line(&ServiceLine {
            id: "l1".to_string(),
            name: "Premium".to_string(),
        })
        .await
        .unwrap();
        repo.upsert_service(&Service {
            id: "s1".to_string(),
            name: "Combo Premium".to_string(),
            price: Money::new(6500),
            line_id: Some("l1".to_string()),
        })
        .await
        .unwrap();

        repo.delete_service_line("l1").await.unwrap();

        let catalog = repo.load_catalog().await.unwrap();
        assert!(catalog.service_line("l1").is_none());
        assert_eq!(catalog.service("s1").unwrap().line_id, None);
    }

    #[tokio::test]
    async fn test_none_discount_never_stored() {
        let store = store().await;
        let repo = store.catalog();

        repo.upsert_discount(&Discount {
            id: NO_DISCOUNT_ID.to_string(),
            label: "Sin descuento".to_string(),
            percentage: 0,
        })
        .await
        .unwrap();
        repo.delete_discount(NO_DISCOUNT_ID).await.unwrap();

        let catalog = repo.load_catalog().await.unwrap();
        // Exactly the seeded invariant entry, no stored duplicate
        assert_eq!(catalog.discounts().len(), 1);
    }
}
