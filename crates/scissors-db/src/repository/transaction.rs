//! # Transaction Repository
//!
//! Append-only storage for cobro records.
//!
//! ## Record Shape
//! ```text
//! ┌────────────────────────────────────────────────────────────────────────┐
//! │                     transactions table                                 │
//! │                                                                        │
//! │  Fully denormalized: barber_name, service_name, service_price and      │
//! │  the extras array are frozen snapshots. The row never references a     │
//! │  live catalog entity, so catalog edits cannot rewrite history.         │
//! │                                                                        │
//! │  extras               TEXT  JSON array of {id, name, price}            │
//! │  discount_id          NULL  (discounts are recorded by value)          │
//! │  discount_name        "20%" for a percentage, NULL when none           │
//! │  discount_percentage  0–100                                            │
//! │  discount_amount      what actually came off the subtotal              │
//! │                                                                        │
//! │  There is no UPDATE or DELETE here. INSERT and SELECT only.            │
//! └────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use scissors_core::{DiscountType, Money, PaymentMethod, Transaction, TransactionExtra};

// =============================================================================
// Row Type
// =============================================================================

/// One stored cobro, column-for-column.
#[derive(Debug, sqlx::FromRow)]
pub struct TransactionRow {
    pub id: String,
    pub barber_id: String,
    pub barber_name: String,
    pub service_id: String,
    pub service_name: String,
    pub service_price: i64,
    /// JSON array of extras snapshots.
    pub extras: String,
    pub extras_total: i64,
    pub discount_id: Option<String>,
    pub discount_name: Option<String>,
    pub discount_percentage: i64,
    pub discount_amount: i64,
    pub subtotal: i64,
    pub total: i64,
    pub payment_method: String,
    pub created_at: DateTime<Utc>,
}

impl TransactionRow {
    /// Builds the row to insert for a cobro.
    pub fn from_transaction(tx: &Transaction) -> StoreResult<Self> {
        let extras = serde_json::to_string(&tx.extras)
            .map_err(|e| StoreError::Internal(e.to_string()))?;

        let (discount_name, discount_percentage) = match tx.discount_type {
            DiscountType::Percentage if tx.discount > 0 => {
                (Some(format!("{}%", tx.discount)), tx.discount)
            }
            _ => (None, 0),
        };

        Ok(TransactionRow {
            id: tx.id.clone(),
            barber_id: tx.barber_id.clone(),
            barber_name: tx.barber_name.clone(),
            service_id: tx.service_id.clone(),
            service_name: tx.service_name.clone(),
            service_price: tx.service_price.amount(),
            extras,
            extras_total: tx.extras_total().amount(),
            // Recorded by value, never by reference
            discount_id: None,
            discount_name,
            discount_percentage,
            discount_amount: tx.discount_amount().amount(),
            subtotal: tx.subtotal.amount(),
            total: tx.total.amount(),
            payment_method: tx.payment_method.as_str().to_string(),
            created_at: tx.created_at,
        })
    }

    /// Rebuilds the domain record from a stored row.
    pub fn into_transaction(self) -> StoreResult<Transaction> {
        let extras: Vec<TransactionExtra> =
            serde_json::from_str(&self.extras).map_err(|e| StoreError::CorruptPayload {
                id: self.id.clone(),
                message: e.to_string(),
            })?;

        let payment_method =
            PaymentMethod::parse(&self.payment_method).ok_or_else(|| StoreError::CorruptPayload {
                id: self.id.clone(),
                message: format!("unknown payment method '{}'", self.payment_method),
            })?;

        // A percentage row carries the percent; older flat-amount rows carry
        // only the amount taken off
        let (discount, discount_type) = if self.discount_percentage > 0 {
            (self.discount_percentage, DiscountType::Percentage)
        } else if self.discount_amount > 0 {
            (self.discount_amount, DiscountType::Fixed)
        } else {
            (0, DiscountType::Percentage)
        };

        Ok(Transaction {
            id: self.id,
            barber_id: self.barber_id,
            barber_name: self.barber_name,
            service_id: self.service_id,
            service_name: self.service_name,
            service_price: Money::new(self.service_price),
            extras,
            discount,
            discount_type,
            payment_method,
            subtotal: Money::new(self.subtotal),
            total: Money::new(self.total),
            created_at: self.created_at,
        })
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for cobro records.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    pool: SqlitePool,
}

impl TransactionRepository {
    /// Creates a new TransactionRepository.
    pub fn new(pool: SqlitePool) -> Self {
        TransactionRepository { pool }
    }

    /// Inserts a cobro record.
    pub async fn insert(&self, tx: &Transaction) -> StoreResult<()> {
        debug!(id = %tx.id, total = tx.total.amount(), "Inserting transaction");

        let row = TransactionRow::from_transaction(tx)?;

        sqlx::query(
            r#"
            INSERT INTO transactions (
                id, barber_id, barber_name,
                service_id, service_name, service_price,
                extras, extras_total,
                discount_id, discount_name, discount_percentage, discount_amount,
                subtotal, total, payment_method, created_at
            ) VALUES (
                ?1, ?2, ?3,
                ?4, ?5, ?6,
                ?7, ?8,
                ?9, ?10, ?11, ?12,
                ?13, ?14, ?15, ?16
            )
            "#,
        )
        .bind(&row.id)
        .bind(&row.barber_id)
        .bind(&row.barber_name)
        .bind(&row.service_id)
        .bind(&row.service_name)
        .bind(row.service_price)
        .bind(&row.extras)
        .bind(row.extras_total)
        .bind(&row.discount_id)
        .bind(&row.discount_name)
        .bind(row.discount_percentage)
        .bind(row.discount_amount)
        .bind(row.subtotal)
        .bind(row.total)
        .bind(&row.payment_method)
        .bind(row.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// All cobros in creation order.
    pub async fn all(&self) -> StoreResult<Vec<Transaction>> {
        let rows: Vec<TransactionRow> = sqlx::query_as(
            r#"
            SELECT
                id, barber_id, barber_name,
                service_id, service_name, service_price,
                extras, extras_total,
                discount_id, discount_name, discount_percentage, discount_amount,
                subtotal, total, payment_method, created_at
            FROM transactions
            ORDER BY created_at, rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TransactionRow::into_transaction).collect()
    }

    /// Cobros created at or after the given instant, in creation order.
    ///
    /// Used at startup to warm the in-memory log with the current day.
    pub async fn since(&self, cutoff: DateTime<Utc>) -> StoreResult<Vec<Transaction>> {
        let rows: Vec<TransactionRow> = sqlx::query_as(
            r#"
            SELECT
                id, barber_id, barber_name,
                service_id, service_name, service_price,
                extras, extras_total,
                discount_id, discount_name, discount_percentage, discount_amount,
                subtotal, total, payment_method, created_at
            FROM transactions
            WHERE created_at >= ?1
            ORDER BY created_at, rowid
            "#,
        )
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TransactionRow::into_transaction).collect()
    }

    /// Number of stored cobros.
    pub async fn count(&self) -> StoreResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM transactions")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Store, StoreConfig};

    fn sample_tx(id: &str, discount: i64, discount_type: DiscountType) -> Transaction {
        let subtotal = Money::new(4000);
        let discount_amount = match discount_type {
            DiscountType::Percentage => subtotal.percent(discount as u32),
            DiscountType::Fixed => Money::new(discount),
        };
        Transaction {
            id: id.to_string(),
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
            discount,
            discount_type,
            payment_method: PaymentMethod::Efectivo,
            subtotal,
            total: subtotal.saturating_sub(discount_amount),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_read_back() {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();
        let repo = store.transactions();

        let tx = sample_tx("t1", 20, DiscountType::Percentage);
        repo.insert(&tx).await.unwrap();

        let all = repo.all().await.unwrap();
        assert_eq!(all.len(), 1);
        let stored = &all[0];
        assert_eq!(stored.barber_name, "Carlos");
        assert_eq!(stored.extras.len(), 1);
        assert_eq!(stored.extras[0].price.amount(), 500);
        assert_eq!(stored.discount, 20);
        assert_eq!(stored.discount_type, DiscountType::Percentage);
        assert_eq!(stored.total.amount(), 3200);
        assert_eq!(stored.payment_method, PaymentMethod::Efectivo);
    }

    #[tokio::test]
    async fn test_row_shape_for_percentage_discount() {
        let tx = sample_tx("t1", 20, DiscountType::Percentage);
        let row = TransactionRow::from_transaction(&tx).unwrap();

        assert_eq!(row.discount_id, None);
        assert_eq!(row.discount_name.as_deref(), Some("20%"));
        assert_eq!(row.discount_percentage, 20);
        assert_eq!(row.discount_amount, 800);
        assert_eq!(row.extras_total, 500);
        assert_eq!(row.payment_method, "efectivo");
    }

    #[tokio::test]
    async fn test_row_shape_without_discount() {
        let tx = sample_tx("t1", 0, DiscountType::Percentage);
        let row = TransactionRow::from_transaction(&tx).unwrap();

        assert_eq!(row.discount_name, None);
        assert_eq!(row.discount_percentage, 0);
        assert_eq!(row.discount_amount, 0);
        assert_eq!(row.total, 4000);
    }

    #[tokio::test]
    async fn test_flat_discount_survives_round_trip() {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();
        let repo = store.transactions();

        let tx = sample_tx("t1", 300, DiscountType::Fixed);
        repo.insert(&tx).await.unwrap();

        let stored = repo.all().await.unwrap().remove(0);
        assert_eq!(stored.discount_type, DiscountType::Fixed);
        assert_eq!(stored.discount, 300);
        assert_eq!(stored.total.amount(), 3700);
    }

    #[tokio::test]
    async fn test_since_filters_by_cutoff() {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();
        let repo = store.transactions();

        let mut old = sample_tx("old", 0, DiscountType::Percentage);
        old.created_at = Utc::now() - chrono::Duration::days(2);
        let recent = sample_tx("recent", 0, DiscountType::Percentage);

        repo.insert(&old).await.unwrap();
        repo.insert(&recent).await.unwrap();

        let cutoff = Utc::now() - chrono::Duration::days(1);
        let since = repo.since(cutoff).await.unwrap();
        assert_eq!(since.len(), 1);
        assert_eq!(since[0].id, "recent");
        assert_eq!(repo.count().await.unwrap(), 2);
    }
}
