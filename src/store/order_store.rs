use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Instant;

use crate::domain::order::{Order, OrderItem};
use crate::metrics::Metrics;
use crate::utils::{IdGenerator, ShortIdGenerator};
use super::{OrderRepository, StoreError};

// ============================================================================
// SQLite Order Store
// ============================================================================
//
// Responsibilities:
// 1. Assign missing identifiers before the write (explicit step)
// 2. Write the order row and all item rows in ONE transaction
// 3. Load an order and its items by primary key
//
// Enumerated fields are NOT re-checked here; callers validate first.
//
// ============================================================================

pub struct OrderStore {
    pool: SqlitePool,
    ids: Arc<dyn IdGenerator>,
    metrics: Arc<Metrics>,
}

impl OrderStore {
    pub fn new(pool: SqlitePool, metrics: Arc<Metrics>) -> Self {
        Self {
            pool,
            ids: Arc::new(ShortIdGenerator::new()),
            metrics,
        }
    }

    /// Replace the identifier generator
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Apply the schema to the backing database
    pub async fn migrate(&self) -> Result<(), StoreError> {
        super::migrate(&self.pool).await
    }

    async fn insert(&self, order: &Order) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO orders (id, status, customer_name, phone, address, created_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&order.id)
        .bind(&order.status)
        .bind(&order.customer_name)
        .bind(&order.phone)
        .bind(&order.address)
        .bind(order.created_at)
        .execute(&mut *tx)
        .await?;

        for item in &order.items {
            sqlx::query(
                "INSERT INTO order_items (id, order_id, size, pizza, instructions)
                 VALUES (?, ?, ?, ?, ?)",
            )
            .bind(&item.id)
            .bind(&item.order_id)
            .bind(&item.size)
            .bind(&item.pizza)
            .bind(&item.instructions)
            .execute(&mut *tx)
            .await?;
        }

        // Dropping `tx` on any early return above rolls the whole unit back
        tx.commit().await?;
        Ok(())
    }

    async fn load(&self, id: &str) -> Result<Order, StoreError> {
        let mut order = sqlx::query_as::<_, Order>(
            "SELECT id, status, customer_name, phone, address, created_at FROM orders WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        order.items = sqlx::query_as::<_, OrderItem>(
            "SELECT id, order_id, size, pizza, instructions FROM order_items
             WHERE order_id = ?
             ORDER BY rowid ASC",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(order)
    }
}

#[async_trait]
impl OrderRepository for OrderStore {
    async fn create_order(&self, mut order: Order) -> Result<Order, StoreError> {
        order.assign_ids(self.ids.as_ref());

        let started = Instant::now();
        let result = self.insert(&order).await;
        let elapsed = started.elapsed().as_secs_f64();

        match result {
            Ok(()) => {
                self.metrics.record_created(elapsed);
                tracing::info!(
                    order_id = %order.id,
                    status = %order.status,
                    item_count = order.items.len(),
                    "✅ Order persisted"
                );
                Ok(order)
            }
            Err(e) => {
                self.metrics.record_failure("create_order", e.kind(), elapsed);
                Err(e)
            }
        }
    }

    async fn get_order(&self, id: &str) -> Result<Order, StoreError> {
        let started = Instant::now();
        let result = self.load(id).await;
        let elapsed = started.elapsed().as_secs_f64();

        match &result {
            Ok(order) => {
                self.metrics.record_fetched(elapsed);
                tracing::debug!(order_id = %id, item_count = order.items.len(), "Loaded order");
            }
            Err(e) => self.metrics.record_failure("get_order", e.kind(), elapsed),
        }

        result
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
