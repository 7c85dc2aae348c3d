// ============================================================================
// Order Store - Relational Persistence
// ============================================================================
//
// The store owns the SQL for the orders aggregate:
// - schema:      versioned migrations for the orders/order_items tables
// - order_store: create (one transaction) and fetch-with-items
//
// ============================================================================

pub mod order_store;
pub mod schema;

use async_trait::async_trait;

use crate::domain::order::Order;

pub use order_store::OrderStore;
pub use schema::migrate;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Order not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl StoreError {
    /// Metric label for the failure kind
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::NotFound(_) => "not_found",
            StoreError::Database(_) => "database",
            StoreError::Migration(_) => "migration",
        }
    }
}

/// Persistence operations the order command handler depends on
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persist the order and all its items as one unit.
    ///
    /// Missing identifiers are generated before the write. Returns the
    /// order as stored.
    async fn create_order(&self, order: Order) -> Result<Order, StoreError>;

    /// Load an order together with its items.
    ///
    /// An unknown id yields [`StoreError::NotFound`].
    async fn get_order(&self, id: &str) -> Result<Order, StoreError>;
}
