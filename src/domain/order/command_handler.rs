use std::sync::Arc;

use crate::store::OrderRepository;
use crate::validation::ValidatorRegistry;

use super::commands::PlaceOrder;
use super::errors::OrderError;
use super::model::Order;

// ============================================================================
// Order Command Handler
// ============================================================================
//
// Orchestrates: Request → Validation → Order → Store
//
// Invalid requests are rejected here and never reach the store.
//
// ============================================================================

pub struct OrderCommandHandler {
    store: Arc<dyn OrderRepository>,
    rules: ValidatorRegistry,
}

impl OrderCommandHandler {
    pub fn new(store: Arc<dyn OrderRepository>) -> Self {
        Self::with_rules(store, ValidatorRegistry::standard())
    }

    pub fn with_rules(store: Arc<dyn OrderRepository>, rules: ValidatorRegistry) -> Self {
        Self { store, rules }
    }

    /// Validate and persist a new order
    pub async fn place(&self, request: PlaceOrder) -> Result<Order, OrderError> {
        if let Err(errors) = request.validate(&self.rules) {
            tracing::debug!(violations = errors.violations.len(), "Rejected order request");
            return Err(OrderError::Validation(errors));
        }

        let order = request.into_order();
        Ok(self.store.create_order(order).await?)
    }

    pub async fn fetch(&self, id: &str) -> Result<Order, OrderError> {
        Ok(self.store.get_order(id).await?)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
