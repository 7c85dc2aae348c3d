use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::utils::IdGenerator;

// ============================================================================
// Order Aggregate - Data Model
// ============================================================================
//
// An Order exclusively owns its OrderItems. Items have no API of their own
// and are always written and read together with their parent.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Order {
    // Identity
    #[serde(default)]
    pub id: String,

    pub status: String,

    // Customer
    #[serde(rename = "customerName")]
    pub customer_name: String,
    pub phone: String,
    pub address: String,

    #[serde(rename = "pizzas", default)]
    #[sqlx(skip)]
    pub items: Vec<OrderItem>,

    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::FromRow)]
pub struct OrderItem {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "orderId", default)]
    pub order_id: String,
    pub size: String,
    pub pizza: String,
    #[serde(default)]
    pub instructions: Option<String>,
}

impl Order {
    /// New, not yet persisted order. Identifiers stay empty until
    /// [`Order::assign_ids`] runs.
    pub fn new(
        status: impl Into<String>,
        customer_name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
        items: Vec<OrderItem>,
    ) -> Self {
        Self {
            id: String::new(),
            status: status.into(),
            customer_name: customer_name.into(),
            phone: phone.into(),
            address: address.into(),
            items,
            created_at: Utc::now(),
        }
    }

    /// Fill every empty identifier and link items to this order.
    ///
    /// Identifiers that are already set are never replaced.
    pub fn assign_ids(&mut self, ids: &dyn IdGenerator) {
        if self.id.is_empty() {
            self.id = ids.generate();
        }

        for item in &mut self.items {
            if item.id.is_empty() {
                item.id = ids.generate();
            }
            item.order_id = self.id.clone();
        }
    }
}

impl OrderItem {
    pub fn new(size: impl Into<String>, pizza: impl Into<String>, instructions: Option<String>) -> Self {
        Self {
            id: String::new(),
            order_id: String::new(),
            size: size.into(),
            pizza: pizza.into(),
            instructions,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
