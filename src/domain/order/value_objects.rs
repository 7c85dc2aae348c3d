use serde::Serialize;

// ============================================================================
// Order Value Objects - Fixed Vocabularies
// ============================================================================
//
// The three enumerations below are the single source of truth for both
// request validation and display ordering. They are immutable for the
// lifetime of the process.
//
// ============================================================================

pub const ORDER_STATUSES: &[&str] = &["Order placed", "Preparing", "Baking", "Quality check", "Ready"];
pub const PIZZA_TYPES: &[&str] = &["Veggie", "Chicken", "Pepperoni", "Mushroom", "Pineapple"];
pub const PIZZA_SIZES: &[&str] = &["Small", "Medium", "Large", "Extra Large"];

/// A named, ordered set of permitted string values for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Enumeration {
    name: &'static str,
    members: &'static [&'static str],
}

impl Enumeration {
    pub const ORDER_STATUS: Enumeration = Enumeration::new("order status", ORDER_STATUSES);
    pub const PIZZA_TYPE: Enumeration = Enumeration::new("pizza type", PIZZA_TYPES);
    pub const PIZZA_SIZE: Enumeration = Enumeration::new("pizza size", PIZZA_SIZES);

    pub const fn new(name: &'static str, members: &'static [&'static str]) -> Self {
        Self { name, members }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Members in display order
    pub fn members(&self) -> &'static [&'static str] {
        self.members
    }

    /// Exact, case-sensitive membership
    pub fn contains(&self, value: &str) -> bool {
        self.members.iter().any(|member| *member == value)
    }
}

/// Status helpers over the Order-Status vocabulary
pub struct OrderStatus;

impl OrderStatus {
    /// Status assigned to a freshly placed order
    pub fn initial() -> &'static str {
        ORDER_STATUSES[0]
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
