use serde::{Deserialize, Serialize};

use crate::validation::{ValidatorRegistry, VALID_ORDER_STATUS, VALID_PIZZA_SIZE, VALID_PIZZA_TYPE};
use super::errors::ValidationErrors;
use super::model::{Order, OrderItem};
use super::value_objects::OrderStatus;

// ============================================================================
// Order Commands - Represent user intent
// ============================================================================

/// Request to place a new order, in the JSON shape clients submit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceOrder {
    #[serde(rename = "customerName")]
    pub customer_name: String,
    pub phone: String,
    pub address: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub pizzas: Vec<PizzaLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PizzaLine {
    pub size: String,
    pub pizza: String,
    #[serde(default)]
    pub instructions: Option<String>,
}

impl PlaceOrder {
    /// Collect every violation rather than stopping at the first one
    pub fn validate(&self, rules: &ValidatorRegistry) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        require(&mut errors, "customerName", &self.customer_name);
        require(&mut errors, "phone", &self.phone);
        require(&mut errors, "address", &self.address);

        if let Some(status) = &self.status {
            check(&mut errors, rules, VALID_ORDER_STATUS, "status", status);
        }

        if self.pizzas.is_empty() {
            errors.push("pizzas", "at least one pizza is required");
        }

        for (index, line) in self.pizzas.iter().enumerate() {
            check(&mut errors, rules, VALID_PIZZA_SIZE, &format!("pizzas[{}].size", index), &line.size);
            check(&mut errors, rules, VALID_PIZZA_TYPE, &format!("pizzas[{}].pizza", index), &line.pizza);
        }

        errors.into_result()
    }

    /// Build the unsaved aggregate. Call [`PlaceOrder::validate`] first.
    pub fn into_order(self) -> Order {
        let status = self
            .status
            .unwrap_or_else(|| OrderStatus::initial().to_string());

        let items = self
            .pizzas
            .into_iter()
            .map(|line| OrderItem::new(line.size, line.pizza, line.instructions))
            .collect();

        Order::new(status, self.customer_name, self.phone, self.address, items)
    }
}

fn require(errors: &mut ValidationErrors, field: &str, value: &str) {
    if value.is_empty() {
        errors.push(field, "is required");
    }
}

fn check(errors: &mut ValidationErrors, rules: &ValidatorRegistry, tag: &str, field: &str, value: &str) {
    match rules.check(tag, value) {
        Ok(true) => {}
        Ok(false) => {
            let allowed = rules
                .rule(tag)
                .map(|e| e.members().join(", "))
                .unwrap_or_default();
            errors.push(field, format!("'{}' is not one of: {}", value, allowed));
        }
        Err(e) => errors.push(field, e.to_string()),
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> PlaceOrder {
        PlaceOrder {
            customer_name: "Ann".to_string(),
            phone: "555".to_string(),
            address: "1 Main St".to_string(),
            status: None,
            pizzas: vec![PizzaLine {
                size: "Medium".to_string(),
                pizza: "Veggie".to_string(),
                instructions: Some(String::new()),
            }],
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate(&ValidatorRegistry::standard()).is_ok());
    }

    #[test]
    fn test_invalid_status_is_rejected() {
        let mut request = valid_request();
        request.status = Some("Delivered".to_string());

        let errors = request.validate(&ValidatorRegistry::standard()).unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["status"]);
    }

    #[test]
    fn test_collects_all_violations() {
        let request = PlaceOrder {
            customer_name: "".to_string(),
            phone: "".to_string(),
            address: "1 Main St".to_string(),
            status: Some("ready".to_string()),
            pizzas: vec![
                PizzaLine {
                    size: "Huge".to_string(),
                    pizza: "Veggie".to_string(),
                    instructions: None,
                },
                PizzaLine {
                    size: "Small".to_string(),
                    pizza: "Anchovy".to_string(),
                    instructions: None,
                },
            ],
        };

        let errors = request.validate(&ValidatorRegistry::standard()).unwrap_err();
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec!["customerName", "phone", "status", "pizzas[0].size", "pizzas[1].pizza"]
        );
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        let mut request = valid_request();
        request.phone = "  ".to_string();
        request.address = " ".to_string();

        assert!(request.validate(&ValidatorRegistry::standard()).is_ok());
    }

    #[test]
    fn test_empty_pizza_list_is_rejected() {
        let mut request = valid_request();
        request.pizzas.clear();

        let errors = request.validate(&ValidatorRegistry::standard()).unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["pizzas"]);
    }

    #[test]
    fn test_into_order_defaults_status() {
        let order = valid_request().into_order();

        assert_eq!(order.status, "Order placed");
        assert!(order.id.is_empty());
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].pizza, "Veggie");
    }

    #[test]
    fn test_request_deserializes_from_json() {
        let json = r#"{
            "customerName": "Ann",
            "phone": "555",
            "address": "1 Main St",
            "pizzas": [{"size": "Large", "pizza": "Mushroom", "instructions": "well done"}]
        }"#;

        let request: PlaceOrder = serde_json::from_str(json).unwrap();
        assert_eq!(request.status, None);
        assert_eq!(request.pizzas[0].instructions.as_deref(), Some("well done"));
    }
}
