use std::collections::HashMap;

use crate::domain::order::Enumeration;

// ============================================================================
// Field Validator
// ============================================================================
//
// Membership checks for enumerated fields. The validator never raises for
// an invalid value; it answers true/false and leaves the rejection to the
// caller.
//
// ============================================================================

pub const VALID_PIZZA_TYPE: &str = "valid_pizza_type";
pub const VALID_PIZZA_SIZE: &str = "valid_pizza_size";
pub const VALID_ORDER_STATUS: &str = "valid_order_status";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Unknown validation rule: {0}")]
    UnknownRule(String),
}

/// True iff `value` is exactly one of the enumeration's members
pub fn is_allowed(value: &str, enumeration: &Enumeration) -> bool {
    enumeration.contains(value)
}

/// Named validation rules, each backed by an enumeration
#[derive(Debug, Clone, Default)]
pub struct ValidatorRegistry {
    rules: HashMap<String, Enumeration>,
}

impl ValidatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the pizza type, pizza size and order status rules
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(VALID_PIZZA_TYPE, Enumeration::PIZZA_TYPE);
        registry.register(VALID_PIZZA_SIZE, Enumeration::PIZZA_SIZE);
        registry.register(VALID_ORDER_STATUS, Enumeration::ORDER_STATUS);
        registry
    }

    /// Register (or replace) a rule
    pub fn register(&mut self, tag: impl Into<String>, enumeration: Enumeration) {
        let tag = tag.into();
        tracing::debug!(rule = %tag, enumeration = enumeration.name(), "Registered validation rule");
        self.rules.insert(tag, enumeration);
    }

    pub fn rule(&self, tag: &str) -> Option<&Enumeration> {
        self.rules.get(tag)
    }

    /// Check `value` against the rule registered under `tag`
    pub fn check(&self, tag: &str, value: &str) -> Result<bool, ValidationError> {
        self.rule(tag)
            .map(|enumeration| is_allowed(value, enumeration))
            .ok_or_else(|| ValidationError::UnknownRule(tag.to_string()))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::{ORDER_STATUSES, PIZZA_SIZES, PIZZA_TYPES};

    #[test]
    fn test_every_member_is_allowed() {
        for value in ORDER_STATUSES {
            assert!(is_allowed(value, &Enumeration::ORDER_STATUS));
        }
        for value in PIZZA_TYPES {
            assert!(is_allowed(value, &Enumeration::PIZZA_TYPE));
        }
        for value in PIZZA_SIZES {
            assert!(is_allowed(value, &Enumeration::PIZZA_SIZE));
        }
    }

    #[test]
    fn test_empty_string_is_rejected() {
        assert!(!is_allowed("", &Enumeration::ORDER_STATUS));
        assert!(!is_allowed("", &Enumeration::PIZZA_TYPE));
        assert!(!is_allowed("", &Enumeration::PIZZA_SIZE));
    }

    #[test]
    fn test_case_variants_and_padding_are_rejected() {
        assert!(!is_allowed("veggie", &Enumeration::PIZZA_TYPE));
        assert!(!is_allowed("VEGGIE", &Enumeration::PIZZA_TYPE));
        assert!(!is_allowed("Veggie ", &Enumeration::PIZZA_TYPE));
        assert!(!is_allowed("order placed", &Enumeration::ORDER_STATUS));
    }

    #[test]
    fn test_values_from_other_enumerations_are_rejected() {
        assert!(!is_allowed("Medium", &Enumeration::PIZZA_TYPE));
        assert!(!is_allowed("Veggie", &Enumeration::PIZZA_SIZE));
        assert!(!is_allowed("Delivered", &Enumeration::ORDER_STATUS));
    }

    #[test]
    fn test_standard_registry_rules() {
        let registry = ValidatorRegistry::standard();

        assert_eq!(registry.check(VALID_PIZZA_TYPE, "Pineapple"), Ok(true));
        assert_eq!(registry.check(VALID_PIZZA_SIZE, "Extra Large"), Ok(true));
        assert_eq!(registry.check(VALID_ORDER_STATUS, "Quality check"), Ok(true));
        assert_eq!(registry.check(VALID_ORDER_STATUS, "Shipped"), Ok(false));
    }

    #[test]
    fn test_unknown_rule() {
        let registry = ValidatorRegistry::standard();
        assert_eq!(
            registry.check("valid_topping", "Olives"),
            Err(ValidationError::UnknownRule("valid_topping".to_string()))
        );
    }

    #[test]
    fn test_register_custom_rule() {
        const CRUSTS: &[&str] = &["Thin", "Deep dish"];

        let mut registry = ValidatorRegistry::new();
        registry.register("valid_crust", Enumeration::new("crust", CRUSTS));

        assert_eq!(registry.check("valid_crust", "Thin"), Ok(true));
        assert_eq!(registry.check("valid_crust", "thin"), Ok(false));
        assert!(registry.rule(VALID_PIZZA_TYPE).is_none());
    }
}
