use std::fmt;

use serde::Serialize;

use crate::store::StoreError;

// ============================================================================
// Order Errors
// ============================================================================

/// One rejected request field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Every violation found in a request, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    pub violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.violations.push(FieldViolation::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.violations.iter().map(|v| v.field.as_str())
    }

    /// `Ok(())` when nothing was collected
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .violations
            .iter()
            .map(|v| format!("{}: {}", v.field, v.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Invalid order: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Order not found: {0}")]
    NotFound(String),

    #[error("Order store failure: {0}")]
    Store(#[source] StoreError),
}

impl From<StoreError> for OrderError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => OrderError::NotFound(id),
            other => OrderError::Store(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_joins_violations() {
        let mut errors = ValidationErrors::default();
        errors.push("phone", "is required");
        errors.push("pizzas[0].size", "must be one of Small, Medium");

        assert_eq!(
            errors.to_string(),
            "phone: is required; pizzas[0].size: must be one of Small, Medium"
        );
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["phone", "pizzas[0].size"]);
    }

    #[test]
    fn test_into_result() {
        assert!(ValidationErrors::default().into_result().is_ok());

        let mut errors = ValidationErrors::default();
        errors.push("status", "is invalid");
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn test_not_found_store_error_maps_to_not_found() {
        let err: OrderError = StoreError::NotFound("abc".to_string()).into();
        assert!(matches!(err, OrderError::NotFound(id) if id == "abc"));
    }

    #[test]
    fn test_store_error_stays_in_source_chain() {
        use std::error::Error;

        let err: OrderError = StoreError::Database(sqlx::Error::RowNotFound).into();
        let source = err.source().expect("store error should be the source");
        let store = source.downcast_ref::<StoreError>().unwrap();
        assert!(matches!(store, StoreError::Database(sqlx::Error::RowNotFound)));

        // The sqlx error is one level further down
        assert!(source.source().is_some());
    }
}
