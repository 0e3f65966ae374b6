//! Input validation for catalog requests.
//!
//! # Responsibility
//! - Define the batch `Validator` contract consumed by services.
//! - Provide field-level error types that carry every failure at once.

pub mod product_validator;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Message for blank or missing field values.
pub const FIELD_REQUIRED: &str = "value is required";
/// Message for text outside the allowed alphabet or length.
pub const FIELD_WRONG_SYMBOL: &str = "contains invalid characters";
/// Message for values outside the allowed range.
pub const FIELD_WRONG_VALUE: &str = "invalid value";

/// Batch validator: returns every field error, empty when `item` is valid.
pub trait Validator<T> {
    fn validate(&self, item: &T) -> Vec<FieldError>;
}

/// One failed field rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Non-empty list of field errors reported by one validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Wraps validator output; returns `None` when there is nothing to report.
    pub fn from_errors(errors: Vec<FieldError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Returns whether any error refers to `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|error| error.field == field)
    }

    /// Comma-separated failing field names, for metadata-only logging.
    pub fn field_names(&self) -> String {
        self.errors
            .iter()
            .map(|error| error.field.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation failed: ")?;
        for (index, error) in self.errors.iter().enumerate() {
            if index > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::{FieldError, ValidationErrors, FIELD_REQUIRED, FIELD_WRONG_VALUE};

    #[test]
    fn empty_error_list_is_not_a_failure() {
        assert!(ValidationErrors::from_errors(Vec::new()).is_none());
    }

    #[test]
    fn display_lists_every_field() {
        let errors = ValidationErrors::from_errors(vec![
            FieldError::new("name", FIELD_REQUIRED),
            FieldError::new("price", FIELD_WRONG_VALUE),
        ])
        .unwrap();

        assert_eq!(
            errors.to_string(),
            "validation failed: name: value is required; price: invalid value"
        );
        assert_eq!(errors.field_names(), "name,price");
        assert!(errors.has_field("price"));
        assert!(!errors.has_field("description"));
    }
}
