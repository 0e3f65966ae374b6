//! `ProductDto` validation rules.
//!
//! # Invariants
//! - All rules run on every call; errors are reported in field order
//!   `name`, `description`, `price`.
//! - Text fields accept letters of any script and spaces only.

use super::{FieldError, Validator, FIELD_REQUIRED, FIELD_WRONG_SYMBOL, FIELD_WRONG_VALUE};
use crate::config::ValidationRules;
use crate::model::product::ProductDto;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

pub const FIELD_NAME: &str = "name";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_PRICE: &str = "price";

static DEFAULT_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    let (min, max) = ValidationRules::default().name_len;
    text_regex(min, max).expect("valid default name regex")
});
static DEFAULT_DESCRIPTION_RE: Lazy<Regex> = Lazy::new(|| {
    let (min, max) = ValidationRules::default().description_len;
    text_regex(min, max).expect("valid default description regex")
});

/// Validator for create/update product requests.
#[derive(Debug, Clone)]
pub struct ProductDtoValidator {
    name_re: Regex,
    description_re: Regex,
}

impl ProductDtoValidator {
    /// Creates a validator with the default catalog rules.
    pub fn new() -> Self {
        Self {
            name_re: DEFAULT_NAME_RE.clone(),
            description_re: DEFAULT_DESCRIPTION_RE.clone(),
        }
    }

    /// Creates a validator with custom length bounds.
    ///
    /// # Errors
    /// - Returns the regex build error when a bound pair is reversed or too
    ///   large to compile.
    pub fn with_rules(rules: ValidationRules) -> Result<Self, regex::Error> {
        let (name_min, name_max) = rules.name_len;
        let (description_min, description_max) = rules.description_len;
        Ok(Self {
            name_re: text_regex(name_min, name_max)?,
            description_re: text_regex(description_min, description_max)?,
        })
    }
}

impl Default for ProductDtoValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator<ProductDto> for ProductDtoValidator {
    fn validate(&self, item: &ProductDto) -> Vec<FieldError> {
        let mut errors = Vec::new();

        check_text(&mut errors, FIELD_NAME, &item.name, &self.name_re);
        check_text(
            &mut errors,
            FIELD_DESCRIPTION,
            &item.description,
            &self.description_re,
        );

        match item.price {
            None => errors.push(FieldError::new(FIELD_PRICE, FIELD_REQUIRED)),
            Some(price) if price < Decimal::ZERO => {
                errors.push(FieldError::new(FIELD_PRICE, FIELD_WRONG_VALUE));
            }
            Some(_) => {}
        }

        errors
    }
}

fn check_text(errors: &mut Vec<FieldError>, field: &str, value: &str, pattern: &Regex) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, FIELD_REQUIRED));
    } else if !pattern.is_match(value) {
        errors.push(FieldError::new(field, FIELD_WRONG_SYMBOL));
    }
}

fn text_regex(min: usize, max: usize) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"^[\p{{Alphabetic}} ]{{{min},{max}}}$"))
}
