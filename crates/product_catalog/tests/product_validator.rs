use product_catalog::validator::product_validator::{FIELD_DESCRIPTION, FIELD_NAME, FIELD_PRICE};
use product_catalog::validator::{FIELD_REQUIRED, FIELD_WRONG_SYMBOL, FIELD_WRONG_VALUE};
use product_catalog::{FieldError, ProductDto, ProductDtoValidator, ValidationRules, Validator};
use rust_decimal::Decimal;

fn valid_dto() -> ProductDto {
    ProductDto::new("Apples", "Fresh green apples", Decimal::from(10))
}

#[test]
fn valid_dto_has_no_errors() {
    let validator = ProductDtoValidator::new();
    assert!(validator.validate(&valid_dto()).is_empty());
}

#[test]
fn non_latin_letters_are_accepted() {
    let validator = ProductDtoValidator::new();
    let dto = ProductDto::new("Яблоко", "Свежие яблоки", Decimal::ZERO);
    assert!(validator.validate(&dto).is_empty());
}

#[test]
fn blank_name_is_required() {
    let validator = ProductDtoValidator::new();
    let dto = ProductDto {
        name: "   ".to_string(),
        ..valid_dto()
    };

    assert_eq!(
        validator.validate(&dto),
        vec![FieldError::new(FIELD_NAME, FIELD_REQUIRED)]
    );
}

#[test]
fn name_with_digits_or_wrong_length_has_wrong_symbol() {
    let validator = ProductDtoValidator::new();
    for name in ["Apple1", "Tea", "Extremely long name"] {
        let dto = ProductDto {
            name: name.to_string(),
            ..valid_dto()
        };
        assert_eq!(
            validator.validate(&dto),
            vec![FieldError::new(FIELD_NAME, FIELD_WRONG_SYMBOL)],
            "name `{name}` should be rejected"
        );
    }
}

#[test]
fn description_rules_use_longer_range() {
    let validator = ProductDtoValidator::new();
    let short = ProductDto {
        description: "Fresh".to_string(),
        ..valid_dto()
    };
    assert_eq!(
        validator.validate(&short),
        vec![FieldError::new(FIELD_DESCRIPTION, FIELD_WRONG_SYMBOL)]
    );

    let blank = ProductDto {
        description: String::new(),
        ..valid_dto()
    };
    assert_eq!(
        validator.validate(&blank),
        vec![FieldError::new(FIELD_DESCRIPTION, FIELD_REQUIRED)]
    );
}

#[test]
fn missing_and_negative_price_are_reported() {
    let validator = ProductDtoValidator::new();
    let missing = ProductDto {
        price: None,
        ..valid_dto()
    };
    assert_eq!(
        validator.validate(&missing),
        vec![FieldError::new(FIELD_PRICE, FIELD_REQUIRED)]
    );

    let negative = ProductDto {
        price: Some(Decimal::new(-1, 2)),
        ..valid_dto()
    };
    assert_eq!(
        validator.validate(&negative),
        vec![FieldError::new(FIELD_PRICE, FIELD_WRONG_VALUE)]
    );
}

#[test]
fn every_failing_field_is_reported_in_order() {
    let validator = ProductDtoValidator::new();

    let errors = validator.validate(&ProductDto::default());

    assert_eq!(
        errors,
        vec![
            FieldError::new(FIELD_NAME, FIELD_REQUIRED),
            FieldError::new(FIELD_DESCRIPTION, FIELD_REQUIRED),
            FieldError::new(FIELD_PRICE, FIELD_REQUIRED),
        ]
    );
}

#[test]
fn custom_rules_change_length_bounds() {
    let validator = ProductDtoValidator::with_rules(ValidationRules {
        name_len: (2, 3),
        description_len: (1, 5),
    })
    .unwrap();

    let dto = ProductDto::new("Tea", "Hot", Decimal::ONE);
    assert!(validator.validate(&dto).is_empty());
    assert_eq!(validator.validate(&valid_dto()).len(), 2);
}

#[test]
fn reversed_rule_bounds_are_rejected() {
    let result = ProductDtoValidator::with_rules(ValidationRules {
        name_len: (10, 5),
        ..ValidationRules::default()
    });
    assert!(result.is_err());
}
