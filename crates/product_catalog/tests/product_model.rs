use product_catalog::{InfoProductDto, ProductDto};
use rust_decimal::Decimal;
use uuid::Uuid;

#[test]
fn info_view_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let view = InfoProductDto {
        id,
        name: "Apples".to_string(),
        description: "Fresh green apples".to_string(),
        price: Decimal::new(1050, 2),
    };

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["name"], "Apples");
    assert_eq!(json["description"], "Fresh green apples");
    assert_eq!(json["price"], "10.50");
    assert!(json.get("created_at").is_none());

    let decoded: InfoProductDto = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, view);
}

#[test]
fn dto_with_missing_fields_decodes_for_validation() {
    let dto: ProductDto = serde_json::from_value(serde_json::json!({ "name": "Apples" })).unwrap();

    assert_eq!(dto.name, "Apples");
    assert!(dto.description.is_empty());
    assert_eq!(dto.price, None);
}
