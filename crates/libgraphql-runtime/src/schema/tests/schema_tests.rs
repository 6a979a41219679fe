use crate::document::OperationKind;
use crate::schema::TYPENAME_FIELD_NAME;
use crate::test_utils;
use serde_json::json;

#[test]
fn possible_types_of_abstract_types() {
    let schema = test_utils::test_schema();

    assert_eq!(schema.possible_types("Item"), vec!["Item"]);
    assert_eq!(schema.possible_types("SearchResult"), vec!["Item", "Owner"]);
    assert_eq!(schema.possible_types("Node"), vec!["Item", "Owner"]);
    assert!(schema.possible_types("String").is_empty());
}

#[test]
fn concrete_types_resolve_through_typename() {
    let schema = test_utils::test_schema();

    assert_eq!(schema.resolve_concrete_type("Item", &json!({})), Some("Item".to_string()));
    assert_eq!(
        schema.resolve_concrete_type("Node", &json!({"__typename": "Owner"})),
        Some("Owner".to_string()),
    );
    // Not a possible type of the union.
    assert_eq!(schema.resolve_concrete_type("SearchResult", &json!({"__typename": "Query"})), None);
    // Ambiguous without a `__typename`.
    assert_eq!(schema.resolve_concrete_type("SearchResult", &json!({"id": "1"})), None);
    assert_eq!(schema.resolve_concrete_type("String", &json!("x")), None);
}

#[test]
fn type_satisfies_follows_interfaces_and_unions() {
    let schema = test_utils::test_schema();

    assert!(schema.type_satisfies("Item", "Item"));
    assert!(schema.type_satisfies("Item", "Node"));
    assert!(schema.type_satisfies("Owner", "SearchResult"));
    assert!(!schema.type_satisfies("Item", "Owner"));
    assert!(!schema.type_satisfies("Query", "Node"));
}

#[test]
fn root_type_names_by_operation_kind() {
    let schema = test_utils::test_schema();

    assert_eq!(schema.root_type_name(OperationKind::Query), Some("Query"));
    assert_eq!(schema.root_type_name(OperationKind::Mutation), Some("Mutation"));
    assert_eq!(schema.root_type_name(OperationKind::Subscription), None);
}

#[test]
fn typename_field_is_a_non_null_leaf() {
    let schema = test_utils::test_schema();
    let field = schema.typename_field();

    assert_eq!(field.name(), TYPENAME_FIELD_NAME);
    assert!(field.is_leaf());
    assert!(field.type_expression().is_non_null());
}
