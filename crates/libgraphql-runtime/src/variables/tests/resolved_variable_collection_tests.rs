use crate::document::ANONYMOUS_OPERATION_KEY;
use crate::messages::GraphMessageCollection;
use crate::messages::codes;
use crate::test_utils;
use crate::variables::InputVariable;
use crate::variables::ResolvedVariableCollection;
use serde_json::Value;
use serde_json::json;

const QUERY: &str = "
    query ($id: ID!, $name: String = \"you\", $filter: ItemFilter) {
        item(id: $id) { id }
        greeting(name: $name)
        search(filter: $filter) { __typename }
    }
";

fn resolve(values: Value) -> (ResolvedVariableCollection, GraphMessageCollection) {
    let schema = test_utils::test_schema();
    let document = test_utils::build_document(&schema, QUERY);
    assert!(document.messages().is_empty(), "{:?}", document.messages().to_vec());

    let op = document.operations()[ANONYMOUS_OPERATION_KEY];
    let messages = GraphMessageCollection::new();
    let variables = ResolvedVariableCollection::from_json(&schema, &document, op, &values, &messages);
    (variables, messages)
}

#[test]
fn supplied_values_are_coerced_and_defaults_applied() {
    let (variables, messages) = resolve(json!({"id": 7, "filter": {"name": "x"}}));
    assert!(messages.is_empty(), "{:?}", messages.to_vec());

    assert_eq!(variables.try_get_variable("id").map(|v| v.to_json()), Some(json!("7")));
    assert_eq!(variables.try_get_variable("name").map(|v| v.to_json()), Some(json!("you")));
    assert_eq!(
        variables.try_get_variable("filter").map(|v| v.to_json()),
        Some(json!({"name": "x", "limit": 10})),
    );
    assert!(matches!(variables.try_get_variable("filter"), Some(InputVariable::FieldSet(_))));
}

#[test]
fn absent_optional_variables_are_unbound() {
    let (variables, messages) = resolve(json!({"id": "1"}));
    assert!(messages.is_empty());
    assert!(variables.try_get_variable("filter").is_none());
    assert_eq!(variables.len(), 2);
}

#[test]
fn explicit_nulls_are_bound() {
    let (variables, messages) = resolve(json!({"id": "1", "name": null}));
    assert!(messages.is_empty());
    assert!(variables.try_get_variable("name").is_some_and(|v| v.is_null()));
}

#[test]
fn missing_required_variables_are_reported() {
    let (variables, messages) = resolve(json!({}));
    assert_eq!(messages.count_code(codes::INVALID_VARIABLE_VALUE), 1);
    assert!(variables.try_get_variable("id").is_none());
}

#[test]
fn invalid_values_are_reported_per_variable() {
    let (variables, messages) = resolve(json!({"id": true, "filter": {"limit": "many"}}));
    assert_eq!(messages.count_code(codes::INVALID_VARIABLE_VALUE), 2);
    // The variable that could be coerced is still bound.
    assert!(variables.try_get_variable("name").is_some());
}

#[test]
fn variables_must_be_an_object() {
    let (variables, messages) = resolve(json!([1, 2]));
    assert_eq!(messages.count_code(codes::INVALID_VARIABLE_VALUE), 1);
    assert!(variables.is_empty());
}
