use crate::execution::QueryRequest;
use crate::messages::codes;
use crate::resolvers::FunctionResolver;
use crate::resolvers::ResolveParams;
use crate::test_utils;
use serde_json::Value;
use serde_json::json;

async fn run_with_root(query: &str, root: Value) -> crate::execution::QueryResponse {
    test_utils::execute(test_utils::test_schema(), QueryRequest::new(query).with_root_value(root)).await
}

#[tokio::test]
async fn a_null_non_null_field_nulls_its_nullable_parent() {
    let schema = test_utils::test_schema_builder()
        .resolve_field("Query", "item", FunctionResolver::new(|_: ResolveParams| async {
            Ok(json!({ "name": "nameless" }))
        }))
        .unwrap()
        .build()
        .unwrap();
    let response = test_utils::execute(
        schema,
        QueryRequest::new(r#"{ item(id: "1") { id name } v: version }"#)
            .with_root_value(json!({ "version": "1.0" })),
    )
    .await;

    assert_eq!(test_utils::response_codes(&response), vec![codes::RULE_6_4_3_NON_NULL_RESULT]);
    assert_eq!(response.data(), Some(&json!({ "item": null, "v": "1.0" })));
    assert_eq!(response.to_json()["errors"][0]["path"], json!(["item", "id"]));
}

#[tokio::test]
async fn nulls_propagate_through_non_null_lists_to_the_data() {
    let response = run_with_root(
        "{ items { id } }",
        json!({ "items": [{ "id": "1" }, { "name": "no id" }] }),
    )
    .await;

    assert_eq!(test_utils::response_codes(&response), vec![codes::RULE_6_4_3_NON_NULL_RESULT]);
    assert_eq!(response.data(), Some(&Value::Null));
}

#[tokio::test]
async fn null_elements_of_lists_of_non_null_leaves_are_rejected() {
    let response = run_with_root(
        r#"{ items { id tags } }"#,
        json!({ "items": [{ "id": "1", "tags": ["a", null] }] }),
    )
    .await;

    assert!(response.messages()[0].code() == codes::RULE_6_4_3_NON_NULL_RESULT);
    assert_eq!(response.data(), Some(&json!({ "items": [{ "id": "1", "tags": null }] })));
}

#[tokio::test]
async fn results_of_the_wrong_shape_are_rejected() {
    let response = run_with_root(
        "{ greeting items { id } }",
        json!({ "greeting": { "text": "hi" }, "items": { "id": "1" } }),
    )
    .await;

    assert_eq!(
        test_utils::response_codes(&response),
        vec![codes::INVALID_RESULT_SHAPE, codes::INVALID_RESULT_SHAPE],
    );
    assert_eq!(response.data(), Some(&Value::Null));
}

#[tokio::test]
async fn a_missing_non_null_top_level_field_nulls_the_data() {
    let response = run_with_root("{ greeting version }", json!({ "greeting": "hi" })).await;

    assert_eq!(test_utils::response_codes(&response), vec![codes::RULE_6_4_3_NON_NULL_RESULT]);
    assert_eq!(response.data(), Some(&Value::Null));
}
