use crate::document::OperationKind;
use crate::execution::DataItemStatus;
use crate::execution::ExecutionPlanGenerator;
use crate::execution::FieldResolutionContext;
use crate::execution::GraphDataItem;
use crate::execution::GraphExecutionError;
use crate::execution::GraphFieldExecutionContext;
use crate::execution::GraphFieldRequest;
use crate::execution::QueryExecutionContext;
use crate::execution::QueryRequest;
use crate::loc::SourceOrigin;
use crate::messages::codes;
use crate::middleware::assign_results;
use crate::resolvers::FieldResolver;
use crate::resolvers::FunctionResolver;
use crate::resolvers::ResolveParams;
use crate::schema::Schema;
use crate::test_utils;
use serde_json::Value;
use serde_json::json;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

fn version_request(query: &QueryExecutionContext, sources: Vec<Value>) -> GraphFieldRequest {
    let generator = ExecutionPlanGenerator::new(query.schema(), query.document());
    let plan = generator.create_plan(generator.select_operation(None).unwrap());
    let invocation = plan.fields()[0].clone();
    let items = sources
        .into_iter()
        .map(|source| {
            Arc::new(GraphDataItem::new(
                Some(invocation.field().clone()),
                SourceOrigin::default(),
                source,
                Some("Query".to_string()),
            ))
        })
        .collect();
    GraphFieldRequest::new(invocation.clone(), invocation.field().clone(), items)
}

fn query_context(schema: Schema) -> QueryExecutionContext {
    let document = test_utils::build_document(&schema, "{ version }");
    QueryExecutionContext::new(Arc::new(schema), Arc::new(document), OperationKind::Query)
}

fn batched_version_schema() -> Schema {
    let unused = FunctionResolver::new(|_: ResolveParams| async { Ok(json!({})) });
    test_utils::test_schema_builder()
        .resolve_batch_field("Query", "version", unused, Some("id"))
        .unwrap()
        .build()
        .unwrap()
}

#[test]
fn per_item_results_go_to_the_only_item() {
    let query = query_context(test_utils::test_schema());
    let mut context = GraphFieldExecutionContext::new(&query, version_request(&query, vec![json!({})]));

    assign_results(&mut context, json!("1.0")).unwrap();
    assert_eq!(context.request().items()[0].result(), Some(json!("1.0")));
    assert_eq!(context.result(), Some(&json!("1.0")));
    assert_eq!(context.resolved_items().len(), 1);
}

#[test]
fn per_item_fields_scheduled_for_several_items_are_rejected() {
    let query = query_context(test_utils::test_schema());
    let sources = vec![json!({}), json!({})];
    let mut context = GraphFieldExecutionContext::new(&query, version_request(&query, sources));

    let err = assign_results(&mut context, json!("1.0")).unwrap_err();
    assert!(matches!(
        err,
        GraphExecutionError::InvalidResolutionMode { item_count: 2, .. },
    ));
    assert_eq!(err.route().to_string(), "[type]/Query/version");
    assert!(context.request().items().iter().all(|item| item.result().is_none()));
    assert!(context.result().is_none());
    assert!(context.resolved_items().is_empty());
}

#[test]
fn batch_results_partition_the_items() {
    let query = query_context(batched_version_schema());
    let sources = vec![json!({ "id": "1" }), json!({ "id": "2" }), json!({ "id": 3 })];
    let mut context = GraphFieldExecutionContext::new(&query, version_request(&query, sources));

    let batch = json!({ "1": "one", "3": "three" });
    assign_results(&mut context, batch.clone()).unwrap();
    assert_eq!(context.result(), Some(&batch));

    let items = context.request().items();
    let resolved = context.resolved_items();
    assert_eq!(resolved.len(), 2);
    assert!(Arc::ptr_eq(&resolved[0], &items[0]));
    assert!(Arc::ptr_eq(&resolved[1], &items[2]));
    assert_eq!(items[2].result(), Some(json!("three")));

    // Every item was either resolved or failed with a message, never both.
    for item in items {
        let is_resolved = resolved.iter().any(|r| Arc::ptr_eq(r, item));
        assert_ne!(is_resolved, item.status() == DataItemStatus::Failed);
    }
    let reported: Vec<String> = context
        .messages()
        .to_vec()
        .iter()
        .map(|msg| msg.code().to_string())
        .collect();
    assert_eq!(reported, vec![codes::BATCH_ITEM_UNRESOLVED]);
}

/// Returns without setting a result.
#[derive(Debug)]
struct Silent;

#[async_trait::async_trait]
impl FieldResolver for Silent {
    async fn resolve(&self, _context: &mut FieldResolutionContext, _cancel: &CancellationToken) {}
}

fn silent_schema() -> Schema {
    test_utils::test_schema_builder()
        .resolve_field("Query", "version", Silent)
        .unwrap()
        .resolve_field("Query", "greeting", Silent)
        .unwrap()
        .build()
        .unwrap()
}

#[tokio::test]
async fn resolvers_that_set_nothing_produce_null() {
    let nullable = test_utils::execute(silent_schema(), QueryRequest::new("{ greeting }")).await;
    assert!(nullable.messages().is_empty());
    assert_eq!(nullable.data(), Some(&json!({ "greeting": null })));

    let non_null = test_utils::execute(silent_schema(), QueryRequest::new("{ version greeting }")).await;
    assert_eq!(test_utils::response_codes(&non_null), vec![codes::RULE_6_4_3_NON_NULL_RESULT]);
    assert_eq!(non_null.data(), Some(&Value::Null));
}
