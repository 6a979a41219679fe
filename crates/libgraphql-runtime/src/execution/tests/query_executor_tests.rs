use crate::execution::ExecutionOptions;
use crate::execution::GraphFieldExecutionContext;
use crate::execution::GraphQueryExecutor;
use crate::execution::QueryRequest;
use crate::logging::QueryMetrics;
use crate::messages::codes;
use crate::resolvers::FieldError;
use crate::resolvers::FunctionResolver;
use crate::resolvers::ResolveParams;
use crate::schema::Schema;
use crate::security::FieldSecurityGroup;
use crate::security::FieldSecurityPolicy;
use crate::security::UserPrincipal;
use crate::test_utils;
use futures_util::future;
use serde_json::Value;
use serde_json::json;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

fn executor(schema: Schema) -> GraphQueryExecutor {
    GraphQueryExecutor::new(Arc::new(schema))
}

fn items_root() -> Value {
    json!({
        "version": "1.0",
        "items": [
            { "id": "1", "name": "one" },
            { "id": "2", "name": "two" },
        ],
    })
}

#[derive(Debug, Default)]
struct CountingMetrics {
    began: AtomicUsize,
    ended: AtomicUsize,
    runs: AtomicUsize,
}
impl QueryMetrics for CountingMetrics {
    fn start(&self) {
        self.runs.fetch_add(1, Ordering::SeqCst);
    }

    fn end(&self) {}

    fn begin_field_resolution(&self, _context: &GraphFieldExecutionContext<'_>) {
        self.began.fetch_add(1, Ordering::SeqCst);
    }

    fn end_field_resolution(&self, _context: &GraphFieldExecutionContext<'_>) {
        self.ended.fetch_add(1, Ordering::SeqCst);
    }
}

mod fields {
    use super::*;

    #[tokio::test]
    async fn every_field_context_is_measured_once() {
        let metrics = Arc::new(CountingMetrics::default());
        let shared = metrics.clone();
        let executor = executor(test_utils::test_schema())
            .with_metrics(move || -> Arc<dyn QueryMetrics> { shared.clone() });

        let response = executor
            .execute(QueryRequest::new("{ items { id name } }").with_root_value(items_root()))
            .await;

        assert!(response.messages().is_empty());
        assert_eq!(
            response.data(),
            Some(&json!({ "items": [{ "id": "1", "name": "one" }, { "id": "2", "name": "two" }] })),
        );
        // `items` once, then `id` and `name` for each of its two items.
        assert_eq!(metrics.began.load(Ordering::SeqCst), 5);
        assert_eq!(metrics.ended.load(Ordering::SeqCst), 5);
        assert_eq!(metrics.runs.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn exposed_metrics_are_attached_as_tracing() {
        let options = ExecutionOptions {
            expose_metrics: true,
            ..ExecutionOptions::default()
        };
        let response = executor(test_utils::test_schema())
            .with_options(options)
            .execute(QueryRequest::new("{ version }").with_root_value(items_root()))
            .await;

        let tracing = &response.extensions()["tracing"];
        assert_eq!(tracing["version"], json!(1));
        let resolvers = tracing["execution"]["resolvers"].as_array().unwrap();
        assert_eq!(resolvers.len(), 1);
        assert_eq!(resolvers[0]["fieldName"], json!("version"));
        assert_eq!(resolvers[0]["path"], json!(["version"]));
    }

    #[tokio::test]
    async fn abstract_values_resolve_through_typename() {
        let search = FunctionResolver::new(|_: ResolveParams| async {
            Ok(json!([
                { "__typename": "Item", "id": "1", "name": "one" },
                { "__typename": "Owner", "id": "2", "email": "two@example.com" },
            ]))
        });
        let schema = test_utils::test_schema_builder()
            .resolve_field("Query", "search", search)
            .unwrap()
            .build()
            .unwrap();

        let response = executor(schema)
            .execute(QueryRequest::new(
                "{ search { __typename ... on Item { name } ... on Owner { email } } }",
            ))
            .await;
        assert!(response.messages().is_empty());
        assert_eq!(
            response.data(),
            Some(&json!({ "search": [
                { "__typename": "Item", "name": "one" },
                { "__typename": "Owner", "email": "two@example.com" },
            ] })),
        );
    }

    #[tokio::test]
    async fn ambiguous_abstract_values_are_reported() {
        let response = executor(test_utils::test_schema())
            .execute(QueryRequest::new("{ node { id } }").with_root_value(json!({ "node": { "id": "1" } })))
            .await;

        assert_eq!(test_utils::response_codes(&response), vec![codes::UNRESOLVED_CONCRETE_TYPE]);
        assert_eq!(response.data(), Some(&json!({ "node": null })));
    }

    #[tokio::test]
    async fn selections_of_one_response_key_are_merged() {
        let response = executor(test_utils::test_schema())
            .execute(
                QueryRequest::new("{ items { id } items { name } }").with_root_value(items_root()),
            )
            .await;

        assert!(response.messages().is_empty());
        assert_eq!(
            response.data(),
            Some(&json!({ "items": [{ "id": "1", "name": "one" }, { "id": "2", "name": "two" }] })),
        );
    }
}

mod batches {
    use super::*;

    #[tokio::test]
    async fn one_invocation_serves_every_item() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counted = calls.clone();
        let owners = FunctionResolver::new(move |params: ResolveParams| {
            counted.fetch_add(1, Ordering::SeqCst);
            let ids: Vec<String> = params
                .sources
                .iter()
                .filter_map(|source| source["id"].as_str().map(|id| id.to_string()))
                .collect();
            async move {
                let owners: serde_json::Map<String, Value> = ids
                    .into_iter()
                    .map(|id| {
                        let owner = json!({ "id": format!("o{id}"), "email": format!("{id}@example.com") });
                        (id, owner)
                    })
                    .collect();
                Ok(Value::Object(owners))
            }
        });
        let schema = test_utils::test_schema_builder()
            .resolve_batch_field("Item", "owner", owners, None)
            .unwrap()
            .build()
            .unwrap();

        let response = executor(schema)
            .execute(QueryRequest::new("{ items { owner { email } } }").with_root_value(items_root()))
            .await;

        assert!(response.messages().is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            response.data(),
            Some(&json!({ "items": [
                { "owner": { "email": "1@example.com" } },
                { "owner": { "email": "2@example.com" } },
            ] })),
        );
    }

    #[tokio::test]
    async fn items_missing_from_the_result_are_reported_individually() {
        let owners = FunctionResolver::new(|_: ResolveParams| async {
            Ok(json!({ "1": { "id": "o1", "email": "1@example.com" } }))
        });
        let schema = test_utils::test_schema_builder()
            .resolve_batch_field("Item", "owner", owners, Some("id"))
            .unwrap()
            .build()
            .unwrap();

        let response = executor(schema)
            .execute(QueryRequest::new("{ items { id owner { email } } }").with_root_value(items_root()))
            .await;

        assert_eq!(test_utils::response_codes(&response), vec![codes::BATCH_ITEM_UNRESOLVED]);
        assert!(response.messages()[0].message().contains("items[1].owner"));
        assert_eq!(response.to_json()["errors"][0]["path"], json!(["items", 1, "owner"]));
        assert_eq!(
            response.data(),
            Some(&json!({ "items": [
                { "id": "1", "owner": { "email": "1@example.com" } },
                { "id": "2", "owner": null },
            ] })),
        );
    }
}

mod cancellation {
    use super::*;

    fn stalled_schema() -> Schema {
        let stalled = FunctionResolver::new(|_: ResolveParams| future::pending::<Result<Value, FieldError>>());
        test_utils::test_schema_builder()
            .resolve_field("Query", "greeting", stalled)
            .unwrap()
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn cancelled_fields_are_null_without_errors() {
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            trigger.cancel();
        });

        let response = executor(stalled_schema())
            .execute_with_cancellation(
                QueryRequest::new("{ greeting version }").with_root_value(items_root()),
                &cancel,
            )
            .await;
        assert!(response.messages().is_empty());
        assert_eq!(response.data(), Some(&json!({ "greeting": null, "version": "1.0" })));
    }

    #[tokio::test]
    async fn a_request_cancelled_up_front_resolves_nothing() {
        let cancel = CancellationToken::new();
        cancel.cancel();

        let response = executor(test_utils::test_schema())
            .execute_with_cancellation(
                QueryRequest::new("{ greeting }").with_root_value(items_root()),
                &cancel,
            )
            .await;
        assert!(response.messages().is_empty());
        assert_eq!(response.data(), Some(&json!({ "greeting": null })));
    }
}

mod security {
    use super::*;

    fn secured_schema() -> Schema {
        test_utils::test_schema_builder()
            .secure_field(
                "Query",
                "secret",
                FieldSecurityGroup::new().with_policy(FieldSecurityPolicy::RequireAuthenticated),
            )
            .unwrap()
            .build()
            .unwrap()
    }

    fn request() -> QueryRequest {
        QueryRequest::new("{ secret version }")
            .with_root_value(json!({ "secret": "hidden", "version": "1.0" }))
    }

    #[tokio::test]
    async fn denied_fields_are_null_with_an_error() {
        let response = executor(secured_schema()).execute(request()).await;

        assert_eq!(test_utils::response_codes(&response), vec![codes::ACCESS_DENIED]);
        assert_eq!(response.data(), Some(&json!({ "secret": null, "version": "1.0" })));
    }

    #[tokio::test]
    async fn authenticated_users_may_read_secured_fields() {
        let response = executor(secured_schema())
            .execute(request().with_user(UserPrincipal::authenticated("ada")))
            .await;

        assert!(response.messages().is_empty());
        assert_eq!(response.data(), Some(&json!({ "secret": "hidden", "version": "1.0" })));
    }
}

mod requests {
    use super::*;

    #[tokio::test]
    async fn syntax_errors_produce_no_data() {
        let response = executor(test_utils::test_schema())
            .execute(QueryRequest::new("{ version"))
            .await;

        assert_eq!(test_utils::response_codes(&response), vec![codes::SYNTAX_ERROR]);
        assert!(response.data().is_none());
        let json = response.to_json();
        assert!(json.get("data").is_none());
        assert_eq!(json["errors"][0]["extensions"]["code"], json!(codes::SYNTAX_ERROR));
        assert_eq!(json["errors"][0]["extensions"]["severity"], json!("CRITICAL"));
    }

    #[tokio::test]
    async fn the_named_operation_is_executed() {
        let executor = executor(test_utils::test_schema());
        let query = "query A { version } query B { greeting }";

        let unnamed = executor.execute(QueryRequest::new(query)).await;
        assert_eq!(test_utils::response_codes(&unnamed), vec![codes::OPERATION_NOT_FOUND]);

        let named = executor
            .execute(
                QueryRequest::new(query)
                    .with_operation_name("B")
                    .with_root_value(items_root()),
            )
            .await;
        assert_eq!(named.data(), Some(&json!({ "greeting": null })));
    }

    #[tokio::test]
    async fn invalid_variables_stop_execution() {
        let response = executor(test_utils::test_schema())
            .execute(
                QueryRequest::new("query ($id: ID!) { item(id: $id) { id } }")
                    .with_variables(json!({ "id": { "nested": true } })),
            )
            .await;

        assert_eq!(test_utils::response_codes(&response), vec![codes::INVALID_VARIABLE_VALUE]);
        assert!(response.data().is_none());
    }

    #[tokio::test]
    async fn errors_carry_the_response_path_and_location() {
        let failing = FunctionResolver::new(|_: ResolveParams| async {
            Err(FieldError::Message("no greeting today".to_string()))
        });
        let schema = test_utils::test_schema_builder()
            .resolve_field("Query", "greeting", failing)
            .unwrap()
            .build()
            .unwrap();

        let json = executor(schema)
            .execute(QueryRequest::new("{ greeting }"))
            .await
            .to_json();
        let error = &json["errors"][0];
        assert_eq!(error["message"], json!("no greeting today"));
        assert_eq!(error["path"], json!(["greeting"]));
        assert_eq!(error["locations"][0]["line"], json!(1));
        assert_eq!(error["extensions"]["code"], json!(codes::RESOLVER_ERROR));
        assert_eq!(json["data"], json!({ "greeting": null }));
    }
}

mod mutations {
    use super::*;

    fn recording_schema(order: Arc<Mutex<Vec<String>>>) -> Schema {
        let rename = FunctionResolver::new(move |params: ResolveParams| {
            let order = order.clone();
            async move {
                let id: String = params.arguments.try_get("id").unwrap().unwrap_or_default();
                if id == "1" {
                    tokio::time::sleep(Duration::from_millis(20)).await;
                }
                order.lock().unwrap().push(id.clone());
                Ok(json!({ "id": id }))
            }
        });
        test_utils::test_schema_builder()
            .resolve_field("Mutation", "rename", rename)
            .unwrap()
            .build()
            .unwrap()
    }

    const MUTATION: &str = r#"mutation {
        a: rename(id: "1", name: "x") { id }
        b: rename(id: "2", name: "y") { id }
    }"#;

    #[tokio::test]
    async fn top_level_mutation_fields_run_in_document_order() {
        let order = Arc::new(Mutex::new(vec![]));
        let response = executor(recording_schema(order.clone()))
            .execute(QueryRequest::new(MUTATION))
            .await;

        assert!(response.messages().is_empty());
        assert_eq!(response.data(), Some(&json!({ "a": { "id": "1" }, "b": { "id": "2" } })));
        assert_eq!(*order.lock().unwrap(), vec!["1", "2"]);
    }

    #[tokio::test]
    async fn concurrent_mutations_when_serial_execution_is_disabled() {
        let order = Arc::new(Mutex::new(vec![]));
        let options = ExecutionOptions {
            serial_mutations: false,
            ..ExecutionOptions::default()
        };
        let response = executor(recording_schema(order.clone()))
            .with_options(options)
            .execute(QueryRequest::new(MUTATION))
            .await;

        assert_eq!(response.data(), Some(&json!({ "a": { "id": "1" }, "b": { "id": "2" } })));
        assert_eq!(*order.lock().unwrap(), vec!["2", "1"]);
    }
}
