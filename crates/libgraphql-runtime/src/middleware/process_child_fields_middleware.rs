use crate::execution::DataItemStatus;
use crate::execution::FieldInvocationContext;
use crate::execution::GraphDataItem;
use crate::execution::GraphExecutionError;
use crate::execution::GraphFieldExecutionContext;
use crate::execution::GraphFieldRequest;
use crate::execution::QueryExecutionContext;
use crate::messages::GraphMessage;
use crate::messages::GraphMessageCollection;
use crate::messages::codes;
use crate::middleware::FieldExecutionMiddleware;
use crate::middleware::Next;
use crate::schema::TYPENAME_FIELD_NAME;
use crate::types::FieldResolutionMode;
use crate::types::GraphField;
use crate::types::SchemaRoute;
use crate::types::TypeExpression;
use futures_util::future::join_all;
use indexmap::IndexMap;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Executes the child selections of a composite field against the values
/// its resolver produced.
///
/// List results are expanded into one item per element first, and each
/// object's concrete type is determined so fragments on abstract types
/// apply correctly.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessChildFieldsMiddleware;

#[async_trait::async_trait]
impl FieldExecutionMiddleware for ProcessChildFieldsMiddleware {
    async fn invoke(
        &self,
        context: &mut GraphFieldExecutionContext<'_>,
        next: Next<'_>,
        cancel: &CancellationToken,
    ) -> Result<(), GraphExecutionError> {
        let field = context.request().field().clone();
        if context.is_cancelled() || field.is_leaf() || context.request().children().is_empty() {
            return next.run(context, cancel).await;
        }

        let query = context.query();
        let declared_type = field
            .resolver()
            .object_type()
            .unwrap_or(field.type_expression().type_name())
            .to_string();
        let mut parents = vec![];
        for item in context.request().items() {
            expand_item(
                query,
                item,
                field.type_expression(),
                declared_type.as_str(),
                context.messages(),
                &mut parents,
            );
        }

        execute_child_fields(
            query,
            &parents,
            context.request().children(),
            false,
            context.messages(),
            cancel,
        )
        .await;
        next.run(context, cancel).await
    }
}

/// Collects the objects `item` resolved to: the item itself, or for list
/// types every (nested) element.
fn expand_item(
    query: &QueryExecutionContext,
    item: &Arc<GraphDataItem>,
    expected: &TypeExpression,
    declared_type: &str,
    messages: &GraphMessageCollection,
    parents: &mut Vec<Arc<GraphDataItem>>,
) {
    if item.status() != DataItemStatus::Resolved {
        return;
    }
    let result = match item.result() {
        Some(Value::Null) | None => return,
        Some(result) => result,
    };

    if let Some(item_type) = expected.list_item_type() {
        let Value::Array(values) = result else {
            return;
        };
        let elements: Vec<Arc<GraphDataItem>> = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                let origin = item.origin().with_path(item.origin().path.with_index(index));
                let element = Arc::new(GraphDataItem::new(None, origin, Value::Null, None));
                element.assign_result(value);
                element
            })
            .collect();
        item.set_list_items(elements.clone());
        for element in &elements {
            expand_item(query, element, &item_type, declared_type, messages, parents);
        }
        return;
    }

    match query.schema().resolve_concrete_type(declared_type, &result) {
        Some(concrete_type) => {
            item.set_result_type(concrete_type);
            parents.push(item.clone());
        },
        None => {
            messages.critical(
                codes::UNRESOLVED_CONCRETE_TYPE,
                format!("Unable to determine the object type of a `{declared_type}` value"),
                item.origin().clone(),
            );
            item.fail();
        },
    }
}

/// Executes `children` against every object in `parents`.
///
/// Selections with the same response key are merged per parent. Fields
/// resolved per source item get a request per parent; batch fields get one
/// request for all parents. Requests run concurrently unless `serial` is
/// set, in which case they run one after another in document order.
pub(crate) async fn execute_child_fields(
    query: &QueryExecutionContext,
    parents: &[Arc<GraphDataItem>],
    children: &[Arc<FieldInvocationContext>],
    serial: bool,
    messages: &GraphMessageCollection,
    cancel: &CancellationToken,
) {
    let schema = query.schema();
    let mut requests: Vec<GraphFieldRequest> = vec![];
    let mut batches: HashMap<(String, SchemaRoute), usize> = HashMap::new();

    for parent in parents {
        if parent.status() != DataItemStatus::Resolved {
            continue;
        }
        let source = match parent.result() {
            Some(Value::Null) | None => continue,
            Some(source) => source,
        };
        parent.begin_child_fields();
        let Some(type_name) = parent.result_type() else { continue };

        let mut selections: IndexMap<&str, (&Arc<FieldInvocationContext>, Vec<Arc<FieldInvocationContext>>)> =
            IndexMap::new();
        for child in children {
            let applies = child
                .type_condition()
                .is_none_or(|condition| schema.type_satisfies(type_name.as_str(), condition));
            if !applies {
                continue;
            }
            match selections.get_mut(child.response_key()) {
                Some((_, merged)) => merged.extend(child.children().iter().cloned()),
                None => {
                    selections.insert(child.response_key(), (child, child.children().to_vec()));
                },
            }
        }

        for (response_key, (invocation, merged_children)) in selections {
            let field = effective_field(query, type_name.as_str(), invocation);
            let origin = invocation.origin().with_path(parent.origin().path.with_field(response_key));
            let item = Arc::new(GraphDataItem::new(
                Some(field.clone()),
                origin,
                source.clone(),
                Some(type_name.clone()),
            ));
            parent.add_child_field(response_key, item.clone());

            match field.mode() {
                FieldResolutionMode::PerSourceItem => requests.push(
                    GraphFieldRequest::new(invocation.clone(), field, vec![item])
                        .with_children(merged_children),
                ),
                FieldResolutionMode::Batch => {
                    let batch = (response_key.to_string(), field.route().clone());
                    match batches.get(&batch) {
                        Some(index) => requests[*index].push_item(item),
                        None => {
                            batches.insert(batch, requests.len());
                            requests.push(
                                GraphFieldRequest::new(invocation.clone(), field, vec![item])
                                    .with_children(merged_children),
                            );
                        },
                    }
                },
            }
        }
    }

    if serial {
        for request in requests {
            execute_request(query, request, messages, cancel).await;
        }
    } else {
        join_all(
            requests
                .into_iter()
                .map(|request| execute_request(query, request, messages, cancel)),
        )
        .await;
    }
}

/// The declaration of the invoked field on the parent's concrete type.
fn effective_field(
    query: &QueryExecutionContext,
    type_name: &str,
    invocation: &FieldInvocationContext,
) -> Arc<GraphField> {
    let declared = invocation.field();
    if declared.name() == TYPENAME_FIELD_NAME || declared.parent_type_name() == type_name {
        return declared.clone();
    }
    query
        .schema()
        .object_type(type_name)
        .and_then(|object_type| object_type.field(declared.name()))
        .unwrap_or(declared)
        .clone()
}

async fn execute_request(
    query: &QueryExecutionContext,
    request: GraphFieldRequest,
    messages: &GraphMessageCollection,
    cancel: &CancellationToken,
) {
    let mut context = GraphFieldExecutionContext::new(query, request);
    if let Some(metrics) = query.metrics() {
        metrics.begin_field_resolution(&context);
    }
    let outcome = query.pipeline().execute(&mut context, cancel).await;
    if let Some(metrics) = query.metrics() {
        metrics.end_field_resolution(&context);
    }

    if let Err(err) = outcome {
        tracing::error!(field = %err.route(), "Field execution failed: {err}");
        context.messages().add(
            GraphMessage::critical(
                codes::EXECUTION_ERROR,
                format!("An internal error occurred while executing `{}`", err.route()),
                err.origin().clone(),
            )
            .with_exception(&err),
        );
        context.fail();
    }
    messages.add_range(context.messages());
}
