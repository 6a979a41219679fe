use crate::document::DocumentPart;
use crate::document::OperationKind;
use crate::document::QueryDocumentBuilder;
use crate::execution::DocumentDirectiveProcessor;
use crate::execution::ExecutionOptions;
use crate::execution::ExecutionPlanGenerator;
use crate::execution::GraphDataItem;
use crate::execution::QueryExecutionContext;
use crate::execution::QueryRequest;
use crate::execution::QueryResponse;
use crate::logging::ExecutionEventLogger;
use crate::logging::FieldTimingMetrics;
use crate::logging::QueryMetrics;
use crate::messages::GraphMessageCollection;
use crate::middleware::FieldExecutionPipeline;
use crate::middleware::execute_child_fields;
use crate::schema::Schema;
use crate::security::FieldAuthorizer;
use crate::security::PolicyFieldAuthorizer;
use crate::variables::ResolvedVariableCollection;
use serde_json::Map;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

type MetricsFactory = dyn Fn() -> Arc<dyn QueryMetrics> + Send + Sync;

/// Executes query requests against a [Schema].
///
/// Each request is parsed, built into a [QueryDocument](crate::document::QueryDocument)
/// and validated, then the selected operation is planned and its fields
/// executed through the [FieldExecutionPipeline].
#[derive(Clone)]
pub struct GraphQueryExecutor {
    authorizer: Arc<dyn FieldAuthorizer>,
    logger: Option<Arc<dyn ExecutionEventLogger>>,
    metrics: Option<Arc<MetricsFactory>>,
    options: ExecutionOptions,
    pipeline: Arc<FieldExecutionPipeline>,
    schema: Arc<Schema>,
}
impl GraphQueryExecutor {
    pub fn new(schema: Arc<Schema>) -> Self {
        Self {
            authorizer: Arc::new(PolicyFieldAuthorizer),
            logger: None,
            metrics: None,
            options: ExecutionOptions::default(),
            pipeline: Arc::new(FieldExecutionPipeline::default()),
            schema,
        }
    }

    pub fn with_authorizer(mut self, authorizer: impl FieldAuthorizer + 'static) -> Self {
        self.authorizer = Arc::new(authorizer);
        self
    }

    pub fn with_logger(mut self, logger: impl ExecutionEventLogger + 'static) -> Self {
        self.logger = Some(Arc::new(logger));
        self
    }

    /// Measures every request with a fresh [QueryMetrics] produced by
    /// `factory`. Without one, requests are measured with
    /// [FieldTimingMetrics] only when `expose_metrics` is enabled.
    pub fn with_metrics<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Arc<dyn QueryMetrics> + Send + Sync + 'static,
    {
        self.metrics = Some(Arc::new(factory));
        self
    }

    pub fn with_options(mut self, options: ExecutionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_pipeline(mut self, pipeline: FieldExecutionPipeline) -> Self {
        self.pipeline = Arc::new(pipeline);
        self
    }

    pub fn options(&self) -> &ExecutionOptions {
        &self.options
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    pub async fn execute(&self, request: QueryRequest) -> QueryResponse {
        self.execute_with_cancellation(request, &CancellationToken::new()).await
    }

    pub async fn execute_with_cancellation(
        &self,
        request: QueryRequest,
        cancel: &CancellationToken,
    ) -> QueryResponse {
        if let Some(logger) = &self.logger {
            logger.request_received(&request);
        }
        let response = self.run(&request, cancel).await;
        if let Some(logger) = &self.logger {
            logger.request_completed(&response);
        }
        response
    }

    async fn run(&self, request: &QueryRequest, cancel: &CancellationToken) -> QueryResponse {
        let messages = GraphMessageCollection::new();
        let document = QueryDocumentBuilder::new(&self.schema)
            .with_max_depth(self.options.max_query_depth)
            .build_from_str(request.query());
        messages.add_range(document.messages());
        if !messages.is_successful() {
            return self.error_response(&messages);
        }
        let document = Arc::new(document);

        let generator = ExecutionPlanGenerator::new(&self.schema, &document);
        let operation = match generator.select_operation(request.operation_name()) {
            Ok(operation) => operation,
            Err(message) => {
                messages.add(message);
                return self.error_response(&messages);
            },
        };
        let operation_kind = match document.part(operation).part() {
            DocumentPart::Operation(op) => op.kind(),
            _ => OperationKind::Query,
        };

        let variables = ResolvedVariableCollection::from_json(
            &self.schema,
            &document,
            operation,
            request.variables().unwrap_or(&Value::Null),
            &messages,
        );
        if !messages.is_successful() {
            return self.error_response(&messages);
        }

        let metrics = match &self.metrics {
            Some(factory) => Some(factory()),
            None if self.options.expose_metrics => {
                Some(Arc::new(FieldTimingMetrics::new()) as Arc<dyn QueryMetrics>)
            },
            None => None,
        };
        let query = QueryExecutionContext::new(self.schema.clone(), document.clone(), operation_kind)
            .with_authorizer(self.authorizer.clone())
            .with_logger(self.logger.clone())
            .with_messages(messages.clone())
            .with_metrics(metrics.clone())
            .with_options(self.options.clone())
            .with_pipeline(self.pipeline.clone())
            .with_user(request.user().cloned())
            .with_variables(variables);

        if !DocumentDirectiveProcessor::new(&query).process(operation, cancel).await {
            tracing::debug!("Query execution cancelled by a document directive");
            return QueryResponse::new(Some(Value::Null), &messages)
                .with_exposed_exceptions(self.options.expose_exceptions);
        }

        let plan = generator.create_plan(operation);
        if let Some(logger) = &self.logger {
            logger.query_plan_generated(&document, &plan);
        }
        messages.add_range(plan.messages());
        if !plan.is_valid() {
            return self.error_response(&messages);
        }

        let root_value = match request.root_value() {
            Some(Value::Null) | None => Value::Object(Map::new()),
            Some(root_value) => root_value.clone(),
        };
        let root = Arc::new(GraphDataItem::root(root_value, plan.root_type_name()));
        let serial = operation_kind == OperationKind::Mutation && self.options.serial_mutations;

        if let Some(metrics) = &metrics {
            metrics.start();
        }
        execute_child_fields(
            &query,
            std::slice::from_ref(&root),
            plan.fields(),
            serial,
            &messages,
            cancel,
        )
        .await;
        if let Some(metrics) = &metrics {
            metrics.end();
        }

        let mut response = QueryResponse::new(Some(root_data(&root)), &messages)
            .with_exposed_exceptions(self.options.expose_exceptions);
        if let Some(tracing) = metrics.and_then(|metrics| metrics.to_extension()) {
            response = response.with_extension("tracing", tracing);
        }
        response
    }

    fn error_response(&self, messages: &GraphMessageCollection) -> QueryResponse {
        QueryResponse::from_errors(messages).with_exposed_exceptions(self.options.expose_exceptions)
    }
}
impl fmt::Debug for GraphQueryExecutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphQueryExecutor")
            .field("authorizer", &self.authorizer)
            .field("logger", &self.logger)
            .field("options", &self.options)
            .field("pipeline", &self.pipeline)
            .finish_non_exhaustive()
    }
}

/// The response data: `null` as a whole when a non-null top-level field has
/// no value.
fn root_data(root: &GraphDataItem) -> Value {
    let missing_required = root.child_fields().iter().any(|(_, child)| {
        child
            .field()
            .is_some_and(|field| field.type_expression().is_non_null())
            && child.to_response_value().is_null()
    });
    if missing_required {
        return Value::Null;
    }
    root.to_response_value()
}
