use crate::document::OperationKind;
use crate::document::QueryDocument;
use crate::execution::ExecutionOptions;
use crate::logging::ExecutionEventLogger;
use crate::logging::QueryMetrics;
use crate::messages::GraphMessageCollection;
use crate::middleware::FieldExecutionPipeline;
use crate::schema::Schema;
use crate::security::FieldAuthorizer;
use crate::security::PolicyFieldAuthorizer;
use crate::security::UserPrincipal;
use crate::variables::ResolvedVariableCollection;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

/// The state shared by every field of one query execution.
#[derive(Debug)]
pub struct QueryExecutionContext {
    authorizer: Arc<dyn FieldAuthorizer>,
    document: Arc<QueryDocument>,
    logger: Option<Arc<dyn ExecutionEventLogger>>,
    messages: GraphMessageCollection,
    metrics: Option<Arc<dyn QueryMetrics>>,
    next_context_id: AtomicU64,
    operation_kind: OperationKind,
    options: ExecutionOptions,
    pipeline: Arc<FieldExecutionPipeline>,
    schema: Arc<Schema>,
    user: Option<Arc<UserPrincipal>>,
    variables: ResolvedVariableCollection,
}
impl QueryExecutionContext {
    pub fn new(
        schema: Arc<Schema>,
        document: Arc<QueryDocument>,
        operation_kind: OperationKind,
    ) -> Self {
        Self {
            authorizer: Arc::new(PolicyFieldAuthorizer),
            document,
            logger: None,
            messages: GraphMessageCollection::new(),
            metrics: None,
            next_context_id: AtomicU64::new(1),
            operation_kind,
            options: ExecutionOptions::default(),
            pipeline: Arc::new(FieldExecutionPipeline::default()),
            schema,
            user: None,
            variables: ResolvedVariableCollection::new(),
        }
    }

    pub fn with_authorizer(mut self, authorizer: Arc<dyn FieldAuthorizer>) -> Self {
        self.authorizer = authorizer;
        self
    }

    pub fn with_logger(mut self, logger: Option<Arc<dyn ExecutionEventLogger>>) -> Self {
        self.logger = logger;
        self
    }

    /// Messages reported during execution are added to `messages`.
    pub fn with_messages(mut self, messages: GraphMessageCollection) -> Self {
        self.messages = messages;
        self
    }

    pub fn with_metrics(mut self, metrics: Option<Arc<dyn QueryMetrics>>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn with_options(mut self, options: ExecutionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_pipeline(mut self, pipeline: Arc<FieldExecutionPipeline>) -> Self {
        self.pipeline = pipeline;
        self
    }

    pub fn with_user(mut self, user: Option<Arc<UserPrincipal>>) -> Self {
        self.user = user;
        self
    }

    pub fn with_variables(mut self, variables: ResolvedVariableCollection) -> Self {
        self.variables = variables;
        self
    }

    pub fn authorizer(&self) -> &Arc<dyn FieldAuthorizer> {
        &self.authorizer
    }

    pub fn document(&self) -> &QueryDocument {
        &self.document
    }

    pub fn logger(&self) -> Option<&Arc<dyn ExecutionEventLogger>> {
        self.logger.as_ref()
    }

    pub fn messages(&self) -> &GraphMessageCollection {
        &self.messages
    }

    pub fn metrics(&self) -> Option<&Arc<dyn QueryMetrics>> {
        self.metrics.as_ref()
    }

    /// A number unique to this query execution, used to tell field
    /// execution contexts apart.
    pub(crate) fn next_context_id(&self) -> u64 {
        self.next_context_id.fetch_add(1, Ordering::Relaxed)
    }

    pub fn operation_kind(&self) -> OperationKind {
        self.operation_kind
    }

    pub fn options(&self) -> &ExecutionOptions {
        &self.options
    }

    pub fn pipeline(&self) -> &Arc<FieldExecutionPipeline> {
        &self.pipeline
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn user(&self) -> Option<&Arc<UserPrincipal>> {
        self.user.as_ref()
    }

    pub fn variables(&self) -> &ResolvedVariableCollection {
        &self.variables
    }
}
