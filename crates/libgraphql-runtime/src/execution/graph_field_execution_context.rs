use crate::execution::GraphDataItem;
use crate::execution::GraphFieldRequest;
use crate::execution::QueryExecutionContext;
use crate::messages::GraphMessageCollection;
use serde_json::Value;
use std::sync::Arc;

/// The execution of one [GraphFieldRequest] as it moves through the
/// [FieldExecutionPipeline](crate::middleware::FieldExecutionPipeline).
#[derive(Debug)]
pub struct GraphFieldExecutionContext<'q> {
    cancelled: bool,
    id: u64,
    messages: GraphMessageCollection,
    query: &'q QueryExecutionContext,
    request: GraphFieldRequest,
    resolved_items: Vec<Arc<GraphDataItem>>,
    result: Option<Value>,
}
impl<'q> GraphFieldExecutionContext<'q> {
    pub fn new(query: &'q QueryExecutionContext, request: GraphFieldRequest) -> Self {
        Self {
            cancelled: false,
            id: query.next_context_id(),
            messages: GraphMessageCollection::new(),
            query,
            request,
            resolved_items: vec![],
            result: None,
        }
    }

    /// Abandons the field: no further work is done for it and every item it
    /// was resolving is cancelled.
    pub fn cancel(&mut self) {
        self.cancelled = true;
        for item in self.request.items() {
            item.cancel();
        }
    }

    /// Marks every item of the request as failed.
    pub fn fail(&self) {
        for item in self.request.items() {
            item.fail();
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Whether execution should continue: the context was not cancelled and
    /// no critical message was reported for it.
    pub fn is_valid(&self) -> bool {
        !self.cancelled && self.messages.is_successful()
    }

    /// The messages reported while executing this field.
    pub fn messages(&self) -> &GraphMessageCollection {
        &self.messages
    }

    pub fn query(&self) -> &'q QueryExecutionContext {
        self.query
    }

    pub fn request(&self) -> &GraphFieldRequest {
        &self.request
    }

    /// The items of the request that received a value from the resolver's
    /// result, in request order. Every other item was failed or cancelled.
    pub fn resolved_items(&self) -> &[Arc<GraphDataItem>] {
        &self.resolved_items
    }

    /// What the field's resolver produced, once it ran. For batch fields
    /// this is the whole, unsplit batch result.
    pub fn result(&self) -> Option<&Value> {
        self.result.as_ref()
    }

    pub(crate) fn set_resolution(&mut self, result: Value, resolved_items: Vec<Arc<GraphDataItem>>) {
        self.result = Some(result);
        self.resolved_items = resolved_items;
    }
}
