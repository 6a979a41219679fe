use crate::execution::ExecutionArgumentCollection;
use crate::execution::GraphFieldRequest;
use crate::messages::GraphMessageCollection;
use crate::security::UserPrincipal;
use crate::types::FieldResolutionMode;
use serde_json::Value;
use std::sync::Arc;

/// What a [FieldResolver](crate::resolvers::FieldResolver) is given for one
/// invocation, and where it leaves its outcome.
#[derive(Debug)]
pub struct FieldResolutionContext {
    arguments: ExecutionArgumentCollection,
    cancelled: bool,
    messages: GraphMessageCollection,
    request: GraphFieldRequest,
    result: Option<Value>,
    user: Option<Arc<UserPrincipal>>,
}
impl FieldResolutionContext {
    pub fn new(
        request: GraphFieldRequest,
        arguments: ExecutionArgumentCollection,
        user: Option<Arc<UserPrincipal>>,
    ) -> Self {
        Self {
            arguments,
            cancelled: false,
            messages: GraphMessageCollection::new(),
            request,
            result: None,
            user,
        }
    }

    pub fn arguments(&self) -> &ExecutionArgumentCollection {
        &self.arguments
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn messages(&self) -> &GraphMessageCollection {
        &self.messages
    }

    pub fn request(&self) -> &GraphFieldRequest {
        &self.request
    }

    pub fn result(&self) -> Option<&Value> {
        self.result.as_ref()
    }

    pub fn set_result(&mut self, value: Value) {
        self.result = Some(value);
    }

    /// The source data of the item being resolved. `None` for batch fields,
    /// whose resolvers read every item from the request.
    pub fn source_data(&self) -> Option<&Value> {
        match self.request.field().mode() {
            FieldResolutionMode::PerSourceItem => {
                self.request.items().first().map(|item| item.source_data())
            },
            FieldResolutionMode::Batch => None,
        }
    }

    pub(crate) fn take_result(&mut self) -> Option<Value> {
        self.result.take()
    }

    pub fn user(&self) -> Option<&Arc<UserPrincipal>> {
        self.user.as_ref()
    }
}
