use crate::document::QueryDocument;
use crate::execution::FieldResolutionContext;
use crate::execution::QueryExecutionPlan;
use crate::execution::QueryRequest;
use crate::execution::QueryResponse;
use crate::security::GraphFieldSecurityContext;
use std::fmt::Debug;

/// Hooks invoked at the notable points of a query's execution. Every hook
/// defaults to doing nothing.
pub trait ExecutionEventLogger: Debug + Send + Sync {
    fn request_received(&self, _request: &QueryRequest) {}

    fn query_plan_generated(&self, _document: &QueryDocument, _plan: &QueryExecutionPlan) {}

    fn field_authorization_started(&self, _context: &GraphFieldSecurityContext) {}

    fn field_authorization_completed(&self, _context: &GraphFieldSecurityContext) {}

    fn field_resolution_started(&self, _context: &FieldResolutionContext) {}

    fn field_resolution_completed(&self, _context: &FieldResolutionContext) {}

    fn request_completed(&self, _response: &QueryResponse) {}
}

/// Emits each execution event as a `tracing` event.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingEventLogger;

impl ExecutionEventLogger for TracingEventLogger {
    fn request_received(&self, request: &QueryRequest) {
        tracing::debug!(
            operation_name = request.operation_name(),
            query_len = request.query().len(),
            "Query request received",
        );
    }

    fn query_plan_generated(&self, document: &QueryDocument, plan: &QueryExecutionPlan) {
        tracing::debug!(
            operation = plan.operation_name(),
            root_fields = plan.fields().len(),
            max_field_depth = document.max_field_depth(),
            "Query plan generated",
        );
    }

    fn field_authorization_started(&self, context: &GraphFieldSecurityContext) {
        tracing::trace!(field = %context.field().route(), "Field authorization started");
    }

    fn field_authorization_completed(&self, context: &GraphFieldSecurityContext) {
        tracing::trace!(
            field = %context.field().route(),
            authorized = context.result().is_some_and(|result| result.is_authorized()),
            "Field authorization completed",
        );
    }

    fn field_resolution_started(&self, context: &FieldResolutionContext) {
        tracing::trace!(
            field = %context.request().field().route(),
            items = context.request().items().len(),
            "Field resolution started",
        );
    }

    fn field_resolution_completed(&self, context: &FieldResolutionContext) {
        tracing::trace!(
            field = %context.request().field().route(),
            cancelled = context.is_cancelled(),
            messages = context.messages().len(),
            "Field resolution completed",
        );
    }

    fn request_completed(&self, response: &QueryResponse) {
        tracing::debug!(
            has_data = response.data().is_some(),
            messages = response.messages().len(),
            "Query request completed",
        );
    }
}
