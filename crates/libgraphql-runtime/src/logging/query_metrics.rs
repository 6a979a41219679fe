use crate::execution::GraphFieldExecutionContext;
use serde_json::Value;
use std::fmt::Debug;

/// Collects measurements of a single query execution.
///
/// Every field execution context is bracketed by exactly one
/// `begin_field_resolution` and one `end_field_resolution` call, which may
/// come from concurrently executing sibling fields.
pub trait QueryMetrics: Debug + Send + Sync {
    fn start(&self);

    fn end(&self);

    fn begin_field_resolution(&self, context: &GraphFieldExecutionContext<'_>);

    fn end_field_resolution(&self, context: &GraphFieldExecutionContext<'_>);

    /// The measurements in the form they are attached to a response's
    /// `extensions`, if any.
    fn to_extension(&self) -> Option<Value> {
        None
    }
}
