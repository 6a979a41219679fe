mod batch_result_processor;
mod document_directive_processor;
mod execution_argument_collection;
mod execution_options;
mod execution_plan_generator;
mod field_invocation_context;
mod field_resolution_context;
mod field_rules;
mod graph_data_item;
mod graph_execution_error;
mod graph_field_execution_context;
mod graph_field_request;
mod invocation_argument_collection;
mod query_execution_context;
mod query_execution_plan;
mod query_executor;
mod query_request;
mod query_request_error;
mod query_response;

pub use batch_result_processor::BatchResultProcessor;
pub use document_directive_processor::DocumentDirectiveProcessor;
pub use execution_argument_collection::ExecutionArgumentCollection;
pub use execution_options::ExecutionOptions;
pub use execution_plan_generator::ExecutionPlanGenerator;
pub use field_invocation_context::FieldInvocationContext;
pub use field_resolution_context::FieldResolutionContext;
pub use field_rules::FieldCompletionRules;
pub use field_rules::FieldValidationContext;
pub use field_rules::FieldValidationRules;
pub use graph_data_item::DataItemStatus;
pub use graph_data_item::GraphDataItem;
pub use graph_execution_error::GraphExecutionError;
pub use graph_field_execution_context::GraphFieldExecutionContext;
pub use graph_field_request::GraphFieldRequest;
pub use invocation_argument_collection::InvocationArgument;
pub use invocation_argument_collection::InvocationArgumentCollection;
pub use query_execution_context::QueryExecutionContext;
pub use query_execution_plan::QueryExecutionPlan;
pub use query_executor::GraphQueryExecutor;
pub use query_request::QueryRequest;
pub use query_request_error::QueryRequestError;
pub use query_response::QueryResponse;

#[cfg(test)]
mod tests;
