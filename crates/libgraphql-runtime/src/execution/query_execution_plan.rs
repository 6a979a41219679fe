use crate::document::DocumentPartId;
use crate::document::OperationKind;
use crate::execution::FieldInvocationContext;
use crate::messages::GraphMessageCollection;
use std::sync::Arc;

/// The fields one operation of a document executes.
#[derive(Debug)]
pub struct QueryExecutionPlan {
    pub(crate) fields: Vec<Arc<FieldInvocationContext>>,
    pub(crate) messages: GraphMessageCollection,
    pub(crate) operation: DocumentPartId,
    pub(crate) operation_kind: OperationKind,
    pub(crate) operation_name: Option<String>,
    pub(crate) root_type_name: String,
}
impl QueryExecutionPlan {
    /// The top-level selections, in document order.
    pub fn fields(&self) -> &[Arc<FieldInvocationContext>] {
        &self.fields
    }

    pub fn is_valid(&self) -> bool {
        self.messages.is_successful()
    }

    pub fn messages(&self) -> &GraphMessageCollection {
        &self.messages
    }

    pub fn operation(&self) -> DocumentPartId {
        self.operation
    }

    pub fn operation_kind(&self) -> OperationKind {
        self.operation_kind
    }

    pub fn operation_name(&self) -> Option<&str> {
        self.operation_name.as_deref()
    }

    pub fn root_type_name(&self) -> &str {
        self.root_type_name.as_str()
    }
}
