use crate::document::DocumentPartId;
use crate::execution::InvocationArgumentCollection;
use crate::loc::SourceOrigin;
use crate::types::GraphField;
use std::sync::Arc;

/// One field selection of an execution plan.
#[derive(Debug)]
pub struct FieldInvocationContext {
    pub(crate) arguments: InvocationArgumentCollection,
    pub(crate) children: Vec<Arc<FieldInvocationContext>>,
    pub(crate) directives: Vec<DocumentPartId>,
    pub(crate) field: Arc<GraphField>,
    pub(crate) field_part: DocumentPartId,
    pub(crate) origin: SourceOrigin,
    pub(crate) response_key: String,
    pub(crate) type_condition: Option<String>,
}
impl FieldInvocationContext {
    pub fn arguments(&self) -> &InvocationArgumentCollection {
        &self.arguments
    }

    /// The selections made on this field's value, in document order.
    pub fn children(&self) -> &[Arc<FieldInvocationContext>] {
        &self.children
    }

    /// The directives applied to the field in the document.
    pub fn directives(&self) -> &[DocumentPartId] {
        &self.directives
    }

    /// The field as declared on the type it was selected from. For abstract
    /// types the concrete type's field is used at execution time.
    pub fn field(&self) -> &Arc<GraphField> {
        &self.field
    }

    pub fn field_part(&self) -> DocumentPartId {
        self.field_part
    }

    /// Where the field was selected in the document.
    pub fn origin(&self) -> &SourceOrigin {
        &self.origin
    }

    pub fn response_key(&self) -> &str {
        self.response_key.as_str()
    }

    /// The type a source item must satisfy for this selection to apply, when
    /// the field was selected through a fragment.
    pub fn type_condition(&self) -> Option<&str> {
        self.type_condition.as_deref()
    }
}
