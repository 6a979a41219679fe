use crate::execution::FieldInvocationContext;
use crate::execution::GraphDataItem;
use crate::loc::SourceOrigin;
use crate::types::GraphField;
use std::sync::Arc;

/// A request to resolve one field for one or more source items.
#[derive(Clone, Debug)]
pub struct GraphFieldRequest {
    children: Vec<Arc<FieldInvocationContext>>,
    field: Arc<GraphField>,
    invocation: Arc<FieldInvocationContext>,
    items: Vec<Arc<GraphDataItem>>,
    origin: SourceOrigin,
}
impl GraphFieldRequest {
    pub fn new(
        invocation: Arc<FieldInvocationContext>,
        field: Arc<GraphField>,
        items: Vec<Arc<GraphDataItem>>,
    ) -> Self {
        let origin = match items.first() {
            Some(item) => item.origin().clone(),
            None => invocation.origin().clone(),
        };
        Self {
            children: invocation.children().to_vec(),
            field,
            invocation,
            items,
            origin,
        }
    }

    /// Replaces the child selections, used when several selections of the
    /// same response key are merged.
    pub fn with_children(mut self, children: Vec<Arc<FieldInvocationContext>>) -> Self {
        self.children = children;
        self
    }

    pub(crate) fn push_item(&mut self, item: Arc<GraphDataItem>) {
        self.items.push(item);
    }

    pub fn children(&self) -> &[Arc<FieldInvocationContext>] {
        &self.children
    }

    /// The field being resolved: the concrete type's declaration of the
    /// invoked field.
    pub fn field(&self) -> &Arc<GraphField> {
        &self.field
    }

    pub fn invocation(&self) -> &Arc<FieldInvocationContext> {
        &self.invocation
    }

    /// The items receiving the field's value, one per source item.
    pub fn items(&self) -> &[Arc<GraphDataItem>] {
        &self.items
    }

    /// The response location of the (first) item being resolved.
    pub fn origin(&self) -> &SourceOrigin {
        &self.origin
    }
}
