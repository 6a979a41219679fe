use crate::document::DocumentPartId;
use crate::document::QueryDocument;
use crate::execution::ExecutionArgumentCollection;
use crate::execution::GraphDataItem;
use crate::loc::SourceOrigin;
use crate::messages::GraphMessageCollection;
use crate::types::Directive;
use crate::types::DirectiveInvocationPhase;
use crate::types::DirectiveLocation;
use std::sync::Arc;

/// What a [DirectiveResolver](crate::directives::DirectiveResolver) is given
/// for one invocation.
pub struct DirectiveResolutionContext<'a> {
    pub(crate) arguments: ExecutionArgumentCollection,
    pub(crate) cancelled: bool,
    pub(crate) directive: &'a Directive,
    pub(crate) document: &'a QueryDocument,
    pub(crate) items: &'a [Arc<GraphDataItem>],
    pub(crate) location: DirectiveLocation,
    pub(crate) messages: GraphMessageCollection,
    pub(crate) origin: &'a SourceOrigin,
    pub(crate) phase: DirectiveInvocationPhase,
    pub(crate) target: DocumentPartId,
}
impl DirectiveResolutionContext<'_> {
    pub fn arguments(&self) -> &ExecutionArgumentCollection {
        &self.arguments
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn directive(&self) -> &Directive {
        self.directive
    }

    pub fn document(&self) -> &QueryDocument {
        self.document
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn location(&self) -> DirectiveLocation {
        self.location
    }

    pub fn messages(&self) -> &GraphMessageCollection {
        &self.messages
    }

    pub fn origin(&self) -> &SourceOrigin {
        self.origin
    }

    pub fn phase(&self) -> DirectiveInvocationPhase {
        self.phase
    }

    /// The data items of the field being executed. Empty for directives run
    /// against the query document.
    pub fn source_items(&self) -> &[Arc<GraphDataItem>] {
        self.items
    }

    /// The document part the directive is applied to.
    pub fn target(&self) -> DocumentPartId {
        self.target
    }

    /// Includes or excludes the target part from the response. Returns
    /// `false` when the target cannot be excluded.
    pub fn set_target_included(&self, included: bool) -> bool {
        self.document.set_included(self.target, included)
    }
}
