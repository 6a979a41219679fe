use crate::execution::FieldResolutionContext;
use std::fmt::Debug;
use tokio_util::sync::CancellationToken;

/// Produces the value(s) of a field.
///
/// A resolver reports its outcome through the context: it assigns a result
/// with [FieldResolutionContext::set_result], records expected failures as
/// messages, and calls [FieldResolutionContext::cancel] to abandon the
/// field. Resolvers of batch fields receive every source item at once and
/// return a single result keyed by each item's batch key.
#[async_trait::async_trait]
pub trait FieldResolver: Debug + Send + Sync {
    /// The schema type this resolver produces, when it differs from the
    /// declared type of the field it is attached to.
    fn object_type(&self) -> Option<&str> {
        None
    }

    async fn resolve(&self, context: &mut FieldResolutionContext, cancel: &CancellationToken);
}
