use crate::directives::DirectiveResolutionContext;
use std::any::Any;
use std::fmt::Debug;
use tokio_util::sync::CancellationToken;

/// The behavior of a directive, run at each location the directive is
/// applied during the phases it is registered for.
#[async_trait::async_trait]
pub trait DirectiveResolver: Any + Debug + Send + Sync {
    /// Used to check the resolver against the type its directive was created
    /// for (see [Directive::validate_object](crate::types::Directive::validate_object)).
    fn as_any(&self) -> &dyn Any;

    async fn resolve(&self, context: &mut DirectiveResolutionContext<'_>, cancel: &CancellationToken);
}
