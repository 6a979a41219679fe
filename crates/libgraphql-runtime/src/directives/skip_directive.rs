use crate::directives::DirectiveResolutionContext;
use crate::directives::DirectiveResolver;
use crate::types::Directive;
use crate::types::DirectiveInvocationPhase;
use crate::types::DirectiveLocation;
use crate::types::FieldArgument;
use crate::types::TypeExpression;
use std::any::Any;
use tokio_util::sync::CancellationToken;

/// `@skip(if: Boolean!)`: excludes the target when `if` is true.
#[derive(Clone, Copy, Debug, Default)]
pub struct SkipDirective;
impl SkipDirective {
    pub const NAME: &'static str = "skip";

    pub fn directive() -> Directive {
        Directive::new(
            Self::NAME,
            DirectiveLocation::FIELD
                | DirectiveLocation::FRAGMENT_SPREAD
                | DirectiveLocation::INLINE_FRAGMENT,
            DirectiveInvocationPhase::QUERY_DOCUMENT,
            SkipDirective,
        )
        .with_argument(FieldArgument::new("if", TypeExpression::named("Boolean").non_null()))
    }
}

#[async_trait::async_trait]
impl DirectiveResolver for SkipDirective {
    fn as_any(&self) -> &dyn Any {
        self
    }

    async fn resolve(&self, context: &mut DirectiveResolutionContext<'_>, _cancel: &CancellationToken) {
        let skip = context.arguments().get("if").and_then(|v| v.as_bool()).unwrap_or(false);
        // Never re-includes a part another directive excluded.
        if skip {
            context.set_target_included(false);
        }
    }
}
