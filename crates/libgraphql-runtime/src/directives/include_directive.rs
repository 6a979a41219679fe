use crate::directives::DirectiveResolutionContext;
use crate::directives::DirectiveResolver;
use crate::types::Directive;
use crate::types::DirectiveInvocationPhase;
use crate::types::DirectiveLocation;
use crate::types::FieldArgument;
use crate::types::TypeExpression;
use std::any::Any;
use tokio_util::sync::CancellationToken;

/// `@include(if: Boolean!)`: excludes the target when `if` is false.
#[derive(Clone, Copy, Debug, Default)]
pub struct IncludeDirective;
impl IncludeDirective {
    pub const NAME: &'static str = "include";

    pub fn directive() -> Directive {
        Directive::new(
            Self::NAME,
            DirectiveLocation::FIELD
                | DirectiveLocation::FRAGMENT_SPREAD
                | DirectiveLocation::INLINE_FRAGMENT,
            DirectiveInvocationPhase::QUERY_DOCUMENT,
            IncludeDirective,
        )
        .with_argument(FieldArgument::new("if", TypeExpression::named("Boolean").non_null()))
    }
}

#[async_trait::async_trait]
impl DirectiveResolver for IncludeDirective {
    fn as_any(&self) -> &dyn Any {
        self
    }

    async fn resolve(&self, context: &mut DirectiveResolutionContext<'_>, _cancel: &CancellationToken) {
        let include = context.arguments().get("if").and_then(|v| v.as_bool()).unwrap_or(true);
        // Never re-includes a part another directive excluded.
        if !include {
            context.set_target_included(false);
        }
    }
}
