use crate::execution::FieldResolutionContext;
use crate::resolvers::FieldResolver;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

/// Resolves the `__typename` meta field to the concrete type of the source
/// item.
#[derive(Clone, Copy, Debug, Default)]
pub struct TypeNameResolver;

#[async_trait::async_trait]
impl FieldResolver for TypeNameResolver {
    async fn resolve(&self, context: &mut FieldResolutionContext, _cancel: &CancellationToken) {
        let type_name = context
            .request()
            .items()
            .first()
            .and_then(|item| item.source_type_name().map(|name| name.to_string()));
        context.set_result(type_name.map(Value::String).unwrap_or(Value::Null));
    }
}
