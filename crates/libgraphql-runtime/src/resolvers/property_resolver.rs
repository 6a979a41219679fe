use crate::execution::FieldResolutionContext;
use crate::resolvers::FieldResolver;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

/// Reads a property of the same name from the source item.
///
/// Absent properties (and non-object source items) resolve to `null`.
#[derive(Clone, Debug)]
pub struct PropertyResolver {
    property: String,
}
impl PropertyResolver {
    pub fn new(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
        }
    }

    pub fn property(&self) -> &str {
        self.property.as_str()
    }
}

#[async_trait::async_trait]
impl FieldResolver for PropertyResolver {
    async fn resolve(&self, context: &mut FieldResolutionContext, _cancel: &CancellationToken) {
        let value = context
            .source_data()
            .and_then(|source| source.get(self.property.as_str()))
            .cloned()
            .unwrap_or(Value::Null);
        context.set_result(value);
    }
}
