use crate::execution::GraphDataItem;
use crate::loc::SourceOrigin;
use crate::messages::GraphMessageCollection;
use crate::messages::codes;
use crate::types::GraphField;
use serde_json::Value;
use std::sync::Arc;

/// Splits the single result of a batch resolver back across the items it
/// was invoked for.
///
/// A batch result is an object keyed by the string form of each source
/// item's batch key property. Each item either receives its entry or is
/// failed with a [BATCH_ITEM_UNRESOLVED](codes::BATCH_ITEM_UNRESOLVED)
/// message at its own origin; no item is ever left without one or the
/// other.
#[derive(Debug)]
pub struct BatchResultProcessor {
    batch_key: String,
    field: Arc<GraphField>,
    items: Vec<Arc<GraphDataItem>>,
    messages: GraphMessageCollection,
    origin: SourceOrigin,
}
impl BatchResultProcessor {
    pub fn new(
        field: Arc<GraphField>,
        batch_key: impl Into<String>,
        items: Vec<Arc<GraphDataItem>>,
        origin: SourceOrigin,
    ) -> Self {
        Self {
            batch_key: batch_key.into(),
            field,
            items,
            messages: GraphMessageCollection::new(),
            origin,
        }
    }

    /// Assigns `result` to the items. Returns the items that received a
    /// value, in the order they were given.
    pub fn resolve(&self, result: Option<&Value>) -> Vec<Arc<GraphDataItem>> {
        let route = self.field.route();
        let Some(Value::Object(results)) = result else {
            self.messages.critical(
                codes::INVALID_BATCH_RESULT,
                format!(
                    "The batch resolver of `{route}` must produce an object keyed by `{}`",
                    self.batch_key,
                ),
                self.origin.clone(),
            );
            for item in &self.items {
                self.unresolved(item);
            }
            return vec![];
        };

        let mut resolved = Vec::with_capacity(self.items.len());
        for item in &self.items {
            let value = batch_key_of(item.source_data(), self.batch_key.as_str())
                .and_then(|key| results.get(&key));
            match value {
                Some(value) if item.assign_result(value.clone()) => resolved.push(item.clone()),
                _ => self.unresolved(item),
            }
        }
        tracing::trace!(
            field = %route,
            requested = self.items.len(),
            resolved = resolved.len(),
            "Processed batch result",
        );
        resolved
    }

    fn unresolved(&self, item: &Arc<GraphDataItem>) {
        self.messages.critical(
            codes::BATCH_ITEM_UNRESOLVED,
            format!(
                "The batch resolver of `{}` produced no result for the item at `{}`",
                self.field.route(),
                item.origin().path,
            ),
            item.origin().clone(),
        );
        item.fail();
    }

    pub fn batch_key(&self) -> &str {
        self.batch_key.as_str()
    }

    pub fn items(&self) -> &[Arc<GraphDataItem>] {
        &self.items
    }

    /// The messages produced for items that could not be resolved.
    pub fn messages(&self) -> &GraphMessageCollection {
        &self.messages
    }
}

fn batch_key_of(source: &Value, batch_key: &str) -> Option<String> {
    match source.get(batch_key)? {
        Value::String(key) => Some(key.clone()),
        Value::Number(key) => Some(key.to_string()),
        Value::Bool(key) => Some(key.to_string()),
        _ => None,
    }
}
