use crate::loc::SourceOrigin;
use crate::types::GraphField;
use indexmap::IndexMap;
use serde_json::Map;
use serde_json::Value;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataItemStatus {
    Pending,
    Resolved,
    Failed,
    Cancelled,
}

#[derive(Debug, Default)]
enum DataItemChildren {
    #[default]
    None,
    Fields(IndexMap<String, Arc<GraphDataItem>>),
    List(Vec<Arc<GraphDataItem>>),
}

#[derive(Debug)]
struct DataItemState {
    children: DataItemChildren,
    result: Option<Value>,
    result_type: Option<String>,
    status: DataItemStatus,
}

/// One value in the response being assembled: the value of a field for one
/// source item, or one element of a list.
///
/// Items are shared between the contexts that resolve them and the parent
/// they belong to, so their state is behind a lock.
#[derive(Debug)]
pub struct GraphDataItem {
    field: Option<Arc<GraphField>>,
    origin: SourceOrigin,
    source_data: Value,
    source_type_name: Option<String>,
    state: Mutex<DataItemState>,
}
impl GraphDataItem {
    /// A pending item for `field`, resolved against `source_data` (a value
    /// of the object type `source_type_name`).
    pub fn new(
        field: Option<Arc<GraphField>>,
        origin: SourceOrigin,
        source_data: Value,
        source_type_name: Option<String>,
    ) -> Self {
        Self {
            field,
            origin,
            source_data,
            source_type_name,
            state: Mutex::new(DataItemState {
                children: DataItemChildren::None,
                result: None,
                result_type: None,
                status: DataItemStatus::Pending,
            }),
        }
    }

    /// The (already resolved) root of a response.
    pub fn root(root_value: Value, root_type_name: &str) -> Self {
        let item = Self::new(None, SourceOrigin::default(), Value::Null, None);
        item.assign_result(root_value);
        item.set_result_type(root_type_name);
        item
    }

    fn lock(&self) -> MutexGuard<'_, DataItemState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// The field this item holds the value of. `None` for the root and for
    /// list elements.
    pub fn field(&self) -> Option<&Arc<GraphField>> {
        self.field.as_ref()
    }

    pub fn origin(&self) -> &SourceOrigin {
        &self.origin
    }

    pub fn source_data(&self) -> &Value {
        &self.source_data
    }

    pub fn source_type_name(&self) -> Option<&str> {
        self.source_type_name.as_deref()
    }

    pub fn status(&self) -> DataItemStatus {
        self.lock().status
    }

    pub fn is_cancelled(&self) -> bool {
        self.status() == DataItemStatus::Cancelled
    }

    pub fn result(&self) -> Option<Value> {
        self.lock().result.clone()
    }

    /// The concrete object type of the result, once known.
    pub fn result_type(&self) -> Option<String> {
        self.lock().result_type.clone()
    }

    /// Records the value of a pending item. Returns `false` (and changes
    /// nothing) if the item already completed.
    pub fn assign_result(&self, value: Value) -> bool {
        let mut state = self.lock();
        if state.status != DataItemStatus::Pending {
            return false;
        }
        state.result = Some(value);
        state.status = DataItemStatus::Resolved;
        true
    }

    /// Overwrites the result of a resolved item.
    pub fn replace_result(&self, value: Value) {
        let mut state = self.lock();
        if state.status == DataItemStatus::Resolved {
            state.result = Some(value);
        }
    }

    pub fn set_result_type(&self, type_name: impl Into<String>) {
        self.lock().result_type = Some(type_name.into());
    }

    /// Marks the item as failed; its value in the response becomes `null`.
    /// A cancelled item stays cancelled.
    pub fn fail(&self) {
        let mut state = self.lock();
        if state.status != DataItemStatus::Cancelled {
            state.status = DataItemStatus::Failed;
        }
    }

    /// A failed item stays failed.
    pub fn cancel(&self) {
        let mut state = self.lock();
        if state.status != DataItemStatus::Failed {
            state.status = DataItemStatus::Cancelled;
        }
    }

    /// Attaches the item holding the value of a child field.
    pub fn add_child_field(&self, response_key: impl Into<String>, child: Arc<GraphDataItem>) {
        let mut state = self.lock();
        match &mut state.children {
            DataItemChildren::Fields(fields) => {
                fields.insert(response_key.into(), child);
            },
            children => {
                let mut fields = IndexMap::new();
                fields.insert(response_key.into(), child);
                *children = DataItemChildren::Fields(fields);
            },
        }
    }

    /// Marks the item as an object whose response value is made only of
    /// child fields, even if none end up attached.
    pub(crate) fn begin_child_fields(&self) {
        let mut state = self.lock();
        if let DataItemChildren::None = state.children {
            state.children = DataItemChildren::Fields(IndexMap::new());
        }
    }

    pub fn set_list_items(&self, items: Vec<Arc<GraphDataItem>>) {
        self.lock().children = DataItemChildren::List(items);
    }

    pub fn child_fields(&self) -> Vec<(String, Arc<GraphDataItem>)> {
        match &self.lock().children {
            DataItemChildren::Fields(fields) => fields
                .iter()
                .map(|(key, item)| (key.clone(), item.clone()))
                .collect(),
            _ => vec![],
        }
    }

    pub fn list_items(&self) -> Vec<Arc<GraphDataItem>> {
        match &self.lock().children {
            DataItemChildren::List(items) => items.clone(),
            _ => vec![],
        }
    }

    /// The value this item contributes to the response. Items that did not
    /// resolve contribute `null`.
    pub fn to_response_value(&self) -> Value {
        let state = self.lock();
        if state.status != DataItemStatus::Resolved {
            return Value::Null;
        }
        match (&state.result, &state.children) {
            (None, _) | (Some(Value::Null), _) => Value::Null,
            (Some(_), DataItemChildren::Fields(fields)) => Value::Object(
                fields
                    .iter()
                    .map(|(key, child)| (key.clone(), child.to_response_value()))
                    .collect::<Map<String, Value>>(),
            ),
            (Some(_), DataItemChildren::List(items)) => {
                Value::Array(items.iter().map(|item| item.to_response_value()).collect())
            },
            (Some(result), DataItemChildren::None) => result.clone(),
        }
    }
}
