use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::Map;
use serde_json::Value;

/// The fully coerced arguments a field or directive is invoked with.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExecutionArgumentCollection {
    arguments: IndexMap<String, Value>,
    source_data: Option<Value>,
}
impl ExecutionArgumentCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.arguments.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.arguments.get(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.arguments.insert(name.into(), value);
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.arguments.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    /// The source data bound for the invocation: the source item's value for
    /// fields resolved per item, an array of every item's value for batch
    /// fields.
    pub fn source_data(&self) -> Option<&Value> {
        self.source_data.as_ref()
    }

    /// Deserializes the argument `name`. `Ok(None)` when the argument was not
    /// supplied.
    pub fn try_get<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, serde_json::Error> {
        self.arguments
            .get(name)
            .map(|value| serde_json::from_value(value.clone()))
            .transpose()
    }

    pub fn with_source_data(mut self, source_data: Value) -> Self {
        self.source_data = Some(source_data);
        self
    }

    pub fn to_json(&self) -> Value {
        Value::Object(
            self.arguments
                .iter()
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect::<Map<String, Value>>(),
        )
    }
}
