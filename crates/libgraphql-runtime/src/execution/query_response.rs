use crate::messages::GraphMessage;
use crate::messages::GraphMessageCollection;
use serde::Serialize;
use serde::ser::SerializeMap;
use serde_json::Map;
use serde_json::Value;

/// The outcome of executing a [QueryRequest](crate::execution::QueryRequest).
///
/// Serializes to the conventional GraphQL response shape: `data`, then
/// `errors` (when there are any), then `extensions` (when there are any).
#[derive(Clone, Debug)]
pub struct QueryResponse {
    data: Option<Value>,
    expose_exceptions: bool,
    extensions: Map<String, Value>,
    messages: Vec<GraphMessage>,
}
impl QueryResponse {
    pub fn new(data: Option<Value>, messages: &GraphMessageCollection) -> Self {
        Self {
            data,
            expose_exceptions: false,
            extensions: Map::new(),
            messages: messages.to_vec(),
        }
    }

    /// A response for a request that failed before execution began.
    pub fn from_errors(messages: &GraphMessageCollection) -> Self {
        Self::new(None, messages)
    }

    pub fn with_exposed_exceptions(mut self, expose_exceptions: bool) -> Self {
        self.expose_exceptions = expose_exceptions;
        self
    }

    pub fn with_extension(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extensions.insert(key.into(), value);
        self
    }

    /// `None` when execution never started; `Some(Value::Null)` when it did
    /// but a non-null top-level field failed.
    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    pub fn extensions(&self) -> &Map<String, Value> {
        &self.extensions
    }

    pub fn is_successful(&self) -> bool {
        self.messages.iter().all(|message| !message.is_critical())
    }

    pub fn messages(&self) -> &[GraphMessage] {
        &self.messages
    }

    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

struct ResponseError<'a> {
    expose_exception: bool,
    message: &'a GraphMessage,
}
impl Serialize for ResponseError<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let message = self.message;
        let origin = message.origin();
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("message", message.message())?;
        if !origin.location.is_unknown() {
            map.serialize_entry(
                "locations",
                &[serde_json::json!({
                    "line": origin.location.line,
                    "column": origin.location.column,
                })],
            )?;
        }
        if !origin.path.is_empty() {
            map.serialize_entry("path", &origin.path)?;
        }

        let mut extensions = Map::new();
        extensions.insert("code".to_string(), Value::String(message.code().to_string()));
        extensions.insert(
            "severity".to_string(),
            serde_json::to_value(message.severity()).unwrap_or(Value::Null),
        );
        if let Some(exception) = message.exception().filter(|_| self.expose_exception) {
            extensions.insert("exception".to_string(), Value::String(exception.to_string()));
        }
        map.serialize_entry("extensions", &extensions)?;
        map.end()
    }
}

impl Serialize for QueryResponse {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let Some(data) = &self.data {
            map.serialize_entry("data", data)?;
        }
        if !self.messages.is_empty() {
            let errors: Vec<ResponseError<'_>> = self
                .messages
                .iter()
                .map(|message| ResponseError {
                    expose_exception: self.expose_exceptions,
                    message,
                })
                .collect();
            map.serialize_entry("errors", &errors)?;
        }
        if !self.extensions.is_empty() {
            map.serialize_entry("extensions", &self.extensions)?;
        }
        map.end()
    }
}
