use crate::execution::QueryRequestError;
use crate::security::UserPrincipal;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

type Result<T> = std::result::Result<T, QueryRequestError>;

/// One request to execute a query document.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    #[serde(default)]
    operation_name: Option<String>,
    #[serde(default)]
    query: String,
    #[serde(skip)]
    root_value: Option<Value>,
    #[serde(skip)]
    user: Option<Arc<UserPrincipal>>,
    #[serde(default)]
    variables: Option<Value>,
}
impl QueryRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Reads a request in the usual `{"query", "operationName", "variables"}`
    /// JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        let request: QueryRequest = serde_json::from_str(json)?;
        if request.query.trim().is_empty() {
            return Err(QueryRequestError::MissingQuery);
        }
        Ok(request)
    }

    pub fn with_operation_name(mut self, operation_name: impl Into<String>) -> Self {
        self.operation_name = Some(operation_name.into());
        self
    }

    /// The value the top-level fields of the operation resolve against.
    pub fn with_root_value(mut self, root_value: Value) -> Self {
        self.root_value = Some(root_value);
        self
    }

    pub fn with_user(mut self, user: UserPrincipal) -> Self {
        self.user = Some(Arc::new(user));
        self
    }

    pub fn with_variables(mut self, variables: Value) -> Self {
        self.variables = Some(variables);
        self
    }

    pub fn operation_name(&self) -> Option<&str> {
        self.operation_name.as_deref()
    }

    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    pub fn root_value(&self) -> Option<&Value> {
        self.root_value.as_ref()
    }

    pub fn user(&self) -> Option<&Arc<UserPrincipal>> {
        self.user.as_ref()
    }

    pub fn variables(&self) -> Option<&Value> {
        self.variables.as_ref()
    }
}
