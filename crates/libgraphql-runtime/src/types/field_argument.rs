use crate::types::TypeExpression;
use serde_json::Value;

/// An argument (or input object field) declared by the schema.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldArgument {
    pub(crate) default_value: Option<Value>,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) type_expression: TypeExpression,
}
impl FieldArgument {
    pub fn new(name: impl Into<String>, type_expression: TypeExpression) -> Self {
        Self {
            default_value: None,
            description: None,
            name: name.into(),
            type_expression,
        }
    }

    pub fn with_default_value(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// `true` when the argument is non-null and declares no default value.
    pub fn is_required(&self) -> bool {
        self.type_expression.is_non_null() && self.default_value.is_none()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_expression(&self) -> &TypeExpression {
        &self.type_expression
    }
}
