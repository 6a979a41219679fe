use crate::document::DocumentPart;
use crate::document::DocumentPartId;
use crate::document::QueryDocument;
use crate::messages::GraphMessageCollection;
use crate::messages::codes;
use crate::schema::Schema;
use crate::variables::InputValueResolver;
use crate::variables::InputVariable;
use crate::variables::ResolvableValue;
use indexmap::IndexMap;
use serde_json::Value;

/// The variable values bound for one execution of an operation, coerced to
/// the types their operation declares.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedVariableCollection {
    variables: IndexMap<String, InputVariable>,
}
impl ResolvedVariableCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Coerces the runtime `values` supplied for the operation `operation`.
    ///
    /// Problems are recorded in `messages` (one per offending variable); the
    /// variables that could be coerced are still returned.
    pub fn from_json(
        schema: &Schema,
        document: &QueryDocument,
        operation: DocumentPartId,
        values: &Value,
        messages: &GraphMessageCollection,
    ) -> Self {
        let mut resolved = Self::new();
        let Some(op_node) = document.get(operation) else {
            return resolved;
        };
        let DocumentPart::Operation(op) = op_node.part() else {
            return resolved;
        };

        let supplied = match values {
            Value::Object(map) => Some(map),
            Value::Null => None,
            _ => {
                messages.critical(
                    codes::INVALID_VARIABLE_VALUE,
                    "Variables must be supplied as a JSON object",
                    op_node.origin(),
                );
                return resolved;
            },
        };

        let resolver = InputValueResolver::new(schema);
        for (name, var_id) in op.variables() {
            let var_node = document.part(*var_id);
            let DocumentPart::Variable(var) = var_node.part() else {
                continue;
            };
            let expected = var.type_expression();

            let value = match supplied.and_then(|map| map.get(name.as_str())) {
                Some(json) => resolver.coerce(ResolvableValue::Json(json), expected),
                None => match var.default_value().and_then(|id| document.supplied_value(id)) {
                    Some(default_value) => resolver.coerce(ResolvableValue::Supplied(default_value), expected),
                    None if expected.is_non_null() => {
                        messages.critical(
                            codes::INVALID_VARIABLE_VALUE,
                            format!("The required variable `${name}` of type `{expected}` was not supplied"),
                            var_node.origin(),
                        );
                        continue;
                    },
                    None => continue,
                },
            };

            match value {
                Ok(value) => resolved.insert(InputVariable::from_json(name.as_str(), &value)),
                Err(err) => messages.critical(
                    codes::INVALID_VARIABLE_VALUE,
                    format!("Invalid value for variable `${name}`: {err}"),
                    var_node.origin(),
                ),
            }
        }
        resolved
    }

    /// Adds (or replaces) the variable named `variable.name()`.
    pub fn insert(&mut self, variable: InputVariable) {
        self.variables.insert(variable.name().to_string(), variable);
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &InputVariable)> {
        self.variables.iter().map(|(name, var)| (name.as_str(), var))
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `None` when no value is bound to the variable `name`. A
    /// variable explicitly supplied as `null` is bound (to null).
    pub fn try_get_variable(&self, name: &str) -> Option<&InputVariable> {
        self.variables.get(name)
    }
}
