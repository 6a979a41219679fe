use indexmap::IndexMap;
use serde_json::Value;

/// A runtime variable value bound for one execution of an operation.
#[derive(Clone, Debug, PartialEq)]
pub enum InputVariable {
    FieldSet(InputFieldSetVariable),
    List(InputListVariable),
    Single(InputSingleValueVariable),
}
impl InputVariable {
    /// Builds a variable tree from a JSON value: objects become
    /// [InputFieldSetVariable]s, arrays become [InputListVariable]s, and
    /// everything else is a single value.
    pub fn from_json(name: impl Into<String>, value: &Value) -> Self {
        let name = name.into();
        match value {
            Value::Object(fields) => {
                let mut field_set = InputFieldSetVariable::new(name);
                for (field_name, field_value) in fields {
                    field_set.add_variable(InputVariable::from_json(field_name.as_str(), field_value));
                }
                InputVariable::FieldSet(field_set)
            },
            Value::Array(items) => InputVariable::List(InputListVariable {
                items: items
                    .iter()
                    .enumerate()
                    .map(|(idx, item)| InputVariable::from_json(idx.to_string(), item))
                    .collect(),
                name,
            }),
            _ => InputVariable::Single(InputSingleValueVariable {
                name,
                value: value.clone(),
            }),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, InputVariable::Single(single) if single.value.is_null())
    }

    pub fn name(&self) -> &str {
        match self {
            InputVariable::FieldSet(v) => v.name.as_str(),
            InputVariable::List(v) => v.name.as_str(),
            InputVariable::Single(v) => v.name.as_str(),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            InputVariable::FieldSet(v) => Value::Object(
                v.fields
                    .iter()
                    .map(|(name, field)| (name.to_string(), field.to_json()))
                    .collect(),
            ),
            InputVariable::List(v) => Value::Array(v.items.iter().map(|i| i.to_json()).collect()),
            InputVariable::Single(v) => v.value.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputSingleValueVariable {
    pub(crate) name: String,
    pub(crate) value: Value,
}
impl InputSingleValueVariable {
    pub fn value(&self) -> &Value {
        &self.value
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputListVariable {
    pub(crate) items: Vec<InputVariable>,
    pub(crate) name: String,
}
impl InputListVariable {
    pub fn items(&self) -> &[InputVariable] {
        &self.items
    }
}

/// A variable that supplies an entire input object as a set of named
/// sub-variables.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputFieldSetVariable {
    pub(crate) fields: IndexMap<String, InputVariable>,
    pub(crate) name: String,
}
impl InputFieldSetVariable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            fields: IndexMap::new(),
            name: name.into(),
        }
    }

    /// Adds (or replaces) the sub-variable named `variable.name()`.
    pub fn add_variable(&mut self, variable: InputVariable) {
        self.fields.insert(variable.name().to_string(), variable);
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &InputVariable)> {
        self.fields.iter().map(|(name, v)| (name.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns `None` when no sub-variable named `field_name` exists.
    pub fn try_get_field(&self, field_name: &str) -> Option<&InputVariable> {
        self.fields.get(field_name)
    }
}
