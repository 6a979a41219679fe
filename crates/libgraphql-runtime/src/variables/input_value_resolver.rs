use crate::document::ComplexValueRef;
use crate::document::ScalarLiteral;
use crate::document::SuppliedValue;
use crate::document::SuppliedValueRef;
use crate::schema::Schema;
use crate::types::GraphType;
use crate::types::InputObjectType;
use crate::types::ScalarKind;
use crate::types::TypeExpression;
use crate::variables::InputCoercionError;
use crate::variables::InputFieldSetVariable;
use crate::variables::InputVariable;
use crate::variables::ResolvedVariableCollection;
use serde_json::Map;
use serde_json::Value;

type Result<T> = std::result::Result<T, InputCoercionError>;

/// An input value from any of the places one can come from: a literal in the
/// query document, a runtime variable, or raw JSON.
#[derive(Clone, Copy, Debug)]
pub enum ResolvableValue<'a> {
    Json(&'a Value),
    Supplied(SuppliedValueRef<'a>),
    Variable(&'a InputVariable),
}

/// Something that exposes named input fields.
///
/// Lookup of an absent field returns `None`; it never fails.
pub trait ResolvableFieldSet {
    fn try_get_field(&self, field_name: &str) -> Option<ResolvableValue<'_>>;
    fn field_names(&self) -> Vec<&str>;
}

impl ResolvableFieldSet for ComplexValueRef<'_> {
    fn try_get_field(&self, field_name: &str) -> Option<ResolvableValue<'_>> {
        ComplexValueRef::try_get_field(self, field_name).map(ResolvableValue::Supplied)
    }

    fn field_names(&self) -> Vec<&str> {
        self.value.arguments().iter().map(|(name, _)| name).collect()
    }
}

impl ResolvableFieldSet for InputFieldSetVariable {
    fn try_get_field(&self, field_name: &str) -> Option<ResolvableValue<'_>> {
        InputFieldSetVariable::try_get_field(self, field_name).map(ResolvableValue::Variable)
    }

    fn field_names(&self) -> Vec<&str> {
        self.fields().map(|(name, _)| name).collect()
    }
}

impl ResolvableFieldSet for Map<String, Value> {
    fn try_get_field(&self, field_name: &str) -> Option<ResolvableValue<'_>> {
        self.get(field_name).map(ResolvableValue::Json)
    }

    fn field_names(&self) -> Vec<&str> {
        self.keys().map(|key| key.as_str()).collect()
    }
}

/// The field set behind an input-object-shaped [ResolvableValue].
pub enum ResolvableFields<'a> {
    Complex(ComplexValueRef<'a>),
    FieldSet(&'a InputFieldSetVariable),
    Json(&'a Map<String, Value>),
}
impl ResolvableFields<'_> {
    fn as_field_set(&self) -> &dyn ResolvableFieldSet {
        match self {
            ResolvableFields::Complex(complex) => complex,
            ResolvableFields::FieldSet(field_set) => *field_set,
            ResolvableFields::Json(map) => *map,
        }
    }
}

enum LeafValue {
    /// A list or object literal where a leaf value was expected.
    Composite(String),
    EnumLiteral(String),
    Literal(Value),
    Runtime(Value),
}

impl<'a> ResolvableValue<'a> {
    pub fn is_null(&self) -> bool {
        match self {
            ResolvableValue::Json(value) => value.is_null(),
            ResolvableValue::Supplied(value) => value.is_null(),
            ResolvableValue::Variable(variable) => variable.is_null(),
        }
    }

    pub fn list_items(&self) -> Option<Vec<ResolvableValue<'a>>> {
        match *self {
            ResolvableValue::Json(Value::Array(items)) => {
                Some(items.iter().map(ResolvableValue::Json).collect())
            },
            ResolvableValue::Supplied(value) => value
                .list_items()
                .map(|items| items.map(ResolvableValue::Supplied).collect()),
            ResolvableValue::Variable(InputVariable::List(list)) => {
                Some(list.items().iter().map(ResolvableValue::Variable).collect())
            },
            _ => None,
        }
    }

    pub fn fields(&self) -> Option<ResolvableFields<'a>> {
        match *self {
            ResolvableValue::Json(Value::Object(map)) => Some(ResolvableFields::Json(map)),
            ResolvableValue::Supplied(value) => value.as_complex().map(ResolvableFields::Complex),
            ResolvableValue::Variable(InputVariable::FieldSet(field_set)) => {
                Some(ResolvableFields::FieldSet(field_set))
            },
            _ => None,
        }
    }

    fn leaf(&self) -> LeafValue {
        match self {
            ResolvableValue::Json(value) => LeafValue::Runtime((*value).clone()),
            ResolvableValue::Variable(variable) => LeafValue::Runtime(variable.to_json()),
            ResolvableValue::Supplied(value) => match value.value() {
                SuppliedValue::Enum(name) => LeafValue::EnumLiteral(name.to_string()),
                SuppliedValue::Scalar(ScalarLiteral::Boolean(b)) => LeafValue::Literal(Value::Bool(*b)),
                SuppliedValue::Scalar(ScalarLiteral::Float(f)) => LeafValue::Literal(
                    serde_json::Number::from_f64(*f).map(Value::Number).unwrap_or(Value::Null),
                ),
                SuppliedValue::Scalar(ScalarLiteral::Int(i)) => LeafValue::Literal(Value::from(*i)),
                SuppliedValue::Scalar(ScalarLiteral::String(s)) => LeafValue::Literal(Value::String(s.clone())),
                SuppliedValue::Complex(_) | SuppliedValue::List(_) => {
                    LeafValue::Composite(describe_supplied(value))
                },
                SuppliedValue::Null | SuppliedValue::Variable(_) => LeafValue::Literal(Value::Null),
            },
        }
    }

    fn describe(&self) -> String {
        match self {
            ResolvableValue::Json(value) => value.to_string(),
            ResolvableValue::Variable(variable) => variable.to_json().to_string(),
            ResolvableValue::Supplied(value) => describe_supplied(value),
        }
    }
}

fn describe_supplied(value: &SuppliedValueRef<'_>) -> String {
    match value.value() {
        SuppliedValue::Complex(_) => "{...}".to_string(),
        SuppliedValue::Enum(name) => name.to_string(),
        SuppliedValue::List(_) => "[...]".to_string(),
        SuppliedValue::Null => "null".to_string(),
        SuppliedValue::Scalar(ScalarLiteral::Boolean(b)) => b.to_string(),
        SuppliedValue::Scalar(ScalarLiteral::Float(f)) => f.to_string(),
        SuppliedValue::Scalar(ScalarLiteral::Int(i)) => i.to_string(),
        SuppliedValue::Scalar(ScalarLiteral::String(s)) => format!("\"{s}\""),
        SuppliedValue::Variable(name) => format!("${name}"),
    }
}

/// Coerces input values to the JSON representation expected by resolvers,
/// following the input coercion rules of the GraphQL specification.
pub struct InputValueResolver<'a> {
    schema: &'a Schema,
    variables: Option<&'a ResolvedVariableCollection>,
}
impl<'a> InputValueResolver<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            schema,
            variables: None,
        }
    }

    pub fn with_variables(mut self, variables: &'a ResolvedVariableCollection) -> Self {
        self.variables = Some(variables);
        self
    }

    /// Substitutes variable references with their runtime values. Returns
    /// `None` for a reference to a variable that has no value.
    fn dereference<'v>(&self, value: ResolvableValue<'v>) -> Option<ResolvableValue<'v>>
    where
        'a: 'v,
    {
        match value {
            ResolvableValue::Supplied(supplied) => match supplied.value() {
                SuppliedValue::Variable(name) => self
                    .variables
                    .and_then(|vars| vars.try_get_variable(name))
                    .map(ResolvableValue::Variable),
                _ => Some(value),
            },
            _ => Some(value),
        }
    }

    pub fn coerce(&self, value: ResolvableValue<'_>, expected: &TypeExpression) -> Result<Value> {
        let Some(value) = self.dereference(value) else {
            return self.coerce_null(expected);
        };
        if value.is_null() {
            return self.coerce_null(expected);
        }

        if let Some(item_type) = expected.list_item_type() {
            return match value.list_items() {
                Some(items) => items
                    .into_iter()
                    .map(|item| self.coerce(item, &item_type))
                    .collect::<Result<Vec<_>>>()
                    .map(Value::Array),
                // A single value is accepted where a list is expected.
                None => Ok(Value::Array(vec![self.coerce(value, &item_type)?])),
            };
        }

        let type_name = expected.type_name();
        match self.schema.type_by_name(type_name) {
            Some(GraphType::InputObject(input_type)) => match value.fields() {
                Some(fields) => self.coerce_input_object(fields.as_field_set(), input_type),
                None => Err(InputCoercionError::InvalidValue {
                    expected: expected.to_string(),
                    received: value.describe(),
                }),
            },
            Some(GraphType::Enum(enum_type)) => {
                let name = match value.leaf() {
                    LeafValue::EnumLiteral(name) => name,
                    LeafValue::Runtime(Value::String(name)) => name,
                    _ => return Err(InputCoercionError::InvalidValue {
                        expected: expected.to_string(),
                        received: value.describe(),
                    }),
                };
                if enum_type.has_value(name.as_str()) {
                    Ok(Value::String(name))
                } else {
                    Err(InputCoercionError::InvalidEnumValue {
                        enum_name: enum_type.name().to_string(),
                        value: name,
                    })
                }
            },
            Some(GraphType::Scalar(scalar)) => coerce_scalar(scalar.kind(), value, expected),
            _ => Err(InputCoercionError::NotAnInputType {
                type_name: type_name.to_string(),
            }),
        }
    }

    fn coerce_null(&self, expected: &TypeExpression) -> Result<Value> {
        if expected.is_non_null() {
            Err(InputCoercionError::NullValueNotAllowed {
                expected: expected.to_string(),
            })
        } else {
            Ok(Value::Null)
        }
    }

    /// Coerces each declared field of `input_type`: supplied fields are
    /// coerced, absent fields take their default (or are omitted when they
    /// have none).
    pub fn coerce_input_object(
        &self,
        fields: &dyn ResolvableFieldSet,
        input_type: &InputObjectType,
    ) -> Result<Value> {
        for field_name in fields.field_names() {
            if input_type.field(field_name).is_none() {
                return Err(InputCoercionError::UnknownInputField {
                    type_name: input_type.name().to_string(),
                    field_name: field_name.to_string(),
                });
            }
        }

        let mut coerced = Map::new();
        for (field_name, field_def) in input_type.fields() {
            let supplied = fields
                .try_get_field(field_name)
                .and_then(|value| self.dereference(value));
            match (supplied, field_def.default_value()) {
                (Some(value), _) => {
                    coerced.insert(field_name.to_string(), self.coerce(value, field_def.type_expression())?);
                },
                (None, Some(default_value)) => {
                    coerced.insert(field_name.to_string(), default_value.clone());
                },
                (None, None) if field_def.type_expression().is_non_null() => {
                    return Err(InputCoercionError::MissingRequiredField {
                        type_name: input_type.name().to_string(),
                        field_name: field_name.to_string(),
                    });
                },
                (None, None) => (),
            }
        }
        Ok(Value::Object(coerced))
    }
}

fn coerce_scalar(
    kind: ScalarKind,
    value: ResolvableValue<'_>,
    expected: &TypeExpression,
) -> Result<Value> {
    let invalid = || InputCoercionError::InvalidValue {
        expected: expected.to_string(),
        received: value.describe(),
    };
    let json = match value.leaf() {
        LeafValue::Composite(_) | LeafValue::EnumLiteral(_) if kind != ScalarKind::Custom => {
            return Err(invalid());
        },
        LeafValue::Composite(description) | LeafValue::EnumLiteral(description) => {
            Value::String(description)
        },
        LeafValue::Literal(json) | LeafValue::Runtime(json) => json,
    };
    match kind {
        ScalarKind::Boolean if json.is_boolean() => Ok(json),
        ScalarKind::Custom => Ok(json),
        ScalarKind::Float if json.is_number() => Ok(json),
        ScalarKind::Id if json.is_string() => Ok(json),
        ScalarKind::Id if json.is_i64() || json.is_u64() => Ok(Value::String(json.to_string())),
        ScalarKind::Int if json.as_i64().is_some_and(|i| i32::try_from(i).is_ok()) => Ok(json),
        ScalarKind::String if json.is_string() => Ok(json),
        _ => Err(invalid()),
    }
}
