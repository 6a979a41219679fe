use crate::document::DocumentPart;
use crate::document::DocumentPartId;
use crate::document::InputArgumentCollection;
use crate::document::QueryDocument;
use crate::document::SuppliedValue;
use crate::execution::ExecutionArgumentCollection;
use crate::schema::Schema;
use crate::types::FieldArgument;
use crate::variables::InputCoercionError;
use crate::variables::InputValueResolver;
use crate::variables::ResolvableValue;
use crate::variables::ResolvedVariableCollection;
use indexmap::IndexMap;
use serde_json::Value;

#[derive(Clone, Debug, PartialEq)]
pub enum InvocationArgument {
    /// Coerced while the execution plan was built.
    Resolved(Value),
    /// References a variable and is coerced once variables are known.
    Deferred {
        argument: FieldArgument,
        value: DocumentPartId,
    },
}

/// The arguments of a field or directive invocation, prepared ahead of
/// execution.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InvocationArgumentCollection {
    arguments: IndexMap<String, InvocationArgument>,
}
impl InvocationArgumentCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pairs every `declared` argument with the value `supplied` for it in
    /// the document. Arguments supplied as literals are coerced immediately;
    /// absent arguments take their declared default (or are left out).
    pub fn prepare(
        schema: &Schema,
        document: &QueryDocument,
        declared: &IndexMap<String, FieldArgument>,
        supplied: &InputArgumentCollection,
    ) -> Result<Self, InputCoercionError> {
        let resolver = InputValueResolver::new(schema);
        let mut arguments = IndexMap::new();
        for (name, argument) in declared {
            let value_ref = supplied
                .get(name)
                .and_then(|arg_id| match document.part(arg_id).part() {
                    DocumentPart::InputArgument(arg) => arg.value(),
                    _ => None,
                })
                .and_then(|value_id| document.supplied_value(value_id));

            let prepared = match value_ref {
                Some(value) if value.contains_variables() => InvocationArgument::Deferred {
                    argument: argument.clone(),
                    value: value.id(),
                },
                Some(value) => InvocationArgument::Resolved(
                    resolver
                        .coerce(ResolvableValue::Supplied(value), argument.type_expression())
                        .map_err(|err| invalid_argument(name, err))?,
                ),
                None => match argument.default_value() {
                    Some(default_value) => InvocationArgument::Resolved(default_value.clone()),
                    None => continue,
                },
            };
            arguments.insert(name.clone(), prepared);
        }
        Ok(Self { arguments })
    }

    pub fn get(&self, name: &str) -> Option<&InvocationArgument> {
        self.arguments.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    /// Resolves the deferred arguments against `variables`.
    ///
    /// An argument given as a lone variable that has no value behaves as if
    /// the argument was not supplied at all.
    pub fn merge(
        &self,
        schema: &Schema,
        document: &QueryDocument,
        variables: &ResolvedVariableCollection,
    ) -> Result<ExecutionArgumentCollection, InputCoercionError> {
        let resolver = InputValueResolver::new(schema).with_variables(variables);
        let mut merged = ExecutionArgumentCollection::new();
        for (name, prepared) in &self.arguments {
            match prepared {
                InvocationArgument::Resolved(value) => merged.insert(name.as_str(), value.clone()),
                InvocationArgument::Deferred { argument, value } => {
                    let Some(value_ref) = document.supplied_value(*value) else { continue };
                    let unbound_variable = match value_ref.value() {
                        SuppliedValue::Variable(var_name) => variables.try_get_variable(var_name).is_none(),
                        _ => false,
                    };
                    if unbound_variable {
                        match argument.default_value() {
                            Some(default_value) => merged.insert(name.as_str(), default_value.clone()),
                            None if argument.type_expression().is_non_null() => {
                                return Err(invalid_argument(name, InputCoercionError::NullValueNotAllowed {
                                    expected: argument.type_expression().to_string(),
                                }));
                            },
                            None => (),
                        }
                        continue;
                    }
                    let coerced = resolver
                        .coerce(ResolvableValue::Supplied(value_ref), argument.type_expression())
                        .map_err(|err| invalid_argument(name, err))?;
                    merged.insert(name.as_str(), coerced);
                },
            }
        }
        Ok(merged)
    }
}

fn invalid_argument(name: &str, error: InputCoercionError) -> InputCoercionError {
    InputCoercionError::InvalidArgument {
        argument: name.to_string(),
        error: Box::new(error),
    }
}
