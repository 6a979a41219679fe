mod input_coercion_error;
mod input_value_resolver;
mod input_variable;
mod resolved_variable_collection;

pub use input_coercion_error::InputCoercionError;
pub use input_value_resolver::InputValueResolver;
pub use input_value_resolver::ResolvableFieldSet;
pub use input_value_resolver::ResolvableFields;
pub use input_value_resolver::ResolvableValue;
pub use input_variable::InputFieldSetVariable;
pub use input_variable::InputListVariable;
pub use input_variable::InputSingleValueVariable;
pub use input_variable::InputVariable;
pub use resolved_variable_collection::ResolvedVariableCollection;

#[cfg(test)]
mod tests;
