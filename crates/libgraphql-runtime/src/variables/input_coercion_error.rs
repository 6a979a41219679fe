use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum InputCoercionError {
    #[error("Invalid value for argument `{argument}`: {error}")]
    InvalidArgument {
        argument: String,
        error: Box<InputCoercionError>,
    },

    #[error("`{value}` is not a value of the enum `{enum_name}`")]
    InvalidEnumValue {
        enum_name: String,
        value: String,
    },

    #[error("Expected a value of type `{expected}` but received `{received}`")]
    InvalidValue {
        expected: String,
        received: String,
    },

    #[error("The required field `{field_name}` of the input type `{type_name}` was not supplied")]
    MissingRequiredField {
        type_name: String,
        field_name: String,
    },

    #[error("`{type_name}` is not an input type")]
    NotAnInputType {
        type_name: String,
    },

    #[error("Expected a non-null value of type `{expected}` but received null")]
    NullValueNotAllowed {
        expected: String,
    },

    #[error("The input type `{type_name}` has no field named `{field_name}`")]
    UnknownInputField {
        type_name: String,
        field_name: String,
    },
}
