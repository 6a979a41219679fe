use crate::loc::SourceLocation;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error(
        "The resolver registered for the `@{directive_name}` directive is not \
        an instance of `{expected_type}`"
    )]
    DirectiveTypeMismatch {
        directive_name: String,
        expected_type: &'static str,
    },

    #[error("Multiple directives were defined with the name `@{directive_name}`")]
    DuplicateDirectiveDefinition {
        directive_name: String,
    },

    #[error("The `{type_name}` type defines the field `{field_name}` more than once")]
    DuplicateFieldNameDefinition {
        type_name: String,
        field_name: String,
        location: SourceLocation,
    },

    #[error("Multiple GraphQL types with the name `{type_name}` were defined")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: SourceLocation,
        def2: SourceLocation,
    },

    #[error("The union `{union_name}` includes `{member_name}`, which is not an object type")]
    InvalidUnionMember {
        union_name: String,
        member_name: String,
    },

    #[error("No query operation type was defined")]
    NoQueryOperationTypeDefined,

    #[error("Error parsing schema document: {err}")]
    ParseError {
        file: PathBuf,
        err: String,
    },

    #[error("The {operation} root operation type `{type_name}` must be an object type")]
    RootOperationTypeNotAnObject {
        operation: &'static str,
        type_name: String,
    },

    #[error("Failed to read schema file `{}`: {err}", .path.display())]
    SchemaFileReadError {
        path: PathBuf,
        err: String,
    },

    #[error("Type extensions are not supported (extending `{type_name}`)")]
    TypeExtensionNotSupported {
        type_name: String,
        location: SourceLocation,
    },

    #[error("`{referencing}` refers to the undefined type `{type_name}`")]
    UndefinedTypeReference {
        referencing: String,
        type_name: String,
    },

    #[error("The `{type_name}` type has no field named `{field_name}`")]
    UnknownField {
        type_name: String,
        field_name: String,
    },

    #[error("No object or interface type named `{type_name}` is defined")]
    UnknownObjectType {
        type_name: String,
    },

    #[error(
        "The `@{directive_name}` directive is declared by the schema document \
        but no implementation was registered for it"
    )]
    UnregisteredDirective {
        directive_name: String,
        location: SourceLocation,
    },
}
