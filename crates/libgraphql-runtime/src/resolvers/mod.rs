mod field_resolver;
mod function_resolver;
mod property_resolver;
mod type_name_resolver;

pub use field_resolver::FieldResolver;
pub use function_resolver::FieldError;
pub use function_resolver::FunctionResolver;
pub use function_resolver::ResolveParams;
pub use property_resolver::PropertyResolver;
pub use type_name_resolver::TypeNameResolver;
