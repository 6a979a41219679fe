use crate::loc::SourceOrigin;
use crate::types::SchemaRoute;
use thiserror::Error;

/// A fatal failure of a field's execution.
///
/// These indicate the runtime cannot trust its own execution plan. They
/// abort the field they occur in and are never downgraded to ordinary
/// messages by the code that raises them.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphExecutionError {
    #[error(
        "The field `{route}` is resolved once per source item but was scheduled \
        with {item_count} source items ({origin})"
    )]
    InvalidResolutionMode {
        route: SchemaRoute,
        origin: SourceOrigin,
        item_count: usize,
    },
}
impl GraphExecutionError {
    pub fn origin(&self) -> &SourceOrigin {
        match self {
            GraphExecutionError::InvalidResolutionMode { origin, .. } => origin,
        }
    }

    pub fn route(&self) -> &SchemaRoute {
        match self {
            GraphExecutionError::InvalidResolutionMode { route, .. } => route,
        }
    }
}
