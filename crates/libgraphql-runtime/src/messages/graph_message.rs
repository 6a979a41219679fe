use crate::loc::SourceOrigin;
use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GraphMessageSeverity {
    Trace,
    Debug,
    Information,
    Warning,
    Critical,
}

/// A single diagnostic recorded while building, validating, or executing a
/// query document.
///
/// Messages are never fatal on their own: a [Critical](GraphMessageSeverity::Critical)
/// message marks the thing it was recorded against as failed, but execution of
/// unrelated fields continues.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphMessage {
    pub(super) code: String,
    pub(super) exception: Option<String>,
    pub(super) message: String,
    pub(super) origin: SourceOrigin,
    pub(super) severity: GraphMessageSeverity,
}
impl GraphMessage {
    pub fn new(
        severity: GraphMessageSeverity,
        code: impl Into<String>,
        message: impl Into<String>,
        origin: SourceOrigin,
    ) -> Self {
        Self {
            code: code.into(),
            exception: None,
            message: message.into(),
            origin,
            severity,
        }
    }

    pub fn critical(
        code: impl Into<String>,
        message: impl Into<String>,
        origin: SourceOrigin,
    ) -> Self {
        Self::new(GraphMessageSeverity::Critical, code, message, origin)
    }

    pub fn warning(
        code: impl Into<String>,
        message: impl Into<String>,
        origin: SourceOrigin,
    ) -> Self {
        Self::new(GraphMessageSeverity::Warning, code, message, origin)
    }

    /// Attaches the text of an underlying error. Only surfaced in responses
    /// when `expose_exceptions` is enabled.
    pub fn with_exception(mut self, exception: impl fmt::Display) -> Self {
        self.exception = Some(exception.to_string());
        self
    }

    pub fn code(&self) -> &str {
        self.code.as_str()
    }

    pub fn exception(&self) -> Option<&str> {
        self.exception.as_deref()
    }

    pub fn is_critical(&self) -> bool {
        self.severity == GraphMessageSeverity::Critical
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    pub fn origin(&self) -> &SourceOrigin {
        &self.origin
    }

    pub fn severity(&self) -> GraphMessageSeverity {
        self.severity
    }
}
impl fmt::Display for GraphMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} @ {}", self.code, self.message, self.origin)
    }
}
