#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldSecurityChallengeStatus {
    Authorized,
    Failed,
    Unauthenticated,
    Unauthorized,
}

/// The outcome of checking a user against a field's security requirements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSecurityChallengeResult {
    message: Option<String>,
    status: FieldSecurityChallengeStatus,
}
impl FieldSecurityChallengeResult {
    pub fn authorized() -> Self {
        Self {
            message: None,
            status: FieldSecurityChallengeStatus::Authorized,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self::with_status(FieldSecurityChallengeStatus::Failed, message)
    }

    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::with_status(FieldSecurityChallengeStatus::Unauthenticated, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::with_status(FieldSecurityChallengeStatus::Unauthorized, message)
    }

    fn with_status(status: FieldSecurityChallengeStatus, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            status,
        }
    }

    pub fn is_authorized(&self) -> bool {
        self.status == FieldSecurityChallengeStatus::Authorized
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn status(&self) -> FieldSecurityChallengeStatus {
        self.status
    }
}
