use crate::loc::SourceOrigin;
use crate::security::FieldSecurityChallengeResult;
use crate::security::FieldSecurityRequirements;
use crate::security::UserPrincipal;
use crate::types::GraphField;
use std::sync::Arc;

/// The field an authorization check is made for.
#[derive(Clone, Debug)]
pub struct GraphFieldSecurityRequest {
    field: Arc<GraphField>,
    origin: SourceOrigin,
}
impl GraphFieldSecurityRequest {
    pub fn new(field: Arc<GraphField>, origin: SourceOrigin) -> Self {
        Self { field, origin }
    }

    pub fn field(&self) -> &Arc<GraphField> {
        &self.field
    }

    pub fn origin(&self) -> &SourceOrigin {
        &self.origin
    }
}

/// State carried through the authorization of one field.
///
/// The field in scope is always the request's field; it cannot be set
/// independently.
#[derive(Debug)]
pub struct GraphFieldSecurityContext {
    request: GraphFieldSecurityRequest,
    requirements: FieldSecurityRequirements,
    result: Option<FieldSecurityChallengeResult>,
    user: Option<Arc<UserPrincipal>>,
}
impl GraphFieldSecurityContext {
    pub fn new(
        request: GraphFieldSecurityRequest,
        requirements: FieldSecurityRequirements,
        user: Option<Arc<UserPrincipal>>,
    ) -> Self {
        Self {
            request,
            requirements,
            result: None,
            user,
        }
    }

    pub fn field(&self) -> &GraphField {
        self.request.field()
    }

    pub fn request(&self) -> &GraphFieldSecurityRequest {
        &self.request
    }

    pub fn requirements(&self) -> &FieldSecurityRequirements {
        &self.requirements
    }

    pub fn result(&self) -> Option<&FieldSecurityChallengeResult> {
        self.result.as_ref()
    }

    pub fn set_result(&mut self, result: FieldSecurityChallengeResult) {
        self.result = Some(result);
    }

    pub fn user(&self) -> Option<&UserPrincipal> {
        self.user.as_deref()
    }
}
