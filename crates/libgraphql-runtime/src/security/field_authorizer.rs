use crate::security::FieldSecurityChallengeResult;
use crate::security::GraphFieldSecurityContext;
use std::fmt::Debug;

/// Decides whether the user of a request may access a field.
///
/// Implementations record their decision with
/// [GraphFieldSecurityContext::set_result]. A context left without a result
/// is treated as a failed challenge.
#[async_trait::async_trait]
pub trait FieldAuthorizer: Debug + Send + Sync {
    async fn authorize(&self, context: &mut GraphFieldSecurityContext);
}

/// Checks the user against the field's [FieldSecurityRequirements](crate::security::FieldSecurityRequirements).
#[derive(Clone, Copy, Debug, Default)]
pub struct PolicyFieldAuthorizer;
impl PolicyFieldAuthorizer {
    pub fn challenge(context: &GraphFieldSecurityContext) -> FieldSecurityChallengeResult {
        let requirements = context.requirements();
        if !requirements.require_authenticated() {
            return FieldSecurityChallengeResult::authorized();
        }

        let route = context.field().route();
        let Some(user) = context.user().filter(|user| user.authenticated) else {
            return FieldSecurityChallengeResult::unauthenticated(format!(
                "Access to `{route}` requires an authenticated user",
            ));
        };

        for roles in requirements.required_role_sets() {
            if !roles.iter().any(|role| user.is_in_role(role)) {
                return FieldSecurityChallengeResult::unauthorized(format!(
                    "Access to `{route}` requires one of the roles: {}",
                    roles.join(", "),
                ));
            }
        }
        for (claim_type, value) in requirements.required_claims() {
            if !user.has_claim(claim_type, value) {
                return FieldSecurityChallengeResult::unauthorized(format!(
                    "Access to `{route}` requires the claim `{claim_type}={value}`",
                ));
            }
        }
        FieldSecurityChallengeResult::authorized()
    }
}

#[async_trait::async_trait]
impl FieldAuthorizer for PolicyFieldAuthorizer {
    async fn authorize(&self, context: &mut GraphFieldSecurityContext) {
        let result = Self::challenge(context);
        context.set_result(result);
    }
}
