mod field_authorizer;
mod field_security_challenge_result;
mod field_security_context;
mod field_security_policy;
mod user_principal;

pub use field_authorizer::FieldAuthorizer;
pub use field_authorizer::PolicyFieldAuthorizer;
pub use field_security_challenge_result::FieldSecurityChallengeResult;
pub use field_security_challenge_result::FieldSecurityChallengeStatus;
pub use field_security_context::GraphFieldSecurityContext;
pub use field_security_context::GraphFieldSecurityRequest;
pub use field_security_policy::FieldSecurityGroup;
pub use field_security_policy::FieldSecurityPolicy;
pub use field_security_policy::FieldSecurityRequirements;
pub use user_principal::UserClaim;
pub use user_principal::UserPrincipal;

#[cfg(test)]
mod tests;
