/// A single requirement a user must meet to access a field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldSecurityPolicy {
    /// Grants access to everyone, overriding every other policy that applies
    /// to the field.
    AllowAnonymous,
    RequireAuthenticated,
    /// Satisfied by a user in any one of the roles.
    RequireRole(Vec<String>),
    RequireClaim {
        claim_type: String,
        value: String,
    },
}

/// A set of policies that must all be satisfied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldSecurityGroup {
    policies: Vec<FieldSecurityPolicy>,
}
impl FieldSecurityGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: FieldSecurityPolicy) -> Self {
        self.policies.push(policy);
        self
    }

    pub fn policies(&self) -> &[FieldSecurityPolicy] {
        &self.policies
    }
}

/// The combined requirements of every security group attached to a field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldSecurityRequirements {
    allow_anonymous: bool,
    require_authenticated: bool,
    required_claims: Vec<(String, String)>,
    required_role_sets: Vec<Vec<String>>,
}
impl FieldSecurityRequirements {
    pub fn from_groups(groups: &[FieldSecurityGroup]) -> Self {
        let mut requirements = Self::default();
        for policy in groups.iter().flat_map(|group| group.policies()) {
            match policy {
                FieldSecurityPolicy::AllowAnonymous => requirements.allow_anonymous = true,
                FieldSecurityPolicy::RequireAuthenticated => requirements.require_authenticated = true,
                FieldSecurityPolicy::RequireRole(roles) => {
                    requirements.require_authenticated = true;
                    requirements.required_role_sets.push(roles.clone());
                },
                FieldSecurityPolicy::RequireClaim { claim_type, value } => {
                    requirements.require_authenticated = true;
                    requirements.required_claims.push((claim_type.clone(), value.clone()));
                },
            }
        }
        requirements
    }

    pub fn allow_anonymous(&self) -> bool {
        self.allow_anonymous
    }

    pub fn is_empty(&self) -> bool {
        !self.allow_anonymous && !self.require_authenticated
    }

    pub fn require_authenticated(&self) -> bool {
        self.require_authenticated && !self.allow_anonymous
    }

    pub fn required_claims(&self) -> &[(String, String)] {
        &self.required_claims
    }

    /// Each set must be satisfied by at least one of its roles.
    pub fn required_role_sets(&self) -> &[Vec<String>] {
        &self.required_role_sets
    }
}
