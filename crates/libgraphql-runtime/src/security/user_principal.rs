use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct UserClaim {
    #[serde(rename = "type")]
    pub claim_type: String,
    pub value: String,
}

/// The user a request is executed on behalf of.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UserPrincipal {
    pub authenticated: bool,
    pub claims: Vec<UserClaim>,
    pub name: Option<String>,
    pub roles: Vec<String>,
}
impl UserPrincipal {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(name: impl Into<String>) -> Self {
        Self {
            authenticated: true,
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.roles.push(role.into());
        self
    }

    pub fn with_claim(mut self, claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        self.claims.push(UserClaim {
            claim_type: claim_type.into(),
            value: value.into(),
        });
        self
    }

    pub fn has_claim(&self, claim_type: &str, value: &str) -> bool {
        self.claims
            .iter()
            .any(|claim| claim.claim_type == claim_type && claim.value == value)
    }

    pub fn is_in_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}
