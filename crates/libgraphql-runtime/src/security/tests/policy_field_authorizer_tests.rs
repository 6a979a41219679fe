use crate::loc::SourceOrigin;
use crate::security::FieldAuthorizer;
use crate::security::FieldSecurityChallengeStatus;
use crate::security::FieldSecurityGroup;
use crate::security::FieldSecurityPolicy;
use crate::security::FieldSecurityRequirements;
use crate::security::GraphFieldSecurityContext;
use crate::security::GraphFieldSecurityRequest;
use crate::security::PolicyFieldAuthorizer;
use crate::security::UserPrincipal;
use crate::test_utils;
use std::sync::Arc;

fn context(groups: &[FieldSecurityGroup], user: Option<UserPrincipal>) -> GraphFieldSecurityContext {
    let schema = test_utils::test_schema();
    let field = schema.object_type("Query").unwrap().field("secret").unwrap().clone();
    GraphFieldSecurityContext::new(
        GraphFieldSecurityRequest::new(field, SourceOrigin::default()),
        FieldSecurityRequirements::from_groups(groups),
        user.map(Arc::new),
    )
}

fn status(groups: &[FieldSecurityGroup], user: Option<UserPrincipal>) -> FieldSecurityChallengeStatus {
    PolicyFieldAuthorizer::challenge(&context(groups, user)).status()
}

fn group(policy: FieldSecurityPolicy) -> FieldSecurityGroup {
    FieldSecurityGroup::new().with_policy(policy)
}

#[test]
fn unsecured_fields_are_open() {
    assert!(FieldSecurityRequirements::from_groups(&[]).is_empty());
    assert_eq!(status(&[], None), FieldSecurityChallengeStatus::Authorized);
}

#[test]
fn authentication_is_required() {
    let groups = [group(FieldSecurityPolicy::RequireAuthenticated)];

    assert_eq!(status(&groups, None), FieldSecurityChallengeStatus::Unauthenticated);
    assert_eq!(
        status(&groups, Some(UserPrincipal::anonymous())),
        FieldSecurityChallengeStatus::Unauthenticated,
    );
    assert_eq!(
        status(&groups, Some(UserPrincipal::authenticated("ada"))),
        FieldSecurityChallengeStatus::Authorized,
    );
}

#[test]
fn any_role_of_a_set_satisfies_it() {
    let groups = [group(FieldSecurityPolicy::RequireRole(vec![
        "admin".to_string(),
        "auditor".to_string(),
    ]))];

    assert_eq!(
        status(&groups, Some(UserPrincipal::authenticated("ada").with_role("auditor"))),
        FieldSecurityChallengeStatus::Authorized,
    );

    let result = PolicyFieldAuthorizer::challenge(&context(
        &groups,
        Some(UserPrincipal::authenticated("bob").with_role("guest")),
    ));
    assert_eq!(result.status(), FieldSecurityChallengeStatus::Unauthorized);
    assert!(result.message().is_some_and(|msg| msg.contains("admin, auditor")));
}

#[test]
fn every_group_must_be_satisfied() {
    let groups = [
        group(FieldSecurityPolicy::RequireRole(vec!["staff".to_string()])),
        group(FieldSecurityPolicy::RequireClaim {
            claim_type: "region".to_string(),
            value: "eu".to_string(),
        }),
    ];

    let staff = UserPrincipal::authenticated("ada").with_role("staff");
    assert_eq!(status(&groups, Some(staff.clone())), FieldSecurityChallengeStatus::Unauthorized);
    assert_eq!(
        status(&groups, Some(staff.with_claim("region", "eu"))),
        FieldSecurityChallengeStatus::Authorized,
    );
}

#[test]
fn allow_anonymous_overrides_other_policies() {
    let groups = [
        group(FieldSecurityPolicy::RequireRole(vec!["admin".to_string()])),
        group(FieldSecurityPolicy::AllowAnonymous),
    ];
    assert_eq!(status(&groups, None), FieldSecurityChallengeStatus::Authorized);
}

#[tokio::test]
async fn authorize_records_the_challenge_result() {
    let groups = [group(FieldSecurityPolicy::RequireAuthenticated)];
    let mut context = context(&groups, None);
    assert!(context.result().is_none());

    PolicyFieldAuthorizer.authorize(&mut context).await;
    let result = context.result().unwrap();
    assert!(!result.is_authorized());
    assert_eq!(context.field().name(), "secret");
}
