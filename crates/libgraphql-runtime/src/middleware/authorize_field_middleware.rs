use crate::execution::GraphExecutionError;
use crate::execution::GraphFieldExecutionContext;
use crate::messages::codes;
use crate::middleware::FieldExecutionMiddleware;
use crate::middleware::Next;
use crate::security::FieldSecurityChallengeResult;
use crate::security::FieldSecurityRequirements;
use crate::security::GraphFieldSecurityContext;
use crate::security::GraphFieldSecurityRequest;
use tokio_util::sync::CancellationToken;

/// Challenges the user of the request against the field's security groups.
///
/// A field the user may not access is failed with an
/// [ACCESS_DENIED](codes::ACCESS_DENIED) message and the rest of the
/// pipeline (including its resolver) never runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct AuthorizeFieldMiddleware;

#[async_trait::async_trait]
impl FieldExecutionMiddleware for AuthorizeFieldMiddleware {
    async fn invoke(
        &self,
        context: &mut GraphFieldExecutionContext<'_>,
        next: Next<'_>,
        cancel: &CancellationToken,
    ) -> Result<(), GraphExecutionError> {
        let field = context.request().field().clone();
        let requirements = FieldSecurityRequirements::from_groups(field.security_groups());
        if requirements.is_empty() {
            return next.run(context, cancel).await;
        }

        let query = context.query();
        let origin = context.request().origin().clone();
        let mut security = GraphFieldSecurityContext::new(
            GraphFieldSecurityRequest::new(field, origin.clone()),
            requirements,
            query.user().cloned(),
        );
        if let Some(logger) = query.logger() {
            logger.field_authorization_started(&security);
        }
        query.authorizer().authorize(&mut security).await;
        if let Some(logger) = query.logger() {
            logger.field_authorization_completed(&security);
        }

        let result = match security.result() {
            Some(result) => result.clone(),
            None => FieldSecurityChallengeResult::failed("The field could not be authorized"),
        };
        if !result.is_authorized() {
            tracing::debug!(
                field = %security.field().route(),
                status = ?result.status(),
                "Field access denied",
            );
            context.messages().critical(
                codes::ACCESS_DENIED,
                result.message().unwrap_or("Access denied"),
                origin,
            );
            context.fail();
            return Ok(());
        }
        next.run(context, cancel).await
    }
}
