use crate::execution::BatchResultProcessor;
use crate::execution::FieldCompletionRules;
use crate::execution::FieldResolutionContext;
use crate::execution::FieldValidationContext;
use crate::execution::FieldValidationRules;
use crate::execution::GraphExecutionError;
use crate::execution::GraphFieldExecutionContext;
use crate::messages::codes;
use crate::middleware::FieldExecutionMiddleware;
use crate::middleware::Next;
use crate::types::FieldResolutionMode;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

/// Invokes the field's resolver and assigns what it produced to the
/// request's items.
///
/// The assigned results are checked before the rest of the pipeline runs,
/// and checked again once it returned (by which point child fields have
/// executed).
#[derive(Clone, Copy, Debug, Default)]
pub struct InvokeFieldResolverMiddleware;

#[async_trait::async_trait]
impl FieldExecutionMiddleware for InvokeFieldResolverMiddleware {
    async fn invoke(
        &self,
        context: &mut GraphFieldExecutionContext<'_>,
        next: Next<'_>,
        cancel: &CancellationToken,
    ) -> Result<(), GraphExecutionError> {
        let field = context.request().field().clone();
        let validation_contexts: Vec<FieldValidationContext> = context
            .request()
            .items()
            .iter()
            .map(|item| FieldValidationContext::new(field.clone(), item.clone(), context.messages().clone()))
            .collect();

        if cancel.is_cancelled() || context.request().items().iter().any(|item| item.is_cancelled()) {
            context.cancel();
        }

        if context.is_valid() {
            let query = context.query();
            let arguments = context
                .request()
                .invocation()
                .arguments()
                .merge(query.schema(), query.document(), query.variables());
            match arguments {
                Ok(arguments) => {
                    let mut resolution = FieldResolutionContext::new(
                        context.request().clone(),
                        arguments,
                        query.user().cloned(),
                    );
                    if let Some(logger) = query.logger() {
                        logger.field_resolution_started(&resolution);
                    }
                    field.resolver().resolve(&mut resolution, cancel).await;
                    if let Some(logger) = query.logger() {
                        logger.field_resolution_completed(&resolution);
                    }
                    context.messages().add_range(resolution.messages());

                    if resolution.is_cancelled() {
                        context.cancel();
                    } else {
                        match resolution.take_result() {
                            Some(result) => assign_results(context, result)?,
                            // The failure the resolver reported explains the
                            // missing value.
                            None if !resolution.messages().is_successful() => context.fail(),
                            // A resolver that sets nothing produced null.
                            None => assign_results(context, Value::Null)?,
                        }
                    }
                },
                Err(err) => {
                    context.messages().critical(
                        codes::INVALID_ARGUMENT,
                        format!("Invalid arguments for `{}`: {err}", field.route()),
                        context.request().origin().clone(),
                    );
                    context.fail();
                },
            }
        }

        for validation in &validation_contexts {
            FieldCompletionRules::check(validation);
        }
        next.run(context, cancel).await?;
        for validation in &validation_contexts {
            FieldValidationRules::check(validation);
        }
        Ok(())
    }
}

/// Assigns a resolver's result to the items of the request, according to
/// the field's resolution mode, and records the result and the items it
/// resolved on `context`.
pub(crate) fn assign_results(
    context: &mut GraphFieldExecutionContext<'_>,
    result: Value,
) -> Result<(), GraphExecutionError> {
    let request = context.request();
    let field = request.field();
    let resolved = match field.mode() {
        FieldResolutionMode::PerSourceItem => match request.items() {
            [item] if item.assign_result(result.clone()) => vec![item.clone()],
            [_] => vec![],
            items => {
                return Err(GraphExecutionError::InvalidResolutionMode {
                    route: field.route().clone(),
                    origin: request.origin().clone(),
                    item_count: items.len(),
                });
            },
        },
        FieldResolutionMode::Batch => {
            let batch_key = field
                .batch_key()
                .unwrap_or(context.query().options().default_batch_key.as_str());
            let processor = BatchResultProcessor::new(
                field.clone(),
                batch_key,
                request.items().to_vec(),
                request.origin().clone(),
            );
            let resolved = processor.resolve(Some(&result));
            context.messages().add_range(processor.messages());
            resolved
        },
    };
    context.set_resolution(result, resolved);
    Ok(())
}
