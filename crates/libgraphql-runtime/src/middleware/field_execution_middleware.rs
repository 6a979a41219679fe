use crate::execution::GraphExecutionError;
use crate::execution::GraphFieldExecutionContext;
use std::fmt::Debug;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

type Result<T> = std::result::Result<T, GraphExecutionError>;

/// One stage of a [FieldExecutionPipeline](crate::middleware::FieldExecutionPipeline).
///
/// A component does its work and calls [Next::run] to continue with the
/// rest of the pipeline, or returns without doing so to stop the field's
/// execution at this stage.
#[async_trait::async_trait]
pub trait FieldExecutionMiddleware: Debug + Send + Sync {
    async fn invoke(
        &self,
        context: &mut GraphFieldExecutionContext<'_>,
        next: Next<'_>,
        cancel: &CancellationToken,
    ) -> Result<()>;
}

/// The components of a pipeline that follow the one currently running.
#[derive(Clone, Copy)]
pub struct Next<'a> {
    remaining: &'a [Arc<dyn FieldExecutionMiddleware>],
}
impl<'a> Next<'a> {
    pub(crate) fn new(remaining: &'a [Arc<dyn FieldExecutionMiddleware>]) -> Self {
        Self { remaining }
    }

    pub async fn run(
        self,
        context: &mut GraphFieldExecutionContext<'_>,
        cancel: &CancellationToken,
    ) -> Result<()> {
        match self.remaining.split_first() {
            Some((component, remaining)) => {
                component.invoke(context, Next::new(remaining), cancel).await
            },
            None => Ok(()),
        }
    }
}
