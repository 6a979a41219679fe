use crate::execution::ExecutionArgumentCollection;
use crate::execution::FieldResolutionContext;
use crate::loc::SourceOrigin;
use crate::messages::codes;
use crate::resolvers::FieldResolver;
use crate::security::UserPrincipal;
use futures_util::FutureExt;
use futures_util::future;
use futures_util::future::BoxFuture;
use futures_util::future::Either;
use serde_json::Value;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// What a [FunctionResolver]'s function is called with.
#[derive(Clone, Debug)]
pub struct ResolveParams {
    pub arguments: ExecutionArgumentCollection,
    pub origin: SourceOrigin,
    /// The source data of every item being resolved: exactly one for fields
    /// resolved per source item.
    pub sources: Vec<Value>,
    pub user: Option<Arc<UserPrincipal>>,
}
impl ResolveParams {
    /// The source data of the first (for per-item fields, the only) item.
    pub fn source(&self) -> &Value {
        self.sources.first().unwrap_or(&Value::Null)
    }
}

#[derive(Clone, Debug, thiserror::Error, PartialEq)]
pub enum FieldError {
    #[error("The field resolution was cancelled")]
    Cancelled,

    #[error("{0}")]
    Message(String),
}

type ResolveFn = dyn Fn(ResolveParams) -> BoxFuture<'static, Result<Value, FieldError>> + Send + Sync;

/// A resolver backed by an async function.
#[derive(Clone)]
pub struct FunctionResolver {
    func: Arc<ResolveFn>,
    object_type: Option<String>,
}
impl FunctionResolver {
    pub fn new<F, Fut>(func: F) -> Self
    where
        F: Fn(ResolveParams) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value, FieldError>> + Send + 'static,
    {
        Self {
            func: Arc::new(move |params| func(params).boxed()),
            object_type: None,
        }
    }

    /// See [FieldResolver::object_type].
    pub fn with_object_type(mut self, type_name: impl Into<String>) -> Self {
        self.object_type = Some(type_name.into());
        self
    }
}
impl fmt::Debug for FunctionResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionResolver")
            .field("object_type", &self.object_type)
            .finish_non_exhaustive()
    }
}

#[async_trait::async_trait]
impl FieldResolver for FunctionResolver {
    fn object_type(&self) -> Option<&str> {
        self.object_type.as_deref()
    }

    async fn resolve(&self, context: &mut FieldResolutionContext, cancel: &CancellationToken) {
        let params = ResolveParams {
            arguments: context.arguments().clone(),
            origin: context.request().origin().clone(),
            sources: context
                .request()
                .items()
                .iter()
                .map(|item| item.source_data().clone())
                .collect(),
            user: context.user().cloned(),
        };
        let cancelled = std::pin::pin!(cancel.cancelled());
        let outcome = match future::select((self.func)(params), cancelled).await {
            Either::Left((outcome, _)) => outcome,
            Either::Right(_) => Err(FieldError::Cancelled),
        };
        match outcome {
            Ok(value) => context.set_result(value),
            Err(FieldError::Cancelled) => context.cancel(),
            Err(FieldError::Message(message)) => {
                let origin = context.request().origin().clone();
                context.messages().critical(codes::RESOLVER_ERROR, message, origin);
            },
        }
    }
}
