use crate::document::Document;
use crate::error::Error;
use crate::json_ext::Object;
use crate::response::Response;
use crate::schema::Schema;
use futures::future::BoxFuture;
use serde_json_bytes::Value;
use std::fmt;
use std::sync::Arc;

/// An async handle that will eventually resolve to a [`Response`].
pub type DeferredResponse = BoxFuture<'static, Response>;

/// A function producing the value for one schema field.
pub type FieldResolver = Arc<dyn Fn(ResolverInfo<'_>) -> Result<Value, Error> + Send + Sync>;

/// Everything a field resolver gets to look at.
pub struct ResolverInfo<'a> {
    /// The value the enclosing selection set resolved to.
    pub parent: &'a Value,

    /// The field being resolved.
    pub field_name: &'a str,

    /// The coerced field arguments.
    pub arguments: &'a Object,

    /// The caller-supplied context value.
    pub context: &'a Value,
}

/// The resolver used for any schema field that does not declare its own resolution function:
/// look the field up in the parent object, or produce null.
pub fn default_field_resolver() -> FieldResolver {
    Arc::new(|info: ResolverInfo<'_>| {
        Ok(info
            .parent
            .as_object()
            .and_then(|parent| parent.get(info.field_name))
            .cloned()
            .unwrap_or(Value::Null))
    })
}

/// Selects the deferred execution strategy.
///
/// When an adapter is in effect, the executor wraps its response through [`AsyncAdapter::defer`]
/// and returns [`QueryOutcome::Deferred`]; without one, execution is fully synchronous. Both
/// strategies must produce structurally identical responses for identical inputs.
pub trait AsyncAdapter: Send + Sync {
    fn defer(&self, response: Response) -> DeferredResponse;
}

/// An adapter that wraps responses in an immediately-ready future.
pub struct ImmediateAdapter;

impl AsyncAdapter for ImmediateAdapter {
    fn defer(&self, response: Response) -> DeferredResponse {
        Box::pin(futures::future::ready(response))
    }
}

/// The inputs handed to the executor for one validated document.
///
/// Everything is owned or reference counted so that deferred execution can outlive the
/// pipeline call that produced it.
#[derive(Clone)]
pub struct ExecutionRequest {
    pub schema: Arc<Schema>,
    pub document: Document,
    pub root_value: Value,
    pub context_value: Value,
    /// The raw, uncoerced variable values. `None` when the caller supplied none; the same
    /// mapping the cost-limiting validation rule observed.
    pub variables: Option<Arc<Object>>,
    pub operation_name: Option<String>,
    pub field_resolver: FieldResolver,
    pub async_adapter: Option<Arc<dyn AsyncAdapter>>,
}

/// The field-resolution engine.
///
/// The executor owns argument coercion, resolver invocation and per-field error collection;
/// field errors never escape it as anything but entries in the response's `errors`. It is only
/// ever invoked on documents that passed validation.
#[cfg_attr(test, mockall::automock)]
pub trait QueryExecutor: Send + Sync {
    fn execute(&self, request: ExecutionRequest) -> QueryOutcome;
}

/// The unified result of one pipeline invocation: either a concrete response, or a deferred
/// one when an async adapter is in effect. `into_response` gives the uniform consumption
/// pattern; a malformed third shape is unrepresentable.
pub enum QueryOutcome {
    Ready(Response),
    Deferred(DeferredResponse),
}

impl QueryOutcome {
    /// Resolve to the response, awaiting the deferred handle if there is one.
    pub async fn into_response(self) -> Response {
        match self {
            QueryOutcome::Ready(response) => response,
            QueryOutcome::Deferred(deferred) => deferred.await,
        }
    }

    /// The response, if execution completed synchronously.
    pub fn into_ready(self) -> Option<Response> {
        match self {
            QueryOutcome::Ready(response) => Some(response),
            QueryOutcome::Deferred(_) => None,
        }
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, QueryOutcome::Deferred(_))
    }
}

impl fmt::Debug for QueryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryOutcome::Ready(response) => f.debug_tuple("Ready").field(response).finish(),
            QueryOutcome::Deferred(_) => f.debug_tuple("Deferred").finish(),
        }
    }
}

impl From<Response> for QueryOutcome {
    fn from(response: Response) -> Self {
        QueryOutcome::Ready(response)
    }
}
