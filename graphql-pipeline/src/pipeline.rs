use crate::document::Document;
use crate::execution::{
    default_field_resolver, AsyncAdapter, ExecutionRequest, FieldResolver, QueryExecutor,
    QueryOutcome,
};
use crate::request::{QueryRequest, QuerySource};
use crate::response::Response;
use crate::schema::Schema;
use crate::validation::RuleSet;
use futures::future::BoxFuture;
use futures::FutureExt;
use once_cell::sync::Lazy;
use serde_json_bytes::Value;
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Process-wide default field resolver, consulted when a pipeline carries no explicit one.
static DEFAULT_FIELD_RESOLVER: Lazy<RwLock<FieldResolver>> =
    Lazy::new(|| RwLock::new(default_field_resolver()));

/// Process-wide default async adapter. `None` means synchronous-only execution.
static DEFAULT_ASYNC_ADAPTER: Lazy<RwLock<Option<Arc<dyn AsyncAdapter>>>> =
    Lazy::new(|| RwLock::new(None));

/// Replace the process-wide default field resolver, used by the executor for any schema field
/// that does not declare its own resolution function.
///
/// This is a compatibility shim: prefer threading a resolver through
/// [`QueryPipeline::builder`], which always wins over this default. Affects all subsequent
/// invocations across the process; mutating it concurrently with in-flight calls gives
/// unspecified ordering and should be avoided.
pub fn set_default_field_resolver(resolver: FieldResolver) {
    *DEFAULT_FIELD_RESOLVER
        .write()
        .expect("field resolver lock poisoned") = resolver;
}

/// Replace the process-wide default async adapter, used whenever a pipeline carries none.
/// Passing `None` reverts to synchronous-only execution.
///
/// Same caveats as [`set_default_field_resolver`].
pub fn set_default_async_adapter(adapter: Option<Arc<dyn AsyncAdapter>>) {
    *DEFAULT_ASYNC_ADAPTER
        .write()
        .expect("async adapter lock poisoned") = adapter;
}

fn process_default_field_resolver() -> FieldResolver {
    DEFAULT_FIELD_RESOLVER
        .read()
        .expect("field resolver lock poisoned")
        .clone()
}

fn process_default_async_adapter() -> Option<Arc<dyn AsyncAdapter>> {
    DEFAULT_ASYNC_ADAPTER
        .read()
        .expect("async adapter lock poisoned")
        .clone()
}

/// The query execution orchestration pipeline: document acquisition, validation, then
/// dispatch to the executor.
///
/// Configuration is threaded explicitly through the builder; the process-wide defaults are
/// consulted only for pieces the builder omitted.
pub struct QueryPipeline {
    executor: Arc<dyn QueryExecutor>,
    field_resolver: Option<FieldResolver>,
    async_adapter: Option<Arc<dyn AsyncAdapter>>,
    validation_rules: Option<RuleSet>,
}

#[buildstructor::buildstructor]
impl QueryPipeline {
    /// Builds a pipeline around an executor.
    ///
    /// * `executor`: the field-resolution engine, required.
    /// * `field_resolver`: resolver for fields without their own; defaults to the
    ///   process-wide default.
    /// * `async_adapter`: deferred execution strategy; defaults to the process-wide default,
    ///   which is synchronous-only unless replaced.
    /// * `validation_rules`: the rule set to run; defaults to [`RuleSet::all`]. Supply
    ///   [`RuleSet::empty`] to skip validation for pre-validated or persisted queries.
    #[builder(visibility = "pub")]
    fn new(
        executor: Arc<dyn QueryExecutor>,
        field_resolver: Option<FieldResolver>,
        async_adapter: Option<Arc<dyn AsyncAdapter>>,
        validation_rules: Option<RuleSet>,
    ) -> QueryPipeline {
        QueryPipeline {
            executor,
            field_resolver,
            async_adapter,
            validation_rules,
        }
    }

    /// Execute one request against a schema.
    ///
    /// Acquisition and validation always run synchronously, in that order, to completion;
    /// execution never starts before validation completes, and is skipped
    /// entirely when validation reports anything. Syntax and validation errors come back as a
    /// ready response with null data; only programming errors (collaborator bugs) panic.
    pub fn execute_query(&self, schema: &Arc<Schema>, request: QueryRequest) -> QueryOutcome {
        let _span = tracing::debug_span!(
            "execute_query",
            operation_name = request.operation_name.as_deref()
        )
        .entered();
        let QueryRequest {
            source,
            root_value,
            context_value,
            variables,
            operation_name,
        } = request;

        let document = match source {
            // Already parsed: used as-is, never re-parsed.
            QuerySource::Parsed(document) => document,
            QuerySource::Text(text) => match Document::parse(&text) {
                Ok(document) => document,
                Err(error) => {
                    debug!(%error, "request failed to parse");
                    return QueryOutcome::Ready(error.to_response());
                }
            },
        };

        let rules = self.validation_rules.clone().unwrap_or_default();
        // Rules observe the same raw variable values execution will later see, threaded per
        // call so concurrent calls on one pipeline never see each other's mappings.
        let errors = rules.validate(schema, &document, variables.as_ref());
        if !errors.is_empty() {
            debug!(count = errors.len(), "request failed validation");
            return QueryOutcome::Ready(Response::from_validation_errors(errors));
        }

        let field_resolver = self
            .field_resolver
            .clone()
            .unwrap_or_else(process_default_field_resolver);
        let async_adapter = self
            .async_adapter
            .clone()
            .or_else(process_default_async_adapter);

        self.executor.execute(ExecutionRequest {
            schema: Arc::clone(schema),
            document,
            root_value,
            context_value,
            variables,
            operation_name,
            field_resolver,
            async_adapter,
        })
    }

    /// Execute one request and flatten the response into the plain
    /// `data`/`errors`/`extensions` value shape.
    #[deprecated(since = "0.1.0", note = "use `execute_query` instead")]
    pub fn execute(&self, schema: &Arc<Schema>, request: QueryRequest) -> NormalizedOutcome {
        match self.execute_query(schema, request) {
            QueryOutcome::Ready(response) => NormalizedOutcome::Ready(response.into_plain()),
            QueryOutcome::Deferred(deferred) => {
                NormalizedOutcome::Deferred(deferred.map(Response::into_plain).boxed())
            }
        }
    }

    /// Identical to [`execute_query`](QueryPipeline::execute_query) in every way. Kept for
    /// callers that migrated from the historical name.
    #[deprecated(since = "0.1.0", note = "use `execute_query` instead")]
    pub fn execute_and_return_result(
        &self,
        schema: &Arc<Schema>,
        request: QueryRequest,
    ) -> QueryOutcome {
        self.execute_query(schema, request)
    }
}

/// The legacy flattened outcome: a plain json value, or a deferred one.
pub enum NormalizedOutcome {
    Ready(Value),
    Deferred(BoxFuture<'static, Value>),
}

impl NormalizedOutcome {
    /// Resolve to the plain value, awaiting the deferred handle if there is one.
    pub async fn into_value(self) -> Value {
        match self {
            NormalizedOutcome::Ready(value) => value,
            NormalizedOutcome::Deferred(deferred) => deferred.await,
        }
    }
}
