//! Executors shared by the integration tests: a reference executor that resolves the
//! top-level selection set through the configured field resolver, plus spy wrappers.

// Not every test binary uses every helper.
#![allow(dead_code)]

use apollo_compiler::ast;
use graphql_pipeline::{
    Error, ExecutionRequest, Object, QueryExecutor, QueryOutcome, ResolverInfo, Response,
};
use serde_json_bytes::{ByteString, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Resolves every top-level field of the requested operation through the field resolver, and
/// defers through the async adapter when one is in effect.
pub struct ResolverExecutor;

impl QueryExecutor for ResolverExecutor {
    fn execute(&self, request: ExecutionRequest) -> QueryOutcome {
        let mut data = Object::new();
        let mut errors = Vec::new();
        let arguments = Object::new();
        match request.document.operation(request.operation_name.as_deref()) {
            Some(operation) => {
                for selection in &operation.selection_set {
                    if let ast::Selection::Field(field) = selection {
                        let response_key =
                            field.alias.as_ref().unwrap_or(&field.name).as_str();
                        let resolved = (request.field_resolver)(ResolverInfo {
                            parent: &request.root_value,
                            field_name: field.name.as_str(),
                            arguments: &arguments,
                            context: &request.context_value,
                        });
                        let response_key = ByteString::from(response_key.to_string());
                        match resolved {
                            Ok(value) => {
                                data.insert(response_key, value);
                            }
                            Err(error) => {
                                errors.push(error);
                                data.insert(response_key, Value::Null);
                            }
                        }
                    }
                }
            }
            None => errors.push(Error::from_message("unknown operation")),
        }
        let response = Response::builder()
            .data(Value::Object(data))
            .errors(errors)
            .build();
        match &request.async_adapter {
            Some(adapter) => QueryOutcome::Deferred(adapter.defer(response)),
            None => QueryOutcome::Ready(response),
        }
    }
}

/// Counts executor invocations on top of [`ResolverExecutor`].
pub struct CountingExecutor {
    pub calls: Arc<AtomicUsize>,
}

impl CountingExecutor {
    pub fn new() -> (CountingExecutor, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            CountingExecutor {
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

impl QueryExecutor for CountingExecutor {
    fn execute(&self, request: ExecutionRequest) -> QueryOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        ResolverExecutor.execute(request)
    }
}

/// Records the variable mapping the executor was handed.
pub struct CapturingExecutor {
    pub variables: Arc<Mutex<Option<Option<Arc<Object>>>>>,
}

impl CapturingExecutor {
    #[allow(clippy::type_complexity)]
    pub fn new() -> (CapturingExecutor, Arc<Mutex<Option<Option<Arc<Object>>>>>) {
        let variables = Arc::new(Mutex::new(None));
        (
            CapturingExecutor {
                variables: Arc::clone(&variables),
            },
            variables,
        )
    }
}

impl QueryExecutor for CapturingExecutor {
    fn execute(&self, request: ExecutionRequest) -> QueryOutcome {
        *self.variables.lock().expect("capture lock poisoned") =
            Some(request.variables.clone());
        ResolverExecutor.execute(request)
    }
}
