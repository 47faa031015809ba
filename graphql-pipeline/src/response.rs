use crate::error::Error;
use crate::json_ext::Object;
use serde::{Deserialize, Serialize};
use serde_json_bytes::Value;
use typed_builder::TypedBuilder;

/// A graphql response: the single outcome shape of one pipeline invocation.
///
/// If `errors` is non-empty because validation failed, `data` is always null: validation
/// failures never execute, hence never produce partial data. Execution-time field errors may
/// coexist with partially populated data; those are aggregated by the executor.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
#[builder(field_defaults(setter(into)))]
pub struct Response {
    /// The response data.
    #[serde(skip_serializing_if = "Value::is_null", default)]
    #[builder(default = Value::Null)]
    pub data: Value,

    /// The graphql errors encountered, in the order they were reported.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    #[builder(default)]
    pub errors: Vec<Error>,

    /// The optional graphql extensions.
    #[serde(skip_serializing_if = "Object::is_empty", default)]
    #[builder(default)]
    pub extensions: Object,
}

impl Response {
    /// Whether the response carries any errors.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Build a response from validation errors alone. Data is always null on this path.
    pub(crate) fn from_validation_errors(errors: Vec<Error>) -> Response {
        Response::builder().errors(errors).build()
    }

    /// Convert the response to the plain `data`/`errors`/`extensions` value shape used by the
    /// legacy callers.
    pub fn into_plain(self) -> Value {
        serde_json_bytes::to_value(&self).unwrap_or_default()
    }
}
