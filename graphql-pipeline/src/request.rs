use crate::document::Document;
use crate::json_ext::Object;
use serde::{Deserialize, Serialize};
use serde_json_bytes::Value;
use std::sync::Arc;
use typed_builder::TypedBuilder;

/// A graphql request as it arrives over the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
#[builder(field_defaults(setter(into)))]
pub struct Request {
    /// The graphql query.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub query: Option<String>,

    /// The optional graphql operation.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    #[builder(default)]
    pub operation_name: Option<String>,

    /// The optional variables in the form of a json object.
    #[serde(
        skip_serializing_if = "Object::is_empty",
        default,
        deserialize_with = "deserialize_null_default"
    )]
    #[builder(default)]
    pub variables: Arc<Object>,

    /// The optional graphql extensions.
    #[serde(skip_serializing_if = "Object::is_empty", default)]
    #[builder(default)]
    pub extensions: Object,
}

// NOTE: this deserialize helper is used to transform `null` to Default::default()
fn deserialize_null_default<'de, D, T: Default + Deserialize<'de>>(
    deserializer: D,
) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
{
    <Option<T>>::deserialize(deserializer).map(|x| x.unwrap_or_default())
}

impl Request {
    /// Turn the wire request into pipeline input. Wire requests carry no way to say "no
    /// variables" other than omitting them, so an empty map maps to an absent mapping.
    pub fn into_query_request(self) -> QueryRequest {
        let variables = (!self.variables.is_empty()).then_some(self.variables);
        QueryRequest::builder()
            .source(self.query.unwrap_or_default())
            .operation_name(self.operation_name)
            .variables(variables)
            .build()
    }
}

/// The request source: raw text to hand to the parser, or an already-parsed document to use
/// as-is.
#[derive(Clone, Debug)]
pub enum QuerySource {
    Text(String),
    Parsed(Document),
}

impl From<&str> for QuerySource {
    fn from(text: &str) -> Self {
        QuerySource::Text(text.to_string())
    }
}

impl From<String> for QuerySource {
    fn from(text: String) -> Self {
        QuerySource::Text(text)
    }
}

impl From<Document> for QuerySource {
    fn from(document: Document) -> Self {
        QuerySource::Parsed(document)
    }
}

/// One pipeline invocation's inputs.
#[derive(Clone, Debug, TypedBuilder)]
pub struct QueryRequest {
    #[builder(setter(into))]
    pub source: QuerySource,

    /// The value handed to top-level field resolvers as their parent.
    #[builder(default)]
    pub root_value: Value,

    /// The caller-supplied context value, passed through to every resolver.
    #[builder(default)]
    pub context_value: Value,

    /// Runtime-supplied variable values, unresolved against types. Shared read-only between
    /// the cost-limiting rule and execution.
    #[builder(default)]
    pub variables: Option<Arc<Object>>,

    #[builder(default)]
    pub operation_name: Option<String>,
}
