use crate::json_ext::{Object, Path};
use crate::response::Response;
use displaydoc::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

/// Error types raised by the pipeline itself.
///
/// Note that these are not actually returned to the client as-is, but are instead converted to
/// JSON for [`struct@Error`].
#[derive(ThisError, Display, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum QueryError {
    /// Syntax Error: {message}
    SyntaxError {
        /// The parser's failure reason.
        message: String,

        /// Line of the offending token, if known.
        line: Option<u32>,

        /// Column of the offending token, if known.
        column: Option<u32>,
    },

    /// Max query complexity should be {max_cost} but got {cost}
    CostLimitExceeded {
        /// The estimated cost of the document.
        cost: f64,

        /// The configured maximum.
        max_cost: f64,
    },
}

impl QueryError {
    /// Convert the pipeline error to a GraphQL error.
    pub fn to_graphql_error(&self, path: Option<Path>) -> Error {
        let locations = match self {
            QueryError::SyntaxError {
                line: Some(line),
                column: Some(column),
                ..
            } => vec![Location {
                line: *line,
                column: *column,
            }],
            _ => Vec::new(),
        };
        Error {
            message: self.to_string(),
            locations,
            path,
            extensions: serde_json_bytes::to_value(self)
                .ok()
                .and_then(|value| value.as_object().cloned())
                .unwrap_or_default(),
        }
    }

    /// Convert the error to a response with no data.
    pub fn to_response(&self) -> Response {
        Response::builder()
            .errors(vec![self.to_graphql_error(None)])
            .build()
    }
}

/// Any error surfaced in the `errors` sequence of a [`Response`].
#[derive(ThisError, Clone, Debug, Eq, PartialEq, Serialize, Deserialize, Default)]
#[error("{message}")]
#[serde(rename_all = "camelCase")]
pub struct Error {
    /// The error message.
    pub message: String,

    /// The locations of the error from the originating request.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<Location>,

    /// If this is a field error, the path to that field in the response data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Path>,

    /// The optional graphql extensions.
    #[serde(default, skip_serializing_if = "Object::is_empty")]
    pub extensions: Object,
}

impl Error {
    /// An error carrying nothing but a message.
    pub fn from_message(message: impl Into<String>) -> Self {
        Error {
            message: message.into(),
            ..Default::default()
        }
    }
}

/// A location in the request that triggered a graphql error.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// The line number.
    pub line: u32,

    /// The column number.
    pub column: u32,
}
