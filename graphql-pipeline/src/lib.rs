//! The orchestration layer that turns a raw graphql request into a structured result against
//! a typed schema.
//!
//! One call runs document acquisition, validation and execution dispatch in strict
//! sequence, and reduces the three failure domains (syntax, validation,
//! field errors) and two execution models (synchronous, deferred) to one result contract:
//! every well-typed input comes back as a [`Response`], either directly or behind a
//! [`QueryOutcome::Deferred`] handle.
//!
//! The parser, the individual validation rules, and the field-resolution engine are
//! collaborators behind seams ([`ValidationRule`], [`QueryExecutor`]); this crate owns how
//! they are composed, configured, and reduced.

mod builtins;
mod document;
mod error;
mod execution;
mod json_ext;
mod pipeline;
mod request;
mod response;
mod schema;
mod validation;

pub use builtins::*;
pub use document::*;
pub use error::*;
pub use execution::*;
pub use json_ext::*;
pub use pipeline::*;
pub use request::*;
pub use response::*;
pub use schema::*;
pub use validation::*;
