use std::sync::Arc;

/// An externally-owned type system definition.
///
/// The pipeline itself never interprets the schema; it is handed opaquely to the validation
/// rules and to the executor, which are free to parse the raw SDL however they see fit. It is
/// read-only for the duration of a call and may be shared across concurrently executing calls.
#[derive(Clone, Debug)]
pub struct Schema {
    raw_sdl: Arc<String>,
}

impl Schema {
    pub fn new(raw_sdl: impl Into<String>) -> Self {
        Schema {
            raw_sdl: Arc::new(raw_sdl.into()),
        }
    }

    /// The schema definition language this schema was built from.
    pub fn raw_sdl(&self) -> &str {
        &self.raw_sdl
    }
}
