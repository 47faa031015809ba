mod complexity;

pub use complexity::QueryComplexity;

use crate::document::Document;
use crate::error::Error;
use crate::json_ext::Object;
use crate::schema::Schema;
use std::sync::Arc;

/// A check that inspects a document against a schema and emits zero or more errors, without
/// executing anything.
pub trait ValidationRule: Send + Sync + 'static {
    fn name(&self) -> &'static str;

    /// `variables` is the raw, uncoerced mapping execution will later observe, threaded per
    /// call. Rule instances are shared across concurrent calls and must not hold request
    /// state.
    fn validate(
        &self,
        schema: &Schema,
        document: &Document,
        variables: Option<&Arc<Object>>,
    ) -> Vec<Error>;
}

/// The ordered collection of validation rules in effect for one pipeline.
#[derive(Clone)]
pub struct RuleSet {
    rules: Vec<Arc<dyn ValidationRule>>,
}

impl RuleSet {
    pub fn new(rules: Vec<Arc<dyn ValidationRule>>) -> RuleSet {
        RuleSet { rules }
    }

    /// All known rules. Cost limiting ships disabled; callers opt in with a positive maximum.
    pub fn all() -> RuleSet {
        RuleSet::new(vec![Arc::new(QueryComplexity::disabled())])
    }

    /// No rules at all: the deliberate escape hatch for pre-validated or persisted queries.
    /// Validation reports nothing and execution always runs.
    pub fn empty() -> RuleSet {
        RuleSet::new(Vec::new())
    }

    pub fn push(&mut self, rule: Arc<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn ValidationRule>> {
        self.rules.iter()
    }

    /// Run every rule in order and collect everything they report. Every rule observes the
    /// same variable mapping the executor will later receive; an absent mapping is passed
    /// through as absent, never substituted.
    ///
    /// Errors are stable within one invocation: per-rule vectors are concatenated in rule
    /// order, each keeping its traversal order. Ordering across rules is otherwise
    /// unspecified.
    pub fn validate(
        &self,
        schema: &Schema,
        document: &Document,
        variables: Option<&Arc<Object>>,
    ) -> Vec<Error> {
        self.rules
            .iter()
            .flat_map(|rule| {
                let errors = rule.validate(schema, document, variables);
                if !errors.is_empty() {
                    tracing::debug!(rule = rule.name(), count = errors.len(), "rule reported errors");
                }
                errors
            })
            .collect()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet::all()
    }
}
