use crate::document::Document;
use crate::error::{Error, QueryError};
use crate::json_ext::Object;
use crate::schema::Schema;
use crate::validation::ValidationRule;
use apollo_compiler::ast;
use apollo_compiler::Node;
use std::collections::HashMap;
use std::sync::Arc;

/// Arguments that scale the cost of a field's sub-selections.
const SLICING_ARGUMENTS: [&str; 2] = ["first", "last"];

enum Computation<T> {
    InProgress,
    Done(T),
}

/// The cost-limiting validation rule: estimates a numeric cost for a document using literal
/// and runtime argument values, and rejects documents exceeding the configured maximum before
/// any execution resource is spent.
///
/// Every field costs 1 plus the cost of its sub-selections; a pagination argument (`first`,
/// `last`) multiplies the sub-selection cost by its value, resolved against the raw variable
/// values supplied with the call being validated. A variable with no binding contributes a
/// multiplier of 0.
///
/// The rule itself is stateless: one instance is safely shared across concurrent calls, each
/// of which carries its own variable mapping.
pub struct QueryComplexity {
    max_cost: f64,
}

impl QueryComplexity {
    pub fn new(max_cost: f64) -> QueryComplexity {
        QueryComplexity { max_cost }
    }

    /// A complexity rule that never rejects anything.
    pub fn disabled() -> QueryComplexity {
        QueryComplexity::new(0.0)
    }

    pub fn max_cost(&self) -> f64 {
        self.max_cost
    }

    fn selection_set_cost(
        &self,
        set: &[ast::Selection],
        fragments: &HashMap<&str, &Node<ast::FragmentDefinition>>,
        cache: &mut HashMap<String, Computation<f64>>,
        variables: Option<&Object>,
    ) -> f64 {
        let mut cost = 0.0;
        for selection in set {
            match selection {
                ast::Selection::Field(field) => {
                    let nested =
                        self.selection_set_cost(&field.selection_set, fragments, cache, variables);
                    cost += 1.0 + self.multiplier(field, variables) * nested;
                }
                ast::Selection::InlineFragment(fragment) => {
                    cost += self.selection_set_cost(
                        &fragment.selection_set,
                        fragments,
                        cache,
                        variables,
                    );
                }
                ast::Selection::FragmentSpread(spread) => {
                    let name = spread.fragment_name.as_str();
                    match cache.get(name) {
                        None => {
                            if let Some(fragment) = fragments.get(name) {
                                let fragment = *fragment;
                                cache.insert(name.to_string(), Computation::InProgress);
                                let nested = self.selection_set_cost(
                                    &fragment.selection_set,
                                    fragments,
                                    cache,
                                    variables,
                                );
                                cache.insert(name.to_string(), Computation::Done(nested));
                                cost += nested;
                            }
                            // Undefined fragment: the document is invalid, left for other
                            // rules to report.
                        }
                        Some(Computation::InProgress) => {
                            // This fragment references itself, maybe indirectly. Cycles are
                            // invalid; left for other rules to report.
                        }
                        Some(Computation::Done(cached)) => cost += *cached,
                    }
                }
            }
        }
        cost
    }

    fn multiplier(&self, field: &ast::Field, variables: Option<&Object>) -> f64 {
        for argument in &field.arguments {
            if SLICING_ARGUMENTS.contains(&argument.name.as_str()) {
                return match argument.value.as_ref() {
                    ast::Value::Int(value) => value.try_to_f64().unwrap_or(0.0),
                    ast::Value::Variable(name) => variables
                        .and_then(|variables| variables.get(name.as_str()))
                        .and_then(|value| value.as_f64())
                        .unwrap_or(0.0),
                    _ => 1.0,
                };
            }
        }
        1.0
    }
}

impl ValidationRule for QueryComplexity {
    fn name(&self) -> &'static str {
        "QueryComplexity"
    }

    fn validate(
        &self,
        _schema: &Schema,
        document: &Document,
        variables: Option<&Arc<Object>>,
    ) -> Vec<Error> {
        if self.max_cost <= 0.0 {
            return Vec::new();
        }
        let variables = variables.map(Arc::as_ref);
        let fragments = document.fragments();
        let mut cache = HashMap::new();
        let mut cost = 0.0;
        for operation in document.operations() {
            cost += self.selection_set_cost(
                &operation.selection_set,
                &fragments,
                &mut cache,
                variables,
            );
        }
        if cost > self.max_cost {
            tracing::warn!(
                "request exceeded complexity limits: cost: {cost}, max_cost: {}",
                self.max_cost
            );
            vec![QueryError::CostLimitExceeded {
                cost,
                max_cost: self.max_cost,
            }
            .to_graphql_error(None)]
        } else {
            Vec::new()
        }
    }
}
