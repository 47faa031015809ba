use crate::error::QueryError;
use apollo_compiler::ast;
use apollo_compiler::Node;
use std::collections::HashMap;
use std::sync::Arc;

/// The logical source name attached to parsed requests, used in error locations.
const SOURCE_NAME: &str = "GraphQL request";

/// An immutable parsed request document.
///
/// Produced once per invocation, then shared read-only with validation and execution.
#[derive(Clone, Debug)]
pub struct Document {
    ast: Arc<ast::Document>,
}

impl Document {
    /// Parse a request from source text.
    ///
    /// Any parse failure is surfaced as a syntax [`QueryError`] carrying the first parser
    /// diagnostic and its location. An empty source (or one without any definition) is a
    /// syntax error as well, not an empty document.
    pub fn parse(source: &str) -> Result<Document, QueryError> {
        match ast::Document::parse(source.to_string(), SOURCE_NAME) {
            Ok(ast) if ast.definitions.is_empty() => Err(QueryError::SyntaxError {
                message: "Unexpected <EOF>".to_string(),
                line: Some(1),
                column: Some(1),
            }),
            Ok(ast) => Ok(Document { ast: Arc::new(ast) }),
            Err(with_errors) => {
                let (message, line, column) = match with_errors.errors.iter().next() {
                    Some(diagnostic) => {
                        let (line, column) = diagnostic
                            .line_column_range()
                            .map(|range| (range.start.line as u32, range.start.column as u32))
                            .unzip();
                        (diagnostic.to_string(), line, column)
                    }
                    None => ("failed to parse the request".to_string(), None, None),
                };
                Err(QueryError::SyntaxError {
                    message,
                    line,
                    column,
                })
            }
        }
    }

    /// Wrap an already-parsed document. No re-parsing happens on this path.
    pub fn from_ast(ast: ast::Document) -> Document {
        Document { ast: Arc::new(ast) }
    }

    pub fn ast(&self) -> &ast::Document {
        &self.ast
    }

    /// The operation executed for the given operation name: the named one, or the only
    /// operation in the document when no name was supplied.
    pub fn operation(&self, name: Option<&str>) -> Option<&Node<ast::OperationDefinition>> {
        let mut operations = self.operations();
        match name {
            Some(name) => {
                operations.find(|op| op.name.as_ref().map(|n| n.as_str()) == Some(name))
            }
            None => operations.next(),
        }
    }

    pub fn operations(&self) -> impl Iterator<Item = &Node<ast::OperationDefinition>> {
        self.ast.definitions.iter().filter_map(|def| match def {
            ast::Definition::OperationDefinition(op) => Some(op),
            _ => None,
        })
    }

    /// Fragment definitions by name, for spread resolution.
    pub fn fragments(&self) -> HashMap<&str, &Node<ast::FragmentDefinition>> {
        self.ast
            .definitions
            .iter()
            .filter_map(|def| match def {
                ast::Definition::FragmentDefinition(fragment) => {
                    Some((fragment.name.as_str(), fragment))
                }
                _ => None,
            })
            .collect()
    }
}
