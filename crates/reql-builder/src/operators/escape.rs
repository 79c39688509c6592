//! Escape hatches: embedded JavaScript, raw JSON and explicit errors

use reql_ast::{Category, Term, TermKind};
use serde_json::Value as JsonValue;

use crate::QueryBuilder;

impl QueryBuilder {
    /// Evaluate a JavaScript expression on the server
    ///
    /// The expression is wrapped as `return (<expr>);` unless wrapping is
    /// disabled in the configuration.
    pub fn js(&self, expr: impl Into<String>) -> Term {
        let expr = expr.into();
        let source = if self.config().js_wrap_expressions {
            format!("return ({});", expr)
        } else {
            expr
        };
        javascript(source)
    }

    /// Evaluate a JavaScript function body verbatim
    pub fn js_body(&self, body: impl Into<String>) -> Term {
        javascript(body.into())
    }

    /// Embed a parsed JSON payload as-is
    pub fn json(&self, payload: JsonValue) -> Term {
        Term::new(TermKind::JsonLiteral(payload), Category::Json)
    }

    /// Raise `message` when evaluated
    pub fn error(&self, message: impl Into<String>) -> Term {
        Term::new(TermKind::Error(message.into()), Category::Json)
    }
}

fn javascript(source: String) -> Term {
    Term::new(TermKind::JavaScript(source), Category::Json)
}
