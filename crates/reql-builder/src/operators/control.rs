//! Control forms: `if`, `let` and `func`
//!
//! These open scopes or unify branches rather than checking operand
//! categories against a fixed signature.

use log::{debug, trace};
use reql_ast::{Category, Params, Term, TermKind};
use reql_diagnostics::{ReqlError, Result};
use reql_types::{BuildContext, Value, coerce, unify_pair};

use crate::QueryBuilder;

impl QueryBuilder {
    /// Conditional: `then_branch` if `test` holds, `else_branch` otherwise
    ///
    /// `test` may be of any category; the server checks it is truthy. The
    /// result category unifies both branches.
    pub fn branch(
        &self,
        ctx: &BuildContext,
        test: impl Into<Value>,
        then_branch: impl Into<Value>,
        else_branch: impl Into<Value>,
    ) -> Result<Term> {
        let test = coerce(ctx, test.into())?;
        let then_branch = coerce(ctx, then_branch.into())?;
        let else_branch = coerce(ctx, else_branch.into())?;
        let category = unify_pair("if", then_branch.category(), else_branch.category())?;

        Ok(Term::new(
            TermKind::Conditional {
                test: Box::new(test),
                then_branch: Box::new(then_branch),
                else_branch: Box::new(else_branch),
            },
            category,
        ))
    }

    /// Bind names for use in `body`
    ///
    /// `bindings` is either an array of `[name, value]` pairs, where each value
    /// sees the names bound before it, or an object whose values are all
    /// coerced in the outer scope.
    pub fn bind(
        &self,
        ctx: &BuildContext,
        bindings: impl Into<Value>,
        body: impl Into<Value>,
    ) -> Result<Term> {
        let body = body.into();
        self.bind_with(ctx, bindings, |scope| coerce(scope, body))
    }

    /// Bind names for a body built by a closure under the binding scope
    ///
    /// Terms built inside the closure see every binding with its category.
    pub fn bind_with<F>(
        &self,
        ctx: &BuildContext,
        bindings: impl Into<Value>,
        build: F,
    ) -> Result<Term>
    where
        F: FnOnce(&BuildContext) -> Result<Term>,
    {
        let mut scope = ctx.child();
        let mut pairs: Vec<(String, Term)> = Vec::new();

        match bindings.into() {
            Value::Array(items) => {
                for (i, item) in items.into_iter().enumerate() {
                    let (name, value) = binding_pair(i, item)?;
                    let name = binding_name(ctx, &name, &pairs)?;
                    let term = coerce(&scope, value)?;
                    scope.define(name.clone(), term.category());
                    pairs.push((name, term));
                }
            }
            Value::Object(fields) => {
                for (name, value) in fields {
                    let name = binding_name(ctx, &name, &pairs)?;
                    let term = coerce(ctx, value)?;
                    pairs.push((name, term));
                }
                for (name, term) in &pairs {
                    scope.define(name.clone(), term.category());
                }
            }
            other => {
                return Err(malformed(format!(
                    "bindings must be an array of pairs or an object, got {}",
                    other.type_name()
                )));
            }
        }

        trace!("let binds {} name(s)", pairs.len());
        let body = build(&scope)?;
        let category = body.category();
        Ok(Term::new(
            TermKind::Let {
                bindings: pairs,
                body: Box::new(body),
            },
            category,
        ))
    }

    /// Function of `params` returning `body`
    ///
    /// Parameters are bound as JSON values while the body is coerced, so the
    /// body can reference them as `$name`.
    pub fn func<I, S>(&self, ctx: &BuildContext, params: I, body: impl Into<Value>) -> Result<Term>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let body = body.into();
        self.func_with(ctx, params, |scope| coerce(scope, body))
    }

    /// Function whose body is built by a closure under the parameter scope
    pub fn func_with<I, S, F>(&self, ctx: &BuildContext, params: I, build: F) -> Result<Term>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: FnOnce(&BuildContext) -> Result<Term>,
    {
        let mut scope = ctx.child();
        let mut names = Params::new();
        for param in params {
            let raw = param.as_ref();
            let name = ctx.strip_marker(raw).unwrap_or(raw);
            if name.is_empty() {
                return Err(malformed(format!("parameter {:?} has no name", raw)));
            }
            if names.iter().any(|n| n == name) {
                return Err(malformed(format!("parameter {:?} is declared twice", name)));
            }
            scope.define(name, Category::Json);
            names.push(name.to_string());
        }

        let body = build(&scope)?;
        Ok(Term::new(
            TermKind::Function {
                params: names,
                body: Box::new(body),
            },
            Category::Function,
        ))
    }
}

/// Split one entry of the pair form
fn binding_pair(index: usize, item: Value) -> Result<(String, Value)> {
    match item {
        Value::Array(pair) if pair.len() == 2 => {
            let mut pair = pair.into_iter();
            match (pair.next(), pair.next()) {
                (Some(Value::String(name) | Value::Symbol(name)), Some(value)) => {
                    Ok((name, value))
                }
                (Some(name), _) => Err(malformed(format!(
                    "binding {} has a {} name, expected a string",
                    index,
                    name.type_name()
                ))),
                _ => Err(malformed(format!("binding {} is empty", index))),
            }
        }
        Value::Array(pair) => Err(malformed(format!(
            "binding {} has {} element(s), expected a name and a value",
            index,
            pair.len()
        ))),
        other => Err(malformed(format!(
            "binding {} is a {}, expected a [name, value] pair",
            index,
            other.type_name()
        ))),
    }
}

/// Normalize a binding name, rejecting empty and repeated names
fn binding_name(ctx: &BuildContext, raw: &str, bound: &[(String, Term)]) -> Result<String> {
    let name = ctx.strip_marker(raw).unwrap_or(raw);
    if name.is_empty() {
        return Err(malformed(format!("binding name {:?} is empty", raw)));
    }
    if bound.iter().any(|(n, _)| n == name) {
        return Err(malformed(format!("name {:?} is bound twice", name)));
    }
    Ok(name.to_string())
}

fn malformed(message: String) -> ReqlError {
    let err = ReqlError::malformed_binding(message);
    debug!("{}", err);
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_function_params_resolve_in_body() {
        let builder = QueryBuilder::new();
        let ctx = builder.context();
        let term = builder
            .func(&ctx, ["$x"], Value::symbol("$x"))
            .unwrap();
        match term.kind() {
            TermKind::Function { params, body } => {
                assert_eq!(params.as_slice(), ["x".to_string()]);
                assert_eq!(body.as_variable(), Some("x"));
            }
            other => panic!("expected function, got {:?}", other),
        }
        assert_eq!(term.category(), Category::Function);
    }

    #[test]
    fn test_duplicate_params_rejected() {
        let builder = QueryBuilder::new();
        let ctx = builder.context();
        let err = builder.func(&ctx, ["a", "a"], 1).unwrap_err();
        assert!(matches!(err, ReqlError::MalformedBinding { .. }));
    }
}
