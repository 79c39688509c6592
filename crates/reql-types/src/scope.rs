//! Lexical scopes for query construction
//!
//! Scopes record which variable names are bound while a term is being built
//! and the category each binding produces, so that a variable reference can
//! carry the category of the value it names. Nothing is resolved to a value
//! here; the server interprets every binding.
//!
//! The implicit "current row" variable is not a scope entry. It is always
//! available through [`BuildContext::implicit_variable`] and is never checked
//! against explicit binding names.

use indexmap::IndexMap;
use reql_ast::{Category, Term};
use std::sync::Arc;

use crate::BuilderConfig;

/// A lexical scope
#[derive(Debug, Clone, Default)]
pub struct Scope {
    /// Names bound in this scope, in binding order
    bindings: IndexMap<String, Category>,
    /// Parent scope
    parent: Option<Box<Scope>>,
}

impl Scope {
    /// Create a new top-level scope
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a child scope
    pub fn child(&self) -> Self {
        Self {
            bindings: IndexMap::new(),
            parent: Some(Box::new(self.clone())),
        }
    }

    /// Bind a name in this scope, shadowing any outer binding
    pub fn define(&mut self, name: impl Into<String>, category: Category) {
        self.bindings.insert(name.into(), category);
    }

    /// Look up a name in this scope or parent scopes
    pub fn lookup(&self, name: &str) -> Option<Category> {
        match self.bindings.get(name) {
            Some(category) => Some(*category),
            None => self.parent.as_ref().and_then(|p| p.lookup(name)),
        }
    }
}

/// Context threaded through every coercion and builder call
#[derive(Debug, Clone)]
pub struct BuildContext {
    scope: Scope,
    config: Arc<BuilderConfig>,
}

impl Default for BuildContext {
    fn default() -> Self {
        Self::new(BuilderConfig::default())
    }
}

impl BuildContext {
    /// Create a root context
    pub fn new(config: BuilderConfig) -> Self {
        Self::with_shared_config(Arc::new(config))
    }

    /// Create a root context sharing an existing configuration
    pub fn with_shared_config(config: Arc<BuilderConfig>) -> Self {
        Self {
            scope: Scope::new(),
            config,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Open a nested scope
    pub fn child(&self) -> Self {
        Self {
            scope: self.scope.child(),
            config: Arc::clone(&self.config),
        }
    }

    /// Bind a name in the current scope
    pub fn define(&mut self, name: impl Into<String>, category: Category) {
        self.scope.define(name, category);
    }

    /// Category of a bound name
    pub fn lookup(&self, name: &str) -> Option<Category> {
        self.scope.lookup(name)
    }

    /// Strip the variable marker, if present
    pub fn strip_marker<'a>(&self, name: &'a str) -> Option<&'a str> {
        name.strip_prefix(self.config.variable_marker)
    }

    /// Reference to the implicit variable
    pub fn implicit_variable(&self) -> Term {
        Term::implicit_variable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_through_parents() {
        let mut root = Scope::new();
        root.define("a", Category::Stream);
        let mut child = root.child();
        child.define("b", Category::Json);

        assert_eq!(child.lookup("a"), Some(Category::Stream));
        assert_eq!(child.lookup("b"), Some(Category::Json));
        assert_eq!(root.lookup("b"), None);
    }

    #[test]
    fn test_shadowing() {
        let mut root = Scope::new();
        root.define("x", Category::Stream);
        let mut child = root.child();
        child.define("x", Category::Json);
        assert_eq!(child.lookup("x"), Some(Category::Json));
        assert_eq!(root.lookup("x"), Some(Category::Stream));
    }

    #[test]
    fn test_strip_marker() {
        let ctx = BuildContext::default();
        assert_eq!(ctx.strip_marker("$row"), Some("row"));
        assert_eq!(ctx.strip_marker("row"), None);

        let ctx = BuildContext::new(BuilderConfig::new().with_variable_marker('@'));
        assert_eq!(ctx.strip_marker("@row"), Some("row"));
        assert_eq!(ctx.strip_marker("$row"), None);
    }

    #[test]
    fn test_child_context_keeps_config() {
        let ctx = BuildContext::new(BuilderConfig::new().with_variable_marker('@'));
        let mut child = ctx.child();
        child.define("a", Category::Json);
        assert_eq!(child.strip_marker("@a"), Some("a"));
        assert_eq!(child.lookup("a"), Some(Category::Json));
        assert_eq!(ctx.lookup("a"), None);
    }
}
