//! Query term nodes

use crate::{BoxTerm, Category, Datum, MetaOp, Operation};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value as JsonValue;
use smallvec::SmallVec;

/// Parameter names of a function term
pub type Params = SmallVec<[String; 2]>;

/// All term kinds
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "args", rename_all = "kebab-case")]
pub enum TermKind {
    /// Scalar literal
    Literal(Datum),
    /// Array of terms
    Array(Vec<Term>),
    /// Object of named terms; key order carries no meaning
    Object(IndexMap<String, Term>),
    /// Reference to a bound variable
    Variable(String),
    /// The implicit "current row" variable
    ImplicitVariable,
    /// Operation applied to ordered arguments
    Call { op: Operation, args: Vec<Term> },
    /// If-then-else
    Conditional {
        test: BoxTerm,
        then_branch: BoxTerm,
        else_branch: BoxTerm,
    },
    /// Named bindings visible to a body
    Let {
        bindings: Vec<(String, Term)>,
        body: BoxTerm,
    },
    /// Anonymous function
    Function { params: Params, body: BoxTerm },
    /// Raw script source evaluated on the server
    #[serde(rename = "javascript")]
    JavaScript(String),
    /// Runtime error raised when this term is evaluated
    Error(String),
    /// Pre-parsed payload embedded verbatim
    JsonLiteral(JsonValue),
    /// Database handle
    Database(String),
    /// Table handle
    Table { db: Option<String>, name: String },
    /// Administrative command
    Meta(MetaOp),
}

impl TermKind {
    /// Discriminator tag
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Literal(_) => "literal",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::Variable(_) => "variable",
            Self::ImplicitVariable => "implicit-variable",
            Self::Call { .. } => "call",
            Self::Conditional { .. } => "conditional",
            Self::Let { .. } => "let",
            Self::Function { .. } => "function",
            Self::JavaScript(_) => "javascript",
            Self::Error(_) => "error",
            Self::JsonLiteral(_) => "json-literal",
            Self::Database(_) => "database",
            Self::Table { .. } => "table",
            Self::Meta(_) => "meta",
        }
    }
}

/// An immutable query term
///
/// A term owns its children. Construction goes through the typed constructors
/// below, which fix the category for kinds whose category is determined by
/// construction rule; operators that inherit categories from their operands
/// use [`Term::new`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Term {
    #[serde(flatten)]
    kind: TermKind,
    category: Category,
}

impl Term {
    /// Create a term with an explicit category
    pub fn new(kind: TermKind, category: Category) -> Self {
        Self { kind, category }
    }

    /// Scalar literal (always `Json`)
    pub fn literal(datum: impl Into<Datum>) -> Self {
        Self::new(TermKind::Literal(datum.into()), Category::Json)
    }

    /// Null literal
    pub fn null() -> Self {
        Self::literal(Datum::Null)
    }

    /// Array of terms (always `Json`)
    pub fn array(elements: Vec<Term>) -> Self {
        Self::new(TermKind::Array(elements), Category::Json)
    }

    /// Object of terms (always `Json`)
    pub fn object(fields: IndexMap<String, Term>) -> Self {
        Self::new(TermKind::Object(fields), Category::Json)
    }

    /// Variable reference
    pub fn variable(name: impl Into<String>, category: Category) -> Self {
        Self::new(TermKind::Variable(name.into()), category)
    }

    /// The implicit variable
    pub fn implicit_variable() -> Self {
        Self::new(TermKind::ImplicitVariable, Category::Json)
    }

    /// Operation call
    pub fn call(op: Operation, args: Vec<Term>, category: Category) -> Self {
        Self::new(TermKind::Call { op, args }, category)
    }

    /// Get the term kind
    pub fn kind(&self) -> &TermKind {
        &self.kind
    }

    /// Consume the term, returning its kind
    pub fn into_kind(self) -> TermKind {
        self.kind
    }

    /// Get the result category
    pub fn category(&self) -> Category {
        self.category
    }

    /// Discriminator tag
    pub fn tag(&self) -> &'static str {
        self.kind.tag()
    }

    /// Ordered child terms
    ///
    /// Object children follow key insertion order; let children are the bound
    /// values followed by the body.
    pub fn children(&self) -> Vec<&Term> {
        match &self.kind {
            TermKind::Array(elements) => elements.iter().collect(),
            TermKind::Object(fields) => fields.values().collect(),
            TermKind::Call { args, .. } => args.iter().collect(),
            TermKind::Conditional {
                test,
                then_branch,
                else_branch,
            } => vec![test.as_ref(), then_branch.as_ref(), else_branch.as_ref()],
            TermKind::Let { bindings, body } => bindings
                .iter()
                .map(|(_, value)| value)
                .chain(std::iter::once(body.as_ref()))
                .collect(),
            TermKind::Function { body, .. } => vec![body.as_ref()],
            TermKind::Literal(_)
            | TermKind::Variable(_)
            | TermKind::ImplicitVariable
            | TermKind::JavaScript(_)
            | TermKind::Error(_)
            | TermKind::JsonLiteral(_)
            | TermKind::Database(_)
            | TermKind::Table { .. }
            | TermKind::Meta(_) => Vec::new(),
        }
    }

    /// Get the literal if this is a literal term
    pub fn as_literal(&self) -> Option<&Datum> {
        match &self.kind {
            TermKind::Literal(datum) => Some(datum),
            _ => None,
        }
    }

    /// Get the variable name if this is a variable term
    pub fn as_variable(&self) -> Option<&str> {
        match &self.kind {
            TermKind::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Get the operation and arguments if this is a call term
    pub fn as_call(&self) -> Option<(Operation, &[Term])> {
        match &self.kind {
            TermKind::Call { op, args } => Some((*op, args)),
            _ => None,
        }
    }

    /// Total number of terms in this tree
    pub fn size(&self) -> usize {
        1 + self.children().iter().map(|c| c.size()).sum::<usize>()
    }
}
