//! Result categories of query terms

use serde::{Deserialize, Serialize};
use std::fmt;

/// The result kind of a term
///
/// Sequence categories form a refinement chain: `Table` ⊑ `View` ⊑ `Stream`.
/// `Json` is disjoint from the sequence chain. `Database` and `Meta` are leaf
/// categories that never unify, not even with themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// JSON-compatible value (scalar, array, object, null)
    Json,
    /// Lazy sequence of rows or values
    Stream,
    /// Selection over a table
    View,
    /// A whole table
    Table,
    /// Database handle
    Database,
    /// Administrative operation
    Meta,
    /// Anonymous function
    Function,
}

impl Category {
    /// Display name of the category
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Stream => "STREAM",
            Self::View => "VIEW",
            Self::Table => "TABLE",
            Self::Database => "DATABASE",
            Self::Meta => "META",
            Self::Function => "FUNCTION",
        }
    }

    /// Check if the category produces a sequence
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Stream | Self::View | Self::Table)
    }

    /// Check if the category can appear where a value is expected
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Json) || self.is_sequence()
    }

    /// Check if this category refines (or equals) another
    pub fn is_subtype_of(&self, other: &Category) -> bool {
        match (self, other) {
            (Self::Database, _) | (Self::Meta, _) => false,
            (a, b) if a == b => true,
            (Self::Table, Self::View) | (Self::Table, Self::Stream) => true,
            (Self::View, Self::Stream) => true,
            _ => false,
        }
    }

    /// Check if this category generalizes (or equals) another
    pub fn is_supertype_of(&self, other: &Category) -> bool {
        other.is_subtype_of(self)
    }

    /// Find the more general of two compatible categories
    ///
    /// Returns `None` when neither refines the other.
    pub fn common_supertype(&self, other: &Category) -> Option<Category> {
        if self.is_subtype_of(other) {
            Some(*other)
        } else if other.is_subtype_of(self) {
            Some(*self)
        } else {
            None
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_chain() {
        assert!(Category::Table.is_subtype_of(&Category::View));
        assert!(Category::Table.is_subtype_of(&Category::Stream));
        assert!(Category::View.is_subtype_of(&Category::Stream));
        assert!(!Category::Stream.is_subtype_of(&Category::View));
        assert!(Category::Stream.is_supertype_of(&Category::Table));
    }

    #[test]
    fn test_common_supertype() {
        assert_eq!(
            Category::Table.common_supertype(&Category::Stream),
            Some(Category::Stream)
        );
        assert_eq!(
            Category::Json.common_supertype(&Category::Json),
            Some(Category::Json)
        );
        assert_eq!(Category::Json.common_supertype(&Category::Stream), None);
    }

    #[test]
    fn test_leaf_categories_never_unify() {
        assert_eq!(Category::Meta.common_supertype(&Category::Meta), None);
        assert_eq!(Category::Database.common_supertype(&Category::Database), None);
        assert!(!Category::Meta.is_value());
    }
}
