//! Category unification
//!
//! Branches of a conditional and operands of a union must agree on a result
//! category. A category unifies with another when one refines the other; the
//! more general one wins. `Database` and `Meta` never unify.

use log::debug;
use reql_ast::Category;
use reql_diagnostics::{ReqlError, Result};

/// Unify two branch categories
pub fn unify_pair(construct: &str, left: Category, right: Category) -> Result<Category> {
    left.common_supertype(&right).ok_or_else(|| {
        let err = ReqlError::incompatible_branches(construct, left, right);
        debug!("{}", err);
        err
    })
}

/// Unify any number of branch categories, left to right
///
/// Returns `None` for an empty input.
pub fn unify(
    construct: &str,
    categories: impl IntoIterator<Item = Category>,
) -> Result<Option<Category>> {
    let mut unified: Option<Category> = None;
    for category in categories {
        unified = Some(match unified {
            None => {
                // A single Meta/Database branch must still be rejected.
                unify_pair(construct, category, category)?
            }
            Some(current) => unify_pair(construct, current, category)?,
        });
    }
    Ok(unified)
}
