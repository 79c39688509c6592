//! Databases, tables and administrative commands

use log::trace;
use reql_ast::{Category, MetaOp, Term, TermKind};
use reql_types::TableHandle;

use crate::QueryBuilder;

impl QueryBuilder {
    /// Reference to database `name`
    pub fn db(&self, name: impl Into<String>) -> Term {
        Term::new(TermKind::Database(name.into()), Category::Database)
    }

    /// Table `name` in the default database
    pub fn table(&self, name: impl Into<String>) -> TableHandle {
        TableHandle::new(None, name)
    }

    /// Table `name` in database `db`
    pub fn table_in(&self, db: impl Into<String>, name: impl Into<String>) -> TableHandle {
        TableHandle::new(Some(db.into()), name)
    }

    pub fn db_create(&self, name: impl Into<String>) -> Term {
        meta(MetaOp::DbCreate { name: name.into() })
    }

    pub fn db_drop(&self, name: impl Into<String>) -> Term {
        meta(MetaOp::DbDrop { name: name.into() })
    }

    pub fn db_list(&self) -> Term {
        meta(MetaOp::DbList)
    }

    /// Create a table; the primary key falls back to the configured default
    pub fn table_create(
        &self,
        db: Option<String>,
        name: impl Into<String>,
        primary_key: Option<String>,
    ) -> Term {
        let primary_key = primary_key.unwrap_or_else(|| self.config().default_primary_key.clone());
        meta(MetaOp::TableCreate {
            db,
            name: name.into(),
            primary_key,
        })
    }

    pub fn table_drop(&self, db: Option<String>, name: impl Into<String>) -> Term {
        meta(MetaOp::TableDrop {
            db,
            name: name.into(),
        })
    }

    pub fn table_list(&self, db: Option<String>) -> Term {
        meta(MetaOp::TableList { db })
    }
}

fn meta(op: MetaOp) -> Term {
    trace!("meta command {}", op.name());
    Term::new(TermKind::Meta(op), Category::Meta)
}
