//! ReQL expression tree definitions
//!
//! This crate defines the immutable term tree produced by the query builder.
//! Every [`Term`] carries a discriminator tag, an ordered list of children and
//! a result [`Category`]. The tree is the hand-off point to the wire serializer,
//! which walks it through [`Term::tag`] and [`Term::children`] or through its
//! `serde::Serialize` implementation.

mod category;
mod datum;
mod operation;
mod term;

pub use category::*;
pub use datum::*;
pub use operation::*;
pub use term::*;

/// Type alias for boxed terms
pub type BoxTerm = Box<Term>;
