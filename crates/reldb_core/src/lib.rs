//! Core relational algebra for reldb.
//!
//! A [`Relation`] is a named set of string [`Tuple`]s sharing one ordered
//! [`Scheme`] of column names. The algebraic operators (rename, select,
//! project, join, union) are pure: each takes its operands by reference and
//! returns a freshly constructed relation. Tuple sets iterate in a stable,
//! value-derived order so listings are reproducible.
//!
//! Parsing query syntax into constraints and target schemes, and formatting
//! results for display, belong to external collaborators. The only formatting
//! hook exposed here is [`Relation::tuple_string`].

pub mod relation;
pub mod scheme;
pub mod select;
pub mod tuple;

mod join;
mod project;
mod rename;
mod union;

pub use relation::{Relation, RelationError};
pub use scheme::Scheme;
pub use select::{EquivalenceClass, ValueConstraint};
pub use tuple::Tuple;
