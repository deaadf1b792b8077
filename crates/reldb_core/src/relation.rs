use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scheme::Scheme;
use crate::tuple::Tuple;

#[derive(Debug, thiserror::Error)]
pub enum RelationError {
    #[error("tuple arity mismatch: expected {expected}, got {got}")]
    TupleArity { expected: usize, got: usize },
}

/// A named, duplicate-free set of tuples sharing one scheme.
///
/// The content set is ordered by tuple value, so iteration and
/// [`list_contents`](Relation::list_contents) are deterministic. Algebraic
/// operators never mutate their receiver; each returns a new relation. The
/// only mutating methods are tuple insertion, renaming the relation itself,
/// and the in-place scheme surgery primitives, all of which take `&mut self`.
///
/// Two relations are equal iff name, scheme, and full content set are equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    pub(crate) name: String,
    pub(crate) scheme: Scheme,
    pub(crate) contents: BTreeSet<Tuple>,
}

impl Relation {
    /// Create an empty relation with the given name and scheme.
    pub fn new(name: impl Into<String>, scheme: Scheme) -> Relation {
        Relation {
            name: name.into(),
            scheme,
            contents: BTreeSet::new(),
        }
    }

    /// Create a relation from some number of rows.
    ///
    /// All rows must match the scheme's arity. Duplicate rows collapse.
    pub fn try_from_rows<I>(
        name: impl Into<String>,
        scheme: Scheme,
        rows: I,
    ) -> Result<Relation, RelationError>
    where
        I: IntoIterator<Item = Tuple>,
    {
        let mut relation = Relation::new(name, scheme);
        for row in rows {
            if row.len() != relation.column_count() {
                return Err(RelationError::TupleArity {
                    expected: relation.column_count(),
                    got: row.len(),
                });
            }
            relation.contents.insert(row);
        }
        Ok(relation)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    pub fn column_count(&self) -> usize {
        self.scheme.len()
    }

    /// Insert a tuple, returning false (and leaving the relation unchanged)
    /// when the tuple's length does not match the column count.
    ///
    /// Inserting an already-present tuple is a successful no-op.
    pub fn add_tuple(&mut self, tuple: Tuple) -> bool {
        if tuple.len() != self.column_count() {
            return false;
        }
        self.contents.insert(tuple);
        true
    }

    /// Borrowed view of the content set, ordered by tuple value.
    pub fn contents(&self) -> &BTreeSet<Tuple> {
        &self.contents
    }

    /// Contents as an owned sequence, in the set's deterministic order.
    pub fn list_contents(&self) -> Vec<Tuple> {
        self.contents.iter().cloned().collect()
    }

    /// Render a tuple as `"col1=val1, col2=val2, ..."` against this
    /// relation's scheme.
    ///
    /// Returns an empty string when the tuple's length does not match the
    /// column count.
    pub fn tuple_string(&self, tuple: &Tuple) -> String {
        if tuple.len() != self.column_count() {
            return String::new();
        }

        let mut buf = String::new();
        for (idx, (col, val)) in self.scheme.columns().zip(tuple.values()).enumerate() {
            if idx > 0 {
                buf.push_str(", ");
            }
            buf.push_str(col);
            buf.push('=');
            buf.push_str(val);
        }
        buf
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.scheme)?;
        for tuple in &self.contents {
            write!(f, "\n  {}", self.tuple_string(tuple))?;
        }
        Ok(())
    }
}
