//! Tuple filtering by value constraints and column equivalence classes.
//!
//! Both predicate forms are index-based; the parser collaborator resolves
//! column names to positions before calling in. Out-of-range indices are
//! ignored rather than treated as failures, so stale or over-wide constraint
//! lists degrade silently.

use serde::{Deserialize, Serialize};

use crate::relation::Relation;

/// Requires a tuple to hold `value` at position `column`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueConstraint {
    pub column: usize,
    pub value: String,
}

impl ValueConstraint {
    pub fn new(column: usize, value: impl Into<String>) -> Self {
        ValueConstraint {
            column,
            value: value.into(),
        }
    }
}

/// Requires a set of columns to hold one common value.
///
/// An empty class is a wildcard: it selects every tuple.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquivalenceClass {
    pub columns: Vec<usize>,
}

impl EquivalenceClass {
    pub fn new(columns: Vec<usize>) -> Self {
        EquivalenceClass { columns }
    }
}

impl Relation {
    /// Keep the tuples matching every in-range constraint (conjunction).
    ///
    /// Constraints whose column index is out of range are skipped, never
    /// failures.
    pub fn select_by_value(&self, constraints: &[ValueConstraint]) -> Relation {
        let mut result = Relation::new(self.name.clone(), self.scheme.clone());

        for tuple in &self.contents {
            let keep = constraints.iter().all(|constraint| {
                if constraint.column >= self.column_count() {
                    return true;
                }
                tuple.value(constraint.column) == Some(constraint.value.as_str())
            });
            if keep {
                result.add_tuple(tuple.clone());
            }
        }

        result
    }

    /// Keep the tuples satisfying any of the given classes (disjunction).
    ///
    /// Within a class, every in-range column must hold the same value;
    /// out-of-range members are skipped when comparing, so a class whose
    /// members are all out of range matches vacuously. An empty class selects
    /// everything and stops evaluation of later classes.
    pub fn select_by_equivalence(&self, classes: &[EquivalenceClass]) -> Relation {
        let mut result = Relation::new(self.name.clone(), self.scheme.clone());

        for class in classes {
            if class.columns.is_empty() {
                result.contents = self.contents.clone();
                break;
            }

            for tuple in &self.contents {
                let mut common: Option<&str> = None;
                let mut keep = true;

                for &column in &class.columns {
                    let Some(value) = tuple.value(column) else {
                        continue;
                    };
                    match common {
                        None => common = Some(value),
                        Some(expected) if expected != value => {
                            keep = false;
                            break;
                        }
                        Some(_) => {}
                    }
                }

                if keep {
                    result.add_tuple(tuple.clone());
                }
            }
        }

        result
    }
}
