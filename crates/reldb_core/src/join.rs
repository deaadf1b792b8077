//! Natural join with partial-null reconciliation.
//!
//! Empty string values act as nulls: a column missing from one side, or
//! present with an empty value, is unconstrained for that pairing and takes
//! the other side's value, in the manner of an outer join on that attribute.

use tracing::trace;

use crate::relation::Relation;
use crate::scheme::Scheme;
use crate::tuple::Tuple;

impl Relation {
    /// Natural join, pairing every tuple of `self` with every tuple of
    /// `other`.
    ///
    /// The result scheme is `self`'s scheme followed by the columns unique to
    /// `other`; the result keeps `self`'s name. Joining a relation with an
    /// equal relation returns it unchanged, an exact-identity guarantee
    /// callers may rely on.
    pub fn joined_with(&self, other: &Relation) -> Relation {
        if self == other {
            return self.clone();
        }

        let merged = self.scheme.merged_with(&other.scheme);
        trace!(
            left = %self.name,
            right = %other.name,
            columns = merged.len(),
            "joining relations"
        );

        let mut result = Relation::new(self.name.clone(), merged.clone());
        for left in &self.contents {
            for right in &other.contents {
                if let Some(combined) = reconcile(&merged, self, left, other, right) {
                    result.add_tuple(combined);
                }
            }
        }

        result
    }
}

/// Build the combined tuple for one pairing, or None when any column holds
/// differing non-empty values on the two sides.
fn reconcile(
    merged: &Scheme,
    left: &Relation,
    left_tuple: &Tuple,
    right: &Relation,
    right_tuple: &Tuple,
) -> Option<Tuple> {
    let mut values = Vec::with_capacity(merged.len());

    for col in merged.columns() {
        let left_val = left
            .scheme
            .index_of(col)
            .and_then(|idx| left_tuple.value(idx))
            .unwrap_or("");
        let right_val = right
            .scheme
            .index_of(col)
            .and_then(|idx| right_tuple.value(idx))
            .unwrap_or("");

        let value = if left_val == right_val {
            left_val
        } else if right_val.is_empty() {
            left_val
        } else if left_val.is_empty() {
            right_val
        } else {
            return None;
        };
        values.push(value.to_string());
    }

    Some(Tuple::from(values))
}
