//! Projection, built on in-place scheme surgery.
//!
//! `project` narrows and reorders a relation's columns by repeatedly swapping
//! a wanted column into its target position, then truncating. The surgery
//! primitives mutate the relation they are called on; `project` itself only
//! applies them to the private copy it assembles.

use std::collections::BTreeSet;

use indexmap::IndexSet;

use crate::relation::Relation;
use crate::scheme::Scheme;
use crate::tuple::Tuple;

impl Relation {
    /// Narrow and/or reorder columns to match `target`.
    ///
    /// The target is cleaned first: duplicate names keep their first
    /// occurrence, and names absent from the current scheme are dropped. The
    /// result carries exactly the cleaned target's columns, in target order,
    /// with every tuple narrowed to match. Projecting everything away yields
    /// an empty relation rather than a relation holding one zero-column row.
    pub fn project(&self, target: &Scheme) -> Relation {
        let cleaned = self.cleaned_target(target);

        let mut result = self.clone();
        for (new_idx, col) in cleaned.columns().enumerate() {
            // Positions shift as columns swap into place, so look the column
            // up in the scheme as it currently stands.
            if let Some(old_idx) = result.scheme.index_of(col) {
                result.swap_columns(old_idx, new_idx);
            }
        }
        result.keep_first_columns(cleaned.len());

        result
    }

    /// Dedupe the target (first occurrence wins) and drop names not present
    /// in the current scheme.
    fn cleaned_target(&self, target: &Scheme) -> Scheme {
        let deduped: IndexSet<&str> = target.columns().collect();
        deduped
            .into_iter()
            .filter(|col| self.scheme.contains(col))
            .collect()
    }

    /// Exchange the scheme entries and every tuple's values at positions `i`
    /// and `j`.
    ///
    /// Indices past the last column clamp to it; swapping a position with
    /// itself, or anything on a zero-column relation, is a no-op.
    pub fn swap_columns(&mut self, i: usize, j: usize) {
        let count = self.column_count();
        if count == 0 {
            return;
        }
        let i = i.min(count - 1);
        let j = j.min(count - 1);
        if i == j {
            return;
        }

        self.scheme.swap(i, j);
        self.contents = self
            .contents
            .iter()
            .cloned()
            .map(|mut tuple| {
                tuple.swap(i, j);
                tuple
            })
            .collect();
    }

    /// Truncate the scheme and every tuple to the first `len` columns.
    ///
    /// A no-op when `len` covers the whole scheme. If truncation collapses
    /// the contents to a single zero-length tuple, that tuple is dropped so
    /// the result is a genuinely empty relation.
    pub fn keep_first_columns(&mut self, len: usize) {
        if len >= self.column_count() {
            return;
        }

        self.scheme.truncate(len);
        let mut stripped: BTreeSet<Tuple> = self
            .contents
            .iter()
            .cloned()
            .map(|mut tuple| {
                tuple.truncate(len);
                tuple
            })
            .collect();

        if stripped.len() == 1 && stripped.iter().next().is_some_and(Tuple::is_empty) {
            stripped.clear();
        }
        self.contents = stripped;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuple(values: &[&str]) -> Tuple {
        values.iter().copied().collect()
    }

    fn scheme(cols: &[&str]) -> Scheme {
        cols.iter().copied().collect()
    }

    fn relation() -> Relation {
        let mut r = Relation::new("R", scheme(&["A", "B", "C"]));
        r.add_tuple(tuple(&["1", "2", "3"]));
        r.add_tuple(tuple(&["4", "5", "6"]));
        r
    }

    #[test]
    fn project_narrows_to_single_column() {
        let r = relation();
        let projected = r.project(&scheme(&["B"]));
        assert_eq!(scheme(&["B"]), *projected.scheme());
        assert_eq!(vec![tuple(&["2"]), tuple(&["5"])], projected.list_contents());
    }

    #[test]
    fn project_reorders_columns() {
        let r = relation();
        let projected = r.project(&scheme(&["C", "A"]));
        assert_eq!(scheme(&["C", "A"]), *projected.scheme());
        assert_eq!(
            vec![tuple(&["3", "1"]), tuple(&["6", "4"])],
            projected.list_contents()
        );
    }

    #[test]
    fn project_full_permutation_round_trips() {
        let r = relation();
        let permuted = r.project(&scheme(&["C", "A", "B"]));
        assert_eq!(scheme(&["C", "A", "B"]), *permuted.scheme());
        let back = permuted.project(&scheme(&["A", "B", "C"]));
        assert_eq!(r, back);
    }

    #[test]
    fn project_is_idempotent() {
        let r = relation();
        let target = scheme(&["B", "A"]);
        let once = r.project(&target);
        let twice = once.project(&target);
        assert_eq!(once, twice);
    }

    #[test]
    fn project_dedupes_target_first_occurrence_wins() {
        let r = relation();
        let projected = r.project(&scheme(&["B", "A", "B"]));
        assert_eq!(scheme(&["B", "A"]), *projected.scheme());
    }

    #[test]
    fn project_drops_unknown_columns() {
        let r = relation();
        let projected = r.project(&scheme(&["B", "Z"]));
        assert_eq!(scheme(&["B"]), *projected.scheme());
    }

    #[test]
    fn project_to_nothing_leaves_empty_relation() {
        let r = relation();
        let projected = r.project(&Scheme::empty());
        assert!(projected.scheme().is_empty());
        assert!(projected.contents().is_empty());

        let projected = r.project(&scheme(&["Z"]));
        assert!(projected.contents().is_empty());
    }

    #[test]
    fn project_does_not_mutate_receiver() {
        let r = relation();
        let copy = r.clone();
        let _ = r.project(&scheme(&["B"]));
        assert_eq!(copy, r);
    }

    #[test]
    fn swap_columns_clamps_out_of_range_indices() {
        let mut r = relation();
        r.swap_columns(0, 99);
        assert_eq!(scheme(&["C", "B", "A"]), *r.scheme());
        assert_eq!(
            vec![tuple(&["3", "2", "1"]), tuple(&["6", "5", "4"])],
            r.list_contents()
        );
    }

    #[test]
    fn swap_columns_self_swap_is_noop() {
        let mut r = relation();
        let copy = r.clone();
        r.swap_columns(1, 1);
        assert_eq!(copy, r);
        // Both clamp to the last column.
        r.swap_columns(7, 99);
        assert_eq!(copy, r);
    }

    #[test]
    fn swap_columns_on_zero_column_relation_is_noop() {
        let mut r = Relation::new("R", Scheme::empty());
        r.swap_columns(0, 1);
        assert!(r.scheme().is_empty());
    }

    #[test]
    fn keep_first_columns_truncates_scheme_and_tuples() {
        let mut r = relation();
        r.keep_first_columns(2);
        assert_eq!(scheme(&["A", "B"]), *r.scheme());
        assert_eq!(vec![tuple(&["1", "2"]), tuple(&["4", "5"])], r.list_contents());
    }

    #[test]
    fn keep_first_columns_past_end_is_noop() {
        let mut r = relation();
        let copy = r.clone();
        r.keep_first_columns(3);
        assert_eq!(copy, r);
        r.keep_first_columns(99);
        assert_eq!(copy, r);
    }

    #[test]
    fn keep_first_columns_to_zero_drops_trivial_row() {
        let mut r = relation();
        r.keep_first_columns(0);
        assert!(r.scheme().is_empty());
        assert!(r.contents().is_empty());
    }

    #[test]
    fn keep_first_columns_collapses_duplicates() {
        let mut r = Relation::new("R", scheme(&["A", "B"]));
        r.add_tuple(tuple(&["1", "2"]));
        r.add_tuple(tuple(&["1", "3"]));
        r.keep_first_columns(1);
        assert_eq!(vec![tuple(&["1"])], r.list_contents());
    }
}
