use tracing::debug;

use crate::relation::Relation;

impl Relation {
    /// Set union of two relations with exactly equal schemes.
    ///
    /// Schema-incompatible operands yield an empty relation carrying `self`'s
    /// name and scheme, not an error. Duplicates collapse.
    pub fn union_with(&self, other: &Relation) -> Relation {
        let mut result = Relation::new(self.name.clone(), self.scheme.clone());

        if self.scheme != other.scheme {
            debug!(
                left = %self.name,
                right = %other.name,
                "union of incompatible schemes, result is empty"
            );
            return result;
        }

        for tuple in self.contents.iter().chain(other.contents.iter()) {
            result.add_tuple(tuple.clone());
        }

        result
    }
}
