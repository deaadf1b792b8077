use indexmap::IndexSet;

use crate::relation::Relation;
use crate::scheme::Scheme;

impl Relation {
    /// Rename every column named `old` to `new`.
    ///
    /// Falls through to [`rename_columns`](Relation::rename_columns), so a
    /// rename that would collide with an existing column, or one naming an
    /// absent column, returns an unchanged copy.
    pub fn rename_column(&self, old: &str, new: &str) -> Relation {
        let replacement: Scheme = self
            .scheme
            .columns()
            .map(|col| if col == old { new } else { col })
            .collect();
        self.rename_columns(&replacement)
    }

    /// Rename columns positionally by supplying a full replacement scheme.
    ///
    /// Empty entries keep the existing name at that position. The rename is
    /// all-or-nothing: a replacement whose length differs from the current
    /// scheme, one identical to it, or one producing duplicate column names
    /// returns an unchanged copy instead.
    pub fn rename_columns(&self, replacement: &Scheme) -> Relation {
        if replacement.len() != self.scheme.len() || *replacement == self.scheme {
            return self.clone();
        }

        let mut candidate = self.scheme.clone();
        for (idx, name) in replacement.columns().enumerate() {
            if !name.is_empty() {
                candidate.set(idx, name.to_string());
            }
        }

        let unique: IndexSet<&str> = candidate.columns().collect();
        if unique.len() != candidate.len() {
            return self.clone();
        }

        Relation {
            name: self.name.clone(),
            scheme: candidate,
            contents: self.contents.clone(),
        }
    }
}
