use serde::{Deserialize, Serialize};

/// A single row of values, positionally aligned to a relation's scheme.
///
/// Values compare lexicographically, giving tuple sets a stable iteration
/// order derived purely from the values themselves.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Tuple {
    values: Vec<String>,
}

impl Tuple {
    pub const fn empty() -> Self {
        Tuple { values: Vec::new() }
    }

    pub fn new(values: Vec<String>) -> Self {
        Tuple { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the value at a position, None if out of range.
    pub fn value(&self, idx: usize) -> Option<&str> {
        self.values.get(idx).map(|v| v.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|v| v.as_str())
    }

    pub(crate) fn swap(&mut self, i: usize, j: usize) {
        self.values.swap(i, j);
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.values.truncate(len);
    }
}

impl From<Vec<String>> for Tuple {
    fn from(values: Vec<String>) -> Self {
        Tuple { values }
    }
}

impl<S: Into<String>> FromIterator<S> for Tuple {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Tuple {
            values: iter.into_iter().map(Into::into).collect(),
        }
    }
}
