use std::fmt;

use fmtutil::IntoDisplayableSlice;
use serde::{Deserialize, Serialize};

/// An ordered list of column names defining a relation's shape.
///
/// Position matters: tuples align to a scheme by index, and scheme equality
/// requires the same names in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scheme {
    columns: Vec<String>,
}

impl Scheme {
    pub const fn empty() -> Self {
        Scheme {
            columns: Vec::new(),
        }
    }

    pub fn new(columns: Vec<String>) -> Self {
        Scheme { columns }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Get the column name at a position, None if out of range.
    pub fn column(&self, idx: usize) -> Option<&str> {
        self.columns.get(idx).map(|c| c.as_str())
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.as_str())
    }

    /// Position of a column by name, first occurrence.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Merge for a natural join result: self's columns in order, followed by
    /// the columns unique to `other`.
    pub fn merged_with(&self, other: &Scheme) -> Scheme {
        let mut columns = self.columns.clone();
        for col in other.columns() {
            if !self.contains(col) {
                columns.push(col.to_string());
            }
        }
        Scheme { columns }
    }

    pub(crate) fn set(&mut self, idx: usize, name: String) {
        self.columns[idx] = name;
    }

    pub(crate) fn swap(&mut self, i: usize, j: usize) {
        self.columns.swap(i, j);
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.columns.truncate(len);
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.columns.display_as_list())
    }
}

impl From<Vec<String>> for Scheme {
    fn from(columns: Vec<String>) -> Self {
        Scheme { columns }
    }
}

impl<S: Into<String>> FromIterator<S> for Scheme {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Scheme {
            columns: iter.into_iter().map(Into::into).collect(),
        }
    }
}
