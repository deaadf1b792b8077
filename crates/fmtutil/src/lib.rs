//! Small helpers for formatting and displaying things.

use std::fmt;

/// Wrapper around a slice to display comma-separated items in the slice.
#[derive(Debug)]
pub struct DisplaySlice<'a, T>(pub &'a [T]);

impl<T: fmt::Display> fmt::Display for DisplaySlice<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, item) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

pub trait IntoDisplayableSlice<T> {
    /// Create a displayable wrapper around a slice of items.
    fn display_as_list(&self) -> DisplaySlice<'_, T>;
}

impl<T: fmt::Display> IntoDisplayableSlice<T> for [T] {
    fn display_as_list(&self) -> DisplaySlice<'_, T> {
        DisplaySlice(self)
    }
}

impl<T: fmt::Display> IntoDisplayableSlice<T> for Vec<T> {
    fn display_as_list(&self) -> DisplaySlice<'_, T> {
        DisplaySlice(self.as_slice())
    }
}
