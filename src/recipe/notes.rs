//! Recipe-level notes
//!
//! `Notes` is never empty. The recipe stores `Option<Notes>`, so the
//! "present but empty" state cannot be built by any code path.

use serde::Serialize;

/// A non-empty, ordered list of note lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Notes(Vec<String>);

impl Notes {
    /// Wrap note lines; `None` when there are none
    pub fn new(lines: Vec<String>) -> Option<Self> {
        if lines.is_empty() {
            None
        } else {
            Some(Self(lines))
        }
    }

    /// A single note
    pub fn one(line: impl Into<String>) -> Self {
        Self(vec![line.into()])
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[allow(clippy::len_without_is_empty)] // never empty
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&String> {
        self.0.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut String> {
        self.0.get_mut(index)
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.0.push(line.into());
    }

    /// Remove the note at `index`, consuming the list.
    ///
    /// Returns `None` when the last note was removed. An out-of-range
    /// index hands the list back untouched.
    pub fn remove(mut self, index: usize) -> Option<Self> {
        if index < self.0.len() {
            self.0.remove(index);
        }
        Self::new(self.0)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Notes {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
