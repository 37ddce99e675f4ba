//! User selections: (from, to) key pairs and the ordered list that holds them.
//!
//! # Selection lifecycle (for beginners)
//!
//! Each selection starts empty.  Its two fields are set independently, in any
//! order, and re-selecting a field simply overwrites it:
//!
//! ```text
//! {from: -, to: -}  ──►  {from: a, to: -}  ──►  {from: a, to: b}
//!        │                                             ▲
//!        └──────────►  {from: -, to: b}  ──────────────┘
//! ```
//!
//! Only a selection with both fields set is *complete*; incomplete selections
//! are skipped by the aggregator without complaint.
//!
//! The list itself starts with one empty selection and only ever grows by
//! appending another empty one.  Order matters: it decides the order in which
//! contributions are concatenated.

use serde::{Deserialize, Serialize};

/// One user-chosen span.
///
/// Fields hold raw user input; they are only checked against the layout when
/// the selection is resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub from: Option<String>,
    pub to: Option<String>,
}

impl Selection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a complete selection.
    pub fn complete(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: Some(from.into()),
            to: Some(to.into()),
        }
    }

    /// Returns both keys if the selection is complete.
    pub fn pair(&self) -> Option<(&str, &str)> {
        match (&self.from, &self.to) {
            (Some(from), Some(to)) => Some((from.as_str(), to.as_str())),
            _ => None,
        }
    }

    /// Returns `true` if both fields are set.
    pub fn is_complete(&self) -> bool {
        self.pair().is_some()
    }
}

/// Ordered list of selections.
///
/// [`Default`] yields a list holding a single empty selection, which is the
/// starting state of every session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionList {
    selections: Vec<Selection>,
}

impl Default for SelectionList {
    fn default() -> Self {
        Self {
            selections: vec![Selection::new()],
        }
    }
}

impl SelectionList {
    /// Creates a list holding one empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of selections, complete or not.
    pub fn len(&self) -> usize {
        self.selections.len()
    }

    /// Returns `true` if the list holds no selections.
    ///
    /// Lists built through [`SelectionList::new`] are never empty.
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Returns the selection at `index`.
    pub fn get(&self, index: usize) -> Option<&Selection> {
        self.selections.get(index)
    }

    /// Iterates over all selections in list order.
    pub fn iter(&self) -> std::slice::Iter<'_, Selection> {
        self.selections.iter()
    }

    /// Appends a new empty selection and returns its index.
    pub fn push_empty(&mut self) -> usize {
        self.selections.push(Selection::new());
        self.selections.len() - 1
    }

    /// Sets the `from` key of the selection at `index`.
    ///
    /// Returns `false` (and changes nothing) if `index` is out of range.
    pub fn set_from(&mut self, index: usize, key: impl Into<String>) -> bool {
        match self.selections.get_mut(index) {
            Some(selection) => {
                selection.from = Some(key.into());
                true
            }
            None => false,
        }
    }

    /// Sets the `to` key of the selection at `index`.
    ///
    /// Returns `false` (and changes nothing) if `index` is out of range.
    pub fn set_to(&mut self, index: usize, key: impl Into<String>) -> bool {
        match self.selections.get_mut(index) {
            Some(selection) => {
                selection.to = Some(key.into());
                true
            }
            None => false,
        }
    }
}

impl From<Vec<Selection>> for SelectionList {
    fn from(selections: Vec<Selection>) -> Self {
        Self { selections }
    }
}

impl FromIterator<Selection> for SelectionList {
    fn from_iter<I: IntoIterator<Item = Selection>>(iter: I) -> Self {
        Self {
            selections: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SelectionList {
    type Item = &'a Selection;
    type IntoIter = std::slice::Iter<'a, Selection>;

    fn into_iter(self) -> Self::IntoIter {
        self.selections.iter()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
