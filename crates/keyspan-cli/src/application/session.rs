//! ChoiceSession: the owner of a user's selection list.
//!
//! `keyspan_core` never mutates a [`SelectionList`]; something outside it has
//! to hold the list, apply the user's edits, and ask for a new result after
//! each one.  [`ChoiceSession`] is that something.
//!
//! # Event flow (for beginners)
//!
//! ```text
//! user action ──► SessionEvent ──► ChoiceSession::apply
//!                                     ├─ mutate the list (one edit)
//!                                     └─ Aggregator::recompute ──► result
//! ```
//!
//! Events are applied one at a time and each runs to completion before the
//! next is accepted.  The stored result is always the one computed from the
//! current list; it is replaced wholesale, never patched.

use keyspan_core::{Aggregator, KeyLabel, SelectionList};
use thiserror::Error;
use tracing::debug;

/// A single user edit to the selection list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Sets (or overwrites) the `from` key of the selection at `index`.
    SetFrom { index: usize, key: String },
    /// Sets (or overwrites) the `to` key of the selection at `index`.
    SetTo { index: usize, key: String },
    /// Appends a new empty selection.
    AddSelection,
}

/// Errors returned when an event cannot be applied.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The event referenced a selection that does not exist.
    #[error("no selection #{index}: the list has {len} selection(s)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Holds a selection list and its current aggregate result.
#[derive(Debug, Clone)]
pub struct ChoiceSession {
    aggregator: Aggregator,
    selections: SelectionList,
    result: String,
}

impl Default for ChoiceSession {
    fn default() -> Self {
        Self::new(Aggregator::standard())
    }
}

impl ChoiceSession {
    /// Starts a session with one empty selection.
    pub fn new(aggregator: Aggregator) -> Self {
        Self::with_selections(aggregator, SelectionList::new())
    }

    /// Starts a session from an existing list.
    pub fn with_selections(aggregator: Aggregator, selections: SelectionList) -> Self {
        let result = aggregator.recompute(&selections);
        Self {
            aggregator,
            selections,
            result,
        }
    }

    /// Applies one event and recomputes the result.
    ///
    /// Returns the new result.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::IndexOutOfRange`] if a `SetFrom`/`SetTo` event
    /// names a selection that does not exist.  The list and result are left
    /// unchanged in that case.
    pub fn apply(&mut self, event: SessionEvent) -> Result<&str, SessionError> {
        let len = self.selections.len();
        match event {
            SessionEvent::SetFrom { index, key } => {
                debug!(index, key = %key, "set from");
                if !self.selections.set_from(index, key) {
                    return Err(SessionError::IndexOutOfRange { index, len });
                }
            }
            SessionEvent::SetTo { index, key } => {
                debug!(index, key = %key, "set to");
                if !self.selections.set_to(index, key) {
                    return Err(SessionError::IndexOutOfRange { index, len });
                }
            }
            SessionEvent::AddSelection => {
                let index = self.selections.push_empty();
                debug!(index, "added selection");
            }
        }

        self.result = self.aggregator.recompute(&self.selections);
        Ok(&self.result)
    }

    /// The current result.
    pub fn result(&self) -> &str {
        &self.result
    }

    /// The current selection list.
    pub fn selections(&self) -> &SelectionList {
        &self.selections
    }

    /// The aggregator this session recomputes with.
    pub fn aggregator(&self) -> &Aggregator {
        &self.aggregator
    }

    /// Returns the `(from, to)` option lists for the selection at `index`.
    ///
    /// The `to` options depend on the selection's current `from`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::IndexOutOfRange`] if `index` does not exist.
    pub fn options(&self, index: usize) -> Result<(Vec<KeyLabel>, Vec<KeyLabel>), SessionError> {
        let selection = self
            .selections
            .get(index)
            .ok_or(SessionError::IndexOutOfRange {
                index,
                len: self.selections.len(),
            })?;
        Ok((
            self.aggregator.options_for_from(),
            self.aggregator.options_for_to(selection.from.as_deref()),
        ))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn set_from(index: usize, key: &str) -> SessionEvent {
        SessionEvent::SetFrom {
            index,
            key: key.to_string(),
        }
    }

    fn set_to(index: usize, key: &str) -> SessionEvent {
        SessionEvent::SetTo {
            index,
            key: key.to_string(),
        }
    }

    #[test]
    fn test_new_session_has_one_empty_selection_and_empty_result() {
        let session = ChoiceSession::default();
        assert_eq!(session.selections().len(), 1);
        assert_eq!(session.result(), "");
    }

    #[test]
    fn test_apply_recomputes_after_each_edit() {
        // Arrange
        let mut session = ChoiceSession::default();

        // Act / Assert
        assert_eq!(session.apply(set_from(0, "1")), Ok(""));
        assert_eq!(session.apply(set_to(0, "5")), Ok("234"));
        assert_eq!(session.apply(SessionEvent::AddSelection), Ok("234"));
        assert_eq!(session.apply(set_from(1, "q")), Ok("234"));
        assert_eq!(session.apply(set_to(1, "o")), Ok("234wertyui"));
        assert_eq!(session.result(), "234wertyui");
    }

    #[test]
    fn test_apply_out_of_range_leaves_session_unchanged() {
        // Arrange
        let mut session = ChoiceSession::default();
        session.apply(set_from(0, "a")).unwrap();
        session.apply(set_to(0, "f")).unwrap();
        let before = session.selections().clone();

        // Act
        let err = session.apply(set_to(4, "g"));

        // Assert
        assert_eq!(err, Err(SessionError::IndexOutOfRange { index: 4, len: 1 }));
        assert_eq!(session.selections(), &before);
        assert_eq!(session.result(), "sd");
    }

    #[test]
    fn test_rejected_pair_is_not_a_session_error() {
        let mut session = ChoiceSession::default();
        session.apply(set_from(0, "1")).unwrap();
        assert_eq!(session.apply(set_to(0, "q")), Ok(""));
    }

    #[test]
    fn test_options_follow_current_from() {
        // Arrange
        let mut session = ChoiceSession::default();

        // Act
        let (_, to_before) = session.options(0).unwrap();
        session.apply(set_from(0, "k")).unwrap();
        let (from_after, to_after) = session.options(0).unwrap();

        // Assert
        assert_eq!(to_before.len(), 47);
        assert_eq!(from_after.len(), 47);
        assert_eq!(to_after, vec!["l", ";", "'"]);
    }

    #[test]
    fn test_options_for_missing_index_is_error() {
        let session = ChoiceSession::default();
        assert_eq!(
            session.options(2),
            Err(SessionError::IndexOutOfRange { index: 2, len: 1 })
        );
    }

    #[test]
    fn test_with_selections_computes_initial_result() {
        let list: SelectionList = vec![keyspan_core::Selection::complete("z", "v")].into();
        let session = ChoiceSession::with_selections(Aggregator::standard(), list);
        assert_eq!(session.result(), "xc");
    }
}
