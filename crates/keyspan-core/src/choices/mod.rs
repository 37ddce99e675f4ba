//! Choice list aggregation.
//!
//! The [`Aggregator`] turns a [`SelectionList`] into the aggregate result
//! string and tells a front-end which keys it may offer as "from" and "to"
//! options.
//!
//! # How a result is computed
//!
//! ```text
//! [{1,5}, {a,-}, {q,o}, {1,q}]
//!    │      │      │      │
//!    │   skipped   │   RowMismatch → contributes nothing
//!    ▼             ▼
//!  "234"  +   "wertyui"          = "234wertyui"
//! ```
//!
//! Every complete selection is resolved in list order.  A selection that fails
//! to resolve never stops the others from contributing.
//!
//! The aggregator never mutates the list; the front-end owns it and calls
//! [`Aggregator::recompute`] again after each edit.

use tracing::{debug, trace};

use crate::domain::layout::{KeyLabel, Layout};
use crate::domain::range::{between_in, RangeError};
use crate::domain::selection::SelectionList;

/// Outcome of one selection in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contribution {
    /// Position of the selection in its list.
    pub index: usize,
    pub status: ContributionStatus,
}

/// What a single selection contributed to the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContributionStatus {
    /// One or both fields are unset; skipped.
    Incomplete,
    /// Resolved to these keys (possibly none).
    Resolved(Vec<KeyLabel>),
    /// Could not be resolved; contributes nothing.
    Rejected(RangeError),
}

impl Contribution {
    /// Keys this selection adds to the result.
    pub fn keys(&self) -> &[KeyLabel] {
        match &self.status {
            ContributionStatus::Resolved(keys) => keys.as_slice(),
            _ => &[],
        }
    }
}

/// Resolves selection lists against a layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aggregator {
    layout: Layout,
}

impl Aggregator {
    /// Creates an aggregator over `layout`.
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    /// Creates an aggregator over the standard layout.
    pub fn standard() -> Self {
        Self::new(*Layout::standard())
    }

    /// The layout this aggregator resolves against.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Every key is a valid "from" choice.
    pub fn options_for_from(&self) -> Vec<KeyLabel> {
        self.layout.all_keys()
    }

    /// Valid "to" choices given the selected `from`.
    ///
    /// With no `from`, every key is offered.  Otherwise only the keys after
    /// `from` in its own row are offered, which rules out reversed and
    /// cross-row pairs before they reach the resolver.  A `from` that is not
    /// on the layout gets no options.
    pub fn options_for_to(&self, from: Option<&str>) -> Vec<KeyLabel> {
        match from {
            None => self.layout.all_keys(),
            Some(from) if !self.layout.contains(from) => {
                debug!(from, "\"from\" key is not on the layout; no \"to\" options");
                Vec::new()
            }
            Some(from) => self.layout.keys_after(from),
        }
    }

    /// Resolves every selection in `selections`, in list order.
    ///
    /// Returns one [`Contribution`] per selection, including incomplete ones.
    pub fn resolve_all(&self, selections: &SelectionList) -> Vec<Contribution> {
        selections
            .iter()
            .enumerate()
            .map(|(index, selection)| {
                let status = match selection.pair() {
                    None => {
                        trace!(index, "skipping incomplete selection");
                        ContributionStatus::Incomplete
                    }
                    Some((from, to)) => match between_in(&self.layout, from, to) {
                        Ok(keys) => ContributionStatus::Resolved(keys),
                        Err(e) => {
                            debug!(index, from, to, "selection contributes nothing");
                            ContributionStatus::Rejected(e)
                        }
                    },
                };
                Contribution { index, status }
            })
            .collect()
    }

    /// Computes the aggregate result string for `selections`.
    ///
    /// Concatenates the between-span of every complete selection, in list
    /// order, with no separators.  Incomplete, invalid, cross-row and
    /// reversed selections contribute nothing.
    pub fn recompute(&self, selections: &SelectionList) -> String {
        self.resolve_all(selections)
            .iter()
            .flat_map(|c| c.keys().iter().copied())
            .collect()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
