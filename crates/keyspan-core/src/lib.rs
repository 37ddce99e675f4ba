//! # keyspan-core
//!
//! Shared library for keyspan containing the keyboard layout model, the
//! between-span resolver, and the choice list aggregator.
//!
//! This crate has zero dependencies on terminals, file systems, or UI
//! frameworks.  Front-ends own the selection list and call in here.
//!
//! # Architecture overview (for beginners)
//!
//! keyspan answers one question: "which keys sit strictly between these two
//! keys on the keyboard?"  A user picks any number of (from, to) pairs and
//! the answers for every pair are glued together into one result string.
//!
//! - **`domain`** – Pure data and lookups.  The [`Layout`] is the fixed
//!   QWERTY table; [`between`] resolves one pair; [`SelectionList`] is the
//!   ordered list of pairs a front-end edits.
//!
//! - **`choices`** – The [`Aggregator`]: filters incomplete pairs, resolves
//!   the rest in list order, and concatenates the keys.  It also tells a
//!   front-end which keys are valid "from" and "to" options.

pub mod choices;
pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `keyspan_core::Layout` instead of `keyspan_core::domain::layout::Layout`.
pub use choices::{Aggregator, Contribution, ContributionStatus};
pub use domain::layout::{KeyLabel, Layout, LayoutError, RowIndex};
pub use domain::range::{between, RangeError};
pub use domain::selection::{Selection, SelectionList};
