//! Between-span resolution.
//!
//! Given two keys on the same row, the between-span is the open interval of
//! keys strictly after `from` and strictly before `to`, in row order.
//!
//! The rule is directional: if `to` sits at or before `from` the span is empty.
//! Swapping the arguments does not give the reversed span, it gives nothing.
//!
//! ```text
//! row 0:  `  1 [2  3  4] 5  6  7  8  9  0  -  =
//!            ^from     ^to          between("1", "5") == ["2", "3", "4"]
//! ```

use thiserror::Error;
use tracing::warn;

use super::layout::{KeyLabel, Layout, RowIndex};

/// Reasons a pair of keys has no between-span.
///
/// Both variants are recoverable: the aggregator treats the pair as
/// contributing no keys and carries on with the rest of the list.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RangeError {
    /// A key is not on the layout.
    #[error("invalid key {key:?}: not on the keyboard layout")]
    InvalidKey { key: String },

    /// The two keys are on different rows.
    #[error("keys must be in the same row: from row {from_row} != to row {to_row}")]
    RowMismatch { from_row: RowIndex, to_row: RowIndex },
}

/// Resolves the between-span of `from` and `to` on the standard layout.
///
/// # Errors
///
/// See [`between_in`].
pub fn between(from: &str, to: &str) -> Result<Vec<KeyLabel>, RangeError> {
    between_in(Layout::standard(), from, to)
}

/// Resolves the between-span of `from` and `to` on `layout`.
///
/// Returns the keys strictly between the two, in row order.  An empty list is
/// a valid answer (adjacent keys, equal keys, or `to` before `from`).
///
/// # Errors
///
/// - [`RangeError::InvalidKey`] if either key is not on the layout.  `from` is
///   checked first, so when both are unknown the error names `from`.
/// - [`RangeError::RowMismatch`] if the keys are on different rows.
///
/// Both cases also emit a `warn` event.
pub fn between_in(layout: &Layout, from: &str, to: &str) -> Result<Vec<KeyLabel>, RangeError> {
    let result = resolve(layout, from, to);
    if let Err(ref e) = result {
        warn!(from, to, error = %e, "no between-span for key pair");
    }
    result
}

fn resolve(layout: &Layout, from: &str, to: &str) -> Result<Vec<KeyLabel>, RangeError> {
    let (from_row, from_col) = layout
        .position_of(from)
        .ok_or_else(|| RangeError::InvalidKey { key: from.to_string() })?;
    let (to_row, to_col) = layout
        .position_of(to)
        .ok_or_else(|| RangeError::InvalidKey { key: to.to_string() })?;

    if from_row != to_row {
        return Err(RangeError::RowMismatch { from_row, to_row });
    }

    // Reversed or equal positions leave an empty open interval.
    if to_col <= from_col {
        return Ok(Vec::new());
    }

    let row = layout.rows()[from_row];
    Ok(row[from_col + 1..to_col].to_vec())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
