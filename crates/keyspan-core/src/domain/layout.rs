//! Keyboard layout domain entity.
//!
//! The layout is an ordered list of rows, top to bottom, each an ordered list
//! of key labels, left to right.  It is defined once as a literal table and
//! never mutated, so every lookup is a pure scan over static data.
//!
//! ```text
//! row 0:  `  1  2  3  4  5  6  7  8  9  0  -  =
//! row 1:  q  w  e  r  t  y  u  i  o  p  [  ]  \
//! row 2:  a  s  d  f  g  h  j  k  l  ;  '
//! row 3:  z  x  c  v  b  n  m  ,  .  /
//! ```

use std::collections::HashMap;
use thiserror::Error;

/// Label identifying one physical key (e.g. `"q"`, `"1"`, `";"`).
///
/// Labels are unique within a layout.
pub type KeyLabel = &'static str;

/// Zero-based index of a row, counted from the top of the keyboard.
pub type RowIndex = usize;

/// The standard US QWERTY character rows.
const STANDARD_ROWS: &[&[KeyLabel]] = &[
    &["`", "1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "-", "="],
    &["q", "w", "e", "r", "t", "y", "u", "i", "o", "p", "[", "]", "\\"],
    &["a", "s", "d", "f", "g", "h", "j", "k", "l", ";", "'"],
    &["z", "x", "c", "v", "b", "n", "m", ",", ".", "/"],
];

static STANDARD: Layout = Layout::new(STANDARD_ROWS);

/// Errors detected when validating a layout table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    /// The same label appears twice, in the same row or in two rows.
    #[error("duplicate key {key:?} in rows {first_row} and {second_row}")]
    DuplicateKey {
        key: KeyLabel,
        first_row: RowIndex,
        second_row: RowIndex,
    },

    /// A row contains an empty label.
    #[error("empty key label in row {row}")]
    EmptyKey { row: RowIndex },
}

/// An immutable keyboard layout.
///
/// Cheap to copy: it only holds a reference to a static table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    rows: &'static [&'static [KeyLabel]],
}

impl Layout {
    /// Wraps a static row table.
    ///
    /// The table is not checked here; call [`Layout::validate`] for tables
    /// that did not come from this crate.
    pub const fn new(rows: &'static [&'static [KeyLabel]]) -> Self {
        Self { rows }
    }

    /// Returns the process-wide standard QWERTY layout.
    pub fn standard() -> &'static Layout {
        &STANDARD
    }

    /// Checks that every label is non-empty and appears in at most one place.
    ///
    /// # Errors
    ///
    /// Returns the first [`LayoutError`] found, scanning rows top to bottom.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let mut seen: HashMap<KeyLabel, RowIndex> = HashMap::with_capacity(self.len());
        for (row_index, row) in self.rows.iter().enumerate() {
            for &key in row.iter() {
                if key.is_empty() {
                    return Err(LayoutError::EmptyKey { row: row_index });
                }
                if let Some(&first_row) = seen.get(key) {
                    return Err(LayoutError::DuplicateKey {
                        key,
                        first_row,
                        second_row: row_index,
                    });
                }
                seen.insert(key, row_index);
            }
        }
        Ok(())
    }

    /// Returns all rows, top to bottom.
    pub fn rows(&self) -> &'static [&'static [KeyLabel]] {
        self.rows
    }

    /// Returns the index of the row containing `key`, or `None` if no row
    /// contains it.
    pub fn row_index_of(&self, key: &str) -> Option<RowIndex> {
        self.rows.iter().position(|row| row.iter().any(|&k| k == key))
    }

    /// Returns `(row, column)` of `key`, or `None` if it is not on the layout.
    pub fn position_of(&self, key: &str) -> Option<(RowIndex, usize)> {
        self.rows.iter().enumerate().find_map(|(row_index, row)| {
            row.iter()
                .position(|&k| k == key)
                .map(|column| (row_index, column))
        })
    }

    /// Returns `true` if `key` is on the layout.
    pub fn contains(&self, key: &str) -> bool {
        self.row_index_of(key).is_some()
    }

    /// Total number of keys across all rows.
    pub fn len(&self) -> usize {
        self.rows.iter().map(|row| row.len()).sum()
    }

    /// Returns `true` if the layout has no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flattens all rows in row order, each row left to right.
    pub fn all_keys(&self) -> Vec<KeyLabel> {
        self.rows.iter().flat_map(|row| row.iter().copied()).collect()
    }

    /// Returns the keys in `key`'s row strictly after `key`, in row order.
    ///
    /// Returns an empty list if `key` is not on the layout.
    pub fn keys_after(&self, key: &str) -> Vec<KeyLabel> {
        match self.position_of(key) {
            Some((row_index, column)) => self.rows[row_index][column + 1..].to_vec(),
            None => Vec::new(),
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        STANDARD
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
