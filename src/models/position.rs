//! Key position value types.

use serde::{Deserialize, Serialize};

/// A key's resolved position: matrix row, column, and packed finger code.
///
/// All three components must fit in 4 bits (`[0, 15]`) to be representable
/// in a packed token; [`crate::packing::layout::pack`] rejects wider rows
/// and columns before encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyPosition {
    /// Matrix row (top row is 0)
    pub row: u8,
    /// Matrix column (leftmost is 0)
    pub col: u8,
    /// Packed finger code (see [`crate::models::Finger`])
    pub finger: u8,
}

impl KeyPosition {
    /// Creates a new position.
    #[must_use]
    pub const fn new(row: u8, col: u8, finger: u8) -> Self {
        Self { row, col, finger }
    }

    /// Row-major sort key: all of row 0 before row 1, ascending column
    /// within a row. This is the canonical catalog ordering.
    #[must_use]
    pub const fn sort_key(self) -> u16 {
        ((self.row as u16) << 8) + self.col as u16
    }
}

/// One key's entry as it appears in a layout file: position plus the
/// finger *label*, not yet resolved against a finger table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEntry {
    /// Matrix row
    pub row: u8,
    /// Matrix column
    pub col: u8,
    /// Finger label (e.g. "LI", "RT", "TB")
    pub finger: String,
}

impl KeyEntry {
    /// Creates a new entry.
    pub fn new(row: u8, col: u8, finger: impl Into<String>) -> Self {
        Self {
            row,
            col,
            finger: finger.into(),
        }
    }
}
