//! Canonical packing of a whole key map.
//!
//! A packed layout is the concatenation of `label + token` for every key,
//! ordered row-major (all of row 0 before row 1, ascending column within a
//! row) with no delimiters. The ordering makes the output canonical: two
//! key maps with the same (label, position) associations pack identically
//! no matter what order their entries iterate in.

use crate::models::{FingerTable, KeyEntry, KeyPosition};
use crate::packing::position::{self, TokenError};
use std::collections::HashMap;
use std::fmt;

/// Error packing one layout's key map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackError {
    /// A key referenced a finger label absent from the finger table
    UnknownFinger {
        /// Label of the key whose entry failed
        key: String,
        /// The unrecognized finger label
        label: String,
    },
    /// A key's row or column does not fit in the token's 4-bit fields
    PositionOutOfRange {
        /// Label of the key whose entry failed
        key: String,
        /// Matrix row of the entry
        row: u8,
        /// Matrix column of the entry
        col: u8,
    },
}

impl fmt::Display for PackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFinger { key, label } => {
                write!(f, "key '{key}' uses unknown finger label '{label}'")
            }
            Self::PositionOutOfRange { key, row, col } => write!(
                f,
                "key '{key}' at ({row}, {col}) does not fit the 4-bit position range"
            ),
        }
    }
}

impl std::error::Error for PackError {}

/// Error unpacking a packed layout string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnpackError {
    /// A zero label width can never delimit entries
    ZeroLabelWidth,
    /// The packed string's length is not a multiple of the entry width
    BadLength {
        /// Length of the packed string in characters
        found: usize,
        /// Width of one `label + token` entry
        entry_width: usize,
    },
    /// A position token inside the string failed to decode
    Token(TokenError),
}

impl fmt::Display for UnpackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLabelWidth => write!(f, "label width must be at least 1"),
            Self::BadLength { found, entry_width } => write!(
                f,
                "packed layout length {found} is not a multiple of the entry width {entry_width}"
            ),
            Self::Token(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for UnpackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Token(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TokenError> for UnpackError {
    fn from(err: TokenError) -> Self {
        Self::Token(err)
    }
}

/// Packs a key map into its canonical catalog string.
///
/// Every entry's finger label is resolved through `fingers`, the position
/// is encoded as a token, and entries are concatenated in row-major order.
/// Entries that tie on (row, col) keep their relative iteration order
/// (stable sort); legitimate layouts never share a position, so the output
/// is order-independent for well-formed input.
///
/// # Errors
///
/// Fails atomically (no partial string) with [`PackError::UnknownFinger`]
/// for a label missing from the table, or
/// [`PackError::PositionOutOfRange`] for a row or column above 15.
pub fn pack(keys: &HashMap<String, KeyEntry>, fingers: &FingerTable) -> Result<String, PackError> {
    let mut entries: Vec<(String, u16)> = Vec::with_capacity(keys.len());

    for (key, entry) in keys {
        let finger =
            fingers
                .code(&entry.finger)
                .ok_or_else(|| PackError::UnknownFinger {
                    key: key.clone(),
                    label: entry.finger.clone(),
                })?;
        if entry.row > 0xf || entry.col > 0xf {
            return Err(PackError::PositionOutOfRange {
                key: key.clone(),
                row: entry.row,
                col: entry.col,
            });
        }

        let position = KeyPosition::new(entry.row, entry.col, finger);
        let mut packed_key = String::with_capacity(key.len() + 3);
        packed_key.push_str(key);
        packed_key.push_str(&position::encode(position));
        entries.push((packed_key, position.sort_key()));
    }

    // sort_by_key is stable, preserving iteration order for (row, col) ties
    entries.sort_by_key(|(_, order)| *order);

    Ok(entries.into_iter().map(|(packed_key, _)| packed_key).collect())
}

/// Splits a packed layout string back into a key map.
///
/// The wire format carries no delimiters, so the caller supplies the fixed
/// label width (1 for catalogs produced from single-character key labels).
///
/// # Errors
///
/// Fails if the string's length is not a whole number of entries or if any
/// token is malformed.
pub fn unpack(
    packed: &str,
    label_width: usize,
) -> Result<HashMap<String, KeyPosition>, UnpackError> {
    if label_width == 0 {
        return Err(UnpackError::ZeroLabelWidth);
    }

    let chars: Vec<char> = packed.chars().collect();
    let entry_width = label_width + crate::constants::TOKEN_WIDTH;
    if chars.len() % entry_width != 0 {
        return Err(UnpackError::BadLength {
            found: chars.len(),
            entry_width,
        });
    }

    let mut keys = HashMap::with_capacity(chars.len() / entry_width);
    for entry in chars.chunks(entry_width) {
        let label: String = entry[..label_width].iter().collect();
        let token: String = entry[label_width..].iter().collect();
        keys.insert(label, position::decode(&token)?);
    }
    Ok(keys)
}
