//! Packed position codec.
//!
//! One key position packs into a 12-bit integer,
//! `(row << 8) | (col << 4) | finger`, rendered as exactly three lowercase
//! hex digits. The token is the atomic unit of the catalog wire format.

use crate::constants::TOKEN_WIDTH;
use crate::models::KeyPosition;
use std::fmt;

/// Error decoding a packed position token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Token was not exactly [`TOKEN_WIDTH`] characters long
    BadLength {
        /// Actual token length in characters
        found: usize,
    },
    /// Token contained a non-hexadecimal character
    BadDigit {
        /// The offending token
        token: String,
    },
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadLength { found } => write!(
                f,
                "packed token must be exactly {TOKEN_WIDTH} hex characters, got {found}"
            ),
            Self::BadDigit { token } => {
                write!(f, "packed token '{token}' is not valid hexadecimal")
            }
        }
    }
}

impl std::error::Error for TokenError {}

/// Encodes a position as a three-character lowercase hex token.
///
/// Each component is masked to its 4-bit field, so values above 15 wrap
/// silently; callers that need fail-fast behavior check the range first
/// (as [`crate::packing::layout::pack`] does).
#[must_use]
pub fn encode(position: KeyPosition) -> String {
    let packed = (u16::from(position.row & 0xf) << 8)
        | (u16::from(position.col & 0xf) << 4)
        | u16::from(position.finger & 0xf);
    format!("{packed:03x}")
}

/// Decodes a three-character hex token back into a position.
///
/// Accepts upper- or lowercase hex. Exact inverse of [`encode`] for all
/// in-range positions.
///
/// # Errors
///
/// Returns a [`TokenError`] if the token has the wrong length or contains
/// a non-hex character.
pub fn decode(token: &str) -> Result<KeyPosition, TokenError> {
    let found = token.chars().count();
    if found != TOKEN_WIDTH {
        return Err(TokenError::BadLength { found });
    }

    // from_str_radix accepts a leading sign, which is not a hex digit here
    if !token.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(TokenError::BadDigit {
            token: token.to_string(),
        });
    }
    let packed = u16::from_str_radix(token, 16).map_err(|_| TokenError::BadDigit {
        token: token.to_string(),
    })?;

    #[allow(clippy::cast_possible_truncation)]
    Ok(KeyPosition {
        row: (packed >> 8 & 0xf) as u8,
        col: (packed >> 4 & 0xf) as u8,
        finger: (packed & 0xf) as u8,
    })
}
