//! Finger identifiers and the label-to-code finger table.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One of the ten fingers, plus the generic thumb alias used by older
/// layout files.
///
/// Each finger maps to a small integer code in `[0, 9]` that is packed
/// into the low nibble of a position token. Note that [`Finger::Thumb`]
/// ("TB") shares code 5 with [`Finger::RightThumb`] ("RT") — layouts
/// written with either label pack to identical tokens. The collision is
/// part of the catalog format and is preserved here; supply a custom
/// table via the config file to separate them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Finger {
    /// Left pinky ("LP")
    LeftPinky,
    /// Left ring ("LR")
    LeftRing,
    /// Left middle ("LM")
    LeftMiddle,
    /// Left index ("LI")
    LeftIndex,
    /// Left thumb ("LT")
    LeftThumb,
    /// Right thumb ("RT")
    RightThumb,
    /// Right index ("RI")
    RightIndex,
    /// Right middle ("RM")
    RightMiddle,
    /// Right ring ("RR")
    RightRing,
    /// Right pinky ("RP")
    RightPinky,
    /// Generic thumb alias ("TB"); packs identically to "RT"
    Thumb,
}

impl Finger {
    /// All recognized fingers, in code order (the "TB" alias last).
    pub const ALL: [Self; 11] = [
        Self::LeftPinky,
        Self::LeftRing,
        Self::LeftMiddle,
        Self::LeftIndex,
        Self::LeftThumb,
        Self::RightThumb,
        Self::RightIndex,
        Self::RightMiddle,
        Self::RightRing,
        Self::RightPinky,
        Self::Thumb,
    ];

    /// Returns the integer code packed into the position token.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::LeftPinky => 0,
            Self::LeftRing => 1,
            Self::LeftMiddle => 2,
            Self::LeftIndex => 3,
            Self::LeftThumb => 4,
            Self::RightThumb | Self::Thumb => 5,
            Self::RightIndex => 6,
            Self::RightMiddle => 7,
            Self::RightRing => 8,
            Self::RightPinky => 9,
        }
    }

    /// Returns the two-letter label used in layout files.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LeftPinky => "LP",
            Self::LeftRing => "LR",
            Self::LeftMiddle => "LM",
            Self::LeftIndex => "LI",
            Self::LeftThumb => "LT",
            Self::RightThumb => "RT",
            Self::RightIndex => "RI",
            Self::RightMiddle => "RM",
            Self::RightRing => "RR",
            Self::RightPinky => "RP",
            Self::Thumb => "TB",
        }
    }
}

impl fmt::Display for Finger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Explicit mapping from finger labels to packed finger codes.
///
/// The table is an ordinary configuration value passed into packing, never
/// ambient state. The default table contains the eleven recognized labels;
/// a custom table can be loaded from a TOML config file (see
/// [`crate::config::FingerConfig`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FingerTable {
    codes: BTreeMap<String, u8>,
}

impl FingerTable {
    /// Maximum code representable in the packed token's finger nibble.
    pub const MAX_CODE: u8 = 0xf;

    /// Creates a table from an explicit label-to-code mapping.
    ///
    /// # Errors
    ///
    /// Returns the offending label and code if any code does not fit in
    /// 4 bits.
    pub fn new(codes: BTreeMap<String, u8>) -> Result<Self, (String, u8)> {
        if let Some((label, &code)) = codes.iter().find(|(_, &code)| code > Self::MAX_CODE) {
            return Err((label.clone(), code));
        }
        Ok(Self { codes })
    }

    /// Looks up the code for a finger label.
    #[must_use]
    pub fn code(&self, label: &str) -> Option<u8> {
        self.codes.get(label).copied()
    }

    /// Returns true if the table recognizes the label.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.codes.contains_key(label)
    }

    /// Iterates over (label, code) pairs in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.codes.iter().map(|(label, &code)| (label.as_str(), code))
    }

    /// Number of labels in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns true if the table has no labels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl Default for FingerTable {
    /// Builds the standard eleven-label table from [`Finger::ALL`].
    fn default() -> Self {
        let codes = Finger::ALL
            .iter()
            .map(|finger| (finger.label().to_string(), finger.code()))
            .collect();
        Self { codes }
    }
}
