//! Layout records and the aggregated catalog.

use crate::models::KeyEntry;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// One layout as described by a layout file: metadata plus the key map.
///
/// Records are validated once when they cross the parse boundary
/// ([`LayoutRecord::validate`]); the packing core can then assume a
/// well-formed record and never re-checks shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutRecord {
    /// Display name of the layout
    pub name: String,
    /// Numeric id of the submitting user
    pub user: u64,
    /// Board shape the layout targets (e.g. "stagger", "ortho", "angle")
    pub board: String,
    /// Key label to position/finger assignment
    pub keys: HashMap<String, KeyEntry>,
    /// Spare key assignments not placed on the board; ignored by packing
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub free: Vec<KeyEntry>,
}

impl LayoutRecord {
    /// Validates the record after parsing.
    ///
    /// The catalog wire format concatenates `label + token` with no
    /// delimiters, so every label in one layout must share a single fixed
    /// width for the consumer to find token boundaries.
    ///
    /// # Errors
    ///
    /// Returns errors for an empty name, an empty key label, or key labels
    /// of differing widths.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            anyhow::bail!("Layout name must not be empty");
        }

        let mut width: Option<usize> = None;
        for label in self.keys.keys() {
            let label_width = label.chars().count();
            if label_width == 0 {
                anyhow::bail!("Layout '{}' contains an empty key label", self.name);
            }
            match width {
                None => width = Some(label_width),
                Some(expected) if expected != label_width => {
                    anyhow::bail!(
                        "Layout '{}' mixes key label widths ({} and {}); \
                         labels must be fixed-width for the packed format",
                        self.name,
                        expected,
                        label_width
                    );
                }
                Some(_) => {}
            }
        }

        Ok(())
    }

    /// Width shared by all key labels, or `None` for an empty key map.
    #[must_use]
    pub fn label_width(&self) -> Option<usize> {
        self.keys.keys().next().map(|label| label.chars().count())
    }
}

/// One layout's row in the catalog: metadata plus the packed key string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Numeric id of the submitting user
    pub user: u64,
    /// Board shape the layout targets
    pub board: String,
    /// The packed key map (see [`crate::packing::layout::pack`])
    pub keys: String,
}

/// The aggregated catalog, keyed by the layout file's stem.
///
/// A `BTreeMap` keeps serialization order deterministic regardless of the
/// order the directory scan produced the layouts in.
pub type Catalog = BTreeMap<String, CatalogEntry>;
