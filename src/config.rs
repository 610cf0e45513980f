//! Finger table configuration.
//!
//! The label-to-code finger table is an explicit input to packing, never
//! ambient state. The built-in table covers the eleven standard labels; a
//! TOML config file can replace it, e.g. to give "TB" its own code:
//!
//! ```toml
//! [fingers]
//! LP = 0
//! LR = 1
//! LM = 2
//! LI = 3
//! LT = 4
//! RT = 5
//! RI = 6
//! RM = 7
//! RR = 8
//! RP = 9
//! TB = 10
//! ```

use crate::models::FingerTable;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// On-disk shape of a finger table config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FingerConfig {
    /// Finger label to packed code assignments
    pub fingers: BTreeMap<String, u8>,
}

impl FingerConfig {
    /// Loads a finger config from a TOML file and validates it into a
    /// usable table.
    ///
    /// # Errors
    ///
    /// Returns errors for a missing or unreadable file, invalid TOML, an
    /// empty table, or codes that do not fit the token's 4-bit finger
    /// field.
    pub fn load(path: &Path) -> Result<FingerTable> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read finger config: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse finger config: {}", path.display()))?;

        config.into_table()
    }

    /// Validates the config into a [`FingerTable`].
    pub fn into_table(self) -> Result<FingerTable> {
        if self.fingers.is_empty() {
            anyhow::bail!("Finger config defines no labels");
        }

        FingerTable::new(self.fingers).map_err(|(label, code)| {
            anyhow::anyhow!(
                "Finger '{label}' has code {code}, which does not fit in 4 bits (max {})",
                FingerTable::MAX_CODE
            )
        })
    }
}

impl Default for FingerConfig {
    /// Mirrors the built-in table from [`crate::models::Finger::ALL`].
    fn default() -> Self {
        let fingers = FingerTable::default()
            .iter()
            .map(|(label, code)| (label.to_string(), code))
            .collect();
        Self { fingers }
    }
}
