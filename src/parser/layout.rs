//! Layout file parsing.
//!
//! Layout files are JSON records with metadata and a key map:
//!
//! ```json
//! {
//!     "name": "Colemak-DH",
//!     "user": 123456,
//!     "board": "stagger",
//!     "keys": {
//!         "q": {"row": 0, "col": 0, "finger": "LP"},
//!         "w": {"row": 0, "col": 1, "finger": "LR"}
//!     }
//! }
//! ```
//!
//! Records are validated here, at the boundary, so the packing core never
//! needs defensive shape checks.

use crate::constants::APP_BINARY_NAME;
use crate::models::LayoutRecord;
use anyhow::{Context, Result};
use std::path::Path;

/// Parses a layout JSON file into a validated [`LayoutRecord`].
///
/// # Errors
///
/// Returns errors for:
/// - File not found or not a regular file
/// - Invalid JSON or missing fields
/// - Records that fail [`LayoutRecord::validate`]
pub fn parse_layout_file(path: &Path) -> Result<LayoutRecord> {
    // Check if file exists first to provide better error message
    if !path.exists() {
        anyhow::bail!(
            "Layout file not found: {}\n\n\
             Please check the file path and try again.\n\
             For more options, run: {} --help",
            path.display(),
            APP_BINARY_NAME
        );
    }

    if !path.is_file() {
        anyhow::bail!(
            "Path is not a file: {}\n\n\
             Please provide a path to a layout JSON file.",
            path.display()
        );
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout file: {}", path.display()))?;

    parse_layout_str(&content)
        .with_context(|| format!("Failed to parse layout file: {}", path.display()))
}

/// Parses a layout record from a JSON string.
pub fn parse_layout_str(content: &str) -> Result<LayoutRecord> {
    let record: LayoutRecord =
        serde_json::from_str(content).context("Layout is not a valid layout record")?;

    record.validate()?;

    Ok(record)
}
