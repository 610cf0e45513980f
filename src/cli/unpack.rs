//! Unpack command: decode one catalog entry back into its key map.

use crate::cli::common::{CliError, CliResult};
use crate::constants::LABEL_WIDTH;
use crate::models::KeyPosition;
use crate::packing;
use crate::services::CatalogService;
use clap::Args;
use std::path::PathBuf;

/// Decode a catalog entry back into per-key positions
#[derive(Debug, Clone, Args)]
pub struct UnpackArgs {
    /// Path to the catalog JSON file
    #[arg(short, long, value_name = "FILE")]
    pub catalog: PathBuf,

    /// Name of the catalog entry to unpack
    #[arg(short, long, value_name = "NAME")]
    pub name: String,

    /// Width of key labels in the packed string
    #[arg(long, value_name = "CHARS", default_value_t = LABEL_WIDTH)]
    pub label_width: usize,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl UnpackArgs {
    /// Execute the unpack command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = CatalogService::load(&self.catalog)
            .map_err(|e| CliError::io(format!("Failed to load catalog: {e}")))?;

        let entry = catalog.get(&self.name).ok_or_else(|| {
            CliError::validation(format!(
                "Catalog has no entry named '{}' ({} entries total)",
                self.name,
                catalog.len()
            ))
        })?;

        let keys = packing::unpack(&entry.keys, self.label_width)
            .map_err(|e| CliError::validation(format!("Failed to unpack '{}': {e}", self.name)))?;

        // Row-major order with the label as tiebreaker, for stable output
        let mut rows: Vec<(&String, &KeyPosition)> = keys.iter().collect();
        rows.sort_by_key(|(label, position)| (position.sort_key(), (*label).clone()));

        if self.json {
            let keys_json: serde_json::Map<String, serde_json::Value> = rows
                .iter()
                .map(|(label, position)| {
                    (
                        (*label).clone(),
                        serde_json::json!({
                            "row": position.row,
                            "col": position.col,
                            "finger": position.finger,
                        }),
                    )
                })
                .collect();

            let response = serde_json::json!({
                "name": self.name,
                "user": entry.user,
                "board": entry.board,
                "keys": keys_json,
            });

            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("{} (user {}, board {})", self.name, entry.user, entry.board);
            println!();
            for (label, position) in rows {
                println!(
                    "  {}  row {:>2}  col {:>2}  finger {}",
                    label, position.row, position.col, position.finger
                );
            }
        }

        Ok(())
    }
}
