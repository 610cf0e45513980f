//! Pack command: build a catalog from a directory of layout files.

use crate::cli::common::{CliError, CliResult};
use crate::config::FingerConfig;
use crate::models::FingerTable;
use crate::services::CatalogService;
use clap::Args;
use std::path::PathBuf;

/// Pack a directory of layout files into a single catalog
#[derive(Debug, Clone, Args)]
pub struct PackArgs {
    /// Directory containing layout JSON files
    #[arg(short, long, value_name = "DIR")]
    pub layouts: PathBuf,

    /// Output path for the catalog (defaults to catalog_[date].json)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// TOML file overriding the built-in finger table
    #[arg(long, value_name = "FILE")]
    pub fingers: Option<PathBuf>,

    /// Pretty-print the catalog JSON
    #[arg(long)]
    pub pretty: bool,
}

impl PackArgs {
    /// Execute the pack command
    pub fn execute(&self) -> CliResult<()> {
        let fingers = self.load_finger_table()?;

        let report = CatalogService::build(&self.layouts, &fingers)
            .map_err(|e| CliError::io(format!("Failed to build catalog: {e}")))?;

        for skip in &report.skipped {
            eprintln!("⚠ Skipped {}: {}", skip.path.display(), skip.reason);
        }

        let output_path = self.get_output_path();
        CatalogService::save(&report.catalog, &output_path, self.pretty)
            .map_err(|e| CliError::io(format!("Failed to write catalog: {e}")))?;

        println!(
            "✓ Packed {} layouts to: {} ({} skipped)",
            report.catalog.len(),
            output_path.display(),
            report.skipped.len()
        );

        Ok(())
    }

    /// Load the finger table from the override file, or fall back to the
    /// built-in table.
    fn load_finger_table(&self) -> CliResult<FingerTable> {
        match &self.fingers {
            Some(path) => FingerConfig::load(path)
                .map_err(|e| CliError::validation(format!("Invalid finger config: {e}"))),
            None => Ok(FingerTable::default()),
        }
    }

    /// Get the output file path (either user-specified or auto-generated)
    fn get_output_path(&self) -> PathBuf {
        if let Some(ref path) = self.output {
            return path.clone();
        }

        // Auto-generate filename: catalog_[date].json
        let date = chrono::Local::now().format("%Y-%m-%d");
        PathBuf::from(format!("catalog_{}.json", date))
    }
}
