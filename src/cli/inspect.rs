//! Inspect command: pack a single layout file and show the result.

use crate::cli::common::{CliError, CliResult};
use crate::config::FingerConfig;
use crate::models::{FingerTable, LayoutRecord};
use crate::packing;
use crate::parser;
use clap::Args;
use std::path::PathBuf;

/// Show a layout's packed string and key matrix
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Path to the layout JSON file
    #[arg(short, long, value_name = "FILE")]
    pub layout: PathBuf,

    /// TOML file overriding the built-in finger table
    #[arg(long, value_name = "FILE")]
    pub fingers: Option<PathBuf>,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> CliResult<()> {
        let record = parser::parse_layout_file(&self.layout)
            .map_err(|e| CliError::io(format!("Failed to load layout: {e}")))?;

        let fingers = match &self.fingers {
            Some(path) => FingerConfig::load(path)
                .map_err(|e| CliError::validation(format!("Invalid finger config: {e}")))?,
            None => FingerTable::default(),
        };

        let packed = packing::pack(&record.keys, &fingers)
            .map_err(|e| CliError::validation(format!("Failed to pack layout: {e}")))?;

        println!("{} (user {}, board {})", record.name, record.user, record.board);
        println!();
        println!("{}", render_matrix(&record));
        println!("keys:   {}", record.keys.len());
        println!("packed: {packed}");

        Ok(())
    }
}

/// Renders the layout's key labels as a row/column grid.
///
/// The left and right hands (columns 0-4 and 5+) are separated by an extra
/// space, and staggered/angled boards get a per-row indent to suggest the
/// physical stagger.
fn render_matrix(record: &LayoutRecord) -> String {
    let Some(label_width) = record.label_width() else {
        return String::new();
    };
    let row_count = record
        .keys
        .values()
        .map(|entry| usize::from(entry.row) + 1)
        .max()
        .unwrap_or(0);
    let col_count = record
        .keys
        .values()
        .map(|entry| usize::from(entry.col) + 1)
        .max()
        .unwrap_or(0);

    let empty_cell = " ".repeat(label_width);
    let mut grid = vec![vec![empty_cell.clone(); col_count]; row_count];
    for (label, entry) in &record.keys {
        grid[usize::from(entry.row)][usize::from(entry.col)] = label.clone();
    }

    let mut rows = Vec::with_capacity(row_count);
    for (row_idx, row) in grid.iter().enumerate() {
        let mut line = String::from("  ");
        match (record.board.as_str(), row_idx) {
            ("angle", 2) | ("stagger", 1) => line.push(' '),
            ("stagger", 2) => line.push_str("  "),
            _ => {}
        }
        for (col_idx, cell) in row.iter().enumerate() {
            if col_idx == 5 {
                line.push(' ');
            }
            line.push_str(cell);
            line.push(' ');
        }
        rows.push(line.trim_end().to_string());
    }
    rows.join("\n")
}
