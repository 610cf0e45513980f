//! Catalog build and file I/O service.
//!
//! This module centralizes the batch side of packing: scanning a layouts
//! directory, packing each layout, and reading/writing the aggregated
//! catalog file.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{Catalog, CatalogEntry, FingerTable};
use crate::packing;
use crate::parser;

/// A layout that failed to pack, with the reason it was skipped.
///
/// A failing layout is fatal only for itself; the batch continues and the
/// caller decides how to report the skips.
#[derive(Debug, Clone)]
pub struct SkippedLayout {
    /// Path of the layout file that failed
    pub path: PathBuf,
    /// Human-readable failure reason
    pub reason: String,
}

/// Result of building a catalog from a directory of layout files.
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Successfully packed layouts, keyed by file stem
    pub catalog: Catalog,
    /// Layouts that failed to parse or pack
    pub skipped: Vec<SkippedLayout>,
}

/// Service for building and persisting layout catalogs.
pub struct CatalogService;

impl CatalogService {
    /// Builds a catalog from every `.json` layout file in a directory.
    ///
    /// Files are visited in name order so the skip report is
    /// deterministic; the catalog itself is keyed by file stem and
    /// serializes in key order regardless. Non-JSON files are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error only if the directory itself cannot be read; a
    /// failing layout lands in [`BuildReport::skipped`] instead.
    pub fn build(layouts_dir: &Path, fingers: &FingerTable) -> Result<BuildReport> {
        let mut paths: Vec<PathBuf> = fs::read_dir(layouts_dir)
            .with_context(|| {
                format!("Failed to read layouts directory: {}", layouts_dir.display())
            })?
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| {
                format!("Failed to read layouts directory: {}", layouts_dir.display())
            })?
            .into_iter()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().is_some_and(|ext| ext == "json")
            })
            .collect();
        paths.sort();

        let mut catalog = Catalog::new();
        let mut skipped = Vec::new();

        for path in paths {
            match Self::pack_one(&path, fingers) {
                Ok((stem, entry)) => {
                    catalog.insert(stem, entry);
                }
                Err(err) => skipped.push(SkippedLayout {
                    path: path.clone(),
                    reason: format!("{err:#}"),
                }),
            }
        }

        Ok(BuildReport { catalog, skipped })
    }

    /// Parses and packs a single layout file into its catalog row.
    fn pack_one(path: &Path, fingers: &FingerTable) -> Result<(String, CatalogEntry)> {
        let record = parser::parse_layout_file(path)?;
        let keys = packing::pack(&record.keys, fingers)
            .with_context(|| format!("Failed to pack layout '{}'", record.name))?;

        let stem = path
            .file_stem()
            .context("Layout file has no name")?
            .to_string_lossy()
            .to_string();

        Ok((
            stem,
            CatalogEntry {
                user: record.user,
                board: record.board,
                keys,
            },
        ))
    }

    /// Saves a catalog as JSON.
    ///
    /// This performs an atomic write using a temp file + rename pattern to
    /// ensure the file is never left in a corrupted state.
    pub fn save(catalog: &Catalog, path: &Path, pretty: bool) -> Result<()> {
        let content = if pretty {
            serde_json::to_string_pretty(catalog)
        } else {
            serde_json::to_string(catalog)
        }
        .context("Failed to serialize catalog")?;

        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, content)
            .with_context(|| format!("Failed to write catalog to {}", temp_path.display()))?;
        fs::rename(&temp_path, path).with_context(|| {
            format!("Failed to move catalog into place at {}", path.display())
        })?;

        Ok(())
    }

    /// Loads a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Catalog> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse catalog: {}", path.display()))
    }
}
