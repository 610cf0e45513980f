//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use serde_json::json;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Builds the JSON text of a layout record.
///
/// # Arguments
/// * `name` - Layout display name
/// * `user` - Submitting user id
/// * `board` - Board shape ("ortho", "stagger", ...)
/// * `keys` - (label, row, col, finger label) tuples
pub fn layout_json(name: &str, user: u64, board: &str, keys: &[(&str, u8, u8, &str)]) -> String {
    let key_map: serde_json::Map<String, serde_json::Value> = keys
        .iter()
        .map(|(label, row, col, finger)| {
            (
                (*label).to_string(),
                json!({"row": row, "col": col, "finger": finger}),
            )
        })
        .collect();

    serde_json::to_string_pretty(&json!({
        "name": name,
        "user": user,
        "board": board,
        "keys": key_map,
    }))
    .unwrap()
}

/// A small well-formed layout covering both hands and a thumb key.
pub fn layout_json_basic(name: &str) -> String {
    layout_json(
        name,
        100,
        "ortho",
        &[
            ("q", 0, 0, "LP"),
            ("w", 0, 1, "LR"),
            ("j", 0, 6, "RI"),
            ("a", 1, 0, "LP"),
            ("_", 3, 5, "TB"),
        ],
    )
}

/// Creates a temp directory containing the given (file name, content)
/// layout files.
pub fn create_temp_layouts_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    for (file_name, content) in files {
        fs::write(dir.path().join(file_name), content).expect("Failed to write layout file");
    }
    dir
}

/// Writes a single layout file into a fresh temp directory and returns
/// (file path, temp dir guard).
pub fn create_temp_layout_file(content: &str) -> (PathBuf, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("layout.json");
    fs::write(&path, content).expect("Failed to write layout file");
    (path, dir)
}

/// Writes a finger-table TOML config and returns (file path, temp dir guard).
pub fn create_temp_finger_config(toml: &str) -> (PathBuf, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("fingers.toml");
    fs::write(&path, toml).expect("Failed to write finger config");
    (path, dir)
}
