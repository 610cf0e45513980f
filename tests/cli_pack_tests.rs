//! End-to-end tests for `layoutcat pack`.

use std::fs;
use std::process::Command;

mod fixtures;
use fixtures::*;

/// Path to the layoutcat binary
fn layoutcat_bin() -> &'static str {
    env!("CARGO_BIN_EXE_layoutcat")
}

#[test]
fn test_pack_directory_to_catalog() {
    let layouts = create_temp_layouts_dir(&[("basic.json", &layout_json_basic("Basic"))]);
    let out_dir = tempfile::TempDir::new().unwrap();
    let out_path = out_dir.path().join("catalog.json");

    let output = Command::new(layoutcat_bin())
        .args([
            "pack",
            "--layouts",
            layouts.path().to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "pack should exit 0. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Packed 1 layouts"));

    let catalog: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
    let entry = &catalog["basic"];
    assert_eq!(entry["user"], 100);
    assert_eq!(entry["board"], "ortho");
    // Row-major: q(0,0) w(0,1) j(0,6) a(1,0) _(3,5); TB packs as code 5
    assert_eq!(entry["keys"], "q000w011j066a100_355");
}

#[test]
fn test_pack_is_canonical_across_key_order() {
    // Same associations listed in a different order in the file
    let reversed = layout_json(
        "Basic",
        100,
        "ortho",
        &[
            ("_", 3, 5, "TB"),
            ("a", 1, 0, "LP"),
            ("j", 0, 6, "RI"),
            ("w", 0, 1, "LR"),
            ("q", 0, 0, "LP"),
        ],
    );
    let layouts = create_temp_layouts_dir(&[("basic.json", &reversed)]);
    let out_dir = tempfile::TempDir::new().unwrap();
    let out_path = out_dir.path().join("catalog.json");

    let output = Command::new(layoutcat_bin())
        .args([
            "pack",
            "--layouts",
            layouts.path().to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));

    let catalog: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(catalog["basic"]["keys"], "q000w011j066a100_355");
}

#[test]
fn test_pack_skips_failing_layout_and_reports_it() {
    let bad = layout_json("Bad", 2, "ortho", &[("z", 0, 0, "XX")]);
    let layouts = create_temp_layouts_dir(&[
        ("good.json", &layout_json_basic("Good")),
        ("bad.json", &bad),
    ]);
    let out_dir = tempfile::TempDir::new().unwrap();
    let out_path = out_dir.path().join("catalog.json");

    let output = Command::new(layoutcat_bin())
        .args([
            "pack",
            "--layouts",
            layouts.path().to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    // A failing layout is fatal for itself, not the batch
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Packed 1 layouts"));
    assert!(stdout.contains("1 skipped"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bad.json"));
    assert!(stderr.contains("XX"));

    let catalog: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
    assert!(catalog.get("good").is_some());
    assert!(catalog.get("bad").is_none());
}

#[test]
fn test_pack_with_finger_override() {
    // Give TB its own code so it no longer collides with RT
    let (config_path, _config_dir) = create_temp_finger_config(
        "[fingers]\nLP = 0\nLR = 1\nLM = 2\nLI = 3\nLT = 4\nRT = 5\nRI = 6\nRM = 7\nRR = 8\nRP = 9\nTB = 10\n",
    );
    let layout = layout_json("Thumbs", 1, "ortho", &[("_", 3, 5, "TB")]);
    let layouts = create_temp_layouts_dir(&[("thumbs.json", &layout)]);
    let out_dir = tempfile::TempDir::new().unwrap();
    let out_path = out_dir.path().join("catalog.json");

    let output = Command::new(layoutcat_bin())
        .args([
            "pack",
            "--layouts",
            layouts.path().to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
            "--fingers",
            config_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));

    let catalog: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
    // Code 10 renders as hex digit 'a'
    assert_eq!(catalog["thumbs"]["keys"], "_35a");
}

#[test]
fn test_pack_rejects_bad_finger_config() {
    let (config_path, _config_dir) = create_temp_finger_config("[fingers]\nLP = 16\n");
    let layouts = create_temp_layouts_dir(&[("basic.json", &layout_json_basic("Basic"))]);

    let output = Command::new(layoutcat_bin())
        .args([
            "pack",
            "--layouts",
            layouts.path().to_str().unwrap(),
            "--fingers",
            config_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1), "validation errors exit 1");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("4 bits"));
}

#[test]
fn test_pack_missing_layouts_dir() {
    let output = Command::new(layoutcat_bin())
        .args(["pack", "--layouts", "/nonexistent/layouts"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(3), "I/O errors exit 3");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("layouts directory"));
}

#[test]
fn test_pack_pretty_output() {
    let layouts = create_temp_layouts_dir(&[("basic.json", &layout_json_basic("Basic"))]);
    let out_dir = tempfile::TempDir::new().unwrap();
    let out_path = out_dir.path().join("catalog.json");

    let output = Command::new(layoutcat_bin())
        .args([
            "pack",
            "--layouts",
            layouts.path().to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
            "--pretty",
        ])
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));

    let content = fs::read_to_string(&out_path).unwrap();
    assert!(content.contains('\n'), "pretty output is multi-line");
    assert!(serde_json::from_str::<serde_json::Value>(&content).is_ok());
}
