// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Au-Zone Technologies

//! Integration tests for the vkcaps CLI
//!
//! These tests verify the command end-to-end using the assert_cmd crate
//! pattern. Tests that need a Vulkan driver are ignored by default and run
//! serially since they share the GPU and the output directory layout.
//!
//! Run the hardware tests with:
//! ```bash
//! cargo test -p vkcaps-cli -- --ignored
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use serial_test::serial;
use std::{env, fs, path::PathBuf};

/// Helper to create a Command for the vkcaps binary
/// Uses VKCAPS_BIN environment variable if set, otherwise uses cargo run
fn vkcaps_cmd() -> Command {
    let mut cmd = if let Ok(bin_path) = env::var("VKCAPS_BIN") {
        Command::new(bin_path)
    } else {
        let mut c = Command::new("cargo");
        c.args(["run", "--quiet", "--bin", "vkcaps", "--"]);
        c
    };

    // Vulkan ICDs and layers are located through these
    for var in ["LD_LIBRARY_PATH", "VK_ICD_FILENAMES", "VK_DRIVER_FILES"] {
        if let Ok(value) = env::var(var) {
            cmd.env(var, value);
        }
    }

    cmd
}

/// Fresh output directory under target/testdata/vkcaps-cli
fn output_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("target")
        .join("testdata")
        .join("vkcaps-cli")
        .join(format!("{}-{}", name, rand::random::<u32>()));

    fs::create_dir_all(&dir).expect("Failed to create test data directory");
    dir
}

// =============================================================================
// Basic CLI Tests (No Hardware Required)
// =============================================================================

#[test]
fn test_cli_help() {
    vkcaps_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Vulkan"))
        .stdout(predicate::str::contains("--modifiers"))
        .stdout(predicate::str::contains("--egl"))
        .stdout(predicate::str::contains("--wgl"))
        .stdout(predicate::str::contains("--all-formats"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_cli_version() {
    vkcaps_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vkcaps"));
}

#[test]
fn test_unknown_flag() {
    vkcaps_cmd()
        .arg("--frobnicate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--frobnicate"));
}

#[test]
fn test_flag_with_value() {
    vkcaps_cmd().arg("--modifiers=all").assert().code(2);
}

#[test]
fn test_verbose_and_quiet() {
    vkcaps_cmd().args(["-v", "-q"]).assert().code(2);
}

#[test]
fn test_output_dir_not_a_directory() {
    let dir = output_dir("not-a-dir");
    let file = dir.join("plain-file");
    fs::write(&file, b"").unwrap();

    vkcaps_cmd()
        .env("VKCAPS_OUTPUT_DIR", &file)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("VKCAPS_OUTPUT_DIR"));

    fs::remove_dir_all(&dir).unwrap();
}

// =============================================================================
// Hardware Tests (Require a Vulkan driver)
// =============================================================================

#[test]
#[ignore = "requires Vulkan driver"]
#[serial]
fn test_report() {
    let dir = output_dir("report");

    vkcaps_cmd()
        .env("VKCAPS_OUTPUT_DIR", &dir)
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());

    let html = fs::read_to_string(dir.join("Logfile.html")).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.trim_end().ends_with("</html>"));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
#[ignore = "requires Vulkan driver"]
#[serial]
fn test_quiet_report() {
    let dir = output_dir("quiet");

    vkcaps_cmd()
        .env("VKCAPS_OUTPUT_DIR", &dir)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let html = fs::read_to_string(dir.join("Logfile.html")).unwrap();
    assert!(html.trim_end().ends_with("</html>"));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
#[ignore = "requires Vulkan driver"]
#[serial]
fn test_json_report() {
    let dir = output_dir("json");

    let output = vkcaps_cmd()
        .env("VKCAPS_OUTPUT_DIR", &dir)
        .args(["--json", "--quiet"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let devices: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let devices = devices.as_array().expect("JSON array of devices");
    for device in devices {
        assert!(device["identity"]["name"].is_string());
        assert!(device["capabilities"].is_array());
    }
    assert!(dir.join("Logfile.html").exists());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
#[ignore = "requires Vulkan driver"]
#[serial]
fn test_all_formats() {
    let dir = output_dir("all-formats");

    vkcaps_cmd()
        .env("VKCAPS_OUTPUT_DIR", &dir)
        .arg("--all-formats")
        .assert()
        .success();

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
#[cfg(target_os = "linux")]
#[ignore = "requires Vulkan driver with VK_EXT_image_drm_format_modifier"]
#[serial]
fn test_modifier_reports() {
    let dir = output_dir("modifiers");

    vkcaps_cmd()
        .env("VKCAPS_OUTPUT_DIR", &dir)
        .arg("--modifiers")
        .assert()
        .success()
        .stdout(predicate::str::contains("Modifier report"));

    let report = fs::read_to_string(dir.join("Modifiers_0.html")).unwrap();
    assert!(report.contains("DRM format modifiers"));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
#[cfg(target_os = "linux")]
#[ignore = "requires Vulkan driver and libEGL"]
#[serial]
fn test_egl_report() {
    let dir = output_dir("egl");

    vkcaps_cmd()
        .env("VKCAPS_OUTPUT_DIR", &dir)
        .arg("--egl")
        .assert()
        .success()
        .stdout(predicate::str::contains("EGL"));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
#[cfg(not(target_os = "windows"))]
#[ignore = "requires Vulkan driver"]
#[serial]
fn test_wgl_unavailable() {
    let dir = output_dir("wgl");

    vkcaps_cmd()
        .env("VKCAPS_OUTPUT_DIR", &dir)
        .arg("--wgl")
        .assert()
        .success()
        .stdout(predicate::str::contains("WGL is not supported on this system."));

    fs::remove_dir_all(&dir).unwrap();
}
