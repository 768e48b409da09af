// Copyright (C) 2024 Hove and/or its affiliates.
//
// This program is free software: you can redistribute it and/or modify it
// under the terms of the GNU Affero General Public License as published by the
// Free Software Foundation, version 3.

// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more
// details.

// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>

use assert_cmd::prelude::*;
use std::{
    path::{Path, PathBuf},
    process::Command,
};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../tests/fixtures/gtfs2map")
        .join(name)
}

#[test]
fn test_gtfs2map() {
    let output_dir = TempDir::new().expect("create temp dir failed");
    Command::cargo_bin("gtfs2map")
        .expect("Failed to find binary 'gtfs2map'")
        .current_dir(output_dir.path())
        .arg("--input")
        .arg(fixture("minimal"))
        .assert()
        .success();
    assert!(output_dir.path().join("gtfs_map.html").is_file());
}

#[test]
fn test_gtfs2map_missing_input() {
    let output_dir = TempDir::new().expect("create temp dir failed");
    Command::cargo_bin("gtfs2map")
        .expect("Failed to find binary 'gtfs2map'")
        .current_dir(output_dir.path())
        .arg("-i")
        .arg(fixture("missing_shapes"))
        .assert()
        .failure()
        .code(1);
    assert!(!output_dir.path().join("gtfs_map.html").exists());
}

#[test]
fn test_gtfs2map_without_stops() {
    let output_dir = TempDir::new().expect("create temp dir failed");
    let assert = Command::cargo_bin("gtfs2map")
        .expect("Failed to find binary 'gtfs2map'")
        .current_dir(output_dir.path())
        .arg("--input")
        .arg(fixture("no_stops"))
        .assert()
        .failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("no data to center map"), "{}", stderr);
}

#[test]
fn test_gtfs2map_rejects_unknown_options() {
    Command::cargo_bin("gtfs2map")
        .expect("Failed to find binary 'gtfs2map'")
        .arg("--output")
        .arg("map.html")
        .assert()
        .failure();
}
