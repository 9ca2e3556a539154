// Dweve SortBench - Cross-language sorting benchmark harness
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! End-to-end tests for the sortbench binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// Test helper to create a sortbench command running inside `dir`
fn sortbench(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("sortbench").expect("Failed to find sortbench binary");
    cmd.current_dir(dir).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_every_command() {
    let dir = tempdir().unwrap();
    sortbench(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("gen"))
        .stdout(predicate::str::contains("inspect"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("summarize"))
        .stdout(predicate::str::contains("compare"))
        .stdout(predicate::str::contains("table"));
}

#[test]
fn test_gen_dry_run_writes_nothing() {
    let dir = tempdir().unwrap();
    sortbench(dir.path())
        .args(["gen", "--sizes", "10,20", "--dists", "random,sorted", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("random_n10_seed1.bin"))
        .stdout(predicate::str::contains("sorted_n20_seed1.bin"))
        .stdout(predicate::str::contains("4 datasets planned"));

    assert!(!dir.path().join("datasets").exists());
}

#[test]
fn test_gen_rejects_unknown_distribution() {
    let dir = tempdir().unwrap();
    sortbench(dir.path())
        .args(["gen", "--dists", "random,zigzag"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown distribution: 'zigzag'"));
}

#[test]
fn test_gen_skips_existing_files() {
    let dir = tempdir().unwrap();
    let args = ["gen", "--sizes", "100", "--dists", "dups"];

    sortbench(dir.path())
        .args(args)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 generated, 0 skipped"));
    sortbench(dir.path())
        .args(args)
        .assert()
        .success()
        .stdout(predicate::str::contains("0 generated, 1 skipped"));
    sortbench(dir.path())
        .args(args)
        .arg("--force")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 generated, 0 skipped"));

    let manifest = fs::read_to_string(dir.path().join("datasets/meta/datasets.csv")).unwrap();
    assert_eq!(
        manifest,
        "distribution,n,seed,path\ndups,100,1,datasets/ints/dups_n100_seed1.bin\n"
    );
}

#[test]
fn test_full_workflow() {
    let dir = tempdir().unwrap();

    sortbench(dir.path())
        .args(["gen", "--sizes", "4096", "--dists", "random,reversed"])
        .assert()
        .success();

    let output = sortbench(dir.path())
        .args([
            "run",
            "--dataset",
            "datasets/ints/random_n4096_seed1.bin",
            "--warmup",
            "1",
            "--reps",
            "4",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let rows: Vec<&str> = stdout.lines().collect();
    assert_eq!(rows.len(), 4);
    for (rep, row) in rows.iter().enumerate() {
        let fields: Vec<&str> = row.split(',').collect();
        assert_eq!(fields.len(), 12);
        assert_eq!(fields[2], "rust");
        assert_eq!(fields[4], "builtin");
        assert_eq!(fields[6], "random");
        assert_eq!(fields[7], "4096");
        assert_eq!(fields[8], "1");
        assert_eq!(fields[9], rep.to_string());
        assert_eq!(fields[11], "true");
    }

    sortbench(dir.path())
        .args([
            "run",
            "--dataset",
            "datasets/ints/reversed_n4096_seed1.bin",
            "--algo",
            "stable",
            "--warmup",
            "0",
            "--reps",
            "3",
        ])
        .assert()
        .success();

    let raw = fs::read_to_string(dir.path().join("results/raw.csv")).unwrap();
    assert!(raw.starts_with("timestamp_iso,task,language,"));
    assert_eq!(raw.lines().count(), 1 + 4 + 3);

    // A foreign runner appending to the same store.
    let mut raw = raw;
    for rep in 0..3 {
        raw.push_str(&format!(
            "2025-01-01T00:00:00,sort,cpp,g++ 13,builtin,datasets/ints/random_n4096_seed1.bin,random,4096,1,{rep},1000.0,True\n"
        ));
    }
    fs::write(dir.path().join("results/raw.csv"), raw).unwrap();

    sortbench(dir.path())
        .arg("summarize")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 groups"))
        .stdout(predicate::str::contains("Wrote results/summary.csv"));

    sortbench(dir.path())
        .args(["compare", "--geomean-out", "results/geomean.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("algo: builtin, baseline: cpp"))
        .stdout(predicate::str::contains("Wrote results/comparative.csv"));

    let comparative = fs::read_to_string(dir.path().join("results/comparative.csv")).unwrap();
    assert_eq!(comparative.lines().count(), 4);
    let cpp = comparative
        .lines()
        .find(|l| l.starts_with("cpp,builtin,random,4096,"))
        .unwrap();
    assert!(cpp.contains(",1000.000,"));
    assert!(cpp.ends_with(",1.000,0.000"));

    // The default rollup covers builtin only; rust/stable stays out of it.
    let geomean = fs::read_to_string(dir.path().join("results/geomean.csv")).unwrap();
    assert_eq!(geomean.lines().count(), 3);
    assert!(geomean.lines().any(|l| l.starts_with("rust,4096,1,")));
    assert!(geomean.contains("cpp,4096,1,1000.000,1.000"));

    sortbench(dir.path())
        .args(["table", "--n", "4096"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote results/main_table_random_n1e6.csv"));

    let table =
        fs::read_to_string(dir.path().join("results/main_table_random_n1e6.csv")).unwrap();
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("rust,"));
    assert!(lines[2].starts_with("cpp,"));
}

#[test]
fn test_run_rejects_unknown_algorithm() {
    let dir = tempdir().unwrap();
    sortbench(dir.path())
        .args(["gen", "--sizes", "10", "--dists", "sorted"])
        .assert()
        .success();

    sortbench(dir.path())
        .args([
            "run",
            "--dataset",
            "datasets/ints/sorted_n10_seed1.bin",
            "--algo",
            "bogo",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unknown algorithm 'bogo'"));

    assert!(!dir.path().join("results/raw.csv").exists());
}

#[test]
fn test_run_rejects_zero_reps() {
    let dir = tempdir().unwrap();
    sortbench(dir.path())
        .args(["gen", "--sizes", "10", "--dists", "sorted"])
        .assert()
        .success();

    sortbench(dir.path())
        .args([
            "run",
            "--dataset",
            "datasets/ints/sorted_n10_seed1.bin",
            "--reps",
            "0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'reps'"));
}

#[test]
fn test_summarize_missing_store() {
    let dir = tempdir().unwrap();
    sortbench(dir.path())
        .arg("summarize")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Missing results/raw.csv"));
}

#[test]
fn test_table_without_matches() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("results")).unwrap();
    fs::write(
        dir.path().join("results/summary.csv"),
        "language,algo,distribution,n,runs,median_ms,iqr_ms,mean_ms,std_ms\n\
         rust,builtin,random,1000,30,0.020,0.001,0.021,0.002\n",
    )
    .unwrap();

    sortbench(dir.path())
        .arg("table")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching rows"))
        .stderr(predicate::str::contains("distribution=random, n=1000000, algo=builtin"));
    assert!(!dir.path().join("results/main_table_random_n1e6.csv").exists());
}

#[test]
fn test_inspect_reports_and_verifies() {
    let dir = tempdir().unwrap();
    sortbench(dir.path())
        .args(["gen", "--sizes", "50", "--dists", "reversed"])
        .assert()
        .success();

    sortbench(dir.path())
        .args(["inspect", "datasets/ints/reversed_n50_seed1.bin", "--verify"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Length:  50"))
        .stdout(predicate::str::contains("Sorted:  no"))
        .stdout(predicate::str::contains("matches regeneration"));
}

#[test]
fn test_inspect_malformed_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("random_n3_seed1.bin");
    // Count says 3 but only one value follows.
    fs::write(&path, [3u8, 0, 0, 0, 7, 0, 0, 0]).unwrap();

    sortbench(dir.path())
        .arg("inspect")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed dataset file"));
}

#[test]
fn test_inspect_verify_detects_tampering() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sorted_n2_seed1.bin");
    fs::write(&path, [2u8, 0, 0, 0, 9, 0, 0, 0, 1, 0, 0, 0]).unwrap();

    sortbench(dir.path())
        .arg("inspect")
        .arg(&path)
        .arg("--verify")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not match a regeneration"));
}
