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

//! End-to-end pipeline tests: generate, run, summarize, compare.

use sortbench_bench::core::{BuiltinSort, GenConfig, RunConfig, TableFilter};
use sortbench_bench::generators::{generate_catalog, DatasetAction};
use sortbench_bench::harness::{run_protocol, ConsoleSink, StoreSink, Tee};
use sortbench_bench::reporters::{
    compare, summarize_file, write_comparison, write_main_table_from,
};
use sortbench_core::{Distribution, RawMeasurement, SORT_TASK};
use sortbench_csv::{read_manifest, read_samples, RawStore};
use std::fs;

#[test]
fn full_pipeline_over_generated_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = GenConfig::default()
        .with_outdir(dir.path().join("datasets/ints"))
        .with_meta_dir(dir.path().join("datasets/meta"))
        .with_sizes(&[64, 4096])
        .with_distributions(Distribution::all());

    let report = generate_catalog(&catalog).unwrap();
    assert_eq!(report.count(DatasetAction::Generated), 10);
    let manifest = read_manifest(catalog.manifest_path()).unwrap();
    assert_eq!(manifest.len(), 10);

    let raw = dir.path().join("results/raw.csv");
    let run = RunConfig::default().with_warmup(1).with_reps(3).with_out(&raw);
    for entry in &manifest {
        for algo in BuiltinSort::ALL {
            let mut sink = Tee::new(ConsoleSink::new(Vec::new()), StoreSink::new(&run.out));
            let outcome = run_protocol(&run, entry.path.as_ref(), &algo, &mut sink).unwrap();
            assert_eq!(outcome.failures, 0);

            let (console, _) = sink.into_parts();
            let printed = String::from_utf8(console.into_inner()).unwrap();
            assert_eq!(printed.lines().count(), 3);
        }
    }

    let samples = read_samples(&raw).unwrap();
    assert_eq!(samples.len(), 10 * 2 * 3);
    assert!(samples.iter().all(|s| s.ok));

    // A foreign runner shares the store.
    let store = RawStore::new(&raw);
    for (rep, time_ms) in [2.0, 4.0].into_iter().enumerate() {
        store
            .append(&RawMeasurement {
                timestamp: "2025-01-01T00:00:00".to_string(),
                task: SORT_TASK.to_string(),
                language: "cpp".to_string(),
                language_version: "g++ 13".to_string(),
                algo: "builtin".to_string(),
                dataset_file: "random_n4096_seed1.bin".to_string(),
                distribution: "random".to_string(),
                n: 4096,
                warmup_runs: 0,
                rep_index: rep,
                time_ms,
                ok: true,
            })
            .unwrap();
    }

    let summary_path = dir.path().join("results/summary.csv");
    let summary = summarize_file(&raw, &summary_path).unwrap();
    // 5 distributions x 2 sizes x 2 algorithms for rust, plus one cpp group.
    assert_eq!(summary.len(), 21);
    assert!(summary.iter().filter(|r| r.language == "rust").all(|r| r.runs == 3));
    let cpp = summary.iter().find(|r| r.language == "cpp").unwrap();
    assert_eq!((cpp.runs, cpp.median_ms), (2, 3.0));

    let comparison = compare(&summary, "cpp", "builtin");
    let with_speedup: Vec<_> = comparison
        .rows
        .iter()
        .filter(|r| r.speedup_vs_baseline.is_some())
        .collect();
    // rust/builtin and cpp/builtin at random n=4096 only.
    assert_eq!(with_speedup.len(), 2);

    let comparative = dir.path().join("results/comparative.csv");
    let geomean = dir.path().join("results/geomean.csv");
    write_comparison(&comparison, &comparative, Some(&geomean)).unwrap();
    assert_eq!(
        fs::read_to_string(&comparative).unwrap().lines().count(),
        1 + summary.len()
    );

    let table = dir.path().join("results/main_table.csv");
    let filter = TableFilter::new("random", 4096, "builtin");
    let rows = write_main_table_from(&summary_path, &table, &filter).unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].median_ms <= rows[1].median_ms);
}

#[test]
fn regeneration_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = GenConfig::default()
        .with_outdir(dir.path().join("a"))
        .with_meta_dir(dir.path().join("meta"))
        .with_sizes(&[1000])
        .with_seeds(&[7]);
    generate_catalog(&catalog).unwrap();
    let again = catalog.clone().with_outdir(dir.path().join("b"));
    generate_catalog(&again).unwrap();

    for spec in sortbench_bench::generators::plan(&catalog) {
        let a = fs::read(catalog.dataset_path(&spec)).unwrap();
        let b = fs::read(again.dataset_path(&spec)).unwrap();
        assert_eq!(a, b, "{}", spec.filename());
        assert_eq!(a.len(), 4 + 4 * 1000);
    }
}
