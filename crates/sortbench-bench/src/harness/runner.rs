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

//! Measurement protocol runner.
//!
//! For one dataset and one [`Sorter`]:
//!
//! 1. load the dataset,
//! 2. run `warmup` untimed sorts on fresh copies,
//! 3. run `reps` timed sorts on fresh copies, validating each result,
//! 4. emit one [`RawMeasurement`] per timed repetition.
//!
//! The loaded dataset is never sorted in place.

use crate::core::config::RunConfig;
use crate::core::measurement::{time_sort, timestamp_now, Sorter};
use crate::error::Result;
use crate::harness::collector::MeasurementSink;
use sortbench_core::{infer_distribution, is_sorted, read_dataset, RawMeasurement, SORT_TASK};
use std::hint::black_box;
use std::path::Path;
use tracing::{debug, info, warn};

/// Outcome of one protocol run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// Dataset size.
    pub n: usize,
    /// Distribution token inferred from the dataset filename.
    pub distribution: String,
    /// Measured repetitions emitted.
    pub reps: usize,
    /// Repetitions whose result was not non-decreasing.
    pub failures: usize,
    /// Sum of the measured times in milliseconds.
    pub total_ms: f64,
}

/// Runs the measurement protocol and feeds every timed repetition to `sink`.
///
/// The configuration is validated before the dataset is read. A sort that
/// produces an unsorted result is not an error: the row is emitted with
/// `ok = false` and counted in [`RunReport::failures`].
pub fn run_protocol(
    config: &RunConfig,
    dataset: &Path,
    sorter: &dyn Sorter,
    sink: &mut dyn MeasurementSink,
) -> Result<RunReport> {
    config.validate()?;

    let data = read_dataset(dataset)?;
    let distribution = infer_distribution(dataset);
    let dataset_file = dataset.to_string_lossy().into_owned();
    info!(
        dataset = %dataset_file,
        n = data.len(),
        algo = sorter.name(),
        warmup = config.warmup,
        reps = config.reps,
        "running sort benchmark"
    );

    for _ in 0..config.warmup {
        let mut copy = data.clone();
        sorter.sort(&mut copy);
        black_box(&copy);
    }
    debug!(runs = config.warmup, "warmup complete");

    let mut report = RunReport {
        n: data.len(),
        distribution: distribution.clone(),
        reps: 0,
        failures: 0,
        total_ms: 0.0,
    };

    for rep_index in 0..config.reps {
        let mut copy = data.clone();
        let time_ms = time_sort(sorter, &mut copy);
        let ok = !config.validate || is_sorted(&copy);
        if !ok {
            warn!(rep = rep_index, algo = sorter.name(), "sort produced unsorted output");
            report.failures += 1;
        }

        let measurement = RawMeasurement {
            timestamp: timestamp_now(),
            task: SORT_TASK.to_string(),
            language: config.language.clone(),
            language_version: config.language_version.clone(),
            algo: sorter.name().to_string(),
            dataset_file: dataset_file.clone(),
            distribution: distribution.clone(),
            n: data.len(),
            warmup_runs: config.warmup,
            rep_index,
            time_ms,
            ok,
        };
        sink.record(&measurement)?;

        report.reps += 1;
        report.total_ms += time_ms;
    }

    Ok(report)
}
