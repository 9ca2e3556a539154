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

//! Measurement and statistics record types.
//!
//! [`RawMeasurement`] is the append-only sample written by runners. Every
//! other record here is a derived view that is recomputed from the raw store
//! on demand and never edited by hand.

use serde::{Serialize, Serializer};

/// Task name of every raw measurement.
pub const SORT_TASK: &str = "sort";

/// Formats a millisecond value with exactly three decimal places.
pub fn format_ms(value: f64) -> String {
    format!("{:.3}", value)
}

fn serialize_ms<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_ms(*value))
}

/// One timed repetition of a sort, as recorded in the raw measurement store.
///
/// Field order matches the store's column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawMeasurement {
    /// Local wall-clock time of the repetition, `%Y-%m-%dT%H:%M:%S`.
    #[serde(rename = "timestamp_iso")]
    pub timestamp: String,
    /// Always [`SORT_TASK`].
    pub task: String,
    /// Runner language, e.g. `rust`.
    pub language: String,
    /// Runner language/toolchain version string.
    pub language_version: String,
    /// Sort algorithm name, e.g. `builtin`.
    pub algo: String,
    /// Dataset path as given to the runner.
    pub dataset_file: String,
    /// Distribution token inferred from the dataset filename.
    pub distribution: String,
    /// Number of values sorted.
    pub n: usize,
    /// Number of untimed warmup repetitions that preceded the measured ones.
    pub warmup_runs: usize,
    /// Zero-based index of this measured repetition.
    #[serde(rename = "rep_idx")]
    pub rep_index: usize,
    /// Elapsed sort time in milliseconds.
    #[serde(serialize_with = "serialize_ms")]
    pub time_ms: f64,
    /// Whether the sorted copy validated as non-decreasing.
    pub ok: bool,
}

impl RawMeasurement {
    /// Projects the columns the aggregator needs.
    pub fn sample(&self) -> RawSample {
        RawSample {
            language: self.language.clone(),
            algo: self.algo.clone(),
            distribution: self.distribution.clone(),
            n: self.n,
            time_ms: self.time_ms,
            ok: self.ok,
        }
    }

    /// Returns the store row as plain fields, in column order.
    pub fn fields(&self) -> [String; 12] {
        [
            self.timestamp.clone(),
            self.task.clone(),
            self.language.clone(),
            self.language_version.clone(),
            self.algo.clone(),
            self.dataset_file.clone(),
            self.distribution.clone(),
            self.n.to_string(),
            self.warmup_runs.to_string(),
            self.rep_index.to_string(),
            format_ms(self.time_ms),
            self.ok.to_string(),
        ]
    }
}

/// The subset of a raw measurement used for aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSample {
    pub language: String,
    pub algo: String,
    pub distribution: String,
    pub n: usize,
    pub time_ms: f64,
    pub ok: bool,
}

impl RawSample {
    /// Returns the aggregation group of this sample.
    pub fn key(&self) -> GroupKey {
        GroupKey {
            language: self.language.clone(),
            algo: self.algo.clone(),
            distribution: self.distribution.clone(),
            n: self.n,
        }
    }
}

/// Aggregation group. The derived ordering (language, algo, distribution,
/// numeric n) is the output order of summary files.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupKey {
    pub language: String,
    pub algo: String,
    pub distribution: String,
    pub n: usize,
}

/// Robust statistics for one `(language, algo, distribution, n)` group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateRow {
    pub language: String,
    pub algo: String,
    pub distribution: String,
    pub n: usize,
    /// Count of samples with `ok = true`.
    pub runs: usize,
    #[serde(serialize_with = "serialize_ms")]
    pub median_ms: f64,
    #[serde(serialize_with = "serialize_ms")]
    pub iqr_ms: f64,
    #[serde(serialize_with = "serialize_ms")]
    pub mean_ms: f64,
    #[serde(serialize_with = "serialize_ms")]
    pub std_ms: f64,
}

impl AggregateRow {
    /// Returns the aggregation group of this row.
    pub fn key(&self) -> GroupKey {
        GroupKey {
            language: self.language.clone(),
            algo: self.algo.clone(),
            distribution: self.distribution.clone(),
            n: self.n,
        }
    }
}

/// An aggregate row extended with baseline-relative metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparativeRow {
    pub summary: AggregateRow,
    /// `baseline_median / median_ms`; `None` without a baseline entry or
    /// with a zero median. Values above 1 are faster than the baseline.
    pub speedup_vs_baseline: Option<f64>,
    /// `iqr_ms / median_ms`; `None` with a zero median.
    pub relative_variability: Option<f64>,
}

/// Cross-distribution rollup for one `(language, n)`.
#[derive(Debug, Clone, PartialEq)]
pub struct GeomeanRow {
    pub language: String,
    pub n: usize,
    /// Number of distribution medians that entered the mean.
    pub distributions: usize,
    pub geomean_median_ms: f64,
    /// `geomean(baseline) / geomean(language)`; `None` when the baseline has
    /// no rollup at this `n`.
    pub speedup_vs_baseline: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurement() -> RawMeasurement {
        RawMeasurement {
            timestamp: "2025-01-02T03:04:05".to_string(),
            task: SORT_TASK.to_string(),
            language: "rust".to_string(),
            language_version: "rust/1.0.0".to_string(),
            algo: "builtin".to_string(),
            dataset_file: "datasets/ints/random_n10_seed1.bin".to_string(),
            distribution: "random".to_string(),
            n: 10,
            warmup_runs: 5,
            rep_index: 3,
            time_ms: 0.12345,
            ok: true,
        }
    }

    #[test]
    fn test_format_ms() {
        assert_eq!(format_ms(1.0), "1.000");
        assert_eq!(format_ms(0.0005), "0.001");
        assert_eq!(format_ms(12.3456), "12.346");
    }

    #[test]
    fn test_fields_in_column_order() {
        let fields = measurement().fields();
        assert_eq!(fields[0], "2025-01-02T03:04:05");
        assert_eq!(fields[1], "sort");
        assert_eq!(fields[9], "3");
        assert_eq!(fields[10], "0.123");
        assert_eq!(fields[11], "true");
    }

    #[test]
    fn test_sample_projection() {
        let sample = measurement().sample();
        assert_eq!(sample.language, "rust");
        assert_eq!(sample.n, 10);
        assert!(sample.ok);
        assert_eq!(sample.key().distribution, "random");
    }

    #[test]
    fn test_group_key_orders_n_numerically() {
        let key = |n| GroupKey {
            language: "go".to_string(),
            algo: "builtin".to_string(),
            distribution: "dups".to_string(),
            n,
        };
        assert!(key(1_000) < key(10_000));
        assert!(key(9) < key(10));

        let other_lang = GroupKey {
            language: "cpp".to_string(),
            ..key(1_000_000)
        };
        assert!(other_lang < key(1));
    }
}
