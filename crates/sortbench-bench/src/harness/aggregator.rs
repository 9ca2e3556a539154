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

//! Result aggregation and statistics computation.
//!
//! Turns raw samples into one [`AggregateRow`] per
//! `(language, algo, distribution, n)` group. Samples with `ok = false` are
//! dropped before grouping, so a group's `runs` is its count of valid samples
//! and a group with none is not emitted.

use sortbench_core::{AggregateRow, GroupKey, RawSample};
use std::collections::BTreeMap;

/// Robust statistics of one group of timings.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    /// Number of samples.
    pub runs: usize,
    /// Median.
    pub median: f64,
    /// 25th percentile.
    pub p25: f64,
    /// 75th percentile.
    pub p75: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation (`runs - 1` denominator), 0 below two runs.
    pub std_dev: f64,
}

impl Statistics {
    /// Computes statistics of `times` in any order. Returns `None` when empty.
    pub fn from_times(times: &[f64]) -> Option<Self> {
        if times.is_empty() {
            return None;
        }
        let mut sorted = times.to_vec();
        sorted.sort_by(f64::total_cmp);

        let mean = mean(&sorted);
        Some(Self {
            runs: sorted.len(),
            median: median(&sorted),
            p25: percentile(&sorted, 25.0),
            p75: percentile(&sorted, 75.0),
            mean,
            std_dev: sample_std(&sorted, mean),
        })
    }

    /// Interquartile range, `p75 - p25`.
    pub fn iqr(&self) -> f64 {
        self.p75 - self.p25
    }
}

/// Linear-interpolation percentile of an ascending, non-empty slice.
///
/// The rank is `k = (len - 1) * p / 100`. An integral `k` selects that
/// element; otherwise the neighbours at `floor(k)` and `ceil(k)` are blended
/// by the fractional part.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let k = (sorted.len() - 1) as f64 * p / 100.0;
    let lo = k.floor();
    let hi = k.ceil();
    if lo == hi {
        return sorted[k as usize];
    }
    sorted[lo as usize] * (hi - k) + sorted[hi as usize] * (k - lo)
}

/// Median of an ascending, non-empty slice; the mean of the two middle
/// elements for even lengths.
pub fn median(sorted: &[f64]) -> f64 {
    let len = sorted.len();
    if len == 0 {
        return f64::NAN;
    }
    let mid = len / 2;
    if len % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation with Bessel's correction; `0.0` for fewer than
/// two values.
pub fn sample_std(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let sum_sq: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}

/// Aggregates raw samples into summary rows ordered by group key.
pub fn summarize(samples: &[RawSample]) -> Vec<AggregateRow> {
    let mut groups: BTreeMap<GroupKey, Vec<f64>> = BTreeMap::new();
    for sample in samples.iter().filter(|s| s.ok) {
        groups.entry(sample.key()).or_default().push(sample.time_ms);
    }

    groups
        .into_iter()
        .filter_map(|(key, times)| {
            let stats = Statistics::from_times(&times)?;
            Some(AggregateRow {
                language: key.language,
                algo: key.algo,
                distribution: key.distribution,
                n: key.n,
                runs: stats.runs,
                median_ms: stats.median,
                iqr_ms: stats.iqr(),
                mean_ms: stats.mean,
                std_ms: stats.std_dev,
            })
        })
        .collect()
}
