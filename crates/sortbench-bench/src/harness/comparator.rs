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

//! Baseline normalization and cross-distribution rollups.

use sortbench_core::{AggregateRow, ComparativeRow, GeomeanRow};
use std::collections::{BTreeMap, HashMap};

/// Extends every summary row with baseline-relative metrics.
///
/// The baseline median is looked up by `(distribution, algo, n)` among the
/// rows whose language is `baseline`. A missing baseline entry or a zero
/// median gives a `None` speedup; a zero median also gives a `None`
/// relative variability. Row order is preserved.
pub fn normalize(rows: &[AggregateRow], baseline: &str) -> Vec<ComparativeRow> {
    let baseline_medians: HashMap<(&str, &str, usize), f64> = rows
        .iter()
        .filter(|r| r.language == baseline)
        .map(|r| ((r.distribution.as_str(), r.algo.as_str(), r.n), r.median_ms))
        .collect();

    rows.iter()
        .map(|row| {
            let has_median = row.median_ms != 0.0;
            let speedup_vs_baseline = baseline_medians
                .get(&(row.distribution.as_str(), row.algo.as_str(), row.n))
                .filter(|_| has_median)
                .map(|base| base / row.median_ms);
            let relative_variability = has_median.then(|| row.iqr_ms / row.median_ms);

            ComparativeRow {
                summary: row.clone(),
                speedup_vs_baseline,
                relative_variability,
            }
        })
        .collect()
}

/// Orders comparative rows by `(distribution, n, language, algo)`.
pub fn sort_by_configuration(rows: &mut [ComparativeRow]) {
    rows.sort_by(|a, b| {
        let (a, b) = (&a.summary, &b.summary);
        (&a.distribution, a.n, &a.language, &a.algo)
            .cmp(&(&b.distribution, b.n, &b.language, &b.algo))
    });
}

/// Geometric mean of the finite, strictly positive values.
///
/// Other values are skipped rather than poisoning the result. Returns `None`
/// when nothing remains.
pub fn geomean(values: &[f64]) -> Option<f64> {
    let (count, log_sum) = values
        .iter()
        .filter(|v| v.is_finite() && **v > 0.0)
        .fold((0usize, 0.0f64), |(count, sum), v| (count + 1, sum + v.ln()));
    (count > 0).then(|| (log_sum / count as f64).exp())
}

/// Rolls one algorithm's medians up across distributions for every
/// `(language, n)`.
///
/// Rows of other algorithms are ignored, so a language that records several
/// sorts is never blended into one mean. `distributions` counts the distinct
/// distributions whose median entered the mean. Groups without a defined
/// geometric mean are omitted. Output is ordered by `(n, language)`.
pub fn geomean_rollup(rows: &[AggregateRow], baseline: &str, algo: &str) -> Vec<GeomeanRow> {
    let mut groups: BTreeMap<(usize, &str), BTreeMap<&str, f64>> = BTreeMap::new();
    for row in rows.iter().filter(|r| r.algo == algo) {
        groups
            .entry((row.n, row.language.as_str()))
            .or_default()
            .insert(row.distribution.as_str(), row.median_ms);
    }

    let means: Vec<(usize, &str, usize, f64)> = groups
        .iter()
        .filter_map(|(&(n, language), by_distribution)| {
            let medians: Vec<f64> = by_distribution
                .values()
                .copied()
                .filter(|v| v.is_finite() && *v > 0.0)
                .collect();
            geomean(&medians).map(|g| (n, language, medians.len(), g))
        })
        .collect();

    let baseline_means: HashMap<usize, f64> = means
        .iter()
        .filter(|(_, language, _, _)| *language == baseline)
        .map(|&(n, _, _, g)| (n, g))
        .collect();

    means
        .into_iter()
        .map(|(n, language, distributions, g)| GeomeanRow {
            language: language.to_string(),
            n,
            distributions,
            geomean_median_ms: g,
            speedup_vs_baseline: baseline_means.get(&n).map(|base| base / g),
        })
        .collect()
}
