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

//! Summary and comparative reports built from files on disk.

use crate::error::Result;
use crate::harness::aggregator::summarize;
use crate::harness::comparator::{geomean_rollup, normalize, sort_by_configuration};
use sortbench_core::{AggregateRow, ComparativeRow, GeomeanRow};
use sortbench_csv::{read_samples, write_comparative, write_geomean, write_summary};
use std::path::Path;
use tracing::{info, warn};

/// Recomputes the summary file from the whole raw store.
pub fn summarize_file(raw_path: &Path, summary_path: &Path) -> Result<Vec<AggregateRow>> {
    let samples = read_samples(raw_path)?;
    let rejected = samples.iter().filter(|s| !s.ok).count();
    if rejected > 0 {
        warn!(rejected, "excluding samples that failed validation");
    }

    let rows = summarize(&samples);
    write_summary(summary_path, &rows)?;
    info!(
        path = %summary_path.display(),
        samples = samples.len(),
        groups = rows.len(),
        "wrote summary"
    );
    Ok(rows)
}

/// Output of [`compare`].
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    /// Comparative rows in `(distribution, n, language, algo)` order.
    pub rows: Vec<ComparativeRow>,
    /// Geometric-mean rollup in `(n, language)` order.
    pub rollup: Vec<GeomeanRow>,
}

/// Normalizes `summary` against `baseline` and computes the rollup.
///
/// The rollup covers the single algorithm `algo`; the comparative rows always
/// cover every algorithm.
pub fn compare(summary: &[AggregateRow], baseline: &str, algo: &str) -> Comparison {
    if !summary.iter().any(|r| r.language == baseline) {
        warn!(baseline, "baseline language has no summary rows");
    }

    let mut rows = normalize(summary, baseline);
    sort_by_configuration(&mut rows);

    if !summary.iter().any(|r| r.algo == algo) {
        warn!(algo, "algorithm has no summary rows, rollup is empty");
    }
    let rollup = geomean_rollup(summary, baseline, algo);

    Comparison { rows, rollup }
}

/// Writes the comparative table and, when requested, the rollup.
pub fn write_comparison(
    comparison: &Comparison,
    comparative_path: &Path,
    geomean_path: Option<&Path>,
) -> Result<()> {
    write_comparative(comparative_path, &comparison.rows)?;
    info!(
        path = %comparative_path.display(),
        rows = comparison.rows.len(),
        "wrote comparative table"
    );

    if let Some(path) = geomean_path {
        write_geomean(path, &comparison.rollup)?;
        info!(
            path = %path.display(),
            rows = comparison.rollup.len(),
            "wrote geomean rollup"
        );
    }
    Ok(())
}
