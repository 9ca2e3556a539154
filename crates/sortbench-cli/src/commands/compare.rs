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

use crate::error::Result;
use colored::Colorize;
use sortbench_bench::core::ReportConfig;
use sortbench_bench::reporters::{compare as build_comparison, write_comparison};
use sortbench_csv::read_summary;
use std::path::Path;

/// Compare every language against `config.baseline`.
///
/// Writes the comparative table to `out` and, when `geomean_out` is given,
/// the geometric-mean rollup of `algo`. The rollup is also printed.
pub fn compare(
    config: &ReportConfig,
    out: &Path,
    geomean_out: Option<&Path>,
    algo: &str,
) -> Result<()> {
    let summary = read_summary(&config.summary_path)?;
    let comparison = build_comparison(&summary, &config.baseline, algo);
    write_comparison(&comparison, out, geomean_out)?;

    println!(
        "{} (algo: {}, baseline: {})",
        "Geometric mean across distributions".bold().underline(),
        algo.cyan(),
        config.baseline.cyan()
    );
    println!();
    println!(
        "{:>10}  {:<12}  {:>5}  {:>14}  {:>8}",
        "n", "language", "dists", "geomean (ms)", "speedup"
    );
    for row in &comparison.rollup {
        let speedup = match row.speedup_vs_baseline {
            Some(s) if s >= 1.0 => format!("{s:.3}").green(),
            Some(s) => format!("{s:.3}").red(),
            None => "-".dimmed(),
        };
        println!(
            "{:>10}  {:<12}  {:>5}  {:>14.3}  {:>8}",
            row.n, row.language, row.distributions, row.geomean_median_ms, speedup
        );
    }

    println!();
    println!("Wrote {}", out.display());
    if let Some(path) = geomean_out {
        println!("Wrote {}", path.display());
    }
    Ok(())
}
