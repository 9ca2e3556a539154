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

//! Reporting commands: summary, comparison and main table.

use crate::commands;
use crate::error::Result;
use clap::Subcommand;
use sortbench_bench::core::config::{
    DEFAULT_BASELINE, DEFAULT_COMPARATIVE_PATH, DEFAULT_MAIN_TABLE_PATH, DEFAULT_RAW_PATH,
    DEFAULT_SUMMARY_PATH, DEFAULT_TABLE_ALGO, DEFAULT_TABLE_DISTRIBUTION, DEFAULT_TABLE_N,
};
use sortbench_bench::core::{ReportConfig, TableFilter};
use std::path::PathBuf;

/// Reporting commands.
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Aggregate the raw store into per-group statistics
    ///
    /// Groups valid samples by (language, algo, distribution, n) and writes
    /// runs, median, IQR, mean and sample standard deviation. The summary is
    /// recomputed from the whole store on every call.
    Summarize {
        /// Raw measurement store
        #[arg(long, value_name = "CSV", default_value = DEFAULT_RAW_PATH)]
        raw: PathBuf,

        /// Summary output
        #[arg(long, value_name = "CSV", default_value = DEFAULT_SUMMARY_PATH)]
        out: PathBuf,
    },

    /// Compare languages against a baseline
    ///
    /// Adds speedup and relative variability to every summary row and, with
    /// --geomean-out, writes the cross-distribution geometric-mean rollup of
    /// one algorithm.
    Compare {
        /// Summary input
        #[arg(long, value_name = "CSV", default_value = DEFAULT_SUMMARY_PATH)]
        summary: PathBuf,

        /// Baseline language
        #[arg(long, default_value = DEFAULT_BASELINE)]
        baseline: String,

        /// Comparative table output
        #[arg(long, value_name = "CSV", default_value = DEFAULT_COMPARATIVE_PATH)]
        out: PathBuf,

        /// Geometric-mean rollup output
        #[arg(long, value_name = "CSV")]
        geomean_out: Option<PathBuf>,

        /// Algorithm rolled up across distributions
        #[arg(long, default_value = DEFAULT_TABLE_ALGO)]
        algo: String,
    },

    /// Write the main results table for one configuration
    ///
    /// Selects the summary rows for one distribution, size and algorithm and
    /// orders them fastest first.
    Table {
        /// Summary input
        #[arg(long, value_name = "CSV", default_value = DEFAULT_SUMMARY_PATH)]
        summary: PathBuf,

        /// Distribution
        #[arg(long, default_value = DEFAULT_TABLE_DISTRIBUTION)]
        dist: String,

        /// Dataset size
        #[arg(long, default_value_t = DEFAULT_TABLE_N)]
        n: usize,

        /// Algorithm
        #[arg(long, default_value = DEFAULT_TABLE_ALGO)]
        algo: String,

        /// Table output
        #[arg(long, value_name = "CSV", default_value = DEFAULT_MAIN_TABLE_PATH)]
        out: PathBuf,
    },
}

impl ReportCommands {
    /// Execute the reporting command.
    pub fn execute(self) -> Result<()> {
        match self {
            ReportCommands::Summarize { raw, out } => {
                let config = ReportConfig::default()
                    .with_raw_path(raw)
                    .with_summary_path(out);
                commands::summarize(&config)
            }
            ReportCommands::Compare {
                summary,
                baseline,
                out,
                geomean_out,
                algo,
            } => {
                let config = ReportConfig::default()
                    .with_summary_path(summary)
                    .with_baseline(baseline);
                commands::compare(&config, &out, geomean_out.as_deref(), &algo)
            }
            ReportCommands::Table {
                summary,
                dist,
                n,
                algo,
                out,
            } => commands::table(&summary, &out, &TableFilter::new(dist, n, algo)),
        }
    }
}
