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

//! The measured run command.

use crate::commands;
use crate::error::Result;
use clap::Subcommand;
use sortbench_bench::core::config::{DEFAULT_RAW_PATH, DEFAULT_REPS, DEFAULT_WARMUP};
use sortbench_bench::core::RunConfig;
use std::path::PathBuf;

/// Measurement commands.
#[derive(Subcommand)]
pub enum MeasureCommands {
    /// Time the Rust slice sorts on one dataset
    ///
    /// Runs --warmup untimed sorts, then --reps timed sorts, each on a fresh
    /// copy of the dataset. Every timed repetition is printed to stdout as a
    /// CSV row and appended to the raw measurement store.
    Run {
        /// Dataset file
        #[arg(long, value_name = "PATH")]
        dataset: PathBuf,

        /// Algorithm: builtin (unstable sort) or stable
        #[arg(long, default_value = "builtin")]
        algo: String,

        /// Untimed warmup repetitions
        #[arg(long, default_value_t = DEFAULT_WARMUP)]
        warmup: usize,

        /// Timed repetitions
        #[arg(long, default_value_t = DEFAULT_REPS)]
        reps: usize,

        /// Raw measurement store to append to
        #[arg(long, value_name = "CSV", default_value = DEFAULT_RAW_PATH)]
        out: PathBuf,

        /// Record every repetition as ok without checking the result
        #[arg(long)]
        no_validate: bool,
    },
}

impl MeasureCommands {
    /// Execute the measurement command.
    pub fn execute(self) -> Result<()> {
        match self {
            MeasureCommands::Run {
                dataset,
                algo,
                warmup,
                reps,
                out,
                no_validate,
            } => {
                let config = RunConfig::default()
                    .with_warmup(warmup)
                    .with_reps(reps)
                    .with_out(out)
                    .with_validate(!no_validate);
                commands::run(&config, &dataset, &algo)
            }
        }
    }
}
