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

//! Dataset commands: generation and inspection.

use crate::commands;
use crate::error::Result;
use clap::Subcommand;
use sortbench_bench::core::config::{DEFAULT_META_DIR, DEFAULT_OUTDIR, DEFAULT_SEEDS, DEFAULT_SIZES};
use sortbench_bench::core::GenConfig;
use sortbench_core::Distribution;
use std::path::PathBuf;

/// Dataset commands.
#[derive(Subcommand)]
pub enum DatasetCommands {
    /// Generate benchmark datasets and the dataset manifest
    ///
    /// Writes one `{distribution}_n{n}_seed{seed}.bin` file per combination of
    /// distribution, size and seed. Existing files are skipped unless --force
    /// is given. The manifest lists every planned dataset.
    Gen {
        /// Output directory for .bin datasets
        #[arg(long, value_name = "DIR", default_value = DEFAULT_OUTDIR)]
        outdir: PathBuf,

        /// Directory for datasets.csv
        #[arg(long, value_name = "DIR", default_value = DEFAULT_META_DIR)]
        meta_dir: PathBuf,

        /// Comma-separated sizes, e.g. 1000,10000,100000
        #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SIZES.to_vec())]
        sizes: Vec<usize>,

        /// Comma-separated seeds, e.g. 1,2,3
        #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SEEDS.to_vec())]
        seeds: Vec<u64>,

        /// Comma-separated distributions
        #[arg(long, default_value = "random,sorted,reversed,dups,nearly_sorted")]
        dists: String,

        /// Overwrite existing dataset files
        #[arg(long)]
        force: bool,

        /// Print what would be generated without writing files
        #[arg(long)]
        dry_run: bool,
    },

    /// Inspect a dataset file
    ///
    /// Decodes the file and reports its length, value range and whether it is
    /// sorted. With --verify, a file named after the dataset convention is
    /// compared against a fresh regeneration.
    Inspect {
        /// Dataset file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Regenerate from the filename and compare contents
        #[arg(long)]
        verify: bool,
    },
}

impl DatasetCommands {
    /// Execute the dataset command.
    pub fn execute(self) -> Result<()> {
        match self {
            DatasetCommands::Gen {
                outdir,
                meta_dir,
                sizes,
                seeds,
                dists,
                force,
                dry_run,
            } => {
                let distributions = Distribution::parse_list(&dists)?;
                let config = GenConfig::default()
                    .with_outdir(outdir)
                    .with_meta_dir(meta_dir)
                    .with_sizes(&sizes)
                    .with_seeds(&seeds)
                    .with_distributions(&distributions)
                    .with_force(force)
                    .with_dry_run(dry_run);
                commands::generate(&config)
            }
            DatasetCommands::Inspect { file, verify } => commands::inspect(&file, verify),
        }
    }
}
