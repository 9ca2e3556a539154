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

//! SortBench command-line interface

use clap::Parser;
use sortbench_cli::cli::Commands;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// SortBench - cross-language sorting benchmark harness
///
/// Generates deterministic integer datasets, times the Rust slice sorts on
/// them, and aggregates the raw measurements of every participating
/// language into summary and comparison tables.
///
/// # Examples
///
/// ```bash
/// # Generate the default dataset catalog
/// sortbench gen
///
/// # Time the unstable sort on one dataset
/// sortbench run --dataset datasets/ints/random_n1000000_seed1.bin
///
/// # Aggregate and compare against C++
/// sortbench summarize
/// sortbench compare --baseline cpp --geomean-out results/geomean.csv
/// ```
#[derive(Parser)]
#[command(name = "sortbench")]
#[command(author, version, about = "SortBench - cross-language sorting benchmark harness", long_about = None)]
struct Cli {
    /// Log progress at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Logs go to stderr; `run` keeps stdout for measurement rows.
fn init_tracing(verbose: bool) {
    let level = if verbose { "sortbench=debug" } else { "sortbench=info" };
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = level.parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
