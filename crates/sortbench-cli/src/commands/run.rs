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
use sortbench_bench::core::{BuiltinSort, RunConfig};
use sortbench_bench::harness::{run_protocol, ConsoleSink, StoreSink, Tee};
use std::io;
use std::path::Path;

/// Run the measurement protocol on `dataset` with the named algorithm.
///
/// Rows go to stdout and to the raw store at `config.out`. The closing
/// summary goes to stderr so stdout stays machine-readable.
pub fn run(config: &RunConfig, dataset: &Path, algo: &str) -> Result<()> {
    let sorter: BuiltinSort = algo.parse()?;

    let stdout = io::stdout();
    let mut sink = Tee::new(ConsoleSink::new(stdout.lock()), StoreSink::new(config.out.clone()));
    let report = run_protocol(config, dataset, &sorter, &mut sink)?;

    eprintln!(
        "{} reps of {} on {} (n={}), {} failed validation, appended to {}",
        report.reps,
        sorter,
        report.distribution,
        report.n,
        report.failures,
        config.out.display()
    );
    Ok(())
}
