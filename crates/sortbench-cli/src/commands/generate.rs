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
use sortbench_bench::core::GenConfig;
use sortbench_bench::generators::{generate_catalog, DatasetAction};

/// Generate the dataset catalog described by `config`.
///
/// Prints one line per planned dataset followed by a count of generated and
/// skipped files. On a dry run nothing is written.
pub fn generate(config: &GenConfig) -> Result<()> {
    let report = generate_catalog(config)?;

    for (_, path, action) in &report.datasets {
        let label = match action {
            DatasetAction::Generated => "generated".green(),
            DatasetAction::Skipped => "skipped".yellow(),
            DatasetAction::Planned => "would generate".cyan(),
        };
        println!("{:>15}  {}", label, path.display());
    }

    println!();
    if config.dry_run {
        println!(
            "{} {} datasets planned (dry run, nothing written)",
            "Plan:".bold(),
            report.planned()
        );
        return Ok(());
    }

    println!(
        "{} {} generated, {} skipped",
        "Done:".bold(),
        report.count(DatasetAction::Generated),
        report.count(DatasetAction::Skipped)
    );
    if let Some(manifest) = &report.manifest {
        println!("Wrote {}", manifest.display());
    }
    Ok(())
}
