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
use sortbench_bench::reporters::summarize_file;

/// Recompute the summary from the raw store.
pub fn summarize(config: &ReportConfig) -> Result<()> {
    let rows = summarize_file(&config.raw_path, &config.summary_path)?;
    println!("{} {} groups", "Summarized:".bold(), rows.len());
    println!("Wrote {}", config.summary_path.display());
    Ok(())
}
