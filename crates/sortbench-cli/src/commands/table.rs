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
use sortbench_bench::core::TableFilter;
use sortbench_bench::reporters::write_main_table_from;
use std::path::Path;

/// Write the main results table for one configuration.
pub fn table(summary: &Path, out: &Path, filter: &TableFilter) -> Result<()> {
    let rows = write_main_table_from(summary, out, filter)?;
    for (rank, row) in rows.iter().enumerate() {
        println!(
            "{:>2}. {:<12} {:>12.3} ms",
            rank + 1,
            row.language,
            row.median_ms
        );
    }
    println!("Wrote {}", out.display());
    Ok(())
}
