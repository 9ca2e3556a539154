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

//! Main results table: one configuration, one row per language.

use crate::core::config::TableFilter;
use crate::error::Result;
use sortbench_core::AggregateRow;
use sortbench_csv::{read_summary, write_main_table, CsvError};
use std::path::Path;
use tracing::info;

/// Selects the summary rows matching `filter`, fastest median first.
///
/// Ties keep their summary order.
pub fn main_table(summary: &[AggregateRow], filter: &TableFilter) -> Vec<AggregateRow> {
    let mut rows: Vec<AggregateRow> = summary
        .iter()
        .filter(|r| {
            r.distribution == filter.distribution && r.n == filter.n && r.algo == filter.algo
        })
        .cloned()
        .collect();
    rows.sort_by(|a, b| a.median_ms.total_cmp(&b.median_ms));
    rows
}

/// Reads `summary_path`, selects the main table and writes it to `out`.
///
/// Fails when no summary row matches the filter.
pub fn write_main_table_from(
    summary_path: &Path,
    out: &Path,
    filter: &TableFilter,
) -> Result<Vec<AggregateRow>> {
    let summary = read_summary(summary_path)?;
    let rows = main_table(&summary, filter);
    if rows.is_empty() {
        return Err(CsvError::NoRows {
            path: summary_path.to_path_buf(),
            reason: filter.describe(),
        }
        .into());
    }

    write_main_table(out, &rows)?;
    info!(path = %out.display(), rows = rows.len(), "wrote main table");
    Ok(rows)
}
