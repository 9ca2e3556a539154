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

//! Summary, comparative, geomean and main-table files.
//!
//! All of these are derived tables: every write overwrites the target.

use crate::error::{CsvError, Result};
use crate::schema::{
    ColumnIndex, COMPARATIVE_HEADER, GEOMEAN_HEADER, MAIN_TABLE_HEADER, SUMMARY_HEADER,
};
use crate::writer::{ensure_parent_dir, write_table};
use csv::StringRecord;
use sortbench_core::{format_ms, AggregateRow, ComparativeRow, GeomeanRow};
use std::path::Path;

fn format_optional(value: Option<f64>) -> String {
    value.map(format_ms).unwrap_or_default()
}

/// Writes the per-group summary, one row per aggregate in the given order.
pub fn write_summary(path: impl AsRef<Path>, rows: &[AggregateRow]) -> Result<()> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;

    let mut wtr = csv::Writer::from_path(path).map_err(|e| CsvError::csv_error(path, e))?;
    if rows.is_empty() {
        wtr.write_record(SUMMARY_HEADER)
            .map_err(|e| CsvError::csv_error(path, e))?;
    }
    for row in rows {
        wtr.serialize(row)
            .map_err(|e| CsvError::csv_error(path, e))?;
    }
    wtr.flush().map_err(|e| CsvError::io_error(path, e))
}

/// Reads a summary file written by [`write_summary`] or by hand.
///
/// Columns are matched by name, so extra columns and reordering are allowed.
pub fn read_summary(path: impl AsRef<Path>) -> Result<Vec<AggregateRow>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(CsvError::Missing {
            path: path.to_path_buf(),
        });
    }

    let mut rdr = csv::Reader::from_path(path).map_err(|e| CsvError::csv_error(path, e))?;
    let headers = rdr
        .headers()
        .map_err(|e| CsvError::csv_error(path, e))?
        .clone();
    let index = ColumnIndex::resolve(path, &headers, &SUMMARY_HEADER)?;

    let mut rows = Vec::new();
    let mut record = StringRecord::new();
    while rdr
        .read_record(&mut record)
        .map_err(|e| CsvError::csv_error(path, e))?
    {
        let line = record.position().map_or(0, |p| p.line());
        rows.push(AggregateRow {
            language: index.get(&record, "language").to_string(),
            algo: index.get(&record, "algo").to_string(),
            distribution: index.get(&record, "distribution").to_string(),
            n: index.parse(path, line, &record, "n")?,
            runs: index.parse(path, line, &record, "runs")?,
            median_ms: index.parse(path, line, &record, "median_ms")?,
            iqr_ms: index.parse(path, line, &record, "iqr_ms")?,
            mean_ms: index.parse(path, line, &record, "mean_ms")?,
            std_ms: index.parse(path, line, &record, "std_ms")?,
        });
    }
    Ok(rows)
}

/// Writes comparative rows. Undefined ratios are written as empty fields.
pub fn write_comparative(path: impl AsRef<Path>, rows: &[ComparativeRow]) -> Result<()> {
    write_table(
        path.as_ref(),
        &COMPARATIVE_HEADER,
        rows.iter().map(|row| {
            let s = &row.summary;
            [
                s.language.clone(),
                s.algo.clone(),
                s.distribution.clone(),
                s.n.to_string(),
                s.runs.to_string(),
                format_ms(s.median_ms),
                format_ms(s.iqr_ms),
                format_ms(s.mean_ms),
                format_ms(s.std_ms),
                format_optional(row.speedup_vs_baseline),
                format_optional(row.relative_variability),
            ]
        }),
    )
}

/// Writes the per-language geometric-mean rollup.
pub fn write_geomean(path: impl AsRef<Path>, rows: &[GeomeanRow]) -> Result<()> {
    write_table(
        path.as_ref(),
        &GEOMEAN_HEADER,
        rows.iter().map(|row| {
            [
                row.language.clone(),
                row.n.to_string(),
                row.distributions.to_string(),
                format_ms(row.geomean_median_ms),
                format_optional(row.speedup_vs_baseline),
            ]
        }),
    )
}

/// Writes the main table: one row per language, in the given order.
pub fn write_main_table(path: impl AsRef<Path>, rows: &[AggregateRow]) -> Result<()> {
    write_table(
        path.as_ref(),
        &MAIN_TABLE_HEADER,
        rows.iter().map(|row| {
            [
                row.language.clone(),
                format_ms(row.median_ms),
                format_ms(row.iqr_ms),
                format_ms(row.mean_ms),
                format_ms(row.std_ms),
                row.runs.to_string(),
            ]
        }),
    )
}
