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

//! Fixed CSV headers and header validation.

use crate::error::{CsvError, Result};
use csv::StringRecord;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

/// Header of the dataset manifest.
pub const MANIFEST_HEADER: [&str; 4] = ["distribution", "n", "seed", "path"];

/// Header of the raw measurement store.
pub const RAW_HEADER: [&str; 12] = [
    "timestamp_iso",
    "task",
    "language",
    "language_version",
    "algo",
    "dataset_file",
    "distribution",
    "n",
    "warmup_runs",
    "rep_idx",
    "time_ms",
    "ok",
];

/// Raw store columns the aggregator cannot work without.
pub const RAW_REQUIRED: [&str; 6] = ["language", "algo", "distribution", "n", "time_ms", "ok"];

/// Header of the summary table.
pub const SUMMARY_HEADER: [&str; 9] = [
    "language",
    "algo",
    "distribution",
    "n",
    "runs",
    "median_ms",
    "iqr_ms",
    "mean_ms",
    "std_ms",
];

/// Header of the comparative table.
pub const COMPARATIVE_HEADER: [&str; 11] = [
    "language",
    "algo",
    "distribution",
    "n",
    "runs",
    "median_ms",
    "iqr_ms",
    "mean_ms",
    "std_ms",
    "speedup_vs_baseline",
    "relative_variability",
];

/// Header of the cross-distribution geometric-mean table.
pub const GEOMEAN_HEADER: [&str; 5] = [
    "language",
    "n",
    "distributions",
    "geomean_median_ms",
    "speedup_vs_baseline",
];

/// Header of the single-configuration main table.
pub const MAIN_TABLE_HEADER: [&str; 6] =
    ["language", "median_ms", "iqr_ms", "mean_ms", "std_ms", "runs"];

/// Positions of required columns in a concrete header.
///
/// Columns are looked up by name, so producers may add or reorder columns
/// freely as long as the required ones are present.
#[derive(Debug, Clone)]
pub struct ColumnIndex {
    positions: HashMap<String, usize>,
    width: usize,
}

impl ColumnIndex {
    /// Resolves `required` against `headers`.
    ///
    /// Fails with [`CsvError::MissingColumns`] listing every absent column.
    pub fn resolve(path: &Path, headers: &StringRecord, required: &[&str]) -> Result<Self> {
        let positions: HashMap<String, usize> = headers
            .iter()
            .enumerate()
            .map(|(i, name)| (name.trim().to_string(), i))
            .collect();

        let missing: Vec<String> = required
            .iter()
            .filter(|name| !positions.contains_key(**name))
            .map(|name| name.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(CsvError::MissingColumns {
                path: path.to_path_buf(),
                missing,
            });
        }

        Ok(Self {
            positions,
            width: headers.len(),
        })
    }

    /// Number of columns in the header.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the raw field for `column`, or an empty string when the row is
    /// too short or the column is unknown.
    pub fn get<'r>(&self, record: &'r StringRecord, column: &str) -> &'r str {
        self.positions
            .get(column)
            .and_then(|&i| record.get(i))
            .unwrap_or("")
    }

    /// Parses the field for `column`.
    pub fn parse<T: FromStr>(
        &self,
        path: &Path,
        line: u64,
        record: &StringRecord,
        column: &str,
    ) -> Result<T> {
        let value = self.get(record, column).trim();
        value.parse::<T>().map_err(|_| CsvError::InvalidField {
            path: path.to_path_buf(),
            line,
            column: column.to_string(),
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> StringRecord {
        StringRecord::from(names.to_vec())
    }

    #[test]
    fn test_resolve_reordered_header() {
        let h = headers(&["ok", "n", "time_ms", "language", "algo", "distribution", "extra"]);
        let idx = ColumnIndex::resolve(Path::new("raw.csv"), &h, &RAW_REQUIRED).unwrap();
        assert_eq!(idx.width(), 7);

        let row = StringRecord::from(vec!["true", "10", "1.5", "go", "builtin", "dups", "x"]);
        assert_eq!(idx.get(&row, "language"), "go");
        let n: usize = idx.parse(Path::new("raw.csv"), 2, &row, "n").unwrap();
        assert_eq!(n, 10);
    }

    #[test]
    fn test_resolve_lists_every_missing_column() {
        let h = headers(&["language", "algo", "n"]);
        let err = ColumnIndex::resolve(Path::new("raw.csv"), &h, &RAW_REQUIRED).unwrap_err();
        assert_eq!(
            err,
            CsvError::MissingColumns {
                path: "raw.csv".into(),
                missing: vec![
                    "distribution".to_string(),
                    "time_ms".to_string(),
                    "ok".to_string()
                ],
            }
        );
    }

    #[test]
    fn test_parse_reports_line_and_column() {
        let h = headers(&SUMMARY_HEADER);
        let idx = ColumnIndex::resolve(Path::new("s.csv"), &h, &SUMMARY_HEADER).unwrap();
        let row = StringRecord::from(vec!["go", "builtin", "dups", "ten", "1", "1", "0", "1", "0"]);
        let err = idx
            .parse::<usize>(Path::new("s.csv"), 4, &row, "n")
            .unwrap_err();
        assert_eq!(err.line(), Some(4));
        assert!(err.to_string().contains("'ten'"));
    }

    #[test]
    fn test_raw_required_is_subset_of_raw_header() {
        for column in RAW_REQUIRED {
            assert!(RAW_HEADER.contains(&column));
        }
    }
}
