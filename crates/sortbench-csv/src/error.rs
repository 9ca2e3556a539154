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

//! Error types for CSV reading and writing.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for CSV operations.
pub type Result<T> = std::result::Result<T, CsvError>;

/// CSV error types.
///
/// Every variant names the file involved, so fatal errors can be reported to
/// the user without extra context.
///
/// # Examples
///
/// ```
/// use sortbench_csv::CsvError;
///
/// let err = CsvError::MissingColumns {
///     path: "results/raw.csv".into(),
///     missing: vec!["ok".to_string(), "time_ms".to_string()],
/// };
/// assert_eq!(
///     err.to_string(),
///     "'results/raw.csv' is missing required columns: ok, time_ms"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CsvError {
    /// A file that must exist was not found.
    #[error("Missing {path}")]
    Missing {
        /// The expected file.
        path: PathBuf,
    },

    /// I/O operation failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error.
        path: PathBuf,
        /// The error message.
        message: String,
    },

    /// Error from the underlying CSV library.
    #[error("CSV error in '{path}': {message}")]
    Csv {
        /// The file being read or written.
        path: PathBuf,
        /// The error message.
        message: String,
    },

    /// Header lacks columns the consumer requires.
    #[error("'{}' is missing required columns: {}", path.display(), missing.join(", "))]
    MissingColumns {
        /// The file with the incomplete header.
        path: PathBuf,
        /// Every missing column, in schema order.
        missing: Vec<String>,
    },

    /// A field could not be parsed as its column's type.
    #[error("Invalid value '{value}' for column '{column}' in '{}' at line {line}", path.display())]
    InvalidField {
        /// The file being read.
        path: PathBuf,
        /// 1-based line number.
        line: u64,
        /// Column name.
        column: String,
        /// The raw field.
        value: String,
    },

    /// A row has a different number of fields than the header.
    #[error("Row at line {line} of '{}' has {actual} fields, expected {expected}", path.display())]
    WidthMismatch {
        /// The file being read.
        path: PathBuf,
        /// 1-based line number.
        line: u64,
        /// Header width.
        expected: usize,
        /// Row width.
        actual: usize,
    },

    /// A table that must have rows has none matching.
    #[error("No matching rows in '{}': {reason}", path.display())]
    NoRows {
        /// The file that was filtered.
        path: PathBuf,
        /// Description of the filter.
        reason: String,
    },
}

impl CsvError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a CSV library error with file path context.
    pub fn csv_error(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Returns the 1-based line of row-level errors.
    pub fn line(&self) -> Option<u64> {
        match self {
            Self::InvalidField { line, .. } | Self::WidthMismatch { line, .. } => Some(*line),
            _ => None,
        }
    }
}
