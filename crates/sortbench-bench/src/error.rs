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

//! Error types for SortBench harness operations.

use sortbench_core::CoreError;
use sortbench_csv::CsvError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for harness operations.
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur while generating, running or aggregating benchmarks.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BenchError {
    /// Dataset format or spec error.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// CSV schema or IO error.
    #[error(transparent)]
    Csv(#[from] CsvError),

    /// I/O error outside the CSV layer.
    #[error("I/O error for '{}': {message}", path.display())]
    Io {
        /// The path involved.
        path: PathBuf,
        /// The error message.
        message: String,
    },

    /// Invalid configuration parameter.
    #[error("Invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name.
        parameter: String,
        /// Reason for invalidity.
        reason: String,
    },
}

impl BenchError {
    /// Create an I/O error with path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn invalid_config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }
}
