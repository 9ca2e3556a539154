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

//! Structured error types for the SortBench CLI.

use sortbench_bench::BenchError;
use sortbench_core::CoreError;
use sortbench_csv::CsvError;
use thiserror::Error;

/// Result type for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;

/// The main error type for SortBench CLI operations.
///
/// Library errors are shown unchanged; they already name the file, column
/// or parameter at fault.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// Harness error (configuration, generation, measurement).
    #[error(transparent)]
    Bench(#[from] BenchError),

    /// Dataset format or naming error.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// CSV schema or IO error.
    #[error(transparent)]
    Csv(#[from] CsvError),

    /// Invalid command-line argument.
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument {
        /// Argument name.
        name: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl CliError {
    /// Create an invalid-argument error.
    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
