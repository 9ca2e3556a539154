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

//! Error types for dataset encoding, decoding and naming.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised by the dataset format and the dataset naming contract.
///
/// Format errors are always fatal: a dataset that fails to decode is never
/// truncated, padded or otherwise repaired.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The byte buffer does not follow the `u32 count + i32[count]` layout.
    #[error("Malformed dataset: {reason}")]
    MalformedDataset {
        /// What is wrong with the buffer.
        reason: String,
    },

    /// A dataset file on disk does not follow the layout.
    #[error("Malformed dataset file '{path}': {reason}")]
    MalformedFile {
        /// The offending file.
        path: PathBuf,
        /// What is wrong with its contents.
        reason: String,
    },

    /// More values than the `u32` count header can describe.
    #[error("Dataset of {len} values exceeds the u32 count header")]
    DatasetTooLarge {
        /// Number of values that was requested.
        len: usize,
    },

    /// Distribution name outside the known set.
    #[error("Unknown distribution: '{0}'")]
    UnknownDistribution(String),

    /// File name that does not follow `{distribution}_n{n}_seed{seed}.bin`.
    #[error("Invalid dataset filename '{0}': expected {{distribution}}_n{{n}}_seed{{seed}}.bin")]
    InvalidFilename(String),

    /// Reading or writing a dataset file failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error.
        path: PathBuf,
        /// The error message.
        message: String,
    },
}

impl CoreError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedDataset {
            reason: reason.into(),
        }
    }

    /// Attach a file path to a buffer-level format error.
    pub(crate) fn in_file(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::MalformedDataset { reason } => Self::MalformedFile {
                path: path.into(),
                reason,
            },
            other => other,
        }
    }

    /// Returns true for both buffer-level and file-level format errors.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::MalformedDataset { .. } | Self::MalformedFile { .. }
        )
    }
}
