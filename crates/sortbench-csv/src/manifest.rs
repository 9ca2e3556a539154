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

//! Dataset manifest: one row per planned dataset.

use crate::error::{CsvError, Result};
use crate::schema::{ColumnIndex, MANIFEST_HEADER};
use crate::writer::ensure_parent_dir;
use serde::{Deserialize, Serialize};
use sortbench_core::{DatasetSpec, Distribution};
use std::path::Path;

/// A manifest row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub distribution: Distribution,
    pub n: usize,
    pub seed: u64,
    /// Dataset path, `/`-separated.
    pub path: String,
}

impl ManifestEntry {
    /// Creates the manifest row for a spec stored at `path`.
    pub fn new(spec: &DatasetSpec, path: &Path) -> Self {
        Self {
            distribution: spec.distribution(),
            n: spec.n(),
            seed: spec.seed(),
            path: to_posix(path),
        }
    }

    /// Returns the spec described by this row.
    pub fn spec(&self) -> DatasetSpec {
        DatasetSpec::new(self.distribution, self.n, self.seed)
    }
}

fn to_posix(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Writes (and overwrites) the manifest.
pub fn write_manifest(path: impl AsRef<Path>, entries: &[ManifestEntry]) -> Result<()> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| CsvError::csv_error(path, e))?;
    wtr.write_record(MANIFEST_HEADER)
        .map_err(|e| CsvError::csv_error(path, e))?;
    for entry in entries {
        wtr.serialize(entry)
            .map_err(|e| CsvError::csv_error(path, e))?;
    }
    wtr.flush().map_err(|e| CsvError::io_error(path, e))
}

/// Reads a manifest written by [`write_manifest`].
pub fn read_manifest(path: impl AsRef<Path>) -> Result<Vec<ManifestEntry>> {
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
    ColumnIndex::resolve(path, &headers, &MANIFEST_HEADER)?;

    rdr.deserialize()
        .map(|row| row.map_err(|e| CsvError::csv_error(path, e)))
        .collect()
}
