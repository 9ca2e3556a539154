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

//! Shared table writer.

use crate::error::{CsvError, Result};
use std::fs;
use std::path::Path;

/// Creates the parent directory of `path` when it has one.
pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| CsvError::io_error(parent, e))?;
        }
    }
    Ok(())
}

/// Writes (and overwrites) a table with the given header and rows.
pub(crate) fn write_table<I, R>(path: &Path, header: &[&str], rows: I) -> Result<()>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator,
    R::Item: AsRef<[u8]>,
{
    ensure_parent_dir(path)?;
    let mut wtr = csv::Writer::from_path(path).map_err(|e| CsvError::csv_error(path, e))?;

    wtr.write_record(header)
        .map_err(|e| CsvError::csv_error(path, e))?;
    for row in rows {
        wtr.write_record(row)
            .map_err(|e| CsvError::csv_error(path, e))?;
    }
    wtr.flush().map_err(|e| CsvError::io_error(path, e))
}
