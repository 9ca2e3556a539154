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

//! Raw measurement store.
//!
//! The store is an append-only CSV log shared by every runner process. Each
//! row is encoded into one buffer and handed to a single `write_all` on a file
//! opened in append mode, so concurrent writers may interleave rows but never
//! the fields of one row. There is no cross-process locking.
//!
//! A new store is published with its header already in place: the header is
//! written to a private temporary file which is then hard-linked to the store
//! path. Linking fails when the path exists, so exactly one writer creates the
//! store and no row can land before the header.

use crate::error::{CsvError, Result};
use crate::schema::{ColumnIndex, RAW_HEADER, RAW_REQUIRED};
use crate::writer::ensure_parent_dir;
use csv::StringRecord;
use sortbench_core::{RawMeasurement, RawSample};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info, warn};

static STAGING_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Append handle for a raw measurement store.
#[derive(Debug, Clone)]
pub struct RawStore {
    path: PathBuf,
}

impl RawStore {
    /// Creates a handle; nothing is touched on disk until the first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the store path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one measurement.
    ///
    /// An absent store is created with its header; an existing empty file
    /// gets the header in front of the first row. The header is never
    /// repeated afterwards, even when several processes make their first
    /// append at the same time.
    pub fn append(&self, measurement: &RawMeasurement) -> Result<()> {
        let path = self.path.as_path();
        ensure_parent_dir(path)?;

        if !path.exists() && create_with_header(path)? {
            info!(path = %path.display(), "created measurement store");
        }

        let mut file = OpenOptions::new()
            .append(true)
            .open(path)
            .map_err(|e| CsvError::io_error(path, e))?;
        let needs_header = file
            .metadata()
            .map_err(|e| CsvError::io_error(path, e))?
            .len()
            == 0;

        let buf = encode_row(path, measurement, needs_header)?;
        file.write_all(&buf)
            .and_then(|()| file.flush())
            .map_err(|e| CsvError::io_error(path, e))
    }
}

/// Publishes a header-only store at `path`.
///
/// Returns `false` when another writer created the store first.
fn create_with_header(path: &Path) -> Result<bool> {
    let staging = staging_path(path);
    fs::write(&staging, encode_header(path)?).map_err(|e| CsvError::io_error(&staging, e))?;

    let linked = fs::hard_link(&staging, path);
    if let Err(e) = fs::remove_file(&staging) {
        debug!(path = %staging.display(), error = %e, "could not remove staging file");
    }

    match linked {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(CsvError::io_error(path, e)),
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let id = STAGING_COUNTER.fetch_add(1, Ordering::Relaxed);
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(format!(".{}.{}.tmp", process::id(), id));
    path.with_file_name(name)
}

fn encode_header(path: &Path) -> Result<Vec<u8>> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    wtr.write_record(RAW_HEADER)
        .map_err(|e| CsvError::csv_error(path, e))?;
    wtr.into_inner().map_err(|e| CsvError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn encode_row(path: &Path, measurement: &RawMeasurement, header: bool) -> Result<Vec<u8>> {
    let mut buf = if header { encode_header(path)? } else { Vec::new() };
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    wtr.serialize(measurement)
        .map_err(|e| CsvError::csv_error(path, e))?;
    let row = wtr.into_inner().map_err(|e| CsvError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    buf.extend_from_slice(&row);
    Ok(buf)
}

/// Reads the aggregation columns of every row in the store.
///
/// The header must contain [`RAW_REQUIRED`]. Blank lines and rows repeating
/// the header are ignored. A row that cannot be read or parsed is fatal,
/// except when it is the very last row: a partial final row is what a crashed
/// writer leaves behind, so it is dropped with a warning.
pub fn read_samples(path: impl AsRef<Path>) -> Result<Vec<RawSample>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(CsvError::Missing {
            path: path.to_path_buf(),
        });
    }

    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| CsvError::csv_error(path, e))?;
    let headers = rdr
        .headers()
        .map_err(|e| CsvError::csv_error(path, e))?
        .clone();
    let index = ColumnIndex::resolve(path, &headers, &RAW_REQUIRED)?;

    let mut samples = Vec::new();
    let mut pending: Option<CsvError> = None;
    let mut record = StringRecord::new();

    loop {
        let read = rdr.read_record(&mut record);
        if let Some(err) = pending.take() {
            if !matches!(read, Ok(false)) {
                return Err(err);
            }
            pending = Some(err);
        }
        match read {
            Ok(false) => break,
            Ok(true) if record.iter().eq(headers.iter()) => {
                debug!(path = %path.display(), "skipping repeated header row");
            }
            Ok(true) => {
                let line = record.position().map_or(0, |p| p.line());
                match parse_sample(path, &index, line, &record) {
                    Ok(sample) => samples.push(sample),
                    Err(err) => pending = Some(err),
                }
            }
            Err(err) => pending = Some(CsvError::csv_error(path, err)),
        }
    }

    if let Some(err) = pending {
        warn!(path = %path.display(), error = %err, "ignoring partial trailing row");
    }
    debug!(path = %path.display(), rows = samples.len(), "read raw samples");
    Ok(samples)
}

fn parse_sample(
    path: &Path,
    index: &ColumnIndex,
    line: u64,
    record: &StringRecord,
) -> Result<RawSample> {
    if record.len() != index.width() {
        return Err(CsvError::WidthMismatch {
            path: path.to_path_buf(),
            line,
            expected: index.width(),
            actual: record.len(),
        });
    }

    Ok(RawSample {
        language: index.get(record, "language").to_string(),
        algo: index.get(record, "algo").to_string(),
        distribution: index.get(record, "distribution").to_string(),
        n: index.parse(path, line, record, "n")?,
        time_ms: index.parse(path, line, record, "time_ms")?,
        ok: index.get(record, "ok").trim().eq_ignore_ascii_case("true"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortbench_core::SORT_TASK;
    use std::fs;

    fn measurement(rep: usize, time_ms: f64, ok: bool) -> RawMeasurement {
        RawMeasurement {
            timestamp: "2025-01-02T03:04:05".to_string(),
            task: SORT_TASK.to_string(),
            language: "rust".to_string(),
            language_version: "rust/1.0.0".to_string(),
            algo: "builtin".to_string(),
            dataset_file: "datasets/ints/random_n10_seed1.bin".to_string(),
            distribution: "random".to_string(),
            n: 10,
            warmup_runs: 2,
            rep_index: rep,
            time_ms,
            ok,
        }
    }

    const HEADER_LINE: &str =
        "timestamp_iso,task,language,language_version,algo,dataset_file,distribution,n,warmup_runs,rep_idx,time_ms,ok";

    #[test]
    fn test_append_writes_header_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = RawStore::new(dir.path().join("results").join("raw.csv"));

        store.append(&measurement(0, 1.5, true)).unwrap();
        store.append(&measurement(1, 2.25, false)).unwrap();

        let text = fs::read_to_string(store.path()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HEADER_LINE);
        assert_eq!(
            lines[1],
            "2025-01-02T03:04:05,sort,rust,rust/1.0.0,builtin,datasets/ints/random_n10_seed1.bin,random,10,2,0,1.500,true"
        );
        assert!(lines[2].ends_with(",1,2.250,false"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_append_to_empty_file_writes_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("raw.csv");
        fs::write(&path, "").unwrap();

        RawStore::new(&path).append(&measurement(0, 1.0, true)).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with(HEADER_LINE));
    }

    #[test]
    fn test_read_samples_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = RawStore::new(dir.path().join("raw.csv"));
        store.append(&measurement(0, 1.5, true)).unwrap();
        store.append(&measurement(1, 2.0, false)).unwrap();

        let samples = read_samples(store.path()).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0], measurement(0, 1.5, true).sample());
        assert!(!samples[1].ok);
    }

    #[test]
    fn test_read_samples_ok_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("raw.csv");
        fs::write(
            &path,
            "language,algo,distribution,n,time_ms,ok\n\
             python,builtin,random,10,1.0,True\n\
             python,builtin,random,10,2.0,FALSE\n\
             python,builtin,random,10,3.0,yes\n",
        )
        .unwrap();

        let oks: Vec<bool> = read_samples(&path).unwrap().iter().map(|s| s.ok).collect();
        assert_eq!(oks, vec![true, false, false]);
    }

    #[test]
    fn test_read_samples_missing_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("raw.csv");
        fs::write(&path, "language,algo,n\ngo,builtin,10\n").unwrap();

        let err = read_samples(&path).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("raw.csv"));
        assert!(msg.contains("distribution, time_ms, ok"));
    }

    #[test]
    fn test_read_samples_missing_file() {
        let err = read_samples("/nonexistent/sortbench/raw.csv").unwrap_err();
        assert_eq!(err.to_string(), "Missing /nonexistent/sortbench/raw.csv");
    }

    #[test]
    fn test_read_samples_tolerates_partial_last_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("raw.csv");
        fs::write(
            &path,
            "language,algo,distribution,n,time_ms,ok\n\
             go,builtin,random,10,1.0,true\n\
             go,builtin,rand",
        )
        .unwrap();

        let samples = read_samples(&path).unwrap();
        assert_eq!(samples.len(), 1);
    }

    #[test]
    fn test_read_samples_tolerates_trailing_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("raw.csv");
        fs::write(
            &path,
            "language,algo,distribution,n,time_ms,ok\ngo,builtin,random,10,1.0,true\n\n\n",
        )
        .unwrap();

        assert_eq!(read_samples(&path).unwrap().len(), 1);
    }

    #[test]
    fn test_read_samples_rejects_bad_row_in_the_middle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("raw.csv");
        fs::write(
            &path,
            "language,algo,distribution,n,time_ms,ok\n\
             go,builtin,random,10,1.0,true\n\
             go,builtin,random,10,oops,true\n\
             go,builtin,random,10,3.0,true\n",
        )
        .unwrap();

        let err = read_samples(&path).unwrap_err();
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn test_read_samples_skips_repeated_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("raw.csv");
        let row = "2025-01-02T03:04:05,sort,go,go1.22,builtin,random_n10_seed1.bin,random,10,2,0,1.000,true";
        fs::write(&path, format!("{HEADER_LINE}\n{row}\n{HEADER_LINE}\n{row}\n")).unwrap();

        let samples = read_samples(&path).unwrap();
        assert_eq!(samples.len(), 2);
        assert!(samples.iter().all(|s| s.language == "go" && s.n == 10));
    }

    #[test]
    fn test_append_leaves_no_staging_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = RawStore::new(dir.path().join("raw.csv"));
        store.append(&measurement(0, 1.0, true)).unwrap();
        store.append(&measurement(1, 1.0, true)).unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("raw.csv")]);
    }
}
