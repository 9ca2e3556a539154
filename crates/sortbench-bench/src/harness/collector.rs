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

//! Measurement sinks.
//!
//! Every measured repetition is handed to a [`MeasurementSink`]. The runner
//! uses a [`Tee`] of a [`ConsoleSink`] (live monitoring on stdout) and a
//! [`StoreSink`] (the durable raw store).

use crate::error::{BenchError, Result};
use sortbench_core::RawMeasurement;
use sortbench_csv::RawStore;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Receives raw measurements as they are produced.
pub trait MeasurementSink {
    /// Records one measurement.
    fn record(&mut self, measurement: &RawMeasurement) -> Result<()>;
}

impl<S: MeasurementSink + ?Sized> MeasurementSink for &mut S {
    fn record(&mut self, measurement: &RawMeasurement) -> Result<()> {
        (**self).record(measurement)
    }
}

/// Collects measurements in memory.
impl MeasurementSink for Vec<RawMeasurement> {
    fn record(&mut self, measurement: &RawMeasurement) -> Result<()> {
        self.push(measurement.clone());
        Ok(())
    }
}

/// Writes each measurement as one comma-joined line and flushes.
pub struct ConsoleSink<W: Write> {
    writer: W,
}

impl<W: Write> ConsoleSink<W> {
    /// Creates a console sink over `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> MeasurementSink for ConsoleSink<W> {
    fn record(&mut self, measurement: &RawMeasurement) -> Result<()> {
        let line = measurement.fields().join(",");
        writeln!(self.writer, "{line}")
            .and_then(|()| self.writer.flush())
            .map_err(|e| BenchError::io_error(PathBuf::from("<stdout>"), e))
    }
}

/// Appends each measurement to a raw store.
#[derive(Debug, Clone)]
pub struct StoreSink {
    store: RawStore,
}

impl StoreSink {
    /// Creates a sink appending to the store at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: RawStore::new(path),
        }
    }

    /// Returns the store path.
    pub fn path(&self) -> &Path {
        self.store.path()
    }
}

impl MeasurementSink for StoreSink {
    fn record(&mut self, measurement: &RawMeasurement) -> Result<()> {
        Ok(self.store.append(measurement)?)
    }
}

/// Forwards every measurement to two sinks, first then second.
pub struct Tee<A, B> {
    first: A,
    second: B,
}

impl<A: MeasurementSink, B: MeasurementSink> Tee<A, B> {
    /// Creates a tee.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Returns both sinks.
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A: MeasurementSink, B: MeasurementSink> MeasurementSink for Tee<A, B> {
    fn record(&mut self, measurement: &RawMeasurement) -> Result<()> {
        self.first.record(measurement)?;
        self.second.record(measurement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortbench_core::SORT_TASK;

    fn measurement(rep: usize) -> RawMeasurement {
        RawMeasurement {
            timestamp: "2025-01-02T03:04:05".to_string(),
            task: SORT_TASK.to_string(),
            language: "rust".to_string(),
            language_version: "rust/1.0.0".to_string(),
            algo: "builtin".to_string(),
            dataset_file: "d/random_n3_seed1.bin".to_string(),
            distribution: "random".to_string(),
            n: 3,
            warmup_runs: 0,
            rep_index: rep,
            time_ms: 0.0004,
            ok: true,
        }
    }

    #[test]
    fn test_console_sink_line() {
        let mut sink = ConsoleSink::new(Vec::new());
        sink.record(&measurement(0)).unwrap();
        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            out,
            "2025-01-02T03:04:05,sort,rust,rust/1.0.0,builtin,d/random_n3_seed1.bin,random,3,0,0,0.000,true\n"
        );
    }

    #[test]
    fn test_tee_forwards_to_both() {
        let mut tee = Tee::new(Vec::new(), ConsoleSink::new(Vec::new()));
        tee.record(&measurement(0)).unwrap();
        tee.record(&measurement(1)).unwrap();

        let (memory, console) = tee.into_parts();
        assert_eq!(memory.len(), 2);
        assert_eq!(memory[1].rep_index, 1);
        assert_eq!(console.into_inner().iter().filter(|&&b| b == b'\n').count(), 2);
    }

    #[test]
    fn test_store_sink_appends() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = StoreSink::new(dir.path().join("raw.csv"));
        sink.record(&measurement(0)).unwrap();
        sink.record(&measurement(1)).unwrap();

        let samples = sortbench_csv::read_samples(sink.path()).unwrap();
        assert_eq!(samples.len(), 2);
    }

    fn feed<S: MeasurementSink>(mut sink: S) {
        sink.record(&measurement(7)).unwrap();
    }

    #[test]
    fn test_mut_ref_is_a_sink() {
        let mut memory: Vec<RawMeasurement> = Vec::new();
        feed(&mut memory);
        assert_eq!(memory[0].rep_index, 7);
    }
}
