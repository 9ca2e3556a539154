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

//! SortBench harness.
//!
//! Measurement pipeline shared by every language runner:
//!
//! - [`generators`]: dataset catalog generation with skip/overwrite and a
//!   manifest of every planned dataset
//! - [`harness`]: the per-run measurement protocol, measurement sinks, the
//!   aggregator and the baseline normalizer
//! - [`reporters`]: summary, comparative and main-table outputs
//! - [`core`]: configuration defaults and measurement primitives
//!
//! ## Usage
//!
//! ```no_run
//! use sortbench_bench::core::{BuiltinSort, RunConfig};
//! use sortbench_bench::harness::{run_protocol, ConsoleSink, StoreSink, Tee};
//! use std::path::Path;
//!
//! let config = RunConfig::default().with_reps(10);
//! let mut sink = Tee::new(ConsoleSink::new(std::io::stdout()), StoreSink::new(&config.out));
//! run_protocol(
//!     &config,
//!     Path::new("datasets/ints/random_n1000_seed1.bin"),
//!     &BuiltinSort::Unstable,
//!     &mut sink,
//! )?;
//! # Ok::<(), sortbench_bench::BenchError>(())
//! ```
//!
//! Run the generation benchmark:
//! ```bash
//! cargo bench --package sortbench-bench --bench generate
//! ```

pub mod core;
pub mod error;
pub mod generators;
pub mod harness;
pub mod reporters;

pub use error::{BenchError, Result};
