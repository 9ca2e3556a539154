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

//! SortBench CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! ## Datasets
//!
//! - **gen**: Generate the dataset catalog and its manifest
//! - **inspect**: Report length, range and sortedness of a dataset file
//!
//! ## Measurement
//!
//! - **run**: Time the Rust slice sorts on one dataset
//!
//! ## Reporting
//!
//! - **summarize**: Aggregate the raw store into per-group statistics
//! - **compare**: Speedups against a baseline language plus geomean rollup
//! - **table**: Main results table for one configuration
//!
//! # Examples
//!
//! ```no_run
//! use sortbench_cli::commands::inspect;
//! use std::path::Path;
//!
//! # fn main() -> sortbench_cli::error::Result<()> {
//! inspect(Path::new("datasets/ints/random_n1000_seed1.bin"), true)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
