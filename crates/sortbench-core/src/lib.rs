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

//! Core data model and dataset format for SortBench.
//!
//! This crate holds everything that every other SortBench crate agrees on:
//!
//! - [`format`]: the length-prefixed little-endian `i32` dataset file format
//! - [`Distribution`] and [`DatasetSpec`]: what a dataset is and how it is named
//! - [`generate`]: seeded, reproducible dataset construction
//! - [`records`]: raw measurement, aggregate and comparative row types
//!
//! # Example
//!
//! ```
//! use sortbench_core::{decode, encode, generate, is_sorted, DatasetSpec, Distribution};
//!
//! let spec = DatasetSpec::new(Distribution::Sorted, 5, 1);
//! let values = generate::build(&spec);
//! let bytes = encode(&values).unwrap();
//! let decoded = decode(&bytes).unwrap();
//!
//! assert_eq!(decoded.len(), 5);
//! assert!(is_sorted(&decoded));
//! assert_eq!(spec.filename(), "sorted_n5_seed1.bin");
//! ```

mod distribution;
mod error;
pub mod format;
pub mod generate;
pub mod records;
mod sorted;
mod spec;

pub use distribution::{infer_distribution, Distribution, DISTRIBUTION_SEPARATOR};
pub use error::{CoreError, Result};
pub use format::{decode, encode, read_dataset, write_dataset};
pub use records::{
    format_ms, AggregateRow, ComparativeRow, GeomeanRow, GroupKey, RawMeasurement, RawSample,
    SORT_TASK,
};
pub use sorted::is_sorted;
pub use spec::{DatasetSpec, DUPS_CARDINALITY, NEARLY_SORTED_SWAP_FRACTION};
