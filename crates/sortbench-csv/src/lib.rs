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

//! CSV surfaces of SortBench.
//!
//! Every file exchanged between the generator, the language runners and the
//! analysis tools is a CSV table with a fixed header:
//!
//! | File | Header | Written |
//! |---|---|---|
//! | manifest | `distribution,n,seed,path` | regenerated by the generator |
//! | raw store | `timestamp_iso,...,time_ms,ok` | appended by runners |
//! | summary | `language,algo,distribution,n,runs,median_ms,...` | regenerated by the aggregator |
//! | comparative | summary + `speedup_vs_baseline,relative_variability` | regenerated |
//! | geomean | `language,n,distributions,geomean_median_ms,speedup_vs_baseline` | regenerated |
//!
//! Readers check the header before touching any row and refuse to continue
//! when a required column is absent ([`CsvError::MissingColumns`]).

mod error;
pub mod manifest;
pub mod raw;
pub mod schema;
pub mod summary;
mod writer;

pub use error::{CsvError, Result};
pub use manifest::{read_manifest, write_manifest, ManifestEntry};
pub use raw::{read_samples, RawStore};
pub use schema::{
    ColumnIndex, COMPARATIVE_HEADER, GEOMEAN_HEADER, MAIN_TABLE_HEADER, MANIFEST_HEADER,
    RAW_HEADER, RAW_REQUIRED, SUMMARY_HEADER,
};
pub use summary::{
    read_summary, write_comparative, write_geomean, write_main_table, write_summary,
};
