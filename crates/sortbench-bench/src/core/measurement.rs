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

//! Measurement primitives.
//!
//! A measured repetition times exactly one [`Sorter::sort`] call on a fresh
//! copy of the dataset. Copying and validation happen outside the timer.

use crate::error::BenchError;
use chrono::Local;
use std::fmt;
use std::hint::black_box;
use std::str::FromStr;
use std::time::Instant;

/// Timestamp format of raw measurement rows (local time).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A sort implementation that can be measured.
///
/// Implementations sort `values` in place into non-decreasing order.
/// [`name`](Self::name) is recorded in the `algo` column.
pub trait Sorter {
    /// Algorithm name, e.g. `builtin`.
    fn name(&self) -> &str;

    /// Sorts `values` in place.
    fn sort(&self, values: &mut [i32]);
}

/// The standard library's slice sorts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuiltinSort {
    /// `slice::sort_unstable`, the default sort; recorded as `builtin`.
    #[default]
    Unstable,
    /// `slice::sort`; recorded as `stable`.
    Stable,
}

impl BuiltinSort {
    /// Every built-in sort.
    pub const ALL: [BuiltinSort; 2] = [BuiltinSort::Unstable, BuiltinSort::Stable];

    /// Returns the recorded algorithm name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unstable => "builtin",
            Self::Stable => "stable",
        }
    }
}

impl Sorter for BuiltinSort {
    fn name(&self) -> &str {
        self.as_str()
    }

    fn sort(&self, values: &mut [i32]) {
        match self {
            Self::Unstable => values.sort_unstable(),
            Self::Stable => values.sort(),
        }
    }
}

impl fmt::Display for BuiltinSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuiltinSort {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|algo| algo.as_str() == s)
            .ok_or_else(|| {
                BenchError::invalid_config(
                    "algo",
                    format!("unknown algorithm '{s}' (expected builtin or stable)"),
                )
            })
    }
}

/// Sorts `values` and returns the elapsed time in milliseconds.
///
/// Only the sort call is inside the timed region.
pub fn time_sort(sorter: &dyn Sorter, values: &mut [i32]) -> f64 {
    let start = Instant::now();
    sorter.sort(black_box(&mut *values));
    let elapsed = start.elapsed();
    black_box(values);
    elapsed.as_secs_f64() * 1_000.0
}

/// Returns the current local time in [`TIMESTAMP_FORMAT`].
pub fn timestamp_now() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}
