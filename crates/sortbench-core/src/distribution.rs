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

//! Dataset distributions and the distribution token of dataset filenames.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Literal token that separates the distribution from the size in a dataset
/// filename. No distribution name may contain it.
pub const DISTRIBUTION_SEPARATOR: &str = "_n";

/// A named generation strategy for an integer dataset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Distribution {
    /// Uniform values over the full `i32` range.
    Random,
    /// A random sample sorted ascending.
    Sorted,
    /// A sorted sample reversed (descending).
    Reversed,
    /// Uniform values from a small fixed range, many duplicate keys.
    Dups,
    /// A sorted sample with 1% random index-pair swaps.
    NearlySorted,
}

impl Distribution {
    /// Returns the stable token used in filenames and CSV columns.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Sorted => "sorted",
            Self::Reversed => "reversed",
            Self::Dups => "dups",
            Self::NearlySorted => "nearly_sorted",
        }
    }

    /// Returns all distributions in catalog order.
    pub fn all() -> &'static [Distribution] {
        &[
            Self::Random,
            Self::Sorted,
            Self::Reversed,
            Self::Dups,
            Self::NearlySorted,
        ]
    }

    /// Parses a comma separated list such as `random,dups`.
    ///
    /// Blank entries are ignored, so `"random,,dups "` yields two entries.
    /// Unknown names fail the whole list.
    pub fn parse_list(list: &str) -> Result<Vec<Distribution>> {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse)
            .collect()
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Distribution {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|d| d.name() == s)
            .ok_or_else(|| CoreError::UnknownDistribution(s.to_string()))
    }
}

/// Recovers the distribution token from a dataset path.
///
/// The file name is split at the first [`DISTRIBUTION_SEPARATOR`]; everything
/// before it is the distribution. The token is returned verbatim, even when
/// it is not one of the known [`Distribution`] names, because runners in other
/// languages may label their own datasets. A path without a file name yields
/// `"unknown"`.
pub fn infer_distribution(path: impl AsRef<Path>) -> String {
    match path.as_ref().file_name() {
        Some(name) => {
            let name = name.to_string_lossy();
            name.split(DISTRIBUTION_SEPARATOR)
                .next()
                .unwrap_or("unknown")
                .to_string()
        }
        None => "unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for d in Distribution::all() {
            assert_eq!(d.name().parse::<Distribution>().unwrap(), *d);
            assert_eq!(d.to_string(), d.name());
        }
    }

    #[test]
    fn test_names_never_contain_separator() {
        for d in Distribution::all() {
            assert!(!d.name().contains(DISTRIBUTION_SEPARATOR), "{}", d);
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = "zigzag".parse::<Distribution>().unwrap_err();
        assert_eq!(err, CoreError::UnknownDistribution("zigzag".to_string()));
    }

    #[test]
    fn test_parse_list() {
        let list = Distribution::parse_list(" random,,nearly_sorted ,dups").unwrap();
        assert_eq!(
            list,
            vec![
                Distribution::Random,
                Distribution::NearlySorted,
                Distribution::Dups
            ]
        );
        assert!(Distribution::parse_list("random,bogus").is_err());
        assert!(Distribution::parse_list(" , ").unwrap().is_empty());
    }

    #[test]
    fn test_infer_distribution() {
        assert_eq!(
            infer_distribution("datasets/ints/nearly_sorted_n1000_seed1.bin"),
            "nearly_sorted"
        );
        assert_eq!(infer_distribution("random_n5_seed2.bin"), "random");
        assert_eq!(infer_distribution("custom.bin"), "custom.bin");
        assert_eq!(infer_distribution("/"), "unknown");
    }
}
