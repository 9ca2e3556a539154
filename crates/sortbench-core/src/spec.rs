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

//! Dataset specifications and the dataset filename contract.

use crate::distribution::{Distribution, DISTRIBUTION_SEPARATOR};
use crate::error::{CoreError, Result};
use std::path::Path;

/// Number of distinct keys in the `dups` distribution (values `0..128`).
pub const DUPS_CARDINALITY: i32 = 128;

/// Fraction of `n` applied as random swaps in the `nearly_sorted` distribution.
pub const NEARLY_SORTED_SWAP_FRACTION: f64 = 0.01;

const SEED_TOKEN: &str = "_seed";
const EXTENSION: &str = ".bin";

/// Identifies one reproducible dataset.
///
/// The same spec always produces a byte-identical dataset file: generation is
/// keyed only by [`seed`](Self::seed). Fields are private so a spec cannot be
/// altered once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DatasetSpec {
    distribution: Distribution,
    n: usize,
    seed: u64,
}

impl DatasetSpec {
    /// Creates a new dataset spec.
    pub fn new(distribution: Distribution, n: usize, seed: u64) -> Self {
        Self {
            distribution,
            n,
            seed,
        }
    }

    /// Returns the distribution.
    pub fn distribution(&self) -> Distribution {
        self.distribution
    }

    /// Returns the number of values.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the RNG seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of swaps applied by the `nearly_sorted` distribution,
    /// `floor(n * 0.01)`.
    pub fn swap_count(&self) -> usize {
        (self.n as f64 * NEARLY_SORTED_SWAP_FRACTION).floor() as usize
    }

    /// Returns the canonical filename `{distribution}_n{n}_seed{seed}.bin`.
    pub fn filename(&self) -> String {
        format!(
            "{}{}{}{}{}{}",
            self.distribution.name(),
            DISTRIBUTION_SEPARATOR,
            self.n,
            SEED_TOKEN,
            self.seed,
            EXTENSION
        )
    }

    /// Parses a canonical dataset filename back into a spec.
    ///
    /// Only the final path component is considered, so full dataset paths
    /// from a manifest are accepted as well.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortbench_core::{DatasetSpec, Distribution};
    ///
    /// let spec = DatasetSpec::from_filename("datasets/ints/dups_n1000_seed7.bin").unwrap();
    /// assert_eq!(spec, DatasetSpec::new(Distribution::Dups, 1000, 7));
    /// ```
    pub fn from_filename(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .ok_or_else(|| CoreError::InvalidFilename(path.display().to_string()))?;
        let invalid = || CoreError::InvalidFilename(name.clone());

        let stem = name.strip_suffix(EXTENSION).ok_or_else(invalid)?;
        let (dist, rest) = stem.split_once(DISTRIBUTION_SEPARATOR).ok_or_else(invalid)?;
        let (n, seed) = rest.split_once(SEED_TOKEN).ok_or_else(invalid)?;

        let distribution = dist.parse::<Distribution>()?;
        let n = n.parse::<usize>().map_err(|_| invalid())?;
        let seed = seed.parse::<u64>().map_err(|_| invalid())?;

        Ok(Self::new(distribution, n, seed))
    }
}
