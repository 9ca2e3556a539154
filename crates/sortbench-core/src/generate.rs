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

//! Seeded dataset generation.
//!
//! [`build`] is a pure function of its [`DatasetSpec`]: the only entropy is a
//! ChaCha8 stream seeded from `spec.seed()`. ChaCha8 output is portable across
//! platforms and `rand_chacha` releases, which keeps dataset files
//! byte-identical between machines.

use crate::distribution::Distribution;
use crate::spec::{DatasetSpec, DUPS_CARDINALITY};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Builds the values described by `spec`.
///
/// # Examples
///
/// ```
/// use sortbench_core::{generate, is_sorted, DatasetSpec, Distribution};
///
/// let spec = DatasetSpec::new(Distribution::Reversed, 100, 42);
/// let values = generate::build(&spec);
/// assert_eq!(values.len(), 100);
/// assert!(values.windows(2).all(|w| w[0] >= w[1]));
/// assert_eq!(values, generate::build(&spec));
/// ```
pub fn build(spec: &DatasetSpec) -> Vec<i32> {
    let mut rng = ChaCha8Rng::seed_from_u64(spec.seed());
    let n = spec.n();

    match spec.distribution() {
        Distribution::Random => random_values(&mut rng, n),
        Distribution::Sorted => sorted_values(&mut rng, n),
        Distribution::Reversed => reversed_values(&mut rng, n),
        Distribution::Dups => dup_values(&mut rng, n),
        Distribution::NearlySorted => nearly_sorted_values(&mut rng, n, spec.swap_count()),
    }
}

fn random_values<R: Rng>(rng: &mut R, n: usize) -> Vec<i32> {
    (0..n).map(|_| rng.gen::<i32>()).collect()
}

fn sorted_values<R: Rng>(rng: &mut R, n: usize) -> Vec<i32> {
    let mut values = random_values(rng, n);
    values.sort_unstable();
    values
}

fn reversed_values<R: Rng>(rng: &mut R, n: usize) -> Vec<i32> {
    let mut values = sorted_values(rng, n);
    values.reverse();
    values
}

fn dup_values<R: Rng>(rng: &mut R, n: usize) -> Vec<i32> {
    (0..n).map(|_| rng.gen_range(0..DUPS_CARDINALITY)).collect()
}

// Swaps draw from the same stream, after the sorted sample. Index pairs are
// drawn with replacement, so `i == j` is a legal no-op swap.
fn nearly_sorted_values<R: Rng>(rng: &mut R, n: usize, swaps: usize) -> Vec<i32> {
    let mut values = sorted_values(rng, n);
    if n <= 1 || swaps == 0 {
        return values;
    }
    for _ in 0..swaps {
        let i = rng.gen_range(0..n);
        let j = rng.gen_range(0..n);
        values.swap(i, j);
    }
    values
}
