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

//! Centralized harness configuration.
//!
//! Provides defaults and builders for dataset generation, measured runs and
//! report generation. Command-line flags override these defaults; there is
//! no configuration file.

use crate::error::{BenchError, Result};
use sortbench_core::{DatasetSpec, Distribution};
use std::path::{Path, PathBuf};

/// Default directory for generated `.bin` datasets.
pub const DEFAULT_OUTDIR: &str = "datasets/ints";

/// Default directory for the dataset manifest.
pub const DEFAULT_META_DIR: &str = "datasets/meta";

/// File name of the dataset manifest inside the meta directory.
pub const MANIFEST_FILE: &str = "datasets.csv";

/// Default dataset sizes.
pub const DEFAULT_SIZES: &[usize] = &[1_000, 10_000, 100_000, 1_000_000];

/// Default generator seeds.
pub const DEFAULT_SEEDS: &[u64] = &[1];

/// Default number of untimed warmup repetitions.
pub const DEFAULT_WARMUP: usize = 5;

/// Upper bound on warmup repetitions.
pub const MAX_WARMUP: usize = 1_000_000;

/// Default number of measured repetitions.
pub const DEFAULT_REPS: usize = 30;

/// Default raw measurement store.
pub const DEFAULT_RAW_PATH: &str = "results/raw.csv";

/// Default summary output.
pub const DEFAULT_SUMMARY_PATH: &str = "results/summary.csv";

/// Default comparative table output.
pub const DEFAULT_COMPARATIVE_PATH: &str = "results/comparative.csv";

/// Default main-table output.
pub const DEFAULT_MAIN_TABLE_PATH: &str = "results/main_table_random_n1e6.csv";

/// Default baseline language for speedups.
pub const DEFAULT_BASELINE: &str = "cpp";

/// Language label recorded by the built-in runner.
pub const DEFAULT_LANGUAGE: &str = "rust";

/// Default main-table target distribution.
pub const DEFAULT_TABLE_DISTRIBUTION: &str = "random";

/// Default main-table target size.
pub const DEFAULT_TABLE_N: usize = 1_000_000;

/// Default main-table target algorithm.
pub const DEFAULT_TABLE_ALGO: &str = "builtin";

/// Dataset generation configuration.
///
/// # Example
///
/// ```
/// use sortbench_bench::core::config::GenConfig;
/// use sortbench_core::Distribution;
///
/// let config = GenConfig::default()
///     .with_sizes(&[10, 100])
///     .with_distributions(&[Distribution::Dups])
///     .with_dry_run(true);
/// assert_eq!(config.sizes, vec![10, 100]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GenConfig {
    /// Directory for dataset files.
    pub outdir: PathBuf,
    /// Directory for the manifest.
    pub meta_dir: PathBuf,
    /// Sizes to generate.
    pub sizes: Vec<usize>,
    /// Seeds to generate.
    pub seeds: Vec<u64>,
    /// Distributions to generate, in catalog order.
    pub distributions: Vec<Distribution>,
    /// Overwrite existing dataset files.
    pub force: bool,
    /// Report only; write nothing.
    pub dry_run: bool,
}

impl GenConfig {
    /// Sets the dataset directory.
    pub fn with_outdir(mut self, outdir: impl Into<PathBuf>) -> Self {
        self.outdir = outdir.into();
        self
    }

    /// Sets the manifest directory.
    pub fn with_meta_dir(mut self, meta_dir: impl Into<PathBuf>) -> Self {
        self.meta_dir = meta_dir.into();
        self
    }

    /// Sets dataset sizes.
    pub fn with_sizes(mut self, sizes: &[usize]) -> Self {
        self.sizes = sizes.to_vec();
        self
    }

    /// Sets seeds.
    pub fn with_seeds(mut self, seeds: &[u64]) -> Self {
        self.seeds = seeds.to_vec();
        self
    }

    /// Sets distributions.
    pub fn with_distributions(mut self, distributions: &[Distribution]) -> Self {
        self.distributions = distributions.to_vec();
        self
    }

    /// Enables overwriting of existing datasets.
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Enables dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Returns the file path for a planned dataset.
    pub fn dataset_path(&self, spec: &DatasetSpec) -> PathBuf {
        self.outdir.join(spec.filename())
    }

    /// Returns the manifest path.
    pub fn manifest_path(&self) -> PathBuf {
        self.meta_dir.join(MANIFEST_FILE)
    }

    /// Rejects empty size, seed or distribution lists.
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(BenchError::invalid_config("sizes", "empty list"));
        }
        if self.seeds.is_empty() {
            return Err(BenchError::invalid_config("seeds", "empty list"));
        }
        if self.distributions.is_empty() {
            return Err(BenchError::invalid_config(
                "distributions",
                "no distributions provided",
            ));
        }
        Ok(())
    }
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            outdir: PathBuf::from(DEFAULT_OUTDIR),
            meta_dir: PathBuf::from(DEFAULT_META_DIR),
            sizes: DEFAULT_SIZES.to_vec(),
            seeds: DEFAULT_SEEDS.to_vec(),
            distributions: Distribution::all().to_vec(),
            force: false,
            dry_run: false,
        }
    }
}

/// Configuration of one measured run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Untimed repetitions before measuring.
    pub warmup: usize,
    /// Measured repetitions.
    pub reps: usize,
    /// Raw measurement store to append to.
    pub out: PathBuf,
    /// Check every sorted copy; when off, `ok` is always `true`.
    pub validate: bool,
    /// Language label written to every row.
    pub language: String,
    /// Language version label written to every row.
    pub language_version: String,
}

impl RunConfig {
    /// Sets warmup repetitions.
    pub fn with_warmup(mut self, warmup: usize) -> Self {
        self.warmup = warmup;
        self
    }

    /// Sets measured repetitions.
    pub fn with_reps(mut self, reps: usize) -> Self {
        self.reps = reps;
        self
    }

    /// Sets the raw store path.
    pub fn with_out(mut self, out: impl Into<PathBuf>) -> Self {
        self.out = out.into();
        self
    }

    /// Enables or disables validation of sorted copies.
    pub fn with_validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Overrides the language and version labels.
    pub fn with_language(
        mut self,
        language: impl Into<String>,
        language_version: impl Into<String>,
    ) -> Self {
        self.language = language.into();
        self.language_version = language_version.into();
        self
    }

    /// Rejects `reps == 0` and warmup counts above [`MAX_WARMUP`].
    pub fn validate(&self) -> Result<()> {
        if self.reps == 0 {
            return Err(BenchError::invalid_config("reps", "must be > 0"));
        }
        if self.warmup > MAX_WARMUP {
            return Err(BenchError::invalid_config(
                "warmup",
                format!("must be <= {MAX_WARMUP}"),
            ));
        }
        Ok(())
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            warmup: DEFAULT_WARMUP,
            reps: DEFAULT_REPS,
            out: PathBuf::from(DEFAULT_RAW_PATH),
            validate: true,
            language: DEFAULT_LANGUAGE.to_string(),
            language_version: format!("{}/{}", DEFAULT_LANGUAGE, env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Selects the rows of the main results table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableFilter {
    /// Distribution token.
    pub distribution: String,
    /// Dataset size.
    pub n: usize,
    /// Algorithm name.
    pub algo: String,
}

impl TableFilter {
    /// Creates a filter for one configuration.
    pub fn new(distribution: impl Into<String>, n: usize, algo: impl Into<String>) -> Self {
        Self {
            distribution: distribution.into(),
            n,
            algo: algo.into(),
        }
    }

    /// Describes the filter for error messages.
    pub fn describe(&self) -> String {
        format!(
            "distribution={}, n={}, algo={}",
            self.distribution, self.n, self.algo
        )
    }
}

impl Default for TableFilter {
    fn default() -> Self {
        Self::new(DEFAULT_TABLE_DISTRIBUTION, DEFAULT_TABLE_N, DEFAULT_TABLE_ALGO)
    }
}

/// Paths and baseline shared by the reporting commands.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Raw measurement store.
    pub raw_path: PathBuf,
    /// Summary file.
    pub summary_path: PathBuf,
    /// Baseline language for speedups.
    pub baseline: String,
}

impl ReportConfig {
    /// Sets the raw store path.
    pub fn with_raw_path(mut self, path: impl AsRef<Path>) -> Self {
        self.raw_path = path.as_ref().to_path_buf();
        self
    }

    /// Sets the summary path.
    pub fn with_summary_path(mut self, path: impl AsRef<Path>) -> Self {
        self.summary_path = path.as_ref().to_path_buf();
        self
    }

    /// Sets the baseline language.
    pub fn with_baseline(mut self, baseline: impl Into<String>) -> Self {
        self.baseline = baseline.into();
        self
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            raw_path: PathBuf::from(DEFAULT_RAW_PATH),
            summary_path: PathBuf::from(DEFAULT_SUMMARY_PATH),
            baseline: DEFAULT_BASELINE.to_string(),
        }
    }
}
