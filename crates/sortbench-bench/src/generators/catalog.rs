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

//! Dataset catalog generation.
//!
//! Plans every `(distribution, size, seed)` combination, writes the missing
//! dataset files and records the full plan in the manifest. Existing files
//! are kept unless `force` is set, so a study never silently picks up a
//! dataset regenerated from a different random stream.

use crate::core::config::GenConfig;
use crate::error::{BenchError, Result};
use sortbench_core::{generate, write_dataset, DatasetSpec};
use sortbench_csv::{write_manifest, ManifestEntry};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// What happened to one planned dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetAction {
    /// Written (new or overwritten).
    Generated,
    /// Left in place because the file already existed.
    Skipped,
    /// Dry run: nothing written.
    Planned,
}

/// Outcome of [`generate_catalog`].
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogReport {
    /// Every planned dataset with its path and outcome, in plan order.
    pub datasets: Vec<(DatasetSpec, PathBuf, DatasetAction)>,
    /// Manifest written, `None` on dry runs.
    pub manifest: Option<PathBuf>,
}

impl CatalogReport {
    /// Number of planned datasets.
    pub fn planned(&self) -> usize {
        self.datasets.len()
    }

    /// Number of datasets with the given outcome.
    pub fn count(&self, action: DatasetAction) -> usize {
        self.datasets.iter().filter(|(_, _, a)| *a == action).count()
    }
}

/// Expands the configuration into dataset specs, ordered distribution, then
/// size, then seed.
pub fn plan(config: &GenConfig) -> Vec<DatasetSpec> {
    config
        .distributions
        .iter()
        .flat_map(|&distribution| {
            config.sizes.iter().flat_map(move |&n| {
                config
                    .seeds
                    .iter()
                    .map(move |&seed| DatasetSpec::new(distribution, n, seed))
            })
        })
        .collect()
}

/// Generates the catalog described by `config`.
///
/// On a dry run nothing is created, not even directories. Otherwise the
/// manifest lists every planned dataset, skipped ones included.
pub fn generate_catalog(config: &GenConfig) -> Result<CatalogReport> {
    config.validate()?;
    let specs = plan(config);

    if !config.dry_run {
        fs::create_dir_all(&config.outdir)
            .map_err(|e| BenchError::io_error(&config.outdir, e))?;
    }

    let mut datasets = Vec::with_capacity(specs.len());
    for spec in specs {
        let path = config.dataset_path(&spec);
        let action = if config.dry_run {
            info!(path = %path.display(), "[dry-run] would generate");
            DatasetAction::Planned
        } else if path.exists() && !config.force {
            info!(path = %path.display(), "skip existing (use --force to overwrite)");
            DatasetAction::Skipped
        } else {
            info!(path = %path.display(), "generating");
            let values = generate::build(&spec);
            write_dataset(&path, &values)?;
            debug!(path = %path.display(), n = values.len(), "dataset written");
            DatasetAction::Generated
        };
        datasets.push((spec, path, action));
    }

    let manifest_path = config.manifest_path();
    if config.dry_run {
        info!(path = %manifest_path.display(), "[dry-run] would write manifest");
        return Ok(CatalogReport {
            datasets,
            manifest: None,
        });
    }

    let entries: Vec<ManifestEntry> = datasets
        .iter()
        .map(|(spec, path, _)| ManifestEntry::new(spec, path))
        .collect();
    write_manifest(&manifest_path, &entries)?;
    info!(path = %manifest_path.display(), entries = entries.len(), "wrote manifest");

    Ok(CatalogReport {
        datasets,
        manifest: Some(manifest_path),
    })
}
