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

use crate::error::{CliError, Result};
use colored::Colorize;
use sortbench_core::{generate, is_sorted, read_dataset, DatasetSpec};
use std::path::Path;

/// Inspect a dataset file.
///
/// Prints the element count, value range and sortedness. With `verify`, the
/// filename is parsed as `{distribution}_n{n}_seed{seed}.bin` and the file is
/// compared against a fresh regeneration.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read, is malformed, or (with `verify`)
/// is misnamed or differs from its regeneration.
pub fn inspect(file: &Path, verify: bool) -> Result<()> {
    let values = read_dataset(file)?;

    println!("{}", "Dataset".bold().underline());
    println!();
    println!("{}  {}", "File:".cyan(), file.display());
    println!("{}  {}", "Length:".cyan(), values.len());
    match (values.iter().min(), values.iter().max()) {
        (Some(min), Some(max)) => println!("{}  {} .. {}", "Range:".cyan(), min, max),
        _ => println!("{}  {}", "Range:".cyan(), "empty".dimmed()),
    }
    let sorted = if is_sorted(&values) {
        "yes".green()
    } else {
        "no".yellow()
    };
    println!("{}  {}", "Sorted:".cyan(), sorted);

    if !verify {
        return Ok(());
    }

    let spec = DatasetSpec::from_filename(file)?;
    let expected = generate::build(&spec);
    if expected != values {
        let position = expected
            .iter()
            .zip(&values)
            .position(|(a, b)| a != b)
            .unwrap_or(expected.len().min(values.len()));
        return Err(CliError::invalid_argument(
            "file",
            format!(
                "{} does not match a regeneration of {} (first difference at index {})",
                file.display(),
                spec.filename(),
                position
            ),
        ));
    }
    println!("{}  {}", "Verified:".cyan(), "matches regeneration".green());
    Ok(())
}
