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

//! CLI command definitions and argument parsing.
//!
//! Commands are grouped by the stage of the pipeline they serve:
//!
//! ```text
//! Commands
//! ├── Dataset (gen, inspect)
//! ├── Measure (run)
//! └── Report (summarize, compare, table)
//! ```

mod dataset;
mod measure;
mod report;

use crate::error::Result;
use clap::Subcommand;

pub use dataset::DatasetCommands;
pub use measure::MeasureCommands;
pub use report::ReportCommands;

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    #[command(flatten)]
    Dataset(DatasetCommands),

    #[command(flatten)]
    Measure(MeasureCommands),

    #[command(flatten)]
    Report(ReportCommands),
}

impl Commands {
    /// Execute the command.
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Dataset(cmd) => cmd.execute(),
            Commands::Measure(cmd) => cmd.execute(),
            Commands::Report(cmd) => cmd.execute(),
        }
    }
}
