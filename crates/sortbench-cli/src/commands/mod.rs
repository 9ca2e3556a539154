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

//! Command implementations for the SortBench CLI.
//!
//! Each command reads its inputs, delegates to the harness crates and prints
//! a short human-readable report. `run` is the exception: its stdout carries
//! only the measurement rows so it can be piped.

mod compare;
mod generate;
mod inspect;
mod run;
mod summarize;
mod table;

pub use compare::compare;
pub use generate::generate;
pub use inspect::inspect;
pub use run::run;
pub use summarize::summarize;
pub use table::table;
