// MLTS Report - Neural network benchmark report generator
//
// Copyright (c) 2025 The MLTS Report Authors.
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

//! Command-line arguments.

use crate::commands::{generate, parse_config, ReportOptions};
use crate::error::CliError;
use clap::Parser;
use mlts_report::{GroupConfig, GroupRules, DEFAULT_BASELINE, DEFAULT_TITLE};
use std::path::PathBuf;

/// Generate an HTML report comparing MLTS benchmark results against a
/// baseline backend.
#[derive(Parser, Debug)]
#[command(name = "mlts-report")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Results CSV produced by the benchmark run
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// HTML report to write
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Backend every other backend is compared against
    #[arg(long, env = "MLTS_BASELINE", default_value = DEFAULT_BASELINE)]
    pub baseline: String,

    /// Chart.js bundle to inline (default: Chart.bundle.min.js next to the executable)
    #[arg(long, env = "MLTS_CHART_JS", value_name = "FILE")]
    pub chart_js: Option<PathBuf>,

    /// Also write the formatted report as JSON
    #[arg(long, value_name = "FILE")]
    pub json: Option<PathBuf>,

    /// Report title
    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Skip malformed rows instead of failing
    #[arg(long)]
    pub lenient: bool,

    /// Report each benchmark on its own instead of merging model families
    #[arg(long)]
    pub no_merge: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Options for the report run these arguments describe.
    pub fn options(&self) -> ReportOptions {
        let mut group = GroupConfig {
            baseline: self.baseline.clone(),
            ..Default::default()
        };
        if self.no_merge {
            group.rules = GroupRules::none();
        }

        ReportOptions {
            input: self.input.clone(),
            output: self.output.clone(),
            chart_js: self.chart_js.clone(),
            json: self.json.clone(),
            title: self.title.clone(),
            parse: parse_config(self.lenient),
            group,
        }
    }

    /// Run the report generation.
    pub fn execute(&self) -> Result<(), CliError> {
        generate(&self.options())
    }
}
