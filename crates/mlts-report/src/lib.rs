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

//! Baseline comparison report for MLTS benchmark results.
//!
//! Turns the records of a results file into a static HTML page that compares
//! every backend against a baseline backend (`TFLite_CPU` by default):
//!
//! 1. [`group_results`] buckets records by benchmark name, picks the baseline
//!    of each benchmark and clusters related benchmarks under one label using
//!    ordered [`GroupRules`].
//! 2. [`format_group`] turns each group into typed cells with latency and
//!    accuracy diffs classified as better, worse or same.
//! 3. [`HtmlReport`] assembles the final document, embedding the chart library
//!    source inline. [`ReportSummary`] exports the same data as JSON.
//!
//! # Examples
//!
//! ```
//! use mlts_csv::parse_results;
//! use mlts_report::{generate_report, GroupConfig};
//!
//! let csv = "\
//! 2025-01-01 10:00,Pixel 9
//! mobilenet_v1_1.0_224,TFLite_CPU,1000,2.0,0.0,50,5,0.001,0.001,top_1,0.5,top_2,0.7,top_3,0.8,top_4,0.9,top_5,0.95,3,7
//! mobilenet_v1_1.0_224,TFLite_NNAPI,1000,1.5,0.0,50,5,0.001,0.001,top_1,0.5,top_2,0.7,top_3,0.8,top_4,0.9,top_5,0.95,8,2
//! ";
//! let file = parse_results(csv).unwrap();
//! let html = generate_report(&file, &GroupConfig::default(), "/* Chart.js */").unwrap();
//!
//! assert!(html.contains("mobilenet_v1_float"));
//! assert!(html.contains("TFLite_NNAPI"));
//! ```

mod error;
mod export;
mod format;
mod group;
mod render;

pub use error::{ReportError, Result};
pub use export::ReportSummary;
pub use format::{
    accuracy_cells, accuracy_headers, classify, format_comparison, format_group, latency_cell,
    percent_change, Cell, Diff, DiffClass, EvaluatorKind, FormattedGroup, FormattedRow, Histogram,
    DIFF_THRESHOLD,
};
pub use group::{
    flatten, group_by_name, group_results, GroupConfig, GroupRule, GroupRules, GroupedResult,
    ReportGroup, DEFAULT_BASELINE, DEFAULT_RULES,
};
pub use render::{escape_html, HtmlReport, DEFAULT_TITLE};

use mlts_csv::BenchmarkFile;

/// Group and format every record of a results file.
///
/// # Errors
///
/// Any grouping or formatting error; see [`ReportError`].
pub fn build_groups(file: &BenchmarkFile, config: &GroupConfig) -> Result<Vec<FormattedGroup>> {
    group_results(file.records.iter().cloned(), config)?
        .iter()
        .map(format_group)
        .collect()
}

/// Generate the HTML report for a results file.
pub fn generate_report(
    file: &BenchmarkFile,
    config: &GroupConfig,
    chart_js: &str,
) -> Result<String> {
    let groups = build_groups(file, config)?;
    HtmlReport::new(&file.device, &groups, chart_js)
        .with_skipped(&file.skipped)
        .render()
}
