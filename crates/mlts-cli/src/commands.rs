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

//! Report generation command and its file helpers.

use crate::error::CliError;
use mlts_csv::{parse_results_with_config, ParseConfig, ParseMode};
use mlts_report::{build_groups, GroupConfig, HtmlReport, ReportSummary, DEFAULT_TITLE};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Default maximum input file size (1 GiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Environment variable overriding [`DEFAULT_MAX_FILE_SIZE`] (in bytes).
pub const MAX_FILE_SIZE_ENV: &str = "MLTS_MAX_FILE_SIZE";

/// File name of the chart library looked up next to the executable.
pub const CHART_JS_FILE: &str = "Chart.bundle.min.js";

fn get_max_file_size() -> u64 {
    std::env::var(MAX_FILE_SIZE_ENV)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a text file, refusing files above the configured size limit.
///
/// # Errors
///
/// [`CliError::FileTooLarge`] if the file exceeds the limit, [`CliError::Io`]
/// if it cannot be read.
pub fn read_file(path: &Path) -> Result<String, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Write `content` to `path`, replacing any existing file.
pub fn write_output(content: &str, path: &Path) -> Result<(), CliError> {
    fs::write(path, content).map_err(|e| CliError::io_error(path, e))
}

/// Location of the chart library when none is given explicitly: the
/// directory containing the running executable.
pub fn default_chart_js_path() -> Result<PathBuf, CliError> {
    let exe = std::env::current_exe().map_err(|e| CliError::io_error("<current executable>", e))?;
    let dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(dir.join(CHART_JS_FILE))
}

/// Options of a single report run.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Results CSV to read.
    pub input: PathBuf,
    /// HTML file to write.
    pub output: PathBuf,
    /// Chart library to inline; [`default_chart_js_path`] when `None`.
    pub chart_js: Option<PathBuf>,
    /// Optional JSON summary to write next to the HTML.
    pub json: Option<PathBuf>,
    /// Page title.
    pub title: String,
    /// Parsing configuration.
    pub parse: ParseConfig,
    /// Grouping configuration.
    pub group: GroupConfig,
}

impl ReportOptions {
    /// Options with default parsing and grouping for `input` and `output`.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            chart_js: None,
            json: None,
            title: DEFAULT_TITLE.to_string(),
            parse: ParseConfig::default(),
            group: GroupConfig::default(),
        }
    }
}

/// Generate the report described by `options`.
///
/// Every output is built in memory first; nothing is written unless the whole
/// report could be produced.
///
/// # Errors
///
/// Returns the first I/O, parse or report error encountered.
pub fn generate(options: &ReportOptions) -> Result<(), CliError> {
    let content = read_file(&options.input)?;
    let file = parse_results_with_config(&content, options.parse.clone())?;
    info!(
        input = %options.input.display(),
        records = file.records.len(),
        device = %file.device.device_info,
        "parsed results"
    );
    if !file.skipped.is_empty() {
        warn!(count = file.skipped.len(), "skipped malformed rows");
    }

    let chart_js_path = match &options.chart_js {
        Some(path) => path.clone(),
        None => default_chart_js_path()?,
    };
    debug!(path = %chart_js_path.display(), "loading chart library");
    let chart_js = read_file(&chart_js_path)?;

    let groups = build_groups(&file, &options.group)?;
    let html = HtmlReport::new(&file.device, &groups, &chart_js)
        .with_title(options.title.as_str())
        .with_skipped(&file.skipped)
        .render()?;

    let json = match &options.json {
        Some(path) => {
            let summary = ReportSummary::new(&options.group.baseline, &file.device, &groups)
                .with_skipped(&file.skipped)
                .to_json()?;
            Some((path, summary))
        }
        None => None,
    };

    write_output(&html, &options.output)?;
    info!(output = %options.output.display(), groups = groups.len(), "wrote report");

    if let Some((path, summary)) = json {
        if let Err(e) = write_output(&summary, path) {
            // The report and its summary are written together or not at all.
            if let Err(remove_err) = fs::remove_file(&options.output) {
                warn!(
                    output = %options.output.display(),
                    error = %remove_err,
                    "failed to remove report after JSON write error"
                );
            }
            return Err(e);
        }
        info!(output = %path.display(), "wrote JSON summary");
    }

    Ok(())
}

/// Parsing configuration for the given strictness.
pub fn parse_config(lenient: bool) -> ParseConfig {
    ParseConfig {
        mode: if lenient {
            ParseMode::Lenient
        } else {
            ParseMode::Strict
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    const RESULTS: &str = "\
2025-01-01 10:00,Pixel 9
mobilenet_v1_1.0_224,TFLite_CPU,1000,2.0,0.0,50,5,0.001,0.001,top_1,0.5,top_2,0.7,top_3,0.8,top_4,0.9,top_5,0.95,3,7
mobilenet_v1_1.0_224,TFLite_NNAPI,1000,1.5,0.0,50,5,0.001,0.001,top_1,0.5,top_2,0.7,top_3,0.8,top_4,0.9,top_5,0.95,8,2
";

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_file_missing() {
        let err = read_file(Path::new("/nonexistent/results.csv")).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/results.csv"));
    }

    #[test]
    fn test_read_file_contents() {
        let file = write_temp("hello");
        assert_eq!(read_file(file.path()).unwrap(), "hello");
    }

    #[test]
    fn test_default_chart_js_path_file_name() {
        let path = default_chart_js_path().unwrap();
        assert_eq!(path.file_name().unwrap(), CHART_JS_FILE);
    }

    #[test]
    fn test_parse_config_mode() {
        assert_eq!(parse_config(false).mode, ParseMode::Strict);
        assert_eq!(parse_config(true).mode, ParseMode::Lenient);
    }

    #[test]
    fn test_generate_writes_html_and_json() {
        let input = write_temp(RESULTS);
        let chart = write_temp("/* chart library */");
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("report.html");
        let json = dir.path().join("report.json");

        let mut options = ReportOptions::new(input.path(), &output);
        options.chart_js = Some(chart.path().to_path_buf());
        options.json = Some(json.clone());
        generate(&options).unwrap();

        let html = fs::read_to_string(&output).unwrap();
        assert!(html.contains("/* chart library */"));
        assert!(html.contains("mobilenet_v1_float"));
        assert!(html.contains("TFLite_NNAPI"));

        let summary = fs::read_to_string(&json).unwrap();
        assert!(summary.contains("\"baseline\": \"TFLite_CPU\""));
    }

    #[test]
    fn test_generate_failure_leaves_no_output() {
        let input = write_temp("2025-01-01 10:00,Pixel 9\nm,TFLite_NNAPI,10,1.0,0.0,5,0,0.1,0.1,1\n");
        let chart = write_temp("");
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("report.html");

        let mut options = ReportOptions::new(input.path(), &output);
        options.chart_js = Some(chart.path().to_path_buf());
        let err = generate(&options).unwrap_err();

        assert!(matches!(err, CliError::Report(_)));
        assert!(!output.exists());
    }

    #[test]
    fn test_generate_json_write_failure_removes_html() {
        let input = write_temp(RESULTS);
        let chart = write_temp("");
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("report.html");

        let mut options = ReportOptions::new(input.path(), &output);
        options.chart_js = Some(chart.path().to_path_buf());
        options.json = Some(dir.path().join("missing_dir").join("report.json"));
        let err = generate(&options).unwrap_err();

        assert!(matches!(err, CliError::Io { .. }));
        assert!(err.to_string().contains("report.json"));
        assert!(!output.exists());
    }

    #[test]
    fn test_generate_missing_chart_library() {
        let input = write_temp(RESULTS);
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("report.html");

        let mut options = ReportOptions::new(input.path(), &output);
        options.chart_js = Some(dir.path().join("missing.js"));
        let err = generate(&options).unwrap_err();

        assert!(err.to_string().contains("missing.js"));
        assert!(!output.exists());
    }
}
