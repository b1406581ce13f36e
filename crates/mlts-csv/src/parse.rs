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

//! Parse benchmark results CSV files.
//!
//! # File Layout
//!
//! ```text
//! # comment lines start with '#'
//! <benchmark time>,<device description>
//! <name>,<backend>,<iterations>,<total sec>,<max error>,<testset size>,<N>,<hist start>,<hist step>,<key 1>,<value 1>,...,<key N>,<value N>,<bucket 1>,...
//! ```
//!
//! The first non-comment row describes the device. Every following row is a
//! [`BenchmarkRecord`]: nine fixed columns, then `N` evaluator key/value pairs,
//! then one column per latency histogram bucket.

use crate::error::{CsvError, Result};
use crate::record::{BenchmarkFile, BenchmarkRecord, DeviceInfo, SkippedRow};
use std::io::Read;
use tracing::{debug, warn};

/// Default maximum number of benchmark rows.
pub const DEFAULT_MAX_ROWS: usize = 1_000_000;

/// Comment marker for ignored lines.
pub const COMMENT_MARKER: u8 = b'#';

/// Number of fixed columns preceding the evaluator pairs.
pub const FIXED_COLUMNS: usize = 9;

const COL_NAME: usize = 0;
const COL_BACKEND: usize = 1;
const COL_ITERATIONS: usize = 2;
const COL_TOTAL_TIME: usize = 3;
const COL_MAX_ERROR: usize = 4;
const COL_TESTSET_SIZE: usize = 5;
const COL_EVALUATOR_COUNT: usize = 6;
const COL_FREQ_START: usize = 7;
const COL_FREQ_STEP: usize = 8;

/// How malformed benchmark rows are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Abort on the first malformed row.
    #[default]
    Strict,
    /// Skip malformed rows and report them in [`BenchmarkFile::skipped`].
    Lenient,
}

/// Configuration for results file parsing.
///
/// # Examples
///
/// ```
/// # use mlts_csv::{ParseConfig, ParseMode};
/// let config = ParseConfig::default();
/// assert_eq!(config.delimiter, b',');
/// assert!(config.trim);
/// assert_eq!(config.max_rows, 1_000_000);
/// assert_eq!(config.mode, ParseMode::Strict);
///
/// let lenient = ParseConfig {
///     mode: ParseMode::Lenient,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ParseConfig {
    /// Field delimiter character (default: `,`).
    pub delimiter: u8,

    /// Whether to trim leading/trailing whitespace from fields (default: `true`).
    pub trim: bool,

    /// Maximum number of benchmark rows to parse (default: 1,000,000).
    ///
    /// The device info row does not count towards the limit.
    pub max_rows: usize,

    /// Handling of malformed rows (default: [`ParseMode::Strict`]).
    pub mode: ParseMode,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
            max_rows: DEFAULT_MAX_ROWS,
            mode: ParseMode::Strict,
        }
    }
}

/// Parse a results CSV string with default configuration.
///
/// # Examples
///
/// ```
/// use mlts_csv::parse_results;
///
/// let csv = "\
/// ## MLTS results
/// 2025-01-01 10:00,Pixel 9
/// mobilenet_v1_1.0_224,TFLite_CPU,1000,2.0,0.01,50,0,0.001,0.001,10,20
/// ";
/// let file = parse_results(csv).unwrap();
/// assert_eq!(file.device.device_info, "Pixel 9");
/// assert_eq!(file.records.len(), 1);
/// assert_eq!(file.records[0].time_freq_sec, vec![10.0, 20.0]);
/// ```
///
/// # Errors
///
/// Fails on the first malformed row; see [`CsvError`].
pub fn parse_results(input: &str) -> Result<BenchmarkFile> {
    parse_results_with_config(input, ParseConfig::default())
}

/// Parse a results CSV string with custom configuration.
pub fn parse_results_with_config(input: &str, config: ParseConfig) -> Result<BenchmarkFile> {
    parse_results_reader(input.as_bytes(), config)
}

/// Parse results CSV data from a reader.
///
/// # Examples
///
/// ```no_run
/// use mlts_csv::{parse_results_reader, ParseConfig};
/// use std::fs::File;
///
/// let file = File::open("nn_benchmark_result.csv").unwrap();
/// let results = parse_results_reader(file, ParseConfig::default()).unwrap();
/// ```
pub fn parse_results_reader<R: Read>(reader: R, config: ParseConfig) -> Result<BenchmarkFile> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(false)
        .flexible(true)
        .comment(Some(COMMENT_MARKER))
        .trim(if config.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        })
        .from_reader(reader);

    let mut rows = csv_reader.records();

    let device = match rows.next() {
        Some(result) => {
            let record = result?;
            parse_device_info(&record, line_of(&record, 1))?
        }
        None => return Err(CsvError::MissingDeviceInfo),
    };
    debug!(
        device = %device.device_info,
        started = %device.benchmark_time,
        "parsed device info"
    );

    let mut file = BenchmarkFile {
        device,
        ..Default::default()
    };

    for (record_idx, result) in rows.enumerate() {
        if record_idx >= config.max_rows {
            return Err(CsvError::SecurityLimit {
                limit: config.max_rows,
                actual: record_idx + 1,
            });
        }

        let record = match result {
            Ok(record) => record,
            // I/O failures abort even in lenient mode.
            Err(e) if config.mode == ParseMode::Lenient && !e.is_io_error() => {
                let line = e
                    .position()
                    .map(|p| p.line() as usize)
                    .unwrap_or(record_idx + 2);
                warn!(line, error = %e, "skipping unreadable benchmark row");
                file.skipped.push(SkippedRow {
                    line,
                    reason: e.to_string(),
                });
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        let line = line_of(&record, record_idx + 2);
        let fields: Vec<&str> = record.iter().collect();

        match parse_record(&fields, line) {
            Ok(parsed) => file.records.push(parsed),
            Err(e) if config.mode == ParseMode::Lenient => {
                warn!(line, error = %e, "skipping malformed benchmark row");
                file.skipped.push(SkippedRow {
                    line,
                    reason: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        }
    }

    debug!(
        records = file.records.len(),
        skipped = file.skipped.len(),
        "parsed benchmark results"
    );
    Ok(file)
}

/// Decode one benchmark row.
///
/// `line` is only used for error reporting.
///
/// # Examples
///
/// ```
/// use mlts_csv::parse_record;
///
/// let fields = [
///     "tts_model_a", "TFLite_NNAPI", "100", "0.5", "0.002", "10", "2", "0.004", "0.001",
///     "max_mel_cep_distortion", "0.03", "max_log_f0_error", "0.01",
///     "40", "50", "10",
/// ];
/// let record = parse_record(&fields, 3).unwrap();
/// assert_eq!(record.evaluator_keys, vec!["max_mel_cep_distortion", "max_log_f0_error"]);
/// assert_eq!(record.evaluator_values, vec!["0.03", "0.01"]);
/// assert_eq!(record.time_freq_sec, vec![40.0, 50.0, 10.0]);
/// ```
///
/// # Errors
///
/// - [`CsvError::WidthMismatch`] if the row is shorter than its evaluator
///   count requires
/// - [`CsvError::TypeMismatch`] if a numeric field does not parse
pub fn parse_record(fields: &[&str], line: usize) -> Result<BenchmarkRecord> {
    if fields.len() < FIXED_COLUMNS {
        return Err(CsvError::WidthMismatch {
            expected: FIXED_COLUMNS,
            actual: fields.len(),
            line,
        });
    }

    let evaluator_count: usize = parse_number(
        fields[COL_EVALUATOR_COUNT],
        "evaluator_count",
        "integer",
        line,
    )?;
    let evaluator_end = evaluator_count
        .checked_mul(2)
        .and_then(|n| n.checked_add(FIXED_COLUMNS))
        .ok_or_else(|| {
            CsvError::type_mismatch(
                "evaluator_count",
                "reasonable pair count",
                fields[COL_EVALUATOR_COUNT],
                line,
            )
        })?;
    if fields.len() < evaluator_end {
        return Err(CsvError::WidthMismatch {
            expected: evaluator_end,
            actual: fields.len(),
            line,
        });
    }

    let evaluator_fields = &fields[FIXED_COLUMNS..evaluator_end];
    let evaluator_keys: Vec<String> = evaluator_fields
        .iter()
        .step_by(2)
        .map(|k| k.to_string())
        .collect();
    let evaluator_values: Vec<String> = evaluator_fields
        .iter()
        .skip(1)
        .step_by(2)
        .map(|v| v.to_string())
        .collect();
    for (key, value) in evaluator_keys.iter().zip(&evaluator_values) {
        parse_float(value, key, FloatRange::Finite, line)?;
    }

    let time_freq_sec = fields[evaluator_end..]
        .iter()
        .enumerate()
        .map(|(i, v)| {
            parse_float(v, &format!("time_freq[{}]", i), FloatRange::NonNegative, line)
        })
        .collect::<Result<Vec<f64>>>()?;

    Ok(BenchmarkRecord {
        name: fields[COL_NAME].to_string(),
        backend_type: fields[COL_BACKEND].to_string(),
        iterations: parse_number(fields[COL_ITERATIONS], "iterations", "integer", line)?,
        total_time_sec: parse_float(
            fields[COL_TOTAL_TIME],
            "total_time_sec",
            FloatRange::NonNegative,
            line,
        )?,
        max_single_error: parse_float(
            fields[COL_MAX_ERROR],
            "max_single_error",
            FloatRange::NonNegative,
            line,
        )?,
        testset_size: parse_number(fields[COL_TESTSET_SIZE], "testset_size", "integer", line)?,
        evaluator_keys,
        evaluator_values,
        time_freq_start_sec: parse_float(
            fields[COL_FREQ_START],
            "time_freq_start_sec",
            FloatRange::NonNegative,
            line,
        )?,
        time_freq_step_sec: parse_float(
            fields[COL_FREQ_STEP],
            "time_freq_step_sec",
            FloatRange::NonNegative,
            line,
        )?,
        time_freq_sec,
    })
}

fn parse_device_info(record: &csv::StringRecord, line: usize) -> Result<DeviceInfo> {
    match (record.get(0), record.get(1)) {
        (Some(benchmark_time), Some(device_info)) => Ok(DeviceInfo {
            benchmark_time: benchmark_time.to_string(),
            device_info: device_info.to_string(),
        }),
        _ => Err(CsvError::WidthMismatch {
            expected: 2,
            actual: record.len(),
            line,
        }),
    }
}

fn parse_number<T: std::str::FromStr>(
    value: &str,
    column: &str,
    expected: &str,
    line: usize,
) -> Result<T> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| CsvError::type_mismatch(column, expected, value, line))
}

/// Values accepted by a float column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FloatRange {
    /// Any finite value.
    Finite,
    /// Finite and not below zero.
    NonNegative,
}

impl FloatRange {
    fn expected(self) -> &'static str {
        match self {
            FloatRange::Finite => "finite float",
            FloatRange::NonNegative => "non-negative finite float",
        }
    }

    fn contains(self, value: f64) -> bool {
        match self {
            FloatRange::Finite => value.is_finite(),
            FloatRange::NonNegative => value.is_finite() && value >= 0.0,
        }
    }
}

/// Parse a float column, rejecting `NaN`, infinities and out-of-range values.
fn parse_float(value: &str, column: &str, range: FloatRange, line: usize) -> Result<f64> {
    let parsed: f64 = parse_number(value, column, range.expected(), line)?;
    if range.contains(parsed) {
        Ok(parsed)
    } else {
        Err(CsvError::type_mismatch(column, range.expected(), value, line))
    }
}

fn line_of(record: &csv::StringRecord, fallback: usize) -> usize {
    record
        .position()
        .map(|p| p.line() as usize)
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEVICE_ROW: &str = "2025-03-01T12:00:00,Pixel 9 Pro (husky)\n";

    fn row(name: &str, backend: &str) -> String {
        format!(
            "{},{},1000,2.0,0.05,50,5,0.001,0.0005,top_1,0.5,top_2,0.7,top_3,0.8,top_4,0.9,top_5,0.95,1,4,9,3\n",
            name, backend
        )
    }

    #[test]
    fn test_parse_config_default() {
        let config = ParseConfig::default();
        assert_eq!(config.delimiter, b',');
        assert!(config.trim);
        assert_eq!(config.max_rows, DEFAULT_MAX_ROWS);
        assert_eq!(config.mode, ParseMode::Strict);
    }

    #[test]
    fn test_parse_basic_file() {
        let input = format!(
            "{}{}{}",
            DEVICE_ROW,
            row("mobilenet_v1_1.0_224", "TFLite_CPU"),
            row("mobilenet_v1_1.0_224", "TFLite_NNAPI")
        );
        let file = parse_results(&input).unwrap();

        assert_eq!(file.device.benchmark_time, "2025-03-01T12:00:00");
        assert_eq!(file.device.device_info, "Pixel 9 Pro (husky)");
        assert_eq!(file.records.len(), 2);

        let first = &file.records[0];
        assert_eq!(first.name, "mobilenet_v1_1.0_224");
        assert_eq!(first.backend_type, "TFLite_CPU");
        assert_eq!(first.iterations, 1000);
        assert_eq!(first.total_time_sec, 2.0);
        assert_eq!(first.max_single_error, 0.05);
        assert_eq!(first.testset_size, 50);
        assert_eq!(first.time_freq_start_sec, 0.001);
        assert_eq!(first.time_freq_step_sec, 0.0005);
        assert_eq!(
            first.evaluator_keys,
            vec!["top_1", "top_2", "top_3", "top_4", "top_5"]
        );
        assert_eq!(first.evaluator_values, vec!["0.5", "0.7", "0.8", "0.9", "0.95"]);
        assert_eq!(first.time_freq_sec, vec![1.0, 4.0, 9.0, 3.0]);
        assert!(file.skipped.is_empty());
    }

    #[test]
    fn test_comments_are_skipped() {
        let input = format!(
            "# header comment\n{}# between rows\n{}",
            DEVICE_ROW,
            row("tts_model_a", "TFLite_CPU")
        );
        let file = parse_results(&input).unwrap();
        assert_eq!(file.device.device_info, "Pixel 9 Pro (husky)");
        assert_eq!(file.records.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            parse_results(""),
            Err(CsvError::MissingDeviceInfo)
        ));
        assert!(matches!(
            parse_results("# only a comment\n"),
            Err(CsvError::MissingDeviceInfo)
        ));
    }

    #[test]
    fn test_device_info_only() {
        let file = parse_results(DEVICE_ROW).unwrap();
        assert!(file.records.is_empty());
    }

    #[test]
    fn test_device_info_too_short() {
        let err = parse_results("just-a-timestamp\n").unwrap_err();
        assert!(matches!(
            err,
            CsvError::WidthMismatch {
                expected: 2,
                actual: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_no_evaluators_no_histogram() {
        let record = parse_record(
            &["m", "TFLite_CPU", "1", "0.1", "0", "1", "0", "0", "0"],
            2,
        )
        .unwrap();
        assert!(record.evaluator_keys.is_empty());
        assert!(record.evaluator_values.is_empty());
        assert!(record.time_freq_sec.is_empty());
    }

    #[test]
    fn test_row_shorter_than_fixed_columns() {
        let err = parse_record(&["m", "TFLite_CPU", "1"], 4).unwrap_err();
        assert!(matches!(
            err,
            CsvError::WidthMismatch {
                expected: 9,
                actual: 3,
                line: 4
            }
        ));
    }

    #[test]
    fn test_row_shorter_than_evaluator_block() {
        let err = parse_record(
            &["m", "TFLite_CPU", "1", "0.1", "0", "1", "2", "0", "0", "top_1", "0.5"],
            5,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CsvError::WidthMismatch {
                expected: 13,
                actual: 11,
                line: 5
            }
        ));
    }

    #[test]
    fn test_non_numeric_iterations() {
        let err = parse_record(
            &["m", "TFLite_CPU", "many", "0.1", "0", "1", "0", "0", "0"],
            2,
        )
        .unwrap_err();
        match err {
            CsvError::TypeMismatch { column, value, .. } => {
                assert_eq!(column, "iterations");
                assert_eq!(value, "many");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_negative_iterations_rejected() {
        let err = parse_record(
            &["m", "TFLite_CPU", "-1", "0.1", "0", "1", "0", "0", "0"],
            2,
        )
        .unwrap_err();
        assert!(matches!(err, CsvError::TypeMismatch { .. }));
    }

    #[test]
    fn test_non_numeric_evaluator_value() {
        let err = parse_record(
            &["m", "TFLite_CPU", "1", "0.1", "0", "1", "1", "0", "0", "top_1", "high"],
            2,
        )
        .unwrap_err();
        match err {
            CsvError::TypeMismatch { column, .. } => assert_eq!(column, "top_1"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_histogram_bucket() {
        let err = parse_record(
            &["m", "TFLite_CPU", "1", "0.1", "0", "1", "0", "0", "0", "3", "x"],
            2,
        )
        .unwrap_err();
        match err {
            CsvError::TypeMismatch { column, .. } => assert_eq!(column, "time_freq[1]"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_negative_total_time_rejected() {
        let err = parse_record(
            &["m", "TFLite_CPU", "1000", "-2.0", "0", "1", "0", "0", "0"],
            4,
        )
        .unwrap_err();
        match err {
            CsvError::TypeMismatch {
                column,
                expected,
                line,
                ..
            } => {
                assert_eq!(column, "total_time_sec");
                assert_eq!(expected, "non-negative finite float");
                assert_eq!(line, 4);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_total_time_rejected() {
        for value in ["NaN", "inf", "-inf", "infinity"] {
            let err = parse_record(
                &["m", "TFLite_NNAPI", "1000", value, "0", "1", "0", "0", "0"],
                2,
            )
            .unwrap_err();
            assert!(
                matches!(err, CsvError::TypeMismatch { ref column, .. } if column == "total_time_sec"),
                "accepted {}",
                value
            );
        }
    }

    #[test]
    fn test_non_finite_bucket_rejected() {
        let err = parse_record(
            &["m", "TFLite_CPU", "1", "0.1", "0", "1", "0", "0", "0", "NaN", "inf"],
            2,
        )
        .unwrap_err();
        match err {
            CsvError::TypeMismatch { column, value, .. } => {
                assert_eq!(column, "time_freq[0]");
                assert_eq!(value, "NaN");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_negative_histogram_step_and_bucket_rejected() {
        let step = parse_record(
            &["m", "TFLite_CPU", "1", "0.1", "0", "1", "0", "0", "-0.001", "3"],
            2,
        )
        .unwrap_err();
        assert!(matches!(step, CsvError::TypeMismatch { ref column, .. } if column == "time_freq_step_sec"));

        let bucket = parse_record(
            &["m", "TFLite_CPU", "1", "0.1", "0", "1", "0", "0", "0.001", "-3"],
            2,
        )
        .unwrap_err();
        assert!(matches!(bucket, CsvError::TypeMismatch { ref column, .. } if column == "time_freq[0]"));
    }

    #[test]
    fn test_non_finite_evaluator_value_rejected() {
        let err = parse_record(
            &["m", "TFLite_CPU", "1", "0.1", "0", "1", "1", "0", "0", "top_1", "inf"],
            2,
        )
        .unwrap_err();
        assert!(matches!(err, CsvError::TypeMismatch { ref column, .. } if column == "top_1"));
    }

    #[test]
    fn test_negative_evaluator_value_accepted() {
        let record = parse_record(
            &["m", "TFLite_CPU", "1", "0.1", "0", "1", "1", "0", "0", "snr_db", "-3.5"],
            2,
        )
        .unwrap();
        assert_eq!(record.evaluator_values, vec!["-3.5"]);
    }

    #[test]
    fn test_reader_io_error() {
        struct FailingReader;

        impl Read for FailingReader {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed"))
            }
        }

        let config = ParseConfig {
            mode: ParseMode::Lenient,
            ..Default::default()
        };
        match parse_results_reader(FailingReader, config).unwrap_err() {
            CsvError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    fn invalid_utf8_input() -> Vec<u8> {
        let mut input = Vec::new();
        input.extend_from_slice(DEVICE_ROW.as_bytes());
        input.extend_from_slice(row("a", "TFLite_CPU").as_bytes());
        input.extend_from_slice(b"bad\xff,TFLite_CPU,1,0.1,0,1,0,0,0,3\n");
        input.extend_from_slice(row("b", "TFLite_CPU").as_bytes());
        input
    }

    #[test]
    fn test_lenient_mode_skips_invalid_utf8_row() {
        let config = ParseConfig {
            mode: ParseMode::Lenient,
            ..Default::default()
        };
        let file = parse_results_reader(invalid_utf8_input().as_slice(), config).unwrap();

        assert_eq!(file.records.len(), 2);
        assert_eq!(file.records[1].name, "b");
        assert_eq!(file.skipped.len(), 1);
        assert!(file.skipped[0].reason.to_lowercase().contains("utf-8"));
    }

    #[test]
    fn test_strict_mode_rejects_invalid_utf8_row() {
        let err = parse_results_reader(invalid_utf8_input().as_slice(), ParseConfig::default())
            .unwrap_err();
        assert!(matches!(err, CsvError::CsvLib(_)));
    }

    #[test]
    fn test_strict_mode_aborts() {
        let input = format!(
            "{}{}broken,row\n{}",
            DEVICE_ROW,
            row("a", "TFLite_CPU"),
            row("b", "TFLite_CPU")
        );
        let err = parse_results(&input).unwrap_err();
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn test_lenient_mode_skips() {
        let input = format!(
            "{}{}broken,row\n{}",
            DEVICE_ROW,
            row("a", "TFLite_CPU"),
            row("b", "TFLite_CPU")
        );
        let config = ParseConfig {
            mode: ParseMode::Lenient,
            ..Default::default()
        };
        let file = parse_results_with_config(&input, config).unwrap();
        assert_eq!(file.records.len(), 2);
        assert_eq!(file.skipped.len(), 1);
        assert_eq!(file.skipped[0].line, 3);
        assert!(file.skipped[0].reason.contains("width mismatch"));
    }

    #[test]
    fn test_max_rows_limit() {
        let input = format!(
            "{}{}{}",
            DEVICE_ROW,
            row("a", "TFLite_CPU"),
            row("b", "TFLite_CPU")
        );
        let config = ParseConfig {
            max_rows: 1,
            ..Default::default()
        };
        let err = parse_results_with_config(&input, config).unwrap_err();
        assert!(matches!(
            err,
            CsvError::SecurityLimit {
                limit: 1,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_custom_delimiter_and_trim() {
        let input = "t0; device\nm ; TFLite_CPU ; 10 ; 1.0 ; 0 ; 1 ; 0 ; 0 ; 0 ; 7\n";
        let config = ParseConfig {
            delimiter: b';',
            ..Default::default()
        };
        let file = parse_results_with_config(input, config).unwrap();
        assert_eq!(file.device.device_info, "device");
        assert_eq!(file.records[0].backend_type, "TFLite_CPU");
        assert_eq!(file.records[0].time_freq_sec, vec![7.0]);
    }
}
