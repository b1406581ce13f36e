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

//! Display formatting of latency and accuracy comparisons.
//!
//! This layer turns records into typed [`Cell`]s: a display value plus an
//! optional [`Diff`] against the baseline, tagged with a [`DiffClass`]. It knows
//! nothing about HTML; the renderer decides how cells are marked up.

use crate::error::{ReportError, Result};
use crate::group::{GroupedResult, ReportGroup};
use mlts_csv::BenchmarkRecord;
use serde::Serialize;
use std::fmt;

/// Absolute threshold below which a difference counts as unchanged.
///
/// Latency and mel-cepstral/F0 diffs are compared in percentage points of
/// relative change, Top-K diffs in accuracy percentage points.
pub const DIFF_THRESHOLD: f64 = 1.0;

const TOPK_KEYS: [&str; 5] = ["top_1", "top_2", "top_3", "top_4", "top_5"];
const MEL_CEP_LOG_F0_KEYS: [&str; 2] = ["max_mel_cep_distortion", "max_log_f0_error"];

const TOPK_HEADERS: &[&str] = &["Top 1", "Top 2", "Top 3", "Top 4", "Top 5"];
const MEL_CEP_LOG_F0_HEADERS: &[&str] = &[
    "Max mel-cep distortion",
    "Max log F0 error",
    "Max single scalar error",
];
const BASIC_HEADERS: &[&str] = &["Max single scalar error"];

/// Qualitative classification of a difference against the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffClass {
    /// Improvement over the baseline.
    Better,
    /// Regression against the baseline.
    Worse,
    /// Within the threshold of the baseline.
    Same,
}

impl DiffClass {
    /// Class name used in the report markup.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiffClass::Better => "better",
            DiffClass::Worse => "worse",
            DiffClass::Same => "same",
        }
    }
}

impl fmt::Display for DiffClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a difference.
///
/// Returns [`DiffClass::Same`] when `|value| < threshold`. Otherwise the sign
/// of `value` decides, with `positive_is_better` telling which direction is an
/// improvement.
///
/// # Examples
///
/// ```
/// use mlts_report::{classify, DiffClass};
///
/// assert_eq!(classify(0.5, 1.0, true), DiffClass::Same);
/// assert_eq!(classify(-0.99, 1.0, false), DiffClass::Same);
/// assert_eq!(classify(2.0, 1.0, true), DiffClass::Better);
/// assert_eq!(classify(2.0, 1.0, false), DiffClass::Worse);
/// assert_eq!(classify(-1.0, 1.0, false), DiffClass::Better);
/// ```
pub fn classify(value: f64, threshold: f64, positive_is_better: bool) -> DiffClass {
    if value.abs() < threshold {
        DiffClass::Same
    } else if (positive_is_better && value > 0.0) || (!positive_is_better && value < 0.0) {
        DiffClass::Better
    } else {
        DiffClass::Worse
    }
}

/// Relative change from `base` to `value` in percent.
///
/// Returns `None` when `base` is zero.
pub fn percent_change(base: f64, value: f64) -> Option<f64> {
    if base == 0.0 {
        None
    } else {
        Some((value - base) / base * 100.0)
    }
}

/// Difference of a value against the baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diff {
    /// Formatted difference, e.g. `+0.20ms, +10.0%`.
    pub text: String,
    /// Classification of the difference.
    pub class: DiffClass,
}

/// A formatted table cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    /// Formatted value.
    pub value: String,
    /// Difference against the baseline; `None` for baseline rows and for
    /// values that are not compared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<Diff>,
}

impl Cell {
    fn plain(value: String) -> Self {
        Self { value, diff: None }
    }

    fn with_diff(value: String, diff: Diff) -> Self {
        Self {
            value,
            diff: Some(diff),
        }
    }
}

/// Scientific notation with two fractional digits.
fn scientific(value: f64) -> String {
    format!("{:.2e}", value)
}

/// Percentage-change diff; falls back to an absolute diff against a zero baseline.
fn relative_diff(base: f64, value: f64, positive_is_better: bool) -> Diff {
    match percent_change(base, value) {
        Some(pct) => Diff {
            text: format!("{:+.1}%", pct),
            class: classify(pct, DIFF_THRESHOLD, positive_is_better),
        },
        None => {
            let delta = value - base;
            Diff {
                text: format!("{:+.2e}", delta),
                class: classify(delta, f64::MIN_POSITIVE, positive_is_better),
            }
        }
    }
}

/// Average latency cell.
///
/// Pass the baseline record to get a diff; lower latency is better.
///
/// # Examples
///
/// ```
/// use mlts_report::{latency_cell, DiffClass};
/// # use mlts_csv::BenchmarkRecord;
/// # fn record(backend: &str, total_time_sec: f64) -> BenchmarkRecord {
/// #     BenchmarkRecord {
/// #         name: "m".to_string(), backend_type: backend.to_string(), iterations: 1000,
/// #         total_time_sec, max_single_error: 0.0, testset_size: 1,
/// #         evaluator_keys: vec![], evaluator_values: vec![],
/// #         time_freq_start_sec: 0.0, time_freq_step_sec: 0.0, time_freq_sec: vec![],
/// #     }
/// # }
/// let baseline = record("TFLite_CPU", 2.0);
/// let other = record("TFLite_NNAPI", 2.2);
///
/// assert_eq!(latency_cell(&baseline, None).value, "2.00ms");
///
/// let cell = latency_cell(&other, Some(&baseline));
/// assert_eq!(cell.value, "2.20ms");
/// let diff = cell.diff.unwrap();
/// assert_eq!(diff.text, "+0.20ms, +10.0%");
/// assert_eq!(diff.class, DiffClass::Worse);
/// ```
pub fn latency_cell(record: &BenchmarkRecord, baseline: Option<&BenchmarkRecord>) -> Cell {
    let Some(avg) = record.average_latency_ms() else {
        return Cell::plain("n/a".to_string());
    };
    let value = format!("{:.2}ms", avg);

    let Some(base) = baseline.and_then(BenchmarkRecord::average_latency_ms) else {
        return Cell::plain(value);
    };

    let diff_ms = avg - base;
    let diff = match percent_change(base, avg) {
        Some(pct) => Diff {
            text: format!("{:+.2}ms, {:+.1}%", diff_ms, pct),
            class: classify(pct, DIFF_THRESHOLD, false),
        },
        None => Diff {
            text: format!("{:+.2}ms", diff_ms),
            class: classify(diff_ms, f64::MIN_POSITIVE, false),
        },
    };
    Cell::with_diff(value, diff)
}

/// Accuracy evaluator kind, detected from the evaluator key list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluatorKind {
    /// Top-1 to Top-5 classification accuracy.
    TopK,
    /// Mel-cepstral distortion and log F0 error of a speech model.
    MelCepLogF0,
    /// Any other evaluator; only the max single error is shown.
    Basic,
    /// No evaluator keys at all.
    Unknown,
}

impl EvaluatorKind {
    /// Detect the evaluator kind from the evaluator key names.
    ///
    /// # Examples
    ///
    /// ```
    /// use mlts_report::EvaluatorKind;
    ///
    /// let topk: Vec<String> = ["top_1", "top_2", "top_3", "top_4", "top_5"]
    ///     .iter().map(|k| k.to_string()).collect();
    /// assert_eq!(EvaluatorKind::detect(&topk), EvaluatorKind::TopK);
    /// assert_eq!(EvaluatorKind::detect(&topk[..4]), EvaluatorKind::Basic);
    /// assert_eq!(EvaluatorKind::detect(&[]), EvaluatorKind::Unknown);
    /// ```
    pub fn detect(keys: &[String]) -> Self {
        if keys.is_empty() {
            EvaluatorKind::Unknown
        } else if keys.iter().map(String::as_str).eq(TOPK_KEYS) {
            EvaluatorKind::TopK
        } else if keys.iter().map(String::as_str).eq(MEL_CEP_LOG_F0_KEYS) {
            EvaluatorKind::MelCepLogF0
        } else {
            EvaluatorKind::Basic
        }
    }

    /// Evaluator kind of a record.
    pub fn of(record: &BenchmarkRecord) -> Self {
        Self::detect(&record.evaluator_keys)
    }

    /// Table headers for the accuracy columns; `None` for [`EvaluatorKind::Unknown`].
    pub fn headers(&self) -> Option<&'static [&'static str]> {
        match self {
            EvaluatorKind::TopK => Some(TOPK_HEADERS),
            EvaluatorKind::MelCepLogF0 => Some(MEL_CEP_LOG_F0_HEADERS),
            EvaluatorKind::Basic => Some(BASIC_HEADERS),
            EvaluatorKind::Unknown => None,
        }
    }

    /// Human readable name.
    pub fn description(&self) -> &'static str {
        match self {
            EvaluatorKind::TopK => "top-k",
            EvaluatorKind::MelCepLogF0 => "mel-cepstral/F0",
            EvaluatorKind::Basic => "basic",
            EvaluatorKind::Unknown => "unknown",
        }
    }
}

fn unknown_format(record: &BenchmarkRecord) -> ReportError {
    ReportError::UnknownAccuracyFormat {
        name: record.name.clone(),
        backend: record.backend_type.clone(),
    }
}

/// Accuracy headers for a table whose first baseline is `record`.
///
/// # Errors
///
/// [`ReportError::UnknownAccuracyFormat`] if the record has no evaluator keys.
pub fn accuracy_headers(record: &BenchmarkRecord) -> Result<&'static [&'static str]> {
    EvaluatorKind::of(record)
        .headers()
        .ok_or_else(|| unknown_format(record))
}

/// Accuracy cells of a record.
///
/// With a baseline of the same evaluator kind, Top-K and mel-cepstral/F0
/// cells carry a diff. Basic cells never do.
///
/// # Errors
///
/// [`ReportError::UnknownAccuracyFormat`] if the record has no evaluator keys.
pub fn accuracy_cells(
    record: &BenchmarkRecord,
    baseline: Option<&BenchmarkRecord>,
) -> Result<Vec<Cell>> {
    let kind = EvaluatorKind::of(record);
    let baseline = baseline.filter(|b| EvaluatorKind::of(b) == kind);

    match kind {
        EvaluatorKind::TopK => {
            let values: Vec<f64> = record.evaluator_floats().iter().map(|v| v * 100.0).collect();
            let bases: Option<Vec<f64>> =
                baseline.map(|b| b.evaluator_floats().iter().map(|v| v * 100.0).collect());

            Ok(values
                .iter()
                .enumerate()
                .map(|(i, value)| {
                    let text = format!("{:.3}%", value);
                    match bases.as_ref().and_then(|b| b.get(i)) {
                        Some(base) => {
                            let points = value - base;
                            Cell::with_diff(
                                text,
                                Diff {
                                    text: format!("{:+.3}%", points),
                                    class: classify(points, DIFF_THRESHOLD, true),
                                },
                            )
                        }
                        None => Cell::plain(text),
                    }
                })
                .collect())
        }
        EvaluatorKind::MelCepLogF0 => {
            let values = mel_cep_log_f0_values(record);
            let bases = baseline.map(mel_cep_log_f0_values);

            Ok(values
                .iter()
                .enumerate()
                .map(|(i, value)| {
                    let text = scientific(*value);
                    match bases.as_ref().map(|b| b[i]) {
                        Some(base) => Cell::with_diff(text, relative_diff(base, *value, false)),
                        None => Cell::plain(text),
                    }
                })
                .collect())
        }
        EvaluatorKind::Basic => Ok(vec![Cell::plain(format!(
            "{:.2}",
            record.max_single_error
        ))]),
        EvaluatorKind::Unknown => Err(unknown_format(record)),
    }
}

/// Mel-cepstral distortion, log F0 error and max single error, in display order.
fn mel_cep_log_f0_values(record: &BenchmarkRecord) -> [f64; 3] {
    let floats = record.evaluator_floats();
    [floats[0], floats[1], record.max_single_error]
}

/// Latency histogram of one record, ready for charting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    /// Bucket start latencies, e.g. `1.50ms`.
    pub labels: Vec<String>,
    /// Iterations per bucket.
    pub counts: Vec<f64>,
}

/// One formatted table row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedRow {
    /// Benchmark name.
    pub name: String,
    /// Backend identifier.
    pub backend: String,
    /// Whether this is the baseline row of its comparison.
    pub is_baseline: bool,
    /// Number of iterations.
    pub iterations: u64,
    /// Test set size.
    pub testset_size: u64,
    /// Average latency.
    pub latency: Cell,
    /// Accuracy cells, one per accuracy header.
    pub accuracy: Vec<Cell>,
    /// Latency histogram.
    pub histogram: Histogram,
}

/// A formatted report group: headers plus one row block per comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedGroup {
    /// Canonical group label.
    pub label: String,
    /// Evaluator kind shared by all rows.
    pub evaluator: EvaluatorKind,
    /// Accuracy column headers.
    pub accuracy_headers: Vec<String>,
    /// Row blocks, baseline row first in each.
    pub comparisons: Vec<Vec<FormattedRow>>,
}

fn format_row(record: &BenchmarkRecord, baseline: Option<&BenchmarkRecord>) -> Result<FormattedRow> {
    Ok(FormattedRow {
        name: record.name.clone(),
        backend: record.backend_type.clone(),
        is_baseline: baseline.is_none(),
        iterations: record.iterations,
        testset_size: record.testset_size,
        latency: latency_cell(record, baseline),
        accuracy: accuracy_cells(record, baseline)?,
        histogram: Histogram {
            labels: record.histogram_labels(),
            counts: record.time_freq_sec.clone(),
        },
    })
}

/// Format one comparison: the baseline row followed by a row per other backend.
///
/// # Errors
///
/// [`ReportError::UnknownAccuracyFormat`] if any record has no evaluator keys.
pub fn format_comparison(result: &GroupedResult) -> Result<Vec<FormattedRow>> {
    let mut rows = Vec::with_capacity(1 + result.others.len());
    rows.push(format_row(&result.baseline, None)?);
    for other in &result.others {
        rows.push(format_row(other, Some(&result.baseline))?);
    }
    Ok(rows)
}

/// Format a whole report group.
///
/// Accuracy headers come from the first baseline of the group. Every record
/// must use the same evaluator kind as that baseline.
///
/// # Errors
///
/// - [`ReportError::UnknownAccuracyFormat`] if a record has no evaluator keys
/// - [`ReportError::MixedEvaluators`] if records use different evaluators
pub fn format_group(group: &ReportGroup) -> Result<FormattedGroup> {
    let Some(first) = group.results.first() else {
        return Ok(FormattedGroup {
            label: group.label.clone(),
            evaluator: EvaluatorKind::Unknown,
            accuracy_headers: Vec::new(),
            comparisons: Vec::new(),
        });
    };

    let headers = accuracy_headers(&first.baseline)?;
    let evaluator = EvaluatorKind::of(&first.baseline);

    for record in group.results.iter().flat_map(GroupedResult::records) {
        let found = EvaluatorKind::of(record);
        if found == EvaluatorKind::Unknown {
            return Err(unknown_format(record));
        }
        if found != evaluator {
            return Err(ReportError::MixedEvaluators {
                group: group.label.clone(),
                expected: evaluator.description().to_string(),
                found: found.description().to_string(),
                name: record.name.clone(),
                backend: record.backend_type.clone(),
            });
        }
    }

    Ok(FormattedGroup {
        label: group.label.clone(),
        evaluator,
        accuracy_headers: headers.iter().map(|h| h.to_string()).collect(),
        comparisons: group
            .results
            .iter()
            .map(format_comparison)
            .collect::<Result<Vec<_>>>()?,
    })
}
