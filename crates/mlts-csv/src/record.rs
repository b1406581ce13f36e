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

//! Benchmark result data model.

use serde::Serialize;

/// One benchmark run of a model on a single backend.
///
/// Values are read once from the results CSV and never mutated afterwards.
/// `evaluator_keys` and `evaluator_values` are parallel lists of the same
/// length; evaluator values keep their textual form so the report can decide
/// how to interpret them based on the evaluator kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkRecord {
    /// Benchmark (model) name, e.g. `mobilenet_v1_1.0_224`.
    pub name: String,
    /// Backend identifier, e.g. `TFLite_CPU` or `TFLite_NNAPI`.
    pub backend_type: String,
    /// Number of timed inference iterations.
    pub iterations: u64,
    /// Total time spent in all iterations, in seconds.
    pub total_time_sec: f64,
    /// Maximum error of a single output value against the reference output.
    pub max_single_error: f64,
    /// Number of inputs in the test set.
    pub testset_size: u64,
    /// Evaluator metric names.
    pub evaluator_keys: Vec<String>,
    /// Evaluator metric values, parallel to `evaluator_keys`.
    pub evaluator_values: Vec<String>,
    /// Latency of the first histogram bucket, in seconds.
    pub time_freq_start_sec: f64,
    /// Width of a histogram bucket, in seconds.
    pub time_freq_step_sec: f64,
    /// Iteration count per histogram bucket.
    pub time_freq_sec: Vec<f64>,
}

impl BenchmarkRecord {
    /// Average latency of one iteration in milliseconds.
    ///
    /// Returns `None` for a record without iterations.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mlts_csv::BenchmarkRecord;
    /// let record = BenchmarkRecord {
    ///     name: "tts_model_a".to_string(),
    ///     backend_type: "TFLite_CPU".to_string(),
    ///     iterations: 1000,
    ///     total_time_sec: 2.0,
    ///     max_single_error: 0.0,
    ///     testset_size: 10,
    ///     evaluator_keys: vec![],
    ///     evaluator_values: vec![],
    ///     time_freq_start_sec: 0.0,
    ///     time_freq_step_sec: 0.0,
    ///     time_freq_sec: vec![],
    /// };
    /// let avg = record.average_latency_ms().unwrap();
    /// assert!((avg - 2.0).abs() < 1e-9);
    /// ```
    pub fn average_latency_ms(&self) -> Option<f64> {
        if self.iterations == 0 {
            return None;
        }
        Some(self.total_time_sec / self.iterations as f64 * 1000.0)
    }

    /// Evaluator values parsed as floats, in key order.
    ///
    /// Values are validated during parsing, so this only yields `NaN` for
    /// records built by hand with non-numeric values.
    pub fn evaluator_floats(&self) -> Vec<f64> {
        self.evaluator_values
            .iter()
            .map(|v| v.trim().parse::<f64>().unwrap_or(f64::NAN))
            .collect()
    }

    /// Histogram bucket labels, as bucket start latency in milliseconds.
    ///
    /// ```
    /// # use mlts_csv::BenchmarkRecord;
    /// # let mut record = BenchmarkRecord {
    /// #     name: String::new(), backend_type: String::new(), iterations: 0,
    /// #     total_time_sec: 0.0, max_single_error: 0.0, testset_size: 0,
    /// #     evaluator_keys: vec![], evaluator_values: vec![],
    /// #     time_freq_start_sec: 0.0, time_freq_step_sec: 0.0, time_freq_sec: vec![],
    /// # };
    /// record.time_freq_start_sec = 0.001;
    /// record.time_freq_step_sec = 0.0005;
    /// record.time_freq_sec = vec![3.0, 5.0, 1.0];
    /// assert_eq!(record.histogram_labels(), vec!["1.00ms", "1.50ms", "2.00ms"]);
    /// ```
    pub fn histogram_labels(&self) -> Vec<String> {
        (0..self.time_freq_sec.len())
            .map(|i| {
                let start = self.time_freq_start_sec + i as f64 * self.time_freq_step_sec;
                format!("{:.2}ms", start * 1000.0)
            })
            .collect()
    }
}

/// Device description row at the top of a results file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DeviceInfo {
    /// Time the benchmark run started.
    pub benchmark_time: String,
    /// Free-form device description (model, build fingerprint).
    pub device_info: String,
}

/// A record that was skipped in lenient parsing mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    /// Line number of the skipped record (1-based).
    pub line: usize,
    /// Why the record was rejected.
    pub reason: String,
}

/// Parsed contents of a benchmark results file.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BenchmarkFile {
    /// Device info from the first row.
    pub device: DeviceInfo,
    /// Benchmark records in file order.
    pub records: Vec<BenchmarkRecord>,
    /// Records rejected in lenient mode. Always empty in strict mode.
    pub skipped: Vec<SkippedRow>,
}
