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

//! Machine readable JSON export of a report.

use crate::error::Result;
use crate::format::FormattedGroup;
use mlts_csv::{DeviceInfo, SkippedRow};
use serde::Serialize;

/// JSON view of a report: the same formatted cells the HTML shows.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary<'a> {
    /// Version of the generator that produced the summary.
    pub generator: &'static str,
    /// Baseline backend the comparisons are relative to.
    pub baseline: &'a str,
    /// Device info from the results file.
    pub device: &'a DeviceInfo,
    /// Formatted report groups.
    pub groups: &'a [FormattedGroup],
    /// Rows skipped in lenient parsing mode.
    #[serde(skip_serializing_if = "<[SkippedRow]>::is_empty")]
    pub skipped: &'a [SkippedRow],
}

impl<'a> ReportSummary<'a> {
    /// Create a summary.
    pub fn new(baseline: &'a str, device: &'a DeviceInfo, groups: &'a [FormattedGroup]) -> Self {
        Self {
            generator: concat!("mlts-report ", env!("CARGO_PKG_VERSION")),
            baseline,
            device,
            groups,
            skipped: &[],
        }
    }

    /// Include rows skipped during parsing.
    pub fn with_skipped(mut self, skipped: &'a [SkippedRow]) -> Self {
        self.skipped = skipped;
        self
    }

    /// Serialize as pretty-printed JSON.
    ///
    /// # Examples
    ///
    /// ```
    /// use mlts_report::ReportSummary;
    /// use mlts_csv::DeviceInfo;
    ///
    /// let device = DeviceInfo::default();
    /// let json = ReportSummary::new("TFLite_CPU", &device, &[]).to_json().unwrap();
    /// assert!(json.contains("\"baseline\": \"TFLite_CPU\""));
    /// ```
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::format_group;
    use crate::group::{GroupedResult, ReportGroup};
    use mlts_csv::BenchmarkRecord;
    use serde_json::Value;

    fn record(backend: &str, total_time_sec: f64) -> BenchmarkRecord {
        BenchmarkRecord {
            name: "mobilenet_v1_1.0_224".to_string(),
            backend_type: backend.to_string(),
            iterations: 1000,
            total_time_sec,
            max_single_error: 0.0,
            testset_size: 10,
            evaluator_keys: ["top_1", "top_2", "top_3", "top_4", "top_5"]
                .iter()
                .map(|k| k.to_string())
                .collect(),
            evaluator_values: vec!["0.7".to_string(); 5],
            time_freq_start_sec: 0.001,
            time_freq_step_sec: 0.001,
            time_freq_sec: vec![1.0],
        }
    }

    #[test]
    fn test_summary_json_shape() {
        let group = ReportGroup {
            label: "mobilenet_v1_float".to_string(),
            results: vec![GroupedResult {
                baseline: record("TFLite_CPU", 2.0),
                others: vec![record("TFLite_NNAPI", 1.0)],
            }],
        };
        let groups = vec![format_group(&group).unwrap()];
        let device = DeviceInfo {
            benchmark_time: "t".to_string(),
            device_info: "d".to_string(),
        };

        let json = ReportSummary::new("TFLite_CPU", &device, &groups)
            .to_json()
            .unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["baseline"], "TFLite_CPU");
        assert_eq!(value["device"]["device_info"], "d");
        assert!(value.get("skipped").is_none());

        let group = &value["groups"][0];
        assert_eq!(group["label"], "mobilenet_v1_float");
        assert_eq!(group["evaluator"], "top_k");

        let nnapi = &group["comparisons"][0][1];
        assert_eq!(nnapi["backend"], "TFLite_NNAPI");
        assert_eq!(nnapi["is_baseline"], false);
        assert_eq!(nnapi["latency"]["value"], "1.00ms");
        assert_eq!(nnapi["latency"]["diff"]["class"], "better");
        assert!(group["comparisons"][0][0]["latency"].get("diff").is_none());
    }

    #[test]
    fn test_summary_includes_skipped_rows() {
        let device = DeviceInfo::default();
        let skipped = vec![SkippedRow {
            line: 3,
            reason: "bad".to_string(),
        }];
        let json = ReportSummary::new("TFLite_CPU", &device, &[])
            .with_skipped(&skipped)
            .to_json()
            .unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["skipped"][0]["line"], 3);
    }
}
