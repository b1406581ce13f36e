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

//! Error types for grouping, formatting and rendering.

use thiserror::Error;

/// Errors raised while turning benchmark records into a report.
///
/// # Examples
///
/// ```
/// use mlts_report::ReportError;
///
/// let err = ReportError::MissingBaseline {
///     name: "mobilenet_v1_1.0_224".to_string(),
///     baseline: "TFLite_CPU".to_string(),
/// };
/// assert_eq!(
///     err.to_string(),
///     "No 'TFLite_CPU' baseline result for benchmark 'mobilenet_v1_1.0_224'"
/// );
/// ```
#[derive(Debug, Error)]
pub enum ReportError {
    /// A benchmark has no result for the baseline backend.
    #[error("No '{baseline}' baseline result for benchmark '{name}'")]
    MissingBaseline {
        /// Benchmark name.
        name: String,
        /// Configured baseline backend.
        baseline: String,
    },

    /// A benchmark has more than one result for the baseline backend.
    #[error("Benchmark '{name}' has {count} '{baseline}' baseline results, expected one")]
    DuplicateBaseline {
        /// Benchmark name.
        name: String,
        /// Configured baseline backend.
        baseline: String,
        /// Number of baseline results found.
        count: usize,
    },

    /// A record has no evaluator keys, so there is no way to display its accuracy.
    #[error("Unknown accuracy format for benchmark '{name}' on '{backend}': no evaluator keys")]
    UnknownAccuracyFormat {
        /// Benchmark name.
        name: String,
        /// Backend identifier.
        backend: String,
    },

    /// A report group mixes results from different evaluators.
    ///
    /// Accuracy headers are shared by the whole group table, so every result
    /// in it must come from the same kind of evaluator.
    #[error(
        "Report group '{group}' mixes evaluators: expected {expected}, \
         but '{name}' on '{backend}' uses {found}"
    )]
    MixedEvaluators {
        /// Report group label.
        group: String,
        /// Evaluator kind of the group's first baseline.
        expected: String,
        /// Evaluator kind of the offending record.
        found: String,
        /// Benchmark name of the offending record.
        name: String,
        /// Backend of the offending record.
        backend: String,
    },

    /// A grouping rule pattern is not a valid regular expression.
    #[error("Invalid group pattern '{pattern}': {source}")]
    InvalidRule {
        /// The rejected pattern.
        pattern: String,
        /// Regex compilation error.
        #[source]
        source: regex::Error,
    },

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for `Result` with `ReportError`.
pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_baseline_display() {
        let err = ReportError::DuplicateBaseline {
            name: "asr_float".to_string(),
            baseline: "TFLite_CPU".to_string(),
            count: 2,
        };
        assert_eq!(
            err.to_string(),
            "Benchmark 'asr_float' has 2 'TFLite_CPU' baseline results, expected one"
        );
    }

    #[test]
    fn test_unknown_accuracy_display() {
        let err = ReportError::UnknownAccuracyFormat {
            name: "m".to_string(),
            backend: "TFLite_NNAPI".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Unknown accuracy format"));
        assert!(msg.contains("TFLite_NNAPI"));
    }

    #[test]
    fn test_mixed_evaluators_display() {
        let err = ReportError::MixedEvaluators {
            group: "tts".to_string(),
            expected: "mel-cepstral/F0".to_string(),
            found: "top-k".to_string(),
            name: "tts_odd".to_string(),
            backend: "TFLite_CPU".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Report group 'tts' mixes evaluators: expected mel-cepstral/F0, \
             but 'tts_odd' on 'TFLite_CPU' uses top-k"
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReportError>();
    }
}
