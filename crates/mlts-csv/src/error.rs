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

//! Error types for benchmark CSV parsing.

use thiserror::Error;

/// Benchmark CSV parsing error types.
///
/// Every variant that refers to input data carries the 1-based line number of
/// the offending CSV record so the user can find it in the results file.
///
/// # Examples
///
/// ```
/// use mlts_csv::CsvError;
///
/// let err = CsvError::TypeMismatch {
///     column: "iterations".to_string(),
///     expected: "integer".to_string(),
///     value: "abc".to_string(),
///     line: 3,
/// };
///
/// assert_eq!(
///     err.to_string(),
///     "Type mismatch in column 'iterations' at line 3: expected integer, got 'abc'"
/// );
/// ```
#[derive(Debug, Error)]
pub enum CsvError {
    /// A record does not have enough columns for its declared layout.
    ///
    /// # Examples
    ///
    /// ```
    /// use mlts_csv::CsvError;
    ///
    /// let err = CsvError::WidthMismatch {
    ///     expected: 13,
    ///     actual: 11,
    ///     line: 4,
    /// };
    /// assert!(err.to_string().contains("expected at least 13 columns"));
    /// ```
    #[error("Row width mismatch: expected at least {expected} columns, got {actual} at line {line}")]
    WidthMismatch {
        /// Minimum number of columns required by the record layout.
        expected: usize,
        /// Actual number of columns in the record.
        actual: usize,
        /// Line number of the record (1-based).
        line: usize,
    },

    /// A numeric field could not be parsed.
    #[error("Type mismatch in column '{column}' at line {line}: expected {expected}, got '{value}'")]
    TypeMismatch {
        /// Column name where the mismatch occurred.
        column: String,
        /// Expected type description.
        expected: String,
        /// Actual value that failed to convert.
        value: String,
        /// Line number of the record (1-based).
        line: usize,
    },

    /// The file has no device info row.
    ///
    /// The first non-comment row must contain the benchmark start time and
    /// the device description.
    ///
    /// # Examples
    ///
    /// ```
    /// use mlts_csv::CsvError;
    ///
    /// let err = CsvError::MissingDeviceInfo;
    /// assert_eq!(err.to_string(), "Missing device info row");
    /// ```
    #[error("Missing device info row")]
    MissingDeviceInfo,

    /// Row count exceeded the configured limit.
    ///
    /// # Examples
    ///
    /// ```
    /// use mlts_csv::CsvError;
    ///
    /// let err = CsvError::SecurityLimit {
    ///     limit: 1_000_000,
    ///     actual: 1_000_001,
    /// };
    /// assert!(err.to_string().contains("Security limit"));
    /// ```
    #[error("Security limit exceeded: row count {actual} exceeds maximum {limit}")]
    SecurityLimit {
        /// Maximum allowed rows.
        limit: usize,
        /// Actual row count encountered.
        actual: usize,
    },

    /// I/O error while reading the input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the underlying CSV library.
    ///
    /// I/O failures reported by the CSV reader become [`CsvError::Io`] instead.
    #[error("CSV library error: {0}")]
    CsvLib(#[source] csv::Error),
}

impl From<csv::Error> for CsvError {
    fn from(err: csv::Error) -> Self {
        if !err.is_io_error() {
            return CsvError::CsvLib(err);
        }
        match err.into_kind() {
            csv::ErrorKind::Io(io_err) => CsvError::Io(io_err),
            other => CsvError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("{:?}", other),
            )),
        }
    }
}

/// Convenience type alias for `Result` with `CsvError`.
pub type Result<T> = std::result::Result<T, CsvError>;

impl CsvError {
    /// Line number the error refers to, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use mlts_csv::CsvError;
    ///
    /// let err = CsvError::WidthMismatch { expected: 9, actual: 2, line: 7 };
    /// assert_eq!(err.line(), Some(7));
    /// assert_eq!(CsvError::MissingDeviceInfo.line(), None);
    /// ```
    pub fn line(&self) -> Option<usize> {
        match self {
            CsvError::WidthMismatch { line, .. } | CsvError::TypeMismatch { line, .. } => {
                Some(*line)
            }
            CsvError::CsvLib(e) => e.position().map(|p| p.line() as usize),
            _ => None,
        }
    }

    pub(crate) fn type_mismatch(column: &str, expected: &str, value: &str, line: usize) -> Self {
        CsvError::TypeMismatch {
            column: column.to_string(),
            expected: expected.to_string(),
            value: value.to_string(),
            line,
        }
    }
}
