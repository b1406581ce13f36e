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

//! MLTS benchmark results CSV parser.
//!
//! The MLTS benchmark app writes one CSV file per run. This crate reads that
//! file into a [`BenchmarkFile`]: the device info header plus one
//! [`BenchmarkRecord`] per model/backend combination.
//!
//! # Examples
//!
//! ```
//! use mlts_csv::parse_results;
//!
//! let csv = "\
//! 2025-01-01 10:00,Pixel 9
//! mobilenet_v1_1.0_224,TFLite_CPU,1000,2.0,0.0,50,5,0.001,0.001,top_1,0.5,top_2,0.7,top_3,0.8,top_4,0.9,top_5,0.95,3,7
//! mobilenet_v1_1.0_224,TFLite_NNAPI,1000,1.5,0.0,50,5,0.001,0.001,top_1,0.5,top_2,0.7,top_3,0.8,top_4,0.9,top_5,0.95,8,2
//! ";
//!
//! let file = parse_results(csv).unwrap();
//! assert_eq!(file.records.len(), 2);
//! assert_eq!(file.records[1].backend_type, "TFLite_NNAPI");
//! ```
//!
//! Malformed rows abort parsing by default. Use [`ParseMode::Lenient`] to skip
//! them instead:
//!
//! ```
//! use mlts_csv::{parse_results_with_config, ParseConfig, ParseMode};
//!
//! let csv = "2025-01-01 10:00,Pixel 9\nnot,enough,columns\n";
//! let config = ParseConfig {
//!     mode: ParseMode::Lenient,
//!     ..Default::default()
//! };
//! let file = parse_results_with_config(csv, config).unwrap();
//! assert!(file.records.is_empty());
//! assert_eq!(file.skipped[0].line, 2);
//! ```

mod error;
mod parse;
mod record;

pub use error::{CsvError, Result};
pub use parse::{
    parse_record, parse_results, parse_results_reader, parse_results_with_config, ParseConfig,
    ParseMode, COMMENT_MARKER, DEFAULT_MAX_ROWS, FIXED_COLUMNS,
};
pub use record::{BenchmarkFile, BenchmarkRecord, DeviceInfo, SkippedRow};
