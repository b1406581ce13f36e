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

//! MLTS Report CLI library.
//!
//! The `mlts-report` binary is a thin wrapper over [`cli::Cli`]; the pieces
//! are exposed here so they can be driven from tests and other tools.

pub mod cli;
pub mod commands;
pub mod error;
