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

//! Baseline grouping and report group merging.
//!
//! Records are first bucketed by exact benchmark name. Each bucket becomes a
//! [`GroupedResult`]: the baseline backend's record plus every other backend's
//! record. Comparisons are then clustered under a canonical label chosen by an
//! ordered list of [`GroupRule`]s, so that e.g. all float MobileNet v1 variants
//! end up in one table.

use crate::error::{ReportError, Result};
use mlts_csv::BenchmarkRecord;
use regex::Regex;
use std::collections::BTreeMap;
use tracing::debug;

/// Backend every other backend is compared against by default.
pub const DEFAULT_BASELINE: &str = "TFLite_CPU";

/// Built-in grouping rules, in priority order.
///
/// Quantized patterns must come before the float pattern of the same model
/// family; the first matching rule wins.
pub const DEFAULT_RULES: &[(&str, &str)] = &[
    ("mobilenet_v1.*quant", "mobilenet_v1_quant"),
    ("mobilenet_v1", "mobilenet_v1_float"),
    ("mobilenet_v2.*quant", "mobilenet_v2_quant"),
    ("mobilenet_v2", "mobilenet_v2_float"),
    ("mobilenet_v3.*uint8", "mobilenet_v3_quant"),
    ("mobilenet_v3", "mobilenet_v3_float"),
    ("tts", "tts"),
    ("asr", "asr"),
];

/// A single `(pattern, label)` grouping rule.
///
/// Patterns are matched against the start of the benchmark name.
#[derive(Debug, Clone)]
pub struct GroupRule {
    pattern: String,
    regex: Regex,
    label: String,
}

impl GroupRule {
    /// Compile a rule.
    ///
    /// # Examples
    ///
    /// ```
    /// use mlts_report::GroupRule;
    ///
    /// let rule = GroupRule::new("inception_v3", "inception").unwrap();
    /// assert!(rule.matches("inception_v3_quant"));
    /// assert!(!rule.matches("my_inception_v3"));
    /// assert!(GroupRule::new("(", "broken").is_err());
    /// ```
    pub fn new(pattern: &str, label: impl Into<String>) -> Result<Self> {
        let regex = Regex::new(&format!("^(?:{})", pattern)).map_err(|source| {
            ReportError::InvalidRule {
                pattern: pattern.to_string(),
                source,
            }
        })?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
            label: label.into(),
        })
    }

    /// Whether the rule applies to a benchmark name.
    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    /// The pattern as given to [`GroupRule::new`].
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Canonical group label.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Ordered list of grouping rules.
#[derive(Debug, Clone)]
pub struct GroupRules {
    rules: Vec<GroupRule>,
}

impl GroupRules {
    /// Create a rule list from already compiled rules.
    pub fn new(rules: Vec<GroupRule>) -> Self {
        Self { rules }
    }

    /// A rule list that never merges: every benchmark is its own group.
    pub fn none() -> Self {
        Self { rules: Vec::new() }
    }

    /// Compile a rule list from `(pattern, label)` pairs.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let rules = pairs
            .into_iter()
            .map(|(pattern, label)| GroupRule::new(pattern, label))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// Append a rule with the lowest priority.
    pub fn push(&mut self, rule: GroupRule) {
        self.rules.push(rule);
    }

    /// Canonical label for a benchmark name.
    ///
    /// Returns the label of the first matching rule, or the name itself when
    /// no rule matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use mlts_report::GroupRules;
    ///
    /// let rules = GroupRules::default();
    /// assert_eq!(rules.label_for("mobilenet_v1_quant_224"), "mobilenet_v1_quant");
    /// assert_eq!(rules.label_for("mobilenet_v1_1.0_224"), "mobilenet_v1_float");
    /// assert_eq!(rules.label_for("tts_model_a"), "tts");
    /// assert_eq!(rules.label_for("inception_v3"), "inception_v3");
    /// ```
    pub fn label_for<'a>(&'a self, name: &'a str) -> &'a str {
        self.rules
            .iter()
            .find(|rule| rule.matches(name))
            .map(GroupRule::label)
            .unwrap_or(name)
    }

    /// Iterate over the rules in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &GroupRule> {
        self.rules.iter()
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the list has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for GroupRules {
    fn default() -> Self {
        Self::from_pairs(DEFAULT_RULES.iter().copied()).expect("built-in group patterns are valid")
    }
}

/// Grouping configuration.
///
/// # Examples
///
/// ```
/// use mlts_report::{GroupConfig, GroupRules};
///
/// let config = GroupConfig::default();
/// assert_eq!(config.baseline, "TFLite_CPU");
///
/// let config = GroupConfig {
///     baseline: "TFLite_NNAPI".to_string(),
///     rules: GroupRules::none(),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct GroupConfig {
    /// Backend identifier of the baseline (default: `TFLite_CPU`).
    pub baseline: String,
    /// Rules merging benchmark names into report groups.
    pub rules: GroupRules,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            baseline: DEFAULT_BASELINE.to_string(),
            rules: GroupRules::default(),
        }
    }
}

/// The baseline result of one benchmark and the results it is compared with.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedResult {
    /// Result on the baseline backend.
    pub baseline: BenchmarkRecord,
    /// Results on every other backend, sorted by backend identifier.
    pub others: Vec<BenchmarkRecord>,
}

impl GroupedResult {
    /// Benchmark name shared by all records.
    pub fn name(&self) -> &str {
        &self.baseline.name
    }

    /// All records, baseline first.
    pub fn records(&self) -> impl Iterator<Item = &BenchmarkRecord> {
        std::iter::once(&self.baseline).chain(self.others.iter())
    }
}

/// Comparisons clustered under one canonical label.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportGroup {
    /// Canonical group label.
    pub label: String,
    /// Comparisons sorted by benchmark name.
    pub results: Vec<GroupedResult>,
}

/// Group records by benchmark name and split off the baseline of each.
///
/// The output is sorted by benchmark name. Non-baseline records keep their
/// input order among equal backend identifiers.
///
/// # Errors
///
/// - [`ReportError::MissingBaseline`] if a benchmark has no baseline record
/// - [`ReportError::DuplicateBaseline`] if it has more than one
pub fn group_by_name<I>(records: I, baseline: &str) -> Result<Vec<GroupedResult>>
where
    I: IntoIterator<Item = BenchmarkRecord>,
{
    let mut by_name: BTreeMap<String, Vec<BenchmarkRecord>> = BTreeMap::new();
    for record in records {
        by_name.entry(record.name.clone()).or_default().push(record);
    }

    by_name
        .into_iter()
        .map(|(name, records)| {
            let (mut baselines, mut others): (Vec<_>, Vec<_>) = records
                .into_iter()
                .partition(|r| r.backend_type == baseline);

            if baselines.len() > 1 {
                return Err(ReportError::DuplicateBaseline {
                    name,
                    baseline: baseline.to_string(),
                    count: baselines.len(),
                });
            }
            let baseline_record = baselines.pop().ok_or_else(|| ReportError::MissingBaseline {
                name: name.clone(),
                baseline: baseline.to_string(),
            })?;

            others.sort_by(|a, b| a.backend_type.cmp(&b.backend_type));
            Ok(GroupedResult {
                baseline: baseline_record,
                others,
            })
        })
        .collect()
}

/// Build the report groups for a set of records.
///
/// Groups are sorted by label and the comparisons inside each group by
/// benchmark name.
///
/// # Examples
///
/// ```
/// use mlts_report::{group_results, GroupConfig};
/// # use mlts_csv::BenchmarkRecord;
/// # fn record(name: &str, backend: &str) -> BenchmarkRecord {
/// #     BenchmarkRecord {
/// #         name: name.to_string(), backend_type: backend.to_string(), iterations: 1,
/// #         total_time_sec: 1.0, max_single_error: 0.0, testset_size: 1,
/// #         evaluator_keys: vec![], evaluator_values: vec![],
/// #         time_freq_start_sec: 0.0, time_freq_step_sec: 0.0, time_freq_sec: vec![],
/// #     }
/// # }
///
/// let records = vec![
///     record("mobilenet_v1_0.5_128", "TFLite_CPU"),
///     record("mobilenet_v1_1.0_224", "TFLite_NNAPI"),
///     record("mobilenet_v1_1.0_224", "TFLite_CPU"),
/// ];
/// let groups = group_results(records, &GroupConfig::default()).unwrap();
///
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups[0].label, "mobilenet_v1_float");
/// assert_eq!(groups[0].results.len(), 2);
/// assert_eq!(groups[0].results[1].others[0].backend_type, "TFLite_NNAPI");
/// ```
pub fn group_results<I>(records: I, config: &GroupConfig) -> Result<Vec<ReportGroup>>
where
    I: IntoIterator<Item = BenchmarkRecord>,
{
    let by_name = group_by_name(records, &config.baseline)?;
    let benchmark_count = by_name.len();

    let mut by_label: BTreeMap<String, Vec<GroupedResult>> = BTreeMap::new();
    for result in by_name {
        let label = config.rules.label_for(result.name()).to_string();
        by_label.entry(label).or_default().push(result);
    }

    let groups: Vec<ReportGroup> = by_label
        .into_iter()
        .map(|(label, mut results)| {
            results.sort_by(|a, b| a.name().cmp(b.name()));
            ReportGroup { label, results }
        })
        .collect();

    debug!(
        benchmarks = benchmark_count,
        groups = groups.len(),
        baseline = %config.baseline,
        "grouped benchmark results"
    );
    Ok(groups)
}

/// All records of a set of report groups, baseline of each comparison first.
pub fn flatten(groups: &[ReportGroup]) -> Vec<BenchmarkRecord> {
    groups
        .iter()
        .flat_map(|g| g.results.iter())
        .flat_map(|r| r.records().cloned())
        .collect()
}
