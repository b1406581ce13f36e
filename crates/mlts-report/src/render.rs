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

//! HTML report rendering.
//!
//! The document is assembled from [`FormattedGroup`]s in four nested levels:
//! document, group table, comparison block (one `<tbody>` per benchmark), and
//! row. Every row owns a canvas with a unique id that its latency histogram
//! chart is drawn into.
//!
//! The chart library source is inlined so the report is a single
//! self-contained file; only jQuery is loaded from its CDN.

use crate::error::Result;
use crate::format::{Cell, FormattedGroup, FormattedRow};
use mlts_csv::{DeviceInfo, SkippedRow};
use serde::Serialize;

/// Default document title.
pub const DEFAULT_TITLE: &str = "MLTS results";

const JQUERY_URL: &str = "https://ajax.googleapis.com/ajax/libs/jquery/3.3.1/jquery.min.js";

const STYLE: &str = r#"    body {
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    }
    .results {
      border-collapse: collapse;
      width: 100%;
      margin-bottom: 30px;
    }
    .results td, .results th {
      border: 1px solid #ddd;
      padding: 6px;
    }
    .results tbody tr.baseline {background-color: #eee;}
    .results tr:hover {background-color: #ddd;}
    .results th {
      padding: 10px;
      font-weight: bold;
      text-align: left;
      background-color: #333;
      color: white;
    }
    .results tbody {border-top: 3px solid #333;}
    .diff {font-size: 0.9em;}
    .better {color: #2e7d32; font-weight: bold;}
    .worse {color: #c62828; font-weight: bold;}
    .same {color: #777;}
    .skipped {color: #c62828;}
"#;

const CHART_SCRIPT: &str = r#"    function drawLatencyChart(id, labels, data, label) {
      var ctx = $('#' + id)[0].getContext('2d');
      window[id] = new Chart(ctx, {
        type: 'bar',
        data: {
          labels: labels,
          datasets: [{
            label: label,
            data: data,
            backgroundColor: 'rgba(255, 99, 132, 0.6)',
            borderColor: 'rgba(255, 0, 0, 0.6)',
            borderWidth: 1,
          }]
        },
        options: {
          responsive: true,
          title: {
            display: true,
            text: 'Latency frequency'
          },
          legend: {
            display: false
          },
          scales: {
            xAxes: [{
              barPercentage: 1.0,
              categoryPercentage: 0.9,
            }],
            yAxes: [{
              scaleLabel: {
                display: true,
                labelString: 'Iterations Count'
              }
            }]
          }
        }
      });
    }
"#;

const FIXED_HEADERS: &[&str] = &[
    "Name",
    "Backend",
    "Iterations",
    "Test set size",
    "Average latency ms",
];

/// Escape text for use in HTML element content and attribute values.
///
/// # Examples
///
/// ```
/// use mlts_report::escape_html;
///
/// assert_eq!(escape_html("<b>\"A&B\"</b>"), "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;");
/// ```
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Serialize a value as a JavaScript literal safe to embed in a `<script>` block.
fn js_literal<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

/// Builder for the HTML report document.
///
/// # Examples
///
/// ```
/// use mlts_report::HtmlReport;
/// use mlts_csv::DeviceInfo;
///
/// let device = DeviceInfo {
///     benchmark_time: "2025-01-01 10:00".to_string(),
///     device_info: "Pixel 9".to_string(),
/// };
/// let html = HtmlReport::new(&device, &[], "/* chart.js */")
///     .with_title("Nightly run")
///     .render()
///     .unwrap();
///
/// assert!(html.starts_with("<!doctype html>"));
/// assert!(html.contains("<title>Nightly run</title>"));
/// assert!(html.contains("Benchmark for Pixel 9, started at 2025-01-01 10:00"));
/// ```
#[derive(Debug, Clone)]
pub struct HtmlReport<'a> {
    device: &'a DeviceInfo,
    groups: &'a [FormattedGroup],
    chart_js: &'a str,
    title: String,
    skipped: &'a [SkippedRow],
}

impl<'a> HtmlReport<'a> {
    /// Create a report for formatted groups with the given chart library source.
    pub fn new(device: &'a DeviceInfo, groups: &'a [FormattedGroup], chart_js: &'a str) -> Self {
        Self {
            device,
            groups,
            chart_js,
            title: DEFAULT_TITLE.to_string(),
            skipped: &[],
        }
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// List rows skipped during lenient parsing at the end of the report.
    pub fn with_skipped(mut self, skipped: &'a [SkippedRow]) -> Self {
        self.skipped = skipped;
        self
    }

    /// Render the complete document.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ReportError::Json`] if chart data cannot be serialized.
    pub fn render(&self) -> Result<String> {
        let mut html = String::new();
        let mut chart_id = 0usize;

        html.push_str("<!doctype html>\n<html lang=\"en-US\">\n<head>\n");
        html.push_str(
            "  <meta http-equiv=\"Content-Type\" content=\"text/html; charset=utf-8\">\n",
        );
        html.push_str(&format!("  <script src=\"{}\"></script>\n", JQUERY_URL));
        html.push_str("  <script>");
        html.push_str(self.chart_js);
        html.push_str("</script>\n");
        html.push_str("  <script>\n");
        html.push_str(CHART_SCRIPT);
        html.push_str("  </script>\n");
        html.push_str(&format!("  <title>{}</title>\n", escape_html(&self.title)));
        html.push_str("  <style>\n");
        html.push_str(STYLE);
        html.push_str("  </style>\n</head>\n<body>\n");

        html.push_str(&format!(
            "<div id=\"device_info\">\nBenchmark for {}, started at {}\n</div>\n",
            escape_html(&self.device.device_info),
            escape_html(&self.device.benchmark_time)
        ));

        for group in self.groups {
            self.render_group(&mut html, group, &mut chart_id)?;
        }

        if !self.skipped.is_empty() {
            self.render_skipped(&mut html);
        }

        html.push_str("</body>\n</html>\n");
        Ok(html)
    }

    fn render_group(
        &self,
        html: &mut String,
        group: &FormattedGroup,
        chart_id: &mut usize,
    ) -> Result<()> {
        html.push_str("<div class=\"group\">\n");
        html.push_str(&format!("<h2>{}</h2>\n", escape_html(&group.label)));
        html.push_str("<table class=\"results\">\n<thead>\n <tr>\n");

        let headers = FIXED_HEADERS
            .iter()
            .copied()
            .chain(group.accuracy_headers.iter().map(String::as_str))
            .chain(std::iter::once("Latency frequency"));
        for header in headers {
            html.push_str(&format!("   <th>{}</th>\n", escape_html(header)));
        }
        html.push_str(" </tr>\n</thead>\n");

        for rows in &group.comparisons {
            html.push_str("<tbody>\n");
            for row in rows {
                render_row(html, row, *chart_id)?;
                *chart_id += 1;
            }
            html.push_str("</tbody>\n");
        }

        html.push_str("</table>\n</div>\n");
        Ok(())
    }

    fn render_skipped(&self, html: &mut String) {
        html.push_str("<div class=\"skipped\">\n<h2>Skipped rows</h2>\n<ul>\n");
        for row in self.skipped {
            html.push_str(&format!(
                "  <li>line {}: {}</li>\n",
                row.line,
                escape_html(&row.reason)
            ));
        }
        html.push_str("</ul>\n</div>\n");
    }
}

fn render_cell(html: &mut String, cell: &Cell) {
    match &cell.diff {
        Some(diff) => html.push_str(&format!(
            "   <td>{} <span class=\"diff {}\">({})</span></td>\n",
            escape_html(&cell.value),
            diff.class,
            escape_html(&diff.text)
        )),
        None => html.push_str(&format!("   <td>{}</td>\n", escape_html(&cell.value))),
    }
}

fn render_row(html: &mut String, row: &FormattedRow, chart_id: usize) -> Result<()> {
    let canvas_id = format!("latency_chart{}", chart_id);
    let row_class = if row.is_baseline { "baseline" } else { "comparison" };

    html.push_str(&format!(" <tr class=\"{}\">\n", row_class));
    html.push_str(&format!("   <td>{}</td>\n", escape_html(&row.name)));
    html.push_str(&format!("   <td>{}</td>\n", escape_html(&row.backend)));
    html.push_str(&format!("   <td>{}</td>\n", row.iterations));
    html.push_str(&format!("   <td>{}</td>\n", row.testset_size));
    render_cell(html, &row.latency);
    for cell in &row.accuracy {
        render_cell(html, cell);
    }
    html.push_str(&format!(
        "   <td class=\"container\" style=\"width: 500px;\">\n    <canvas id=\"{}\" class=\"latency_chart\"></canvas>\n   </td>\n",
        canvas_id
    ));
    html.push_str(" </tr>\n");

    html.push_str(&format!(
        " <script>\n   $(function() {{ drawLatencyChart({}, {}, {}, {}); }});\n </script>\n",
        js_literal(&canvas_id)?,
        js_literal(&row.histogram.labels)?,
        js_literal(&row.histogram.counts)?,
        js_literal(&format!("{} latency frequency", row.name))?
    ));
    Ok(())
}
