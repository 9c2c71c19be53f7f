// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for printed/exported reports

use crate::report::formatter::ReportFormatter;
use crate::types::ScanReport;
use anyhow::Result;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportOutputFormat {
    Text,
    Json,
    Yaml,
}

impl ReportOutputFormat {
    /// Render the report. `color` only affects text output.
    pub fn render(&self, report: &ScanReport, color: bool) -> Result<String> {
        match self {
            ReportOutputFormat::Text => {
                let formatter = if color {
                    ReportFormatter::new()
                } else {
                    ReportFormatter::plain()
                };
                Ok(formatter.render(report))
            }
            ReportOutputFormat::Json => Ok(serde_json::to_string_pretty(report)? + "\n"),
            ReportOutputFormat::Yaml => Ok(serde_yaml::to_string(report)?),
        }
    }
}
