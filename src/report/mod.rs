// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report rendering and persistence

pub mod formatter;
pub mod output;

use crate::types::ScanReport;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub use formatter::ReportFormatter;
pub use output::ReportOutputFormat;

/// Print report to console
pub fn print_report(report: &ScanReport, format: ReportOutputFormat, color: bool) -> Result<()> {
    print!("{}", format.render(report, color)?);
    Ok(())
}

/// Save report to file, creating parent directories as needed
pub fn save_report(report: &ScanReport, format: ReportOutputFormat, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report parent directory {}", parent.display()))?;
        }
    }
    let content = format.render(report, false)?;
    fs::write(path, content).with_context(|| format!("writing report {}", path.display()))?;
    Ok(())
}
