// SPDX-License-Identifier: PMPL-1.0-or-later

//! Human-readable report text

use crate::types::*;
use colored::*;

pub struct ReportFormatter {
    color: bool,
}

impl ReportFormatter {
    pub fn new() -> Self {
        Self { color: true }
    }

    /// Formatter that never emits ANSI escapes
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Render findings in walk order, then the all-clear line if there were none
    pub fn render(&self, report: &ScanReport) -> String {
        let mut out = String::new();

        for finding in &report.findings {
            match finding {
                Finding::MissingFiles { directory, files } => {
                    let header = format!(
                        "In directory '{}' are the following files missing:",
                        directory.display()
                    );
                    out.push('\n');
                    out.push_str(&self.header(header));
                    out.push_str("\n\n");
                    for file in files {
                        out.push_str(&format!(" - {}\n", file));
                    }
                }
                Finding::MissingKeys { file, keys } => {
                    let header = format!("File '{}' has missing translations:", file.display());
                    out.push('\n');
                    out.push_str(&self.header(header));
                    out.push('\n');
                    for key in keys {
                        out.push_str(&format!(" - {}\n", key));
                    }
                }
            }
        }

        if !report.something_missing() {
            out.push('\n');
            out.push_str(&self.success("All translations are present."));
            out.push_str("\n\n");
        }
        out
    }

    fn header(&self, text: String) -> String {
        if self.color {
            text.bold().yellow().to_string()
        } else {
            text
        }
    }

    fn success(&self, text: &str) -> String {
        if self.color {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn empty_report() -> ScanReport {
        ScanReport {
            base_directory: PathBuf::from("i18n"),
            reference_filename: "de.json".to_string(),
            required_filenames: vec!["en.json".to_string(), "es.json".to_string()],
            locale_directories: 1,
            findings: vec![],
            load_failures: vec![],
        }
    }

    #[test]
    fn test_render_all_present() {
        let text = ReportFormatter::plain().render(&empty_report());
        assert_eq!(text, "\nAll translations are present.\n\n");
    }

    #[test]
    fn test_render_findings_in_order() {
        let mut report = empty_report();
        report.findings = vec![
            Finding::MissingFiles {
                directory: PathBuf::from("i18n/admin"),
                files: vec!["es.json".to_string()],
            },
            Finding::MissingKeys {
                file: PathBuf::from("i18n/en.json"),
                keys: vec!["a.b".to_string(), "c".to_string()],
            },
        ];

        let text = ReportFormatter::plain().render(&report);
        assert_eq!(
            text,
            "\nIn directory 'i18n/admin' are the following files missing:\n\n - es.json\n\
             \nFile 'i18n/en.json' has missing translations:\n - a.b\n - c\n"
        );
    }

    #[test]
    fn test_load_failures_alone_still_all_present() {
        let mut report = empty_report();
        report.load_failures.push(LoadFailure {
            path: PathBuf::from("i18n/fr.json"),
            cause: "parsing i18n/fr.json: EOF".to_string(),
        });
        let text = ReportFormatter::plain().render(&report);
        assert!(text.contains("All translations are present."));
    }
}
