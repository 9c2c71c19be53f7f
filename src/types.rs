// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for transloco-check

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A gap between the reference locale and what is on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    /// A translation directory lacks whole locale files; its keys were not compared
    MissingFiles {
        directory: PathBuf,
        files: Vec<String>,
    },
    /// A locale file lacks keys the reference has
    MissingKeys { file: PathBuf, keys: Vec<String> },
}

impl Finding {
    /// Number of missing files or keys this finding stands for
    pub fn gap_count(&self) -> usize {
        match self {
            Finding::MissingFiles { files, .. } => files.len(),
            Finding::MissingKeys { keys, .. } => keys.len(),
        }
    }
}

/// A locale document that could not be read or parsed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadFailure {
    pub path: PathBuf,
    pub cause: String,
}

/// Everything one scan found, in walk order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    pub base_directory: PathBuf,
    pub reference_filename: String,
    pub required_filenames: Vec<String>,
    /// Directories that contained the reference file
    pub locale_directories: usize,
    pub findings: Vec<Finding>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub load_failures: Vec<LoadFailure>,
}

impl ScanReport {
    pub fn something_missing(&self) -> bool {
        !self.findings.is_empty()
    }

    /// Process exit status: 1 when anything is missing, unless `no_fail`
    pub fn exit_code(&self, no_fail: bool) -> u8 {
        if self.something_missing() && !no_fail {
            1
        } else {
            0
        }
    }

    pub fn missing_file_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| matches!(f, Finding::MissingFiles { .. }))
            .map(Finding::gap_count)
            .sum()
    }

    pub fn missing_key_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| matches!(f, Finding::MissingKeys { .. }))
            .map(Finding::gap_count)
            .sum()
    }
}
