// SPDX-License-Identifier: PMPL-1.0-or-later

//! Scan: walks a translation tree and checks every locale directory
//!
//! A locale directory is any directory (the base included) that holds
//! the reference file. Each one must contain every required locale
//! file; when it does, every required file is compared key by key
//! against the reference. Unreadable or malformed documents are logged
//! and skipped without counting as a finding.

use crate::compare;
use crate::config::CheckConfig;
use crate::document::{self, LocaleNode};
use crate::types::{Finding, LoadFailure, ScanReport};
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, error, warn};
use walkdir::WalkDir;

/// Run the check described by `config`
pub fn run(config: &CheckConfig) -> Result<ScanReport> {
    config.validate()?;

    let base = &config.base_directory;
    if !base.is_dir() {
        bail!("Not a directory: {}", base.display());
    }
    // an unreadable base is fatal, unlike unreadable subdirectories
    fs::read_dir(base).with_context(|| format!("reading directory {}", base.display()))?;

    let mut report = ScanReport {
        base_directory: base.clone(),
        reference_filename: config.reference_filename.clone(),
        required_filenames: config.required_filenames.clone(),
        locale_directories: 0,
        findings: Vec::new(),
        load_failures: Vec::new(),
    };

    let walker = WalkDir::new(base).sort_by_file_name().into_iter();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("skipping unreadable path: {}", err);
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }
        let dir = entry.path();
        if !dir.join(&config.reference_filename).is_file() {
            continue;
        }

        report.locale_directories += 1;
        check_directory(dir, config, &mut report);
    }

    debug!(
        "checked {} locale directories: {} missing files, {} missing keys",
        report.locale_directories,
        report.missing_file_count(),
        report.missing_key_count()
    );
    Ok(report)
}

/// Check one directory known to hold the reference file
fn check_directory(dir: &Path, config: &CheckConfig, report: &mut ScanReport) {
    debug!("checking {}", dir.display());

    let missing: Vec<String> = config
        .required_filenames
        .iter()
        .filter(|name| !dir.join(name.as_str()).is_file())
        .cloned()
        .collect();
    if !missing.is_empty() {
        report.findings.push(Finding::MissingFiles {
            directory: dir.to_path_buf(),
            files: missing,
        });
        return;
    }

    let ref_path = dir.join(&config.reference_filename);
    let Some(reference) = load_or_record(&ref_path, report) else {
        return;
    };

    for name in config.comparison_targets() {
        let target_path = dir.join(name);
        let Some(target) = load_or_record(&target_path, report) else {
            continue;
        };

        for path in compare::shape_mismatches(&reference, &target) {
            debug!("{}: '{}' is nested on one side only", target_path.display(), path);
        }

        let keys = compare::missing_keys(&reference, &target);
        if !keys.is_empty() {
            debug!("{}: {} keys missing", target_path.display(), keys.len());
            report.findings.push(Finding::MissingKeys {
                file: target_path,
                keys,
            });
        }
    }
}

fn load_or_record(path: &Path, report: &mut ScanReport) -> Option<LocaleNode> {
    match document::load_document(path) {
        Ok(node) => Some(node),
        Err(err) => {
            error!("Error while loading '{}': {:#}", path.display(), err);
            report.load_failures.push(LoadFailure {
                path: path.to_path_buf(),
                cause: format!("{:#}", err),
            });
            None
        }
    }
}
