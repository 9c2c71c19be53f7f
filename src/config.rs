// SPDX-License-Identifier: PMPL-1.0-or-later

//! Check configuration: which file is the reference locale, which locale
//! files every translation directory must carry, and where to start.
//!
//! Defaults match the layout of an Angular/Transloco project checked from
//! a `scripts/` directory. A JSON or YAML file may override any field.

use crate::document::DocumentFormat;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_REFERENCE: &str = "de.json";
pub const DEFAULT_REQUIRED: &[&str] = &[
    "en.json", "es.json", "fr.json", "hi.json", "it.json", "jp.json", "uk.json", "zhs.json",
    "zht.json",
];
pub const DEFAULT_BASE_DIRECTORY: &str = "../src/assets/i18n";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckConfig {
    /// Locale file treated as the source of truth
    pub reference_filename: String,
    /// Locale files every translation directory must contain, in report order
    pub required_filenames: Vec<String>,
    /// Root of the scan
    pub base_directory: PathBuf,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            reference_filename: DEFAULT_REFERENCE.to_string(),
            required_filenames: DEFAULT_REQUIRED.iter().map(|s| s.to_string()).collect(),
            base_directory: PathBuf::from(DEFAULT_BASE_DIRECTORY),
        }
    }
}

impl CheckConfig {
    /// Load a config file; `.yaml`/`.yml` is read as YAML, anything else as JSON.
    ///
    /// Fields left out of the file keep their defaults. A relative
    /// `base_directory` is taken relative to the config file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
        let mut config: CheckConfig = if DocumentFormat::from_path(path) == DocumentFormat::Yaml {
            serde_yaml::from_str(&content)
                .with_context(|| format!("parsing yaml config {}", path.display()))?
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("parsing json config {}", path.display()))?
        };

        if config.base_directory.is_relative() {
            if let Some(parent) = path.parent() {
                config.base_directory = parent.join(&config.base_directory);
            }
        }
        Ok(config)
    }

    /// Apply command-line values on top of defaults or a loaded file.
    /// `None` keeps the current value.
    pub fn with_overrides(
        mut self,
        base_directory: Option<PathBuf>,
        reference_filename: Option<String>,
        required_filenames: Option<Vec<String>>,
    ) -> Self {
        if let Some(base) = base_directory {
            self.base_directory = base;
        }
        if let Some(reference) = reference_filename {
            self.reference_filename = reference;
        }
        if let Some(required) = required_filenames {
            self.required_filenames = required;
        }
        self
    }

    /// Reject settings the scanner cannot act on
    pub fn validate(&self) -> Result<()> {
        check_filename("reference filename", &self.reference_filename)?;
        for name in &self.required_filenames {
            check_filename("required filename", name)?;
        }
        Ok(())
    }

    /// Required files other than the reference itself, in configured order
    pub fn comparison_targets(&self) -> impl Iterator<Item = &str> {
        self.required_filenames
            .iter()
            .map(String::as_str)
            .filter(move |name| *name != self.reference_filename)
    }
}

fn check_filename(label: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        bail!("{} cannot be empty", label);
    }
    if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
        bail!("{} '{}' must be a plain file name", label, name);
    }
    Ok(())
}
