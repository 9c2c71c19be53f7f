// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale document loading
//!
//! A locale document is a tree of string keys. Interior nodes are
//! ordered mappings, everything else is a leaf whose concrete value does
//! not matter to the checker. JSON and YAML sources are both lowered
//! into [`LocaleNode`] so the comparator never sees a format-specific
//! value type.

use anyhow::{anyhow, bail, Context, Result};
use std::fs;
use std::path::Path;

/// One node of a locale document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleNode {
    /// Ordered mapping, in the order keys appear in the source file
    Branch(Vec<(String, LocaleNode)>),
    Leaf(LeafKind),
}

/// What sort of value sits at a leaf
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafKind {
    Null,
    Bool,
    Number,
    String,
    List,
}

impl LocaleNode {
    pub fn is_branch(&self) -> bool {
        matches!(self, LocaleNode::Branch(_))
    }

    /// Look up a direct child of a branch
    pub fn get(&self, key: &str) -> Option<&LocaleNode> {
        match self {
            LocaleNode::Branch(entries) => entries
                .iter()
                .find(|(name, _)| name == key)
                .map(|(_, node)| node),
            LocaleNode::Leaf(_) => None,
        }
    }

    /// Lower a JSON value into a locale tree
    pub fn from_json(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Object(map) => LocaleNode::Branch(
                map.into_iter()
                    .map(|(key, child)| (key, LocaleNode::from_json(child)))
                    .collect(),
            ),
            Value::Null => LocaleNode::Leaf(LeafKind::Null),
            Value::Bool(_) => LocaleNode::Leaf(LeafKind::Bool),
            Value::Number(_) => LocaleNode::Leaf(LeafKind::Number),
            Value::String(_) => LocaleNode::Leaf(LeafKind::String),
            Value::Array(_) => LocaleNode::Leaf(LeafKind::List),
        }
    }

    /// Lower a YAML value into a locale tree.
    ///
    /// Scalar mapping keys are rendered as strings (`1:` becomes `"1"`);
    /// sequence or mapping keys are rejected.
    pub fn from_yaml(value: serde_yaml::Value) -> Result<Self> {
        use serde_yaml::Value;
        Ok(match value {
            Value::Mapping(map) => {
                let mut entries = Vec::with_capacity(map.len());
                for (key, child) in map {
                    entries.push((yaml_key(key)?, LocaleNode::from_yaml(child)?));
                }
                LocaleNode::Branch(entries)
            }
            Value::Tagged(tagged) => LocaleNode::from_yaml(tagged.value)?,
            Value::Null => LocaleNode::Leaf(LeafKind::Null),
            Value::Bool(_) => LocaleNode::Leaf(LeafKind::Bool),
            Value::Number(_) => LocaleNode::Leaf(LeafKind::Number),
            Value::String(_) => LocaleNode::Leaf(LeafKind::String),
            Value::Sequence(_) => LocaleNode::Leaf(LeafKind::List),
        })
    }
}

fn yaml_key(key: serde_yaml::Value) -> Result<String> {
    use serde_yaml::Value;
    match key {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok("null".to_string()),
        Value::Tagged(tagged) => yaml_key(tagged.value),
        other => Err(anyhow!("unsupported mapping key {:?}", other)),
    }
}

/// Source syntax of a locale document, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                DocumentFormat::Yaml
            }
            _ => DocumentFormat::Json,
        }
    }

    pub fn parse(self, text: &str) -> Result<LocaleNode> {
        match self {
            DocumentFormat::Json => {
                let value: serde_json::Value = serde_json::from_str(text)?;
                Ok(LocaleNode::from_json(value))
            }
            DocumentFormat::Yaml => {
                let value: serde_yaml::Value = serde_yaml::from_str(text)?;
                LocaleNode::from_yaml(value)
            }
        }
    }
}

/// Read and parse one locale document.
///
/// The file must be UTF-8; a leading byte order mark is dropped.
pub fn load_document(path: &Path) -> Result<LocaleNode> {
    let raw = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let (text, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(&raw);
    if had_errors {
        bail!("{} is not valid UTF-8", path.display());
    }
    DocumentFormat::from_path(path)
        .parse(&text)
        .with_context(|| format!("parsing {}", path.display()))
}
