//! Configuration for the vibe pipeline
//!
//! A single [`VibeConfig`] document can be written in YAML or JSON. The
//! split data files (pattern list, synonym map, lexicon) can also be loaded
//! on their own.

use crate::defaults::{builtin_lexicon, builtin_patterns};
use crate::matcher::validate_entry;
use crate::normalizer::SynonymTable;
use crate::sentiment::SentimentLexicon;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;
use vibecheck_core::{Error, PatternEntry, Result};

/// Data tables for a pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VibeConfig {
    /// Pattern entries, in evaluation order
    #[serde(default = "builtin_patterns")]
    pub patterns: Vec<PatternEntry>,

    /// Raw token to canonical token
    #[serde(default)]
    pub synonyms: SynonymTable,

    /// Sentiment lexicon
    #[serde(default = "builtin_lexicon")]
    pub lexicon: SentimentLexicon,
}

impl Default for VibeConfig {
    fn default() -> Self {
        Self {
            patterns: builtin_patterns(),
            synonyms: SynonymTable::new(),
            lexicon: builtin_lexicon(),
        }
    }
}

impl VibeConfig {
    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a `.json`, `.yaml` or `.yml` file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let config = match extension(path).as_deref() {
            Some("json") => Self::from_json(&content)?,
            Some("yaml") | Some("yml") => Self::from_yaml(&content)?,
            _ => {
                return Err(Error::config(format!(
                    "Unsupported config format: {}",
                    path.display()
                )))
            }
        };

        info!(
            path = %path.display(),
            patterns = config.patterns.len(),
            synonyms = config.synonyms.len(),
            "Loaded vibe config"
        );

        Ok(config)
    }

    /// Check every pattern entry
    pub fn validate(&self) -> Result<()> {
        self.patterns.iter().try_for_each(validate_entry)
    }

    /// Category names in evaluation order
    pub fn categories(&self) -> Vec<String> {
        self.patterns.iter().map(|p| p.category.clone()).collect()
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}

/// Load an ordered JSON list of `{category, triggers, response, priority?}`
pub fn load_patterns_json(path: impl AsRef<Path>) -> Result<Vec<PatternEntry>> {
    let content = std::fs::read_to_string(path)?;
    let patterns: Vec<PatternEntry> = serde_json::from_str(&content)?;
    patterns.iter().try_for_each(validate_entry)?;
    Ok(patterns)
}

/// Load a flat JSON map of token to canonical token
pub fn load_synonyms_json(path: impl AsRef<Path>) -> Result<SynonymTable> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load a JSON `{positive: [..], negative: [..]}` lexicon
pub fn load_lexicon_json(path: impl AsRef<Path>) -> Result<SentimentLexicon> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
