//! Input facts produced by project scanners
//!
//! A facts document lists, per build target, the asset colors the target
//! declares and the color usages found in its code and layout files:
//!
//! ```json
//! {
//!   "config": { "cluster_granularity": 1 },
//!   "targets": [
//!     { "name": "App", "assets": [ ... ], "usages": [ ... ] }
//!   ]
//! }
//! ```

mod asset;
mod usage;

pub use asset::*;
pub use usage::*;

use std::path::Path;

use serde::Deserialize;

use crate::config::AnalyzerConfig;
use crate::error::FactsError;

/// Facts of one build target.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TargetFacts {
    pub name: String,
    #[serde(default)]
    pub assets: Vec<AssetColorEntry>,
    #[serde(default)]
    pub usages: Vec<UsageEvent>,
}

impl TargetFacts {
    /// Creates an empty target.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            assets: Vec::new(),
            usages: Vec::new(),
        }
    }
}

/// A complete facts document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FactsDocument {
    #[serde(default)]
    pub config: AnalyzerConfig,
    pub targets: Vec<TargetFacts>,
}

impl FactsDocument {
    /// Decodes a document and validates its configuration.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(json: &str) -> Result<Self, FactsError> {
        let document: Self = serde_json::from_str(json)?;
        document.config.validate()?;
        Ok(document)
    }

    /// Reads and decodes a document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FactsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| FactsError::io(path, e))?;
        Self::from_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn test_minimal_document() {
        let document = FactsDocument::from_str(r#"{ "targets": [ { "name": "App" } ] }"#).unwrap();
        assert_eq!(document.config, AnalyzerConfig::default());
        assert_eq!(document.targets, vec![TargetFacts::new("App")]);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let json = r#"{ "config": { "cluster_granularity": 0 }, "targets": [] }"#;
        let result = FactsDocument::from_str(json);
        assert!(matches!(
            result,
            Err(FactsError::Config(ConfigError::ZeroClusterGranularity))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = FactsDocument::from_path("/nonexistent/facts.json");
        let Err(FactsError::Io { path, .. }) = result else {
            panic!("expected an I/O error");
        };
        assert_eq!(path, Path::new("/nonexistent/facts.json"));
    }
}
