//! Analyzer configuration

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigError;

/// Configuration for a catalog analysis run.
///
/// Controls how usage paths are classified and how finely the similarity
/// orderer groups colors.
///
/// # Example
///
/// ```
/// use usedcolors_lib::AnalyzerConfig;
///
/// let config = AnalyzerConfig::default()
///     .with_cluster_granularity(4)
///     .with_markup_extensions(["xib", "storyboard", "nib"]);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Number of buckets per HSV dimension used by the similarity orderer.
    ///
    /// Default: 1
    pub cluster_granularity: u32,

    /// Path extension of asset-catalog color entries.
    ///
    /// Default: `colorset`
    pub asset_extension: String,

    /// Path extensions of source code files.
    ///
    /// Default: `swift`
    pub code_extensions: Vec<String>,

    /// Path extensions of layout files.
    ///
    /// Default: `xib`, `storyboard`
    pub markup_extensions: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            cluster_granularity: 1,
            asset_extension: "colorset".to_string(),
            code_extensions: vec!["swift".to_string()],
            markup_extensions: vec!["xib".to_string(), "storyboard".to_string()],
        }
    }
}

impl AnalyzerConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the cluster granularity.
    pub fn with_cluster_granularity(mut self, granularity: u32) -> Self {
        self.cluster_granularity = granularity;
        self
    }

    /// Sets the asset-catalog extension.
    pub fn with_asset_extension(mut self, extension: impl Into<String>) -> Self {
        self.asset_extension = extension.into();
        self
    }

    /// Sets the source code extensions.
    pub fn with_code_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.code_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the layout extensions.
    pub fn with_markup_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.markup_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Checks that the configuration can drive an analysis.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cluster_granularity == 0 {
            return Err(ConfigError::ZeroClusterGranularity);
        }
        if self.asset_extension.is_empty() {
            return Err(ConfigError::EmptyAssetExtension);
        }
        Ok(())
    }

    /// Returns `true` if `path` points into an asset catalog.
    pub fn is_asset_path(&self, path: &Path) -> bool {
        extension_of(path) == Some(self.asset_extension.as_str())
    }

    /// Returns `true` if `path` is a source code file.
    pub fn is_code_path(&self, path: &Path) -> bool {
        matches_any(path, &self.code_extensions)
    }

    /// Returns `true` if `path` is a layout file.
    pub fn is_markup_path(&self, path: &Path) -> bool {
        matches_any(path, &self.markup_extensions)
    }
}

fn extension_of(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

fn matches_any(path: &Path, extensions: &[String]) -> bool {
    extension_of(path).is_some_and(|ext| extensions.iter().any(|candidate| candidate == ext))
}
