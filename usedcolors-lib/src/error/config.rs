//! Configuration error types

/// Errors raised when an [`AnalyzerConfig`](crate::AnalyzerConfig) cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The similarity orderer needs at least one bucket per dimension.
    #[error("Cluster granularity must be at least 1")]
    ZeroClusterGranularity,

    /// Without an asset extension no path could ever be classified as asset-backed.
    #[error("Asset extension must not be empty")]
    EmptyAssetExtension,
}
