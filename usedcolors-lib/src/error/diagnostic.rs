//! Non-fatal diagnostics

use std::path::Path;
use std::path::PathBuf;

use serde::Serialize;

/// Category of a [`Diagnostic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A named reference did not match any declared asset.
    UnresolvedReference,
    /// A pattern guess could not be compiled as a regular expression.
    InvalidPattern,
    /// A pattern guess would match any asset name and was ignored.
    CatchAllPattern,
    /// A wildcard pattern guess matched several assets.
    WidePattern,
    /// A system color name that is not in the system color tables.
    UnknownSystemColor,
    /// An asset color is declared but never referenced.
    UnusedAsset,
    /// The same visual color is declared by several assets.
    DuplicatedColor,
    /// A literal color is used in code or layout but is not in an asset catalog.
    NotInAsset,
}

/// A user-visible warning produced while building the catalog.
///
/// Diagnostics are informational only. They are collected alongside the
/// catalog and never stop processing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// What kind of problem this is.
    pub kind: DiagnosticKind,
    /// Human-readable message.
    pub message: String,
    /// File the diagnostic refers to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Diagnostic {
    /// Creates a new diagnostic without a path.
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            path: None,
        }
    }

    /// Attaches the file this diagnostic refers to.
    pub fn at(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// A reference to `name` in `path` that matches no declared asset.
    pub fn unresolved_reference(name: &str, path: &Path) -> Self {
        Self::new(
            DiagnosticKind::UnresolvedReference,
            format!("color `{name}` is not declared in any asset catalog"),
        )
        .at(path)
    }

    /// A pattern guess in `path` that is not a valid regular expression.
    pub fn invalid_pattern(pattern: &str, path: &Path, reason: impl std::fmt::Display) -> Self {
        Self::new(
            DiagnosticKind::InvalidPattern,
            format!("pattern `{pattern}` is not a valid expression: {reason}"),
        )
        .at(path)
    }

    /// A pattern guess in `path` that would match every asset.
    pub fn catch_all_pattern(pattern: &str, path: &Path) -> Self {
        Self::new(
            DiagnosticKind::CatchAllPattern,
            format!("pattern `{pattern}` matches any asset name, please specify the pattern"),
        )
        .at(path)
    }

    /// A wildcard pattern guess in `path` that matched several assets.
    pub fn wide_pattern(pattern: &str, path: &Path, names: &[&str]) -> Self {
        Self::new(
            DiagnosticKind::WidePattern,
            format!(
                "pattern `{pattern}` is a too wide match for assets: {}",
                names.join(", ")
            ),
        )
        .at(path)
    }

    /// A system color reference in `path` to a name the tables do not know.
    pub fn unknown_system_color(name: &str, path: &Path) -> Self {
        Self::new(
            DiagnosticKind::UnknownSystemColor,
            format!("system color `{name}` is unknown, its hex cannot be resolved"),
        )
        .at(path)
    }

    /// An asset color that nothing references.
    pub fn unused_asset(name: &str, path: &Path) -> Self {
        Self::new(
            DiagnosticKind::UnusedAsset,
            format!("color `{name}` is declared as an asset but never used elsewhere"),
        )
        .at(path)
    }

    /// One visual color declared under several asset names.
    pub fn duplicated(label: &str, names: &[&str]) -> Self {
        Self::new(
            DiagnosticKind::DuplicatedColor,
            format!(
                "color `{label}` is declared by several assets: {}",
                names.join(", ")
            ),
        )
    }

    /// A color used outside any asset catalog.
    pub fn not_in_asset(label: &str) -> Self {
        Self::new(
            DiagnosticKind::NotInAsset,
            format!(
                "color `{label}` is used in code or layout but not declared in an asset catalog"
            ),
        )
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(path) = &self.path {
            write!(f, "{} ({})", self.message, path.display())
        } else {
            write!(f, "{}", self.message)
        }
    }
}
