//! Analysis output handed to renderers

use std::path::PathBuf;

use serde::Serialize;

use crate::classify::ColorFlags;
use crate::classify::classify;
use crate::config::AnalyzerConfig;
use crate::error::Diagnostic;
use crate::model::AppearanceMode;
use crate::model::ColorVariant;
use crate::model::ProjectColorRecord;

/// One color of the finished catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub variant: ColorVariant,
    pub names: Vec<String>,
    pub paths: Vec<PathBuf>,
    pub property_keys: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light_hex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_hex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    #[serde(flatten)]
    pub flags: ColorFlags,
}

impl CatalogEntry {
    /// Projects a record into an entry, classifying it under `config`.
    pub fn from_record(record: ProjectColorRecord, config: &AnalyzerConfig) -> Self {
        let flags = classify(&record, config);
        Self::with_flags(record, flags)
    }

    /// Projects an already classified record into an entry.
    pub fn with_flags(record: ProjectColorRecord, flags: ColorFlags) -> Self {
        let ProjectColorRecord {
            variant,
            names,
            used_in_paths,
            property_keys,
        } = record;

        Self {
            light_hex: variant.hex(AppearanceMode::Light),
            dark_hex: variant.hex(AppearanceMode::Dark),
            raw: variant.raw(),
            variant,
            names: names.into_iter().collect(),
            paths: used_in_paths.into_iter().collect(),
            property_keys: property_keys.into_iter().collect(),
            flags,
        }
    }
}

/// Catalog-wide counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DiagnosticSummary {
    /// Distinct colors.
    pub unique: usize,
    /// Colors declared by several assets.
    pub duplicated: usize,
    /// Asset colors nothing references.
    pub unused: usize,
    /// Colors seen in exactly one file.
    pub single_use: usize,
    /// Non-system colors missing from every asset catalog.
    pub not_in_asset: usize,
}

impl DiagnosticSummary {
    /// Tallies the counts over finished entries.
    pub fn from_entries(entries: &[CatalogEntry]) -> Self {
        entries.iter().fold(Self::default(), |mut summary, entry| {
            summary.unique += 1;
            summary.duplicated += usize::from(entry.flags.duplicated);
            summary.unused += usize::from(entry.flags.unused);
            summary.single_use += usize::from(entry.paths.len() == 1);
            summary.not_in_asset +=
                usize::from(!entry.flags.asset_backed && !entry.variant.is_system());
            summary
        })
    }
}

impl std::fmt::Display for DiagnosticSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} unique colors, {} duplicated, {} unused, {} used once, {} not in an asset catalog",
            self.unique, self.duplicated, self.unused, self.single_use, self.not_in_asset
        )
    }
}

/// Result of a full analysis: the ordered catalog plus its diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub entries: Vec<CatalogEntry>,
    pub summary: DiagnosticSummary,
    pub diagnostics: Vec<Diagnostic>,
}

impl AnalysisReport {
    /// Returns the entry known by `name`, if any.
    pub fn entry_named(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries
            .iter()
            .find(|entry| entry.names.iter().any(|n| n == name))
    }
}
