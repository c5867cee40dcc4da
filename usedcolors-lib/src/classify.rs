//! Record classification
//!
//! Flags are derived from a record's usage paths alone and are recomputed on
//! demand, so they always reflect every sighting merged so far.

use serde::Serialize;

use crate::config::AnalyzerConfig;
use crate::error::Diagnostic;
use crate::model::ProjectColorRecord;

/// Classification of one project color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ColorFlags {
    /// Declared in at least one asset catalog.
    pub asset_backed: bool,
    /// Used in source code and not asset-backed.
    pub used_in_code: bool,
    /// Used in a layout file and not asset-backed.
    pub used_in_markup: bool,
    /// Declared as an asset with one name and nothing referencing it.
    pub unused: bool,
    /// Declared by more than one asset-catalog entry.
    pub duplicated: bool,
}

/// Derives the flags of a record.
pub fn classify(record: &ProjectColorRecord, config: &AnalyzerConfig) -> ColorFlags {
    let paths = &record.used_in_paths;
    let asset_paths = paths.iter().filter(|p| config.is_asset_path(p)).count();
    let asset_backed = asset_paths > 0;

    ColorFlags {
        asset_backed,
        used_in_code: !asset_backed && paths.iter().any(|p| config.is_code_path(p)),
        used_in_markup: !asset_backed && paths.iter().any(|p| config.is_markup_path(p)),
        unused: asset_backed && record.names.len() == 1 && paths.len() == 1,
        duplicated: asset_paths > 1,
    }
}

/// Returns the warnings a classified record deserves.
///
/// A duplicated color lists the catalog entries declaring it, named by their
/// folder stem, so labels picked up from code or layouts are left out.
pub fn diagnostics(
    record: &ProjectColorRecord,
    flags: &ColorFlags,
    config: &AnalyzerConfig,
) -> Vec<Diagnostic> {
    let mut out = Vec::new();

    let declared = record.names.first().zip(record.used_in_paths.first());
    if let Some((name, path)) = declared.filter(|_| flags.unused) {
        out.push(Diagnostic::unused_asset(name, path));
    }

    if flags.duplicated {
        let stems: Vec<_> = record
            .used_in_paths
            .iter()
            .filter(|p| config.is_asset_path(p))
            .filter_map(|p| p.file_stem())
            .map(|stem| stem.to_string_lossy())
            .collect();
        let names: Vec<&str> = stems.iter().map(|stem| &**stem).collect();
        out.push(Diagnostic::duplicated(&record.variant.label(), &names));
    }

    if !flags.asset_backed && !record.variant.is_system() {
        out.push(Diagnostic::not_in_asset(&record.variant.label()));
    }

    out
}
