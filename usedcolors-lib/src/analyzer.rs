//! Catalog analysis driver
//!
//! Folds declared assets and usage events into the [`ColorRegistry`], then
//! classifies and orders the result. Assets must be declared before the
//! usages of the same target are recorded, since references resolve against
//! the assets declared so far.

use std::path::Path;

use log::debug;
use log::warn;
use regex::Regex;

use crate::classify;
use crate::config::AnalyzerConfig;
use crate::error::ConfigError;
use crate::error::Diagnostic;
use crate::facts::AssetColorEntry;
use crate::facts::FactsDocument;
use crate::facts::LayoutColor;
use crate::facts::UsageEvent;
use crate::model::AppearanceVariant;
use crate::model::ColorVariant;
use crate::model::NormalizedColor;
use crate::model::ProjectColorRecord;
use crate::naming::identifier_name;
use crate::order::SimilarityOrder;
use crate::registry::ColorRegistry;
use crate::report::AnalysisReport;
use crate::report::CatalogEntry;
use crate::report::DiagnosticSummary;
use crate::system::is_system_color;

#[derive(Debug, Clone)]
struct DeclaredAsset {
    name: String,
    identifier: String,
    variant: AppearanceVariant,
}

/// Builds a color catalog from scanner facts.
///
/// # Example
///
/// ```
/// use usedcolors_lib::{AnalyzerConfig, ColorAnalyzer};
/// use usedcolors_lib::facts::UsageEvent;
///
/// let mut analyzer = ColorAnalyzer::new(AnalyzerConfig::default()).unwrap();
/// analyzer.begin_target("App");
/// analyzer.record_usage(&UsageEvent::rgb(1.0, 0.0, 0.0, 1.0, "/app/A.swift"));
/// analyzer.record_usage(&UsageEvent::rgb(1.0, 0.0, 0.0, 1.0, "/app/B.swift"));
///
/// let report = analyzer.finish();
/// assert_eq!(report.summary.unique, 1);
/// ```
#[derive(Debug)]
pub struct ColorAnalyzer {
    config: AnalyzerConfig,
    registry: ColorRegistry,
    assets: Vec<DeclaredAsset>,
    diagnostics: Vec<Diagnostic>,
    target: Option<String>,
}

impl ColorAnalyzer {
    /// Creates an analyzer, rejecting unusable configuration.
    pub fn new(config: AnalyzerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            registry: ColorRegistry::new(),
            assets: Vec::new(),
            diagnostics: Vec::new(),
            target: None,
        })
    }

    /// Starts a new build target.
    ///
    /// Assets declared for earlier targets are no longer visible to
    /// references; colors already collected stay in the catalog.
    pub fn begin_target(&mut self, name: impl Into<String>) {
        let name = name.into();
        debug!("Processing target {name}");
        self.assets.clear();
        self.target = Some(name);
    }

    /// Returns the target currently being processed.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Declares an asset-catalog color.
    ///
    /// Returns `false` if the entry has no usable appearance and was skipped.
    pub fn declare_asset(&mut self, entry: &AssetColorEntry) -> bool {
        let Some(variant) = entry.resolve() else {
            debug!(
                "Asset {} at {} has no usable appearance, skipping",
                entry.name,
                entry.path.display()
            );
            return false;
        };

        self.registry.insert(
            ProjectColorRecord::new(variant.clone())
                .with_name(entry.name.as_str())
                .with_path(entry.path.as_path()),
        );
        self.assets.push(DeclaredAsset {
            name: entry.name.clone(),
            identifier: identifier_name(&entry.name),
            variant,
        });
        true
    }

    /// Folds one usage event into the catalog.
    pub fn record_usage(&mut self, event: &UsageEvent) {
        match event {
            UsageEvent::NamedAsset { name, path, key } => {
                self.reference(name, path, key.as_deref());
            }
            UsageEvent::GeneratedIdentifier {
                identifier,
                path,
                key,
            } => {
                self.reference(identifier, path, key.as_deref());
            }
            UsageEvent::String { value, path } => {
                self.reference(value, path, None);
            }
            UsageEvent::Pattern { pattern, path } => self.pattern(pattern, path),
            UsageEvent::System {
                name,
                alpha,
                path,
                key,
            } => {
                self.system(name, *alpha, None, path, key.as_deref());
            }
            UsageEvent::Rgb {
                red,
                green,
                blue,
                alpha,
                path,
                key,
                raw,
            } => {
                let color = with_raw(NormalizedColor::rgba(*red, *green, *blue, *alpha), raw.as_deref());
                self.literal(color, None, path, key.as_deref());
            }
            UsageEvent::Gray {
                white,
                alpha,
                path,
                key,
                raw,
            } => {
                let color = with_raw(NormalizedColor::gray(*white, *alpha), raw.as_deref());
                self.literal(color, None, path, key.as_deref());
            }
            UsageEvent::Layout {
                name,
                color,
                path,
                key,
            } => self.layout(name.as_deref(), color, path, key.as_deref()),
        }
    }

    /// Returns the colors collected so far.
    pub fn registry(&self) -> &ColorRegistry {
        &self.registry
    }

    /// Returns the diagnostics raised so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Classifies and orders the collected colors.
    pub fn finish(self) -> AnalysisReport {
        let Self {
            config,
            registry,
            mut diagnostics,
            ..
        } = self;

        let mut records = registry.into_records();
        SimilarityOrder::new(config.cluster_granularity).sort(&mut records);

        let entries: Vec<CatalogEntry> = records
            .into_iter()
            .map(|record| {
                let flags = classify::classify(&record, &config);
                diagnostics.extend(classify::diagnostics(&record, &flags, &config));
                CatalogEntry::with_flags(record, flags)
            })
            .collect();

        let summary = DiagnosticSummary::from_entries(&entries);
        debug!("Catalog complete: {summary}");

        AnalysisReport {
            entries,
            summary,
            diagnostics,
        }
    }

    fn find_asset(&self, name: &str) -> Option<&DeclaredAsset> {
        let identifier = identifier_name(name);
        self.assets.iter().find(|asset| asset.identifier == identifier)
    }

    fn insert_asset_use(&mut self, asset: DeclaredAsset, path: &Path, key: Option<&str>) {
        self.registry.insert(
            ProjectColorRecord::new(asset.variant)
                .with_name(asset.name)
                .with_path(path)
                .with_property_key(key),
        );
    }

    fn reference(&mut self, name: &str, path: &Path, key: Option<&str>) {
        match self.find_asset(name).cloned() {
            Some(asset) => self.insert_asset_use(asset, path, key),
            None => self.unresolved(name, path),
        }
    }

    fn pattern(&mut self, pattern: &str, path: &Path) {
        if let Some(asset) = self.find_asset(pattern).cloned() {
            self.insert_asset_use(asset, path, None);
            return;
        }

        let regex = match Regex::new(&format!("^(?:{pattern})$")) {
            Ok(regex) => regex,
            Err(e) => {
                warn!("Pattern {pattern} in {} is invalid: {e}", path.display());
                self.diagnostics
                    .push(Diagnostic::invalid_pattern(pattern, path, e));
                return;
            }
        };

        if regex.is_match("") {
            warn!(
                "Pattern {pattern} in {} matches any asset name, please specify the pattern",
                path.display()
            );
            self.diagnostics
                .push(Diagnostic::catch_all_pattern(pattern, path));
            return;
        }

        let matches: Vec<DeclaredAsset> = self
            .assets
            .iter()
            .filter(|asset| regex.is_match(&asset.name))
            .cloned()
            .collect();
        if matches.is_empty() {
            self.unresolved(pattern, path);
            return;
        }
        if pattern.contains('*') && matches.len() > 1 {
            let names: Vec<&str> = matches.iter().map(|asset| asset.name.as_str()).collect();
            warn!(
                "Too wide match {pattern} in {} for assets {}, please specify the pattern",
                path.display(),
                names.join(", ")
            );
            self.diagnostics
                .push(Diagnostic::wide_pattern(pattern, path, &names));
        }
        for asset in matches {
            self.insert_asset_use(asset, path, None);
        }
    }

    fn system(
        &mut self,
        name: &str,
        alpha: f32,
        label: Option<&str>,
        path: &Path,
        key: Option<&str>,
    ) {
        if !is_system_color(name) {
            warn!("System color {name} in {} is unknown", path.display());
            self.diagnostics
                .push(Diagnostic::unknown_system_color(name, path));
        }

        let mut record = ProjectColorRecord::new(ColorVariant::system_with_alpha(name, alpha))
            .with_path(path)
            .with_property_key(key);
        if let Some(label) = label {
            record = record.with_name(label);
        }
        self.registry.insert(record);
    }

    fn literal(
        &mut self,
        color: NormalizedColor,
        label: Option<String>,
        path: &Path,
        key: Option<&str>,
    ) {
        let mut record = ProjectColorRecord::new(color)
            .with_path(path)
            .with_property_key(key);
        if let Some(label) = label {
            record = record.with_name(label);
        }
        self.registry.insert(record);
    }

    fn layout(&mut self, name: Option<&str>, color: &LayoutColor, path: &Path, key: Option<&str>) {
        match color {
            LayoutColor::Named { name: asset } => {
                self.reference(asset, path, key);
            }
            LayoutColor::System { name: system } => {
                let label = name.unwrap_or(system.as_str());
                self.system(system, 1.0, Some(label), path, key);
            }
            LayoutColor::Gray { white, alpha } => {
                let color = NormalizedColor::gray(*white, *alpha);
                let label = layout_label(name, &color, path);
                self.literal(color, Some(label), path, key);
            }
            LayoutColor::Rgb {
                red,
                green,
                blue,
                alpha,
            } => {
                let color = NormalizedColor::rgba(*red, *green, *blue, *alpha);
                let label = layout_label(name, &color, path);
                self.literal(color, Some(label), path, key);
            }
        }
    }

    fn unresolved(&mut self, name: &str, path: &Path) {
        warn!(
            "Color {name} referenced in {} is not declared in any asset catalog",
            path.display()
        );
        self.diagnostics
            .push(Diagnostic::unresolved_reference(name, path));
    }
}

fn with_raw(color: NormalizedColor, raw: Option<&str>) -> NormalizedColor {
    match raw {
        Some(raw) => color.with_raw_text(raw),
        None => color,
    }
}

fn layout_label(name: Option<&str>, color: &NormalizedColor, path: &Path) -> String {
    match name {
        Some(name) => name.to_string(),
        None => {
            let stem = path
                .file_stem()
                .map(|stem| stem.to_string_lossy())
                .unwrap_or_default();
            format!("{stem}{}", color.rgb_digits())
        }
    }
}

/// Runs a full analysis over a facts document.
///
/// Each target declares all of its assets before its usages are folded in.
pub fn analyze(document: &FactsDocument) -> Result<AnalysisReport, ConfigError> {
    let mut analyzer = ColorAnalyzer::new(document.config.clone())?;

    for target in &document.targets {
        analyzer.begin_target(target.name.as_str());
        for asset in &target.assets {
            analyzer.declare_asset(asset);
        }
        for usage in &target.usages {
            analyzer.record_usage(usage);
        }
    }

    Ok(analyzer.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::AssetColorSample;
    use crate::convert::ColorSpace;
    use crate::convert::SampleComponents;
    use crate::error::DiagnosticKind;

    fn red_asset(name: &str) -> AssetColorEntry {
        let sample =
            AssetColorSample::new(ColorSpace::Srgb, SampleComponents::rgb("1.000", "0.000", "0.000", "1.000"));
        AssetColorEntry::new(name, format!("/app/Assets.xcassets/{name}.colorset"))
            .with_sample(sample, [])
    }

    fn analyzer() -> ColorAnalyzer {
        let mut analyzer = ColorAnalyzer::new(AnalyzerConfig::default()).unwrap();
        analyzer.begin_target("App");
        analyzer
    }

    #[test]
    fn test_rejects_invalid_config() {
        let result = ColorAnalyzer::new(AnalyzerConfig::new().with_cluster_granularity(0));
        assert!(matches!(result, Err(ConfigError::ZeroClusterGranularity)));
    }

    #[test]
    fn test_reference_resolves_by_identifier() {
        let mut analyzer = analyzer();
        assert!(analyzer.declare_asset(&red_asset("Brand Red")));
        analyzer.record_usage(&UsageEvent::named_asset("brandRed", "/app/View.swift").with_key("tintColor"));

        assert_eq!(analyzer.registry().len(), 1);
        let record = &analyzer.registry().records()[0];
        assert_eq!(record.used_in_paths.len(), 2);
        assert!(record.property_keys.contains("tintColor"));
        assert!(analyzer.diagnostics().is_empty());
    }

    #[test]
    fn test_unresolved_reference_is_diagnosed() {
        let mut analyzer = analyzer();
        analyzer.record_usage(&UsageEvent::generated("missing", "/app/View.swift"));

        assert!(analyzer.registry().is_empty());
        assert_eq!(analyzer.diagnostics().len(), 1);
        assert_eq!(analyzer.diagnostics()[0].kind, DiagnosticKind::UnresolvedReference);
    }

    #[test]
    fn test_literal_merges_with_asset() {
        let mut analyzer = analyzer();
        analyzer.declare_asset(&red_asset("alert"));
        analyzer.record_usage(&UsageEvent::rgb(1.0, 0.0, 0.0, 1.0, "/app/View.swift"));

        let report = analyzer.finish();
        assert_eq!(report.entries.len(), 1);
        assert!(report.entries[0].flags.asset_backed);
        assert!(!report.entries[0].flags.unused);
    }

    #[test]
    fn test_pattern_matches_several_assets() {
        let mut analyzer = analyzer();
        let green = AssetColorSample::new(
            ColorSpace::Srgb,
            SampleComponents::rgb("0.000", "1.000", "0.000", "1"),
        );
        analyzer.declare_asset(&red_asset("tint1"));
        analyzer.declare_asset(
            &AssetColorEntry::new("tint2", "/app/Assets.xcassets/tint2.colorset")
                .with_sample(green, []),
        );
        analyzer.declare_asset(&red_asset("other"));
        analyzer.record_usage(&UsageEvent::pattern("tint[0-9]+", "/app/View.swift"));

        assert!(analyzer.diagnostics().is_empty());
        let paths: Vec<_> = analyzer
            .registry()
            .iter()
            .map(|record| record.used_in_paths.len())
            .collect();
        // red is declared twice and used once, green declared once and used once
        assert_eq!(paths, [3, 2]);
    }

    #[test]
    fn test_invalid_pattern() {
        let mut analyzer = analyzer();
        analyzer.record_usage(&UsageEvent::pattern("tint(", "/app/View.swift"));
        assert_eq!(analyzer.diagnostics()[0].kind, DiagnosticKind::InvalidPattern);
    }

    #[test]
    fn test_catch_all_pattern_is_ignored() {
        let mut analyzer = analyzer();
        analyzer.declare_asset(&red_asset("forgotten"));
        analyzer.declare_asset(
            &AssetColorEntry::new("legacy", "/app/Assets.xcassets/legacy.colorset").with_sample(
                AssetColorSample::new(ColorSpace::GrayGamma22, SampleComponents::gray("0.000", "1")),
                [],
            ),
        );
        analyzer.record_usage(&UsageEvent::pattern(".*", "/app/View.swift"));

        assert_eq!(analyzer.diagnostics().len(), 1);
        assert_eq!(analyzer.diagnostics()[0].kind, DiagnosticKind::CatchAllPattern);

        let report = analyzer.finish();
        assert_eq!(report.summary.unused, 2);
        assert!(report.entries.iter().all(|entry| entry.paths.len() == 1));
    }

    #[test]
    fn test_wildcard_pattern_matching_several_assets_is_too_wide() {
        let mut analyzer = analyzer();
        analyzer.declare_asset(&red_asset("tint1"));
        analyzer.declare_asset(&red_asset("tint2"));
        analyzer.declare_asset(&red_asset("other"));
        analyzer.record_usage(&UsageEvent::pattern("tint.*", "/app/View.swift"));

        let kinds: Vec<_> = analyzer.diagnostics().iter().map(|d| d.kind).collect();
        assert_eq!(kinds, [DiagnosticKind::WidePattern]);
        assert!(analyzer.diagnostics()[0].message.contains("tint1, tint2"));
        // the matches still count as usages
        assert_eq!(analyzer.registry().records()[0].used_in_paths.len(), 4);
    }

    #[test]
    fn test_unknown_system_color_is_diagnosed() {
        let mut analyzer = analyzer();
        analyzer.record_usage(&UsageEvent::system("systmBlue", "/app/View.swift"));

        assert_eq!(analyzer.diagnostics().len(), 1);
        let diagnostic = &analyzer.diagnostics()[0];
        assert_eq!(diagnostic.kind, DiagnosticKind::UnknownSystemColor);
        assert_eq!(diagnostic.path.as_deref(), Some(Path::new("/app/View.swift")));

        let report = analyzer.finish();
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.entries[0].light_hex, None);
    }

    #[test]
    fn test_raw_text_is_kept_on_literals() {
        let mut analyzer = analyzer();
        analyzer.record_usage(&UsageEvent::Gray {
            white: 0.5,
            alpha: 1.0,
            path: "/app/Legacy.m".into(),
            key: None,
            raw: Some("[UIColor colorWithWhite:0.5 alpha:1]".to_string()),
        });

        let record = &analyzer.registry().records()[0];
        assert_eq!(
            record.variant.raw().as_deref(),
            Some("[UIColor colorWithWhite:0.5 alpha:1]")
        );
    }

    #[test]
    fn test_layout_literal_naming() {
        let mut analyzer = analyzer();
        analyzer.record_usage(&UsageEvent::layout(
            None,
            LayoutColor::Rgb {
                red: 1.0,
                green: 0.0,
                blue: 0.0,
                alpha: 1.0,
            },
            "/app/Main.storyboard",
        ));
        analyzer.record_usage(&UsageEvent::layout(
            None,
            LayoutColor::System {
                name: "label".to_string(),
            },
            "/app/Main.storyboard",
        ));

        let names: Vec<_> = analyzer
            .registry()
            .iter()
            .flat_map(|record| record.names.iter().cloned())
            .collect();
        assert_eq!(names, ["MainFF0000", "label"]);
    }

    #[test]
    fn test_targets_isolate_assets() {
        let mut analyzer = analyzer();
        analyzer.declare_asset(&red_asset("alert"));
        analyzer.begin_target("Widget");
        analyzer.record_usage(&UsageEvent::named_asset("alert", "/widget/View.swift"));

        assert_eq!(analyzer.target(), Some("Widget"));
        assert_eq!(analyzer.registry().len(), 1);
        assert_eq!(analyzer.diagnostics().len(), 1);
    }
}
