//! Loading facts from disk and from asset-catalog files.

use std::fs;
use std::path::PathBuf;

use usedcolors_lib::error::FactsError;
use usedcolors_lib::facts::{AssetColorEntry, FactsDocument, TargetFacts, UsageEvent};
use usedcolors_lib::model::AppearanceVariant;
use usedcolors_lib::{AnalyzerConfig, ColorAnalyzer};

const CONTENTS: &str = r#"{
  "colors" : [
    {
      "color" : {
        "color-space" : "extended-gray",
        "components" : { "alpha" : "0.500", "white" : "1.000" }
      },
      "idiom" : "universal"
    },
    {
      "appearances" : [ { "appearance" : "luminosity", "value" : "light" } ],
      "color" : {
        "color-space" : "extended-srgb",
        "components" : { "alpha" : "1.000", "blue" : "1.200", "green" : "0.000", "red" : "0.000" }
      },
      "idiom" : "universal"
    }
  ],
  "info" : { "author" : "xcode", "version" : 1 }
}"#;

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("usedcolors-tests-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_contents_json_default_wins_over_light() {
    let entry =
        AssetColorEntry::from_contents("overlay", "/app/Assets.xcassets/overlay.colorset", CONTENTS)
            .unwrap();

    let Some(AppearanceVariant::Any(color)) = entry.resolve() else {
        panic!("expected a single-mode color");
    };
    assert_eq!(color.hex(), "#FFFFFF 0.50");
    assert_eq!(
        color.raw_text.as_deref(),
        Some("extended-gray gray(white: 1.000, alpha: 0.500)")
    );
}

#[test]
fn test_load_document_from_path() {
    let path = scratch_file(
        "facts.json",
        r#"{
          "config": { "cluster_granularity": 2, "code_extensions": ["swift", "m"] },
          "targets": [
            { "name": "App", "usages": [ { "kind": "gray", "white": 0.5, "path": "/app/Legacy.m" } ] }
          ]
        }"#,
    );

    let document = FactsDocument::from_path(&path).unwrap();
    assert_eq!(document.config.cluster_granularity, 2);
    assert_eq!(document.targets.len(), 1);

    let report = usedcolors_lib::analyze(&document).unwrap();
    assert!(report.entries[0].flags.used_in_code);
}

#[test]
fn test_load_rejects_malformed_document() {
    let path = scratch_file("broken.json", r#"{ "targets": [ { "usages": [] } ] }"#);
    let result = FactsDocument::from_path(&path);
    assert!(matches!(result, Err(FactsError::Json(_))));
}

#[test]
fn test_manual_pipeline_matches_document() {
    let target = TargetFacts {
        name: "App".to_string(),
        assets: vec![
            AssetColorEntry::from_contents(
                "overlay",
                "/app/Assets.xcassets/overlay.colorset",
                CONTENTS,
            )
            .unwrap(),
        ],
        usages: vec![UsageEvent::named_asset("Overlay", "/app/View.swift")],
    };
    let document = FactsDocument {
        config: AnalyzerConfig::default(),
        targets: vec![target.clone()],
    };

    let mut analyzer = ColorAnalyzer::new(AnalyzerConfig::default()).unwrap();
    analyzer.begin_target(target.name.as_str());
    for asset in &target.assets {
        assert!(analyzer.declare_asset(asset));
    }
    for usage in &target.usages {
        analyzer.record_usage(usage);
    }

    assert_eq!(analyzer.finish(), usedcolors_lib::analyze(&document).unwrap());
}
