//! Project color catalog library
//!
//! Normalizes the colors a project declares and uses into one canonical model,
//! deduplicates them by visual identity, classifies each one and orders the
//! resulting catalog by visual similarity.
//!
//! Discovery of the raw facts (asset catalogs, layouts, source files) happens
//! elsewhere; this crate receives them as [`AssetColorEntry`](facts::AssetColorEntry)
//! and [`UsageEvent`](facts::UsageEvent) values.

pub mod classify;
pub mod config;
pub mod convert;
pub mod error;
pub mod facts;
pub mod model;
pub mod naming;
pub mod order;
pub mod registry;
pub mod report;
pub mod system;

mod analyzer;

pub use analyzer::*;
pub use config::AnalyzerConfig;
pub use registry::ColorRegistry;
pub use report::AnalysisReport;
