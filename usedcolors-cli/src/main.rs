use std::process::ExitCode;

use log::{error, info, warn};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use usedcolors_lib::facts::FactsDocument;

const LOG_ENV: &str = "USEDCOLORS_LOG";

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let level = std::env::var(LOG_ENV)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(LevelFilter::Info);
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)
        .expect("Failed to initialize logger");

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("Usage: usedcolors <facts.json>");
        return ExitCode::from(2);
    };

    let document = match FactsDocument::from_path(&path) {
        Ok(document) => document,
        Err(e) => {
            error!("{e}");
            return ExitCode::from(1);
        }
    };

    let report = match usedcolors_lib::analyze(&document) {
        Ok(report) => report,
        Err(e) => {
            error!("Invalid configuration: {e}");
            return ExitCode::from(1);
        }
    };

    for diagnostic in &report.diagnostics {
        warn!("{diagnostic}");
    }
    info!("{}", report.summary);

    match serde_json::to_string_pretty(&report) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to encode report: {e}");
            ExitCode::from(1)
        }
    }
}
