//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `capture_evidence` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Reading the capture file (or stdin)
//! - User-facing output (narrative report or JSON)
//!
//! All analysis logic is implemented in the library crate.

use std::io::Read;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use capture_evidence::initialization::init_logger_with;
use capture_evidence::{analyze, render_report, Capture, Config};

fn read_input(config: &Config) -> Result<String> {
    if config.file.as_os_str() == "-" {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("Failed to read capture from stdin")?;
        Ok(raw)
    } else {
        std::fs::read_to_string(&config.file)
            .with_context(|| format!("Failed to read capture file {}", config.file.display()))
    }
}

fn run(config: &Config) -> Result<()> {
    let raw = read_input(config)?;

    // Parse failures are a reportable analysis outcome, not a CLI error
    let result = match Capture::parse(&raw) {
        Ok(mut capture) => {
            if let Some(max) = config.max_entries {
                if capture.len() > max {
                    log::warn!(
                        "Capture has {} entries; analyzing the first {max}",
                        capture.len()
                    );
                    capture.truncate(max);
                }
            }
            analyze(&capture)
        }
        Err(e) => capture_evidence::AnalysisResult::parse_failure(&e.to_string()),
    };

    if config.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).context("Failed to serialize result")?
        );
    } else {
        println!("{}", render_report(&result));
    }

    Ok(())
}

fn main() {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    if let Err(e) = init_logger_with(log_level.into(), config.log_format.clone()) {
        eprintln!("capture_evidence: failed to initialize logger: {e}");
    }

    if let Err(e) = run(&config) {
        eprintln!("capture_evidence error: {e:#}");
        process::exit(1);
    }
}
