//! Vitalage: biological age and wellness scoring.
//!
//! Thin CLI consumer of the core: reads a health profile as JSON, runs an
//! assessment against the prediction service (with local fallback) and
//! prints the result as JSON. An optional delta file runs the what-if
//! preview path against the same baseline.

use std::io::Read;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vitalage::adapters::http::{HttpPredictor, PredictorConfig};
use vitalage::adapters::sanitize::SanitizingMakeWriter;
use vitalage::application::{AssessmentService, WhatIfService};
use vitalage::domain::ProfileDelta;
use vitalage::HealthProfile;

fn main() -> Result<()> {
    // Initialize logging.
    //
    // Default behavior:
    // - "file": append to VITALAGE_LOG_FILE (default vitalage.log)
    // - "stdout": log to stdout, interleaved with the JSON output
    // - "auto" (default): file, so the JSON on stdout stays machine-readable
    let log_mode =
        std::env::var("VITALAGE_LOG_MODE").unwrap_or_else(|_| "auto".to_string());

    let use_file = !matches!(log_mode.as_str(), "stdout");

    let (writer, _guard) = if use_file {
        let log_file = std::env::var("VITALAGE_LOG_FILE")
            .unwrap_or_else(|_| "vitalage.log".to_string());

        if let Some(parent) = std::path::Path::new(&log_file).parent() {
            // Best-effort: don't fail startup just because the directory is missing.
            let _ = std::fs::create_dir_all(parent);
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)?;
        tracing_appender::non_blocking(file)
    } else {
        tracing_appender::non_blocking(std::io::stdout())
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(SanitizingMakeWriter::new(writer)))
        .init();

    let args: Vec<String> = std::env::args().collect();
    let (profile_path, delta_path) = parse_args(&args)?;

    let profile: HealthProfile = serde_json::from_str(&read_input(&profile_path)?)
        .with_context(|| format!("Failed to parse profile from {profile_path}"))?;

    if let Err(errors) = profile.validate() {
        bail!("Invalid health profile:\n  {}", errors.join("\n  "));
    }

    let predictor = Arc::new(
        HttpPredictor::new(PredictorConfig::from_env())
            .context("Failed to construct predictor client")?,
    );

    match delta_path {
        None => {
            tracing::info!("Running assessment...");
            let service = AssessmentService::new(Arc::clone(&predictor));
            let assessment = service.assess(&profile)?;
            println!("{}", serde_json::to_string_pretty(&assessment)?);
        }
        Some(path) => {
            tracing::info!("Running what-if simulation...");
            let delta: ProfileDelta = serde_json::from_str(&read_input(&path)?)
                .with_context(|| format!("Failed to parse delta from {path}"))?;
            let service = WhatIfService::new(Arc::clone(&predictor));
            let preview = service.simulate(&profile, &delta)?;
            println!("{}", serde_json::to_string_pretty(&preview)?);
        }
    }

    Ok(())
}

fn parse_args(args: &[String]) -> Result<(String, Option<String>)> {
    match args {
        [_, profile] => Ok((profile.clone(), None)),
        [_, profile, flag, delta] if flag == "--simulate" => {
            Ok((profile.clone(), Some(delta.clone())))
        }
        _ => bail!(
            "Usage: {} <profile.json> [--simulate <delta.json>]\n       (use '-' to read from stdin)",
            args.first().map_or("vitalage", String::as_str)
        ),
    }
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))
    }
}
