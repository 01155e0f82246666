//! Evaluates one probe document against the loaded configuration.

use crate::config::Config;
use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use trackwise_policy::Evaluation;
use trackwise_probe::ProbeData;

/// Read an ffprobe JSON document from a file, or stdin when `input` is `-`.
pub fn read_probe(input: &Path) -> Result<ProbeData> {
    if input == Path::new("-") {
        let mut json = String::new();
        std::io::stdin()
            .read_to_string(&mut json)
            .context("Failed to read probe JSON from stdin")?;
        return trackwise_probe::parse_ffprobe_json(&json)
            .context("Invalid probe JSON on stdin");
    }

    if !input.exists() {
        anyhow::bail!("Probe file does not exist: {:?}", input);
    }

    let file = std::fs::File::open(input)
        .with_context(|| format!("Failed to open probe file: {:?}", input))?;
    trackwise_probe::from_reader(std::io::BufReader::new(file))
        .with_context(|| format!("Invalid probe JSON in {:?}", input))
}

/// Run the stream policy for one file.
pub fn plan(data: &ProbeData, config: &Config) -> Result<Evaluation> {
    let options = config.policy_options();
    let evaluation = trackwise_policy::evaluate(data, &options)?;

    if evaluation.selection.fallback_applied {
        tracing::warn!(
            "All {} audio stream(s) would have been removed, keeping every track",
            evaluation.selection.decisions.len()
        );
    }

    if evaluation.response.process_file {
        tracing::info!(
            "Removing {} of {} audio stream(s)",
            evaluation.selection.removal_count(),
            evaluation.selection.decisions.len()
        );
    } else {
        tracing::debug!("No need to process file");
    }

    Ok(evaluation)
}
