//! Check command implementation.

use super::output::{CheckResult, CheckStats, JsonCheckReport, format_check_text};
use super::{CheckFormat, CliError, load_recording, recording_name};
use chuckie::replay::verify;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Options for the check command.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CheckConfig {
    /// Parallel threads (default: CPU count).
    pub(crate) threads: Option<usize>,
    /// Show progress bar.
    pub(crate) progress: bool,
    /// Output format.
    pub(crate) format: CheckFormat,
}

/// Execute the check command.
///
/// # Errors
///
/// Returns an error if no recordings are found, a directory cannot be
/// read, or any recording fails.
pub(crate) fn execute(paths: &[PathBuf], config: &CheckConfig) -> Result<(), CliError> {
    let files = collect_recordings(paths)?;
    if files.is_empty() {
        return Err(CliError::new("No recordings found"));
    }

    // Set thread pool size if specified
    if let Some(num_threads) = config.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .ok(); // Ignore error if already initialized
    }

    let pb = if config.progress {
        let pb = ProgressBar::new(files.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} recordings")
            .map_err(|e| CliError::new(format!("Invalid progress template: {e}")))?
            .progress_chars("=>-");
        pb.set_style(style);
        Some(pb)
    } else {
        None
    };

    let start = Instant::now();
    info!(recordings = files.len(), "checking recordings");

    let results: Vec<CheckResult> = files
        .par_iter()
        .map(|path| {
            let result = check_one(path);
            if let Some(pb) = &pb {
                pb.inc(1);
            }
            result
        })
        .collect();

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    // Each thread counts into its own CheckStats, merged at the end
    let stats = results
        .par_iter()
        .fold(CheckStats::default, |mut local_stats, result| {
            local_stats.add_result(result);
            local_stats
        })
        .reduce(CheckStats::default, |mut a, b| {
            a.merge(&b);
            a
        });
    info!(elapsed = ?start.elapsed(), passed = stats.passed, failed = stats.failed, "check finished");

    match config.format {
        CheckFormat::Text => print!("{}", format_check_text(&results, &stats)),
        CheckFormat::Json => {
            let report = JsonCheckReport {
                stats: &stats,
                results: &results,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    if stats.failed > 0 {
        return Err(CliError::new(format!(
            "{} of {} recordings failed",
            stats.failed, stats.checked
        )));
    }
    Ok(())
}

/// Expand directories into the `*.json` files they contain, sorted by path.
fn collect_recordings(paths: &[PathBuf]) -> Result<Vec<PathBuf>, CliError> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            let entries = fs::read_dir(path).map_err(|e| {
                CliError::new(format!("Failed to read directory {}: {e}", path.display()))
            })?;
            let mut found: Vec<PathBuf> = entries
                .filter_map(Result::ok)
                .map(|entry| entry.path())
                .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "json"))
                .collect();
            found.sort();
            files.extend(found);
        } else {
            files.push(path.clone());
        }
    }

    Ok(files)
}

/// Load and verify one recording. Load failures count as failed checks.
fn check_one(path: &Path) -> CheckResult {
    let display = path.display().to_string();

    let recording = match load_recording(path) {
        Ok(recording) => recording,
        Err(e) => {
            return CheckResult {
                name: display.clone(),
                path: display,
                passed: false,
                verdict: e.to_string(),
            };
        }
    };
    let name = recording_name(&recording, path);

    let (passed, verdict) = match verify(&recording) {
        Ok(verdict) => (verdict.is_pass(), verdict.to_string()),
        Err(e) => (false, e.to_string()),
    };
    debug!(%name, passed, "checked");

    CheckResult {
        path: display,
        name,
        passed,
        verdict,
    }
}
