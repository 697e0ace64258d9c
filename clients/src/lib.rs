//! Shared plumbing for the `march-patterns` and `march-trace` binaries.
//!
//! Both binaries take an output file and an algorithm, normalize and parse
//! it, log each sequence, and stream their result through a buffered file
//! writer.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use march_engine::trace::write_trace;
use march_engine::{Algorithm, Analysis, ReportFormat};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// Verbosity comes from `RUST_LOG` and defaults to `info`. Logs go to stderr
/// so they never mix with report output.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A second install (e.g. from tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn parse_logged(algorithm: &str) -> Result<Algorithm> {
    let algorithm = Algorithm::parse(algorithm)
        .with_context(|| format!("Failed to parse March algorithm {algorithm:?}"))?;
    for (i, seq) in algorithm.sequences().iter().enumerate() {
        info!("Sequence {}: {}", i, seq);
    }
    Ok(algorithm)
}

fn create(out: &Path) -> Result<BufWriter<File>> {
    let file = File::create(out)
        .with_context(|| format!("Failed to create output file: {}", out.display()))?;
    Ok(BufWriter::new(file))
}

/// Analyzes `algorithm` and writes the pattern report to `out`.
///
/// # Errors
///
/// Returns an error if the algorithm is malformed, the registry overflows,
/// or the report cannot be written.
pub fn write_pattern_report(out: &Path, algorithm: &str, format: ReportFormat) -> Result<Analysis> {
    let analysis = Analysis::from_algorithm(parse_logged(algorithm)?)
        .context("Neighborhood replay aborted")?;

    let mut writer = create(out)?;
    analysis
        .emit(&mut writer, format)
        .with_context(|| format!("Failed to write {}", out.display()))?;
    info!(
        patterns = analysis.registry.len(),
        path = %out.display(),
        "report written"
    );
    Ok(analysis)
}

/// Writes the memory trace for `algorithm` over `2^address_bits` addresses
/// to `out`, returning the number of lines written.
///
/// # Errors
///
/// Returns an error if the algorithm is malformed, the address width is too
/// large, or the trace cannot be written.
pub fn write_trace_file(out: &Path, algorithm: &str, address_bits: u32) -> Result<u64> {
    let algorithm = parse_logged(algorithm)?;
    let mut writer = create(out)?;
    let lines = write_trace(&mut writer, algorithm.sequences(), address_bits)
        .with_context(|| format!("Failed to write {}", out.display()))?;
    info!(lines, path = %out.display(), "trace written");
    Ok(lines)
}
