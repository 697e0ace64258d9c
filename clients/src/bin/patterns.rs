//! `march-patterns` — Lists the neighborhood patterns a March algorithm produces.
//!
//! Replays the algorithm over a 3x3 window of abstract cells and writes every
//! distinct pattern observed at a genuine cell transition.
//!
//! **Algorithm format:**
//! - Sequences separated by commas, no spaces
//! - `u`/`U` is ↑, `d`/`D` is ↓, `a`/`A` is ↕ (↕ and ↑ both sweep bottom to top)
//! - `w` writes the value that follows it, `r` reads
//! - `z`/`Z` (or `0`) is zero; any other letter of choice is one
//! - Example: `awz,urzwi,dri` is {↕(w0); ↑(r0,w1); ↓(r1)}
//!
//! **Usage:**
//! ```
//! march-patterns <OUTPUT> <ALGORITHM> [--format text|json]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use march_clients::{init_logging, write_pattern_report};
use march_engine::ReportFormat;

/// Find the neighborhood patterns of a March algorithm.
#[derive(Parser)]
#[command(
    name = "march-patterns",
    about = "List the neighborhood patterns a March algorithm produces"
)]
struct Args {
    /// File the pattern report is written to.
    output: PathBuf,

    /// March algorithm, e.g. awz,urzwi,dri.
    algorithm: String,

    /// Report format: text or json.
    #[arg(long, default_value_t = ReportFormat::Text)]
    format: ReportFormat,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let analysis = write_pattern_report(&args.output, &args.algorithm, args.format)?;

    println!(
        "{}: {} patterns found ({} transitions, {} captures)",
        analysis.algorithm.text(),
        analysis.registry.len(),
        analysis.stats.transitions,
        analysis.stats.captures
    );
    println!("  Written: {}", args.output.display());
    Ok(())
}
