//! `march-trace` — Writes a memory trace file that follows a March algorithm.
//!
//! Every sequence sweeps `2^N` addresses in its direction; each operation
//! character at each address becomes one `<HEX ADDRESS> <OP>` line.
//!
//! **Address width:** N = 10 is 1 Ki addresses, 20 is 1 Mi (default), 30 is 1 Gi.
//!
//! **Usage:**
//! ```
//! march-trace <OUTPUT> <ALGORITHM> [ADDRESS_BITS]
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
use march_clients::{init_logging, write_trace_file};
use march_engine::trace::{DEFAULT_ADDRESS_BITS, MAX_ADDRESS_BITS};

/// Generate a memory trace for a March algorithm.
#[derive(Parser)]
#[command(
    name = "march-trace",
    about = "Write the (address, command) trace of a March algorithm"
)]
struct Args {
    /// File the trace is written to.
    output: PathBuf,

    /// March algorithm, e.g. aw,urw,dr.
    algorithm: String,

    /// Address width N, for a memory of 2^N addresses.
    #[arg(
        default_value_t = DEFAULT_ADDRESS_BITS,
        value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_ADDRESS_BITS))
    )]
    address_bits: u32,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let lines = write_trace_file(&args.output, &args.algorithm, args.address_bits)?;

    println!(
        "Trace of {} lines over 2^{} addresses",
        lines, args.address_bits
    );
    println!("  Written: {}", args.output.display());
    Ok(())
}
