//! Report emission for a finished run.
//!
//! Only reads the registry: a count plus the patterns in insertion order.
//!
//! Text layout:
//!
//! ```text
//! Neighborhood patterns in AWZ,URZWI,DRI:
//!
//! 9 patterns found
//!
//! U 0 0
//! 0 0 0
//! 0 0 0
//!
//! ...
//! ```

use core::fmt;
use core::str::FromStr;
use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::grid::Pattern;

/// Output format of a report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Header, count line, then one 3-line block per pattern.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown report format {other:?} (expected text or json)")),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Json => "json",
        })
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    algorithm: &'a str,
    count: usize,
    patterns: &'a [Pattern],
}

/// Writes the report for `patterns` in the chosen format.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) or [`Error::Json`](crate::Error::Json)
/// if writing fails.
pub fn emit<W: Write>(
    out: &mut W,
    algorithm: &str,
    patterns: &[Pattern],
    format: ReportFormat,
) -> Result<()> {
    match format {
        ReportFormat::Text => write_text(out, algorithm, patterns),
        ReportFormat::Json => write_json(out, algorithm, patterns),
    }
}

/// Writes the human-readable listing.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if writing fails.
pub fn write_text<W: Write>(out: &mut W, algorithm: &str, patterns: &[Pattern]) -> Result<()> {
    writeln!(out, "Neighborhood patterns in {algorithm}:")?;
    writeln!(out)?;
    writeln!(out, "{} patterns found", patterns.len())?;
    writeln!(out)?;
    for pattern in patterns {
        write!(out, "{pattern}")?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

/// Writes `{"algorithm", "count", "patterns"}` as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`Error::Json`](crate::Error::Json) if serialization or writing fails.
pub fn write_json<W: Write>(out: &mut W, algorithm: &str, patterns: &[Pattern]) -> Result<()> {
    let report = JsonReport {
        algorithm,
        count: patterns.len(),
        patterns,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
