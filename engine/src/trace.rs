//! Memory trace generation over a `2^N` address range.
//!
//! Every sequence sweeps the full range in its direction and emits one
//! `"<ADDRESS> <OP>"` line per operation character at each address, with the
//! address in upper-case hex. No pattern analysis happens here.

use std::io::Write;

use tracing::debug;

use crate::algorithm::SequenceDescriptor;
use crate::error::{Error, Result};

/// Default address width: 2^20 addresses (1 Mi).
pub const DEFAULT_ADDRESS_BITS: u32 = 20;

/// Widest accepted address range.
pub const MAX_ADDRESS_BITS: u32 = 40;

/// Streams the trace for `sequences` over `2^address_bits` addresses.
///
/// Returns the number of lines written.
///
/// # Errors
///
/// Returns [`Error::AddressWidthTooLarge`] if `address_bits` exceeds
/// [`MAX_ADDRESS_BITS`], or [`Error::Io`] if writing fails.
///
/// # Example
///
/// ```
/// use march_engine::{parse, trace::write_trace};
///
/// let seqs = parse("ar,dw").unwrap();
/// let mut out = Vec::new();
/// write_trace(&mut out, &seqs, 1).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "0 R\n1 R\n1 W\n0 W\n");
/// ```
pub fn write_trace<W: Write>(
    out: &mut W,
    sequences: &[SequenceDescriptor],
    address_bits: u32,
) -> Result<u64> {
    if address_bits > MAX_ADDRESS_BITS {
        return Err(Error::AddressWidthTooLarge {
            bits: address_bits,
            max: MAX_ADDRESS_BITS,
        });
    }
    let size: u64 = 1 << address_bits;
    let mut lines = 0u64;
    for seq in sequences {
        let ops = seq.operations();
        let mut emit = |addr: u64| -> Result<()> {
            for op in ops {
                writeln!(out, "{addr:X} {}", op.symbol())?;
            }
            lines += ops.len() as u64;
            Ok(())
        };
        if seq.direction().is_descending() {
            for addr in (0..size).rev() {
                emit(addr)?;
            }
        } else {
            for addr in 0..size {
                emit(addr)?;
            }
        }
        debug!(token = %seq, addresses = size, "sequence traced");
    }
    out.flush()?;
    Ok(lines)
}
