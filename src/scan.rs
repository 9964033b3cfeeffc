//! The read-everything-then-print pipeline.
//!
//! Lines are consumed until end of input, feeding an [`Accumulator`]; only
//! then is the single output line written. A read failure ends the run
//! before anything reaches the output.

use std::io::{BufRead, Write};

use tracing::{debug, trace};

use crate::emit::emit;
use crate::error::{Error, Result};
use crate::extract::Accumulator;

/// Counters for one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    pub lines: usize,
    pub matched: usize,
    pub tokens: usize,
}

/// Reads `input` to the end and returns the filled accumulator.
///
/// Line terminators (`\n` or `\r\n`) are stripped before matching.
pub fn scan<R: BufRead>(input: R) -> Result<(Accumulator, ScanStats)> {
    let mut acc = Accumulator::new();
    let mut stats = ScanStats::default();

    for (idx, line) in input.lines().enumerate() {
        let line = line.map_err(|source| Error::Read {
            line: idx + 1,
            source,
        })?;
        stats.lines += 1;

        if let Some(added) = acc.push_line(&line) {
            stats.matched += 1;
            stats.tokens += added;
            trace!(line = idx + 1, added, "matched");
        }
    }

    Ok((acc, stats))
}

/// Scans `input`, then writes the joined tokens to `output`.
pub fn run<R: BufRead, W: Write>(input: R, output: W) -> Result<ScanStats> {
    let (acc, stats) = scan(input)?;
    debug!(
        lines = stats.lines,
        matched = stats.matched,
        tokens = stats.tokens,
        "end of input"
    );
    emit(acc, output)?;
    Ok(stats)
}
