//! Final output: one line with every accumulated token.

use std::borrow::Borrow;
use std::io::{self, Write};

use crate::extract::Accumulator;

/// Joins tokens with a single ASCII space.
pub fn join<S: Borrow<str>>(tokens: &[S]) -> String {
    tokens.join(" ")
}

/// Writes the joined tokens followed by `\n`, then flushes.
///
/// Consumes the accumulator: a run emits exactly once.
pub fn emit<W: Write>(acc: Accumulator, mut out: W) -> io::Result<()> {
    let line = join(acc.tokens());
    writeln!(out, "{line}")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_uses_single_spaces() {
        assert_eq!(join(&["one", "two", "four"]), "one two four");
        assert_eq!(join(&["solo"]), "solo");
        assert_eq!(join::<&str>(&[]), "");
    }

    #[test]
    fn empty_accumulator_emits_blank_line() {
        let mut out = Vec::new();
        emit(Accumulator::new(), &mut out).unwrap();
        assert_eq!(out, b"\n");
    }

    #[test]
    fn emits_tokens_in_order() {
        let mut acc = Accumulator::new();
        acc.push_line(" key: hello world end");
        acc.push_line(" a: one two three");

        let mut out = Vec::new();
        emit(acc, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "hello world one two\n");
    }
}
