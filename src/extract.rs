//! Per-line field extraction.
//!
//! A line qualifies when it looks like an indented `name: value ... tail`
//! record: one leading whitespace character, a colon-free name, a colon,
//! whitespace, and a value that is followed by whitespace and a trailing
//! word. The value part is what gets tokenized.

use once_cell::sync::Lazy;
use regex::Regex;

/// Whole-line pattern. Group 1 is greedy, so it runs up to the last
/// whitespace run that is followed by a word character.
///
/// Whitespace includes the ASCII separators `\x1c`..`\x1f`, which `\s`
/// leaves out.
pub static FIELD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\s\x1c-\x1f][^:]*:[\s\x1c-\x1f]+(.*)[\s\x1c-\x1f]+\w.*$")
        .expect("valid field regex")
});

/// Token separator: Unicode whitespace plus the ASCII file, group, record
/// and unit separators.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Returns the raw (untrimmed) value captured from `line`, if the line matches.
///
/// `line` must not carry its line terminator.
pub fn capture(line: &str) -> Option<&str> {
    FIELD_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Whitespace-separated tokens of the captured value, left to right.
///
/// Non-matching lines yield nothing, and so does an all-blank capture.
pub fn tokens(line: &str) -> impl Iterator<Item = &str> {
    capture(line).into_iter().flat_map(split_value)
}

fn split_value(value: &str) -> impl Iterator<Item = &str> {
    value.split(is_separator).filter(|token| !token.is_empty())
}

/// Ordered, append-only collection of tokens for a single run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Accumulator {
    tokens: Vec<String>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the tokens of `line`.
    ///
    /// Returns `None` if the line does not match, otherwise the number of
    /// tokens added (possibly zero).
    pub fn push_line(&mut self, line: &str) -> Option<usize> {
        let value = capture(line)?;
        let before = self.tokens.len();
        self.tokens.extend(split_value(value).map(str::to_owned));
        Some(self.tokens.len() - before)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}
