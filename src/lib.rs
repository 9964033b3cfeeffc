//! Pulls the value part out of indented `name: value ... tail` lines and
//! collects its whitespace-separated tokens into a single output line.
//!
//! ```
//! use std::io::Cursor;
//!
//! let input = " key: hello world end\nnot a field\n";
//! let mut out = Vec::new();
//! field_tokens::run(Cursor::new(input), &mut out).unwrap();
//! assert_eq!(out, b"hello world\n");
//! ```

pub mod emit;
pub mod error;
pub mod extract;
pub mod logging;
pub mod scan;

pub use error::{Error, Result};
pub use extract::Accumulator;
pub use scan::{ScanStats, run, scan};
