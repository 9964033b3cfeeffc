use std::io;
use thiserror::Error;

/// Errors that abort a run.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading the input failed, including input that is not valid UTF-8.
    /// `line` is the 1-based number of the line being read.
    #[error("failed to read input line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
    /// Writing the joined tokens failed.
    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn read_error_names_the_line() {
        let err = Error::Read {
            line: 7,
            source: io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        };
        assert!(err.to_string().contains("line 7"));
        assert!(err.source().is_some());
    }

    #[test]
    fn io_errors_convert_to_write() {
        let err: Error = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, Error::Write(_)));
        assert!(err.to_string().contains("closed"));
    }
}
