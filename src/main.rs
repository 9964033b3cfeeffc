use std::ffi::OsString;
use std::io::{self, BufWriter};
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use field_tokens::{logging, run};

/// Reads stdin and prints the tokens found in the value of every
/// ` name: value tail` line, space-separated, on one line.
#[derive(Parser, Debug)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Ignored; input always comes from stdin.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _ignored: Vec<OsString>,
}

fn main() -> ExitCode {
    let _cli = Cli::parse();
    logging::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());

    match run(stdin.lock(), out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
