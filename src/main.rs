use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use transcov::cli::{Arguments, ExitStatus};

/// Logs go to stderr so stdout stays clean for the report output.
/// `RUST_LOG` wins over the `-v` default when set.
fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "transcov=debug"
    } else {
        "transcov=warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .ok();
}

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_logging(args.verbose());

    match transcov::cli::run_cli(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
