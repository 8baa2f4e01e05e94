//! gtfo: formatted failures from `go test -json`
//!
//! Reads the JSON event stream from stdin and prints one entry per failing
//! test, for editors that jump to `file:line` locations:
//!
//! ```text
//! go test -json ./... | gtfo --format '{{.Path}}:{{.Line}}: {{.Output}}\n'
//! ```
//!
//! Exits with 0 when nothing failed, 1 when at least one test failed and 2
//! when the input or the format is invalid.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use gtfo::config::Config;

fn main() -> ExitCode {
    let config = Config::parse();

    // Initialize tracing subscriber; stdout is reserved for the output
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    let result = gtfo::run(&config, io::stdin().lock(), &mut io::stdout().lock());
    if let Err(ref e) = result {
        error!("{e:#}");
    }

    ExitCode::from(gtfo::exit_code(&result))
}
