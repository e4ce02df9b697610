//! `echo_args` entry-point: parse flags, show usage on request or error, then
//! echo the positional arguments.

use std::io::{self, Write};

use echo_args::echo::{HELP, declare, write_args};
use echo_args::error::Result;
use tracing_subscriber::EnvFilter;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_tracing();
    run().map_err(color_eyre::eyre::Report::from)
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<()> {
    let mut options = declare();
    let parsed = match options.parse_env() {
        Ok(parsed) => parsed,
        Err(err) => {
            writeln!(io::stderr().lock(), "{err}")?;
            options.usage()?;
            return Ok(());
        }
    };
    if options.bool(HELP) {
        options.usage()?;
        return Ok(());
    }
    tracing::debug!(count = parsed.len(), "echoing positional arguments");
    let mut stdout = io::stdout().lock();
    write_args(&mut stdout, &options, parsed.args())
}
