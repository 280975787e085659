//! Terminal storefront: one command per invocation.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use storefront_client::{Cli, run};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
    {
        drop(err);
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let mut stdout = io::stdout().lock();
    match run(&cli, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "error: {err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}
