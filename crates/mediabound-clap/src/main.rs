use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let output = commands::run(&cli)?;
    print!("{}", output);
    Ok(())
}

/// Logs go to stderr so command output stays pipeable. `RUST_LOG` overrides
/// the default `warn` level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
