use anyhow::Context;
use clap::Parser;
use sumsign::cli::Cli;
use tracing::{debug, error, trace};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(cli.verbose >= 2) // Show target module for -vv and above
        .with_line_number(cli.verbose >= 3) // Show line numbers for -vvv
        .init();

    debug!("sumsign started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    if let Err(e) = run(&cli) {
        error!("Fatal error: {:#}", e);
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let operands = cli.operands().context("Failed to resolve operands")?;
    debug!("Using operands lhs={} rhs={}", operands.lhs, operands.rhs);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    sumsign::run(operands, &mut out)?;
    Ok(())
}
