use clap::Parser;
use tracing_subscriber::EnvFilter;

use restyle::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Diagnostics go to stderr and are opt-in via RUST_LOG; the change
    // report itself is plain stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = restyle::run(&cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
