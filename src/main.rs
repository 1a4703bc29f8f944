//! CLI entry point for the grassfire planner

use clap::Parser;
use grassfire::io::cli::{Cli, RunProcessor};

fn main() -> grassfire::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();
    RunProcessor::new(cli).process().map(|_| ())
}
