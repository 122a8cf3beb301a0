//! CLI entry point for rendering functional image demos

use clap::Parser;
use funcimage::io::cli::{Cli, DemoProcessor};

fn main() -> funcimage::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(cli.log_level())
        .with_target(false)
        .init();

    let mut processor = DemoProcessor::new(cli);
    processor.process()?;
    Ok(())
}
