//! CLI entry point for the polyomino enumeration tool

use clap::Parser;
use polyform::io::cli::{Cli, EnumerationRunner};

fn main() -> polyform::Result<()> {
    let cli = Cli::parse();
    let runner = EnumerationRunner::new(cli);
    runner.run()
}
