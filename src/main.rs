//! CLI entry point for replaying Wang tile editing sessions

use clap::Parser;
use wangtile::io::cli::{Cli, SessionRunner, init_logging};

fn main() -> wangtile::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level());
    let runner = SessionRunner::new(cli);
    runner.run().map(|_| ())
}
