//! CLI entry point for generating and autoplaying a puzzle board

use clap::Parser;
use hango::io::cli::{Cli, GameRunner};

fn main() -> hango::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    GameRunner::new(cli).run().map(|_| ())
}
