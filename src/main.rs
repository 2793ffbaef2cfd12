use anyhow::Result;
use clap::Parser;

use fixturegen::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
