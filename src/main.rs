use anyhow::Result;
use clap::Parser;

use flycam::cli::Cli;
use flycam::viewer;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    viewer::run(cli)
}
