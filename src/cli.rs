// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "flycam")]
#[command(about = "First-person flight camera demo", long_about = None)]
pub struct Cli {
    /// Path to a JSON camera config; built-in defaults apply when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Initial window width in pixels
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 720)]
    pub height: u32,
}
