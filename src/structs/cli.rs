use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "ci-notify")]
#[clap(about = "Send CI run notifications to webhooks and Slack", long_about = None)]
pub struct Cli {
    /// Path to a TOML config file.
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
