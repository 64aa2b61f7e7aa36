use std::path::PathBuf;
use clap::Subcommand;
use crate::structs::send_args::SendArgs;

#[derive(Subcommand)]
pub enum Commands {
    /// Deliver the notification to every configured target.
    Send {
        #[clap(flatten)]
        args: SendArgs,
    },
    /// Write a sample config file.
    Init {
        #[clap(short, long)]
        path: Option<PathBuf>,
    },
    /// Load the config and report which targets are configured.
    Validate,
}
