use clap::Args;
use crate::config::constants::{SLACK_WEBHOOK_URL_ENV, WEBHOOK_URL_ENV};

/// Per-invocation inputs for `send`. Every flag overrides the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct SendArgs {
    #[clap(short, long)]
    pub title: Option<String>,

    #[clap(short, long)]
    pub message: Option<String>,

    #[clap(long, env = WEBHOOK_URL_ENV)]
    pub webhook_url: Option<String>,

    #[clap(long)]
    pub webhook_method: Option<String>,

    /// JSON document with `{{placeholder}}` tokens.
    #[clap(long)]
    pub webhook_body_template: Option<String>,

    /// JSON object of extra header names to values.
    #[clap(long)]
    pub webhook_headers: Option<String>,

    #[clap(long, env = SLACK_WEBHOOK_URL_ENV)]
    pub slack_webhook_url: Option<String>,

    #[clap(long)]
    pub slack_username: Option<String>,

    #[clap(long)]
    pub slack_icon_emoji: Option<String>,

    #[clap(long)]
    pub slack_channel: Option<String>,

    #[clap(long)]
    pub timeout_secs: Option<u64>,

    /// Exit zero even when a target fails.
    #[clap(long)]
    pub no_fail: bool,
}
