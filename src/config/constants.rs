use std::time::Duration;

pub const DEFAULT_CONFIG_FILE: &str = "ci-notify.toml";
pub const HOME_CONFIG_PATH: &str = "ci-notify/config.toml";

pub const DEFAULT_TITLE: &str = "CI Notification";
pub const DEFAULT_METHOD: &str = "POST";
pub const DEFAULT_SERVER_URL: &str = "https://github.com";

pub const GITHUB_REPOSITORY_ENV: &str = "GITHUB_REPOSITORY";
pub const GITHUB_RUN_ID_ENV: &str = "GITHUB_RUN_ID";
pub const GITHUB_RUN_NUMBER_ENV: &str = "GITHUB_RUN_NUMBER";
pub const GITHUB_SERVER_URL_ENV: &str = "GITHUB_SERVER_URL";
pub const GITHUB_WORKFLOW_ENV: &str = "GITHUB_WORKFLOW";
pub const GITHUB_SHA_ENV: &str = "GITHUB_SHA";
pub const GITHUB_REF_NAME_ENV: &str = "GITHUB_REF_NAME";
pub const GITHUB_ACTOR_ENV: &str = "GITHUB_ACTOR";
pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

pub const WEBHOOK_URL_ENV: &str = "WEBHOOK_URL";
pub const SLACK_WEBHOOK_URL_ENV: &str = "SLACK_WEBHOOK_URL";

pub const WEBHOOK_TARGET: &str = "webhook";
pub const SLACK_TARGET: &str = "slack";

pub fn timeout_duration(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
