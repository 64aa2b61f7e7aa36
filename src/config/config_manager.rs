use std::fs;
use std::path::{Path, PathBuf};
use reqwest::Method;
use crate::config::constants::{DEFAULT_CONFIG_FILE, HOME_CONFIG_PATH};
use crate::errors::{NotifyError, NotifyResult};
use crate::helpers::template;
use crate::structs::config::config::Config;
use crate::structs::run_context::RunContext;

pub struct ConfigManager;

impl ConfigManager {

    /// Loads `explicit` if given (it must exist), else the first config found
    /// in the working directory or home directory, else defaults.
    pub fn load(explicit: Option<&Path>) -> NotifyResult<Config> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(NotifyError::config_file_error(&path.display().to_string(), "file does not exist"));
            }
            return Self::load_from(path);
        }

        for candidate in Self::config_locations() {
            if candidate.exists() {
                return Self::load_from(&candidate);
            }
        }

        log::debug!("No config file found, using defaults and CLI flags only");
        Ok(Config::default())
    }

    pub fn load_from(path: &Path) -> NotifyResult<Config> {
        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path)
            .map_err(|e| NotifyError::config_file_error(&path.display().to_string(), &e.to_string()))?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    fn config_locations() -> Vec<PathBuf> {
        let mut locations = vec![PathBuf::from(DEFAULT_CONFIG_FILE)];
        if let Some(home) = dirs::home_dir() {
            locations.push(home.join(HOME_CONFIG_PATH));
        }
        locations
    }

    pub fn create_sample_config(path: Option<&Path>) -> NotifyResult<PathBuf> {
        let target = path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), Path::to_path_buf);
        if target.exists() {
            return Err(NotifyError::config_error(
                &format!("'{}' already exists", target.display()),
                None,
                Some("Remove it or pass --path to write somewhere else"),
            ));
        }

        if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| NotifyError::file_error(&parent.display().to_string(), "create directory", &e.to_string()))?;
        }

        fs::write(&target, SAMPLE_CONFIG)
            .map_err(|e| NotifyError::file_error(&target.display().to_string(), "write", &e.to_string()))?;

        Ok(target)
    }

    /// Checks everything that can be checked without sending anything.
    pub fn validate_config(config: &Config) -> NotifyResult<()> {
        let mut errors = Vec::new();

        if let Some(webhook) = &config.webhook {
            if let Some(url) = &webhook.url {
                Self::check_url("webhook.url", url, &mut errors);
            }

            if Method::from_bytes(webhook.method.to_uppercase().as_bytes()).is_err() {
                errors.push(NotifyError::validation_error(
                    "webhook.method",
                    &webhook.method,
                    "must be an HTTP method",
                    Some("Use POST, PUT or PATCH"),
                ));
            }

            if let Some(body_template) = webhook.body_template.as_deref().filter(|t| !t.is_empty()) {
                Self::check_template(body_template, &mut errors);
            }
        }

        if let Some(url) = config.slack.as_ref().and_then(|s| s.webhook_url.as_ref()) {
            Self::check_url("slack.webhook_url", url, &mut errors);
        }

        match NotifyError::from_many(errors, "config validation") {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn check_url(field: &str, url: &str, errors: &mut Vec<NotifyError>) {
        if url.is_empty() {
            return;
        }
        if reqwest::Url::parse(url).is_err() || !(url.starts_with("http://") || url.starts_with("https://")) {
            errors.push(NotifyError::validation_error(
                field,
                url,
                "must be an absolute http(s) URL",
                None,
            ));
        }
    }

    /// Renders the template against a sample run so obvious JSON mistakes surface early.
    fn check_template(body_template: &str, errors: &mut Vec<NotifyError>) {
        let context = RunContext::new("owner/repo", "1", "1", "https://github.com");
        let mut values = vec![
            ("title", "title".to_string()),
            ("message", "message".to_string()),
            ("timestamp", "1970-01-01T00:00:00+00:00".to_string()),
        ];
        values.extend(context.placeholders());

        let rendered = template::render(body_template, &values);
        if let Err(e) = serde_json::from_str::<serde_json::Value>(&rendered) {
            errors.push(NotifyError::validation_error(
                "webhook.body_template",
                body_template,
                &format!("must be valid JSON after substitution ({})", e),
                Some("Quote placeholders inside JSON strings, e.g. \"{{title}}\""),
            ));
        }
    }
}

const SAMPLE_CONFIG: &str = r##"# ci-notify configuration

[notification]
title = "CI Notification"
message = "Build finished"

# Generic JSON webhook. The URL can also come from $WEBHOOK_URL.
[webhook]
# url = "https://example.com/hooks/ci"
method = "POST"
# Placeholders: {{title}} {{message}} {{repository}} {{run_url}} {{run_id}}
# {{run_number}} {{server_url}} {{workflow}} {{sha}} {{ref_name}} {{actor}} {{timestamp}}
# body_template = '{"text":"{{title}} in {{repository}}: {{message}}","link":"{{run_url}}"}'

[webhook.headers]
# Authorization = "Bearer ..."

# Slack incoming webhook. The URL can also come from $SLACK_WEBHOOK_URL.
[slack]
# webhook_url = "https://hooks.slack.com/services/T000/B000/XXXX"
# username = "ci-bot"
# icon_emoji = ":rocket:"
# channel = "#alerts"

[behavior]
# Exit with status 1 when any target fails
fail_on_error = true
# timeout_secs = 10
"##;
