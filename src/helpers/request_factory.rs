use crate::structs::config::config::Config;
use crate::structs::notification_request::NotificationRequest;
use crate::structs::send_args::SendArgs;

/// Merges the config file with CLI flags into one request per target.
/// A flag always wins over the file.
pub struct RequestFactory<'a> {
    config: &'a Config,
    args: &'a SendArgs,
}

impl<'a> RequestFactory<'a> {
    pub fn new(config: &'a Config, args: &'a SendArgs) -> Self {
        Self { config, args }
    }

    fn base(&self, target_url: Option<String>) -> NotificationRequest {
        let title = self.args.title.clone().unwrap_or_else(|| self.config.notification.title.clone());
        let message = self.args.message.clone().unwrap_or_else(|| self.config.notification.message.clone());

        NotificationRequest {
            target_url,
            title,
            message,
            ..Default::default()
        }
    }

    pub fn webhook_request(&self) -> NotificationRequest {
        let webhook = self.config.webhook.as_ref();

        let target_url = self.args.webhook_url.clone().or_else(|| webhook.and_then(|w| w.url.clone()));
        let method = self.args.webhook_method.clone().or_else(|| webhook.map(|w| w.method.clone()));
        let body_template = self.args.webhook_body_template.clone()
            .or_else(|| webhook.and_then(|w| w.body_template.clone()));

        // File headers are a TOML table; flags pass raw JSON, which may be malformed on purpose.
        let headers_json = self.args.webhook_headers.clone().or_else(|| {
            webhook
                .filter(|w| !w.headers.is_empty())
                .and_then(|w| serde_json::to_string(&w.headers).ok())
        });

        NotificationRequest {
            method,
            body_template,
            headers_json,
            ..self.base(target_url)
        }
    }

    pub fn slack_request(&self) -> NotificationRequest {
        let slack = self.config.slack.as_ref();
        let pick = |flag: &Option<String>, file: Option<&Option<String>>| {
            flag.clone().or_else(|| file.cloned().flatten())
        };

        NotificationRequest {
            username: pick(&self.args.slack_username, slack.map(|s| &s.username)),
            icon_emoji: pick(&self.args.slack_icon_emoji, slack.map(|s| &s.icon_emoji)),
            channel: pick(&self.args.slack_channel, slack.map(|s| &s.channel)),
            ..self.base(pick(&self.args.slack_webhook_url, slack.map(|s| &s.webhook_url)))
        }
    }

    pub fn fail_on_error(&self) -> bool {
        !self.args.no_fail && self.config.behavior.fail_on_error
    }

    pub fn timeout_secs(&self) -> Option<u64> {
        self.args.timeout_secs.or(self.config.behavior.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use super::*;
    use crate::structs::config::slack_config::SlackConfig;
    use crate::structs::config::webhook_config::WebhookConfig;

    fn config() -> Config {
        let mut config = Config::default();
        config.notification.message = "from file".to_string();
        config.webhook = Some(WebhookConfig {
            url: Some("https://file.example.com".to_string()),
            headers: HashMap::from([("X-Token".to_string(), "abc".to_string())]),
            ..Default::default()
        });
        config.slack = Some(SlackConfig {
            webhook_url: Some("https://hooks.slack.com/services/file".to_string()),
            channel: Some("#file".to_string()),
            ..Default::default()
        });
        config
    }

    #[test]
    fn test_file_values_used_when_no_flags() {
        let config = config();
        let args = SendArgs::default();
        let factory = RequestFactory::new(&config, &args);

        let webhook = factory.webhook_request();
        assert_eq!(webhook.title, "CI Notification");
        assert_eq!(webhook.message, "from file");
        assert_eq!(webhook.target_url.as_deref(), Some("https://file.example.com"));
        assert_eq!(webhook.method.as_deref(), Some("POST"));
        assert_eq!(webhook.headers_json.as_deref(), Some(r#"{"X-Token":"abc"}"#));

        let slack = factory.slack_request();
        assert_eq!(slack.target_url.as_deref(), Some("https://hooks.slack.com/services/file"));
        assert_eq!(slack.channel.as_deref(), Some("#file"));
        assert_eq!(slack.username, None);
    }

    #[test]
    fn test_flags_override_file() {
        let config = config();
        let args = SendArgs {
            message: Some("from flag".to_string()),
            webhook_url: Some("https://flag.example.com".to_string()),
            webhook_headers: Some("{ not valid json".to_string()),
            slack_channel: Some("#flag".to_string()),
            no_fail: true,
            ..Default::default()
        };
        let factory = RequestFactory::new(&config, &args);

        let webhook = factory.webhook_request();
        assert_eq!(webhook.message, "from flag");
        assert_eq!(webhook.target_url.as_deref(), Some("https://flag.example.com"));
        assert_eq!(webhook.headers_json.as_deref(), Some("{ not valid json"));
        assert_eq!(factory.slack_request().channel.as_deref(), Some("#flag"));
        assert!(!factory.fail_on_error());
    }

    #[test]
    fn test_nothing_configured() {
        let config = Config::default();
        let args = SendArgs::default();
        let factory = RequestFactory::new(&config, &args);

        assert!(factory.webhook_request().target().is_none());
        assert!(factory.slack_request().target().is_none());
        assert!(factory.fail_on_error());
        assert_eq!(factory.timeout_secs(), None);
    }
}
