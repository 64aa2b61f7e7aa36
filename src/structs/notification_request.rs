use serde::{Deserialize, Serialize};

/// Everything a dispatcher needs for one delivery.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationRequest {
    pub target_url: Option<String>,
    pub message: String,
    pub title: String,

    #[serde(default)]
    pub method: Option<String>,

    #[serde(default)]
    pub body_template: Option<String>,

    #[serde(default)]
    pub headers_json: Option<String>,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub icon_emoji: Option<String>,

    #[serde(default)]
    pub channel: Option<String>,
}

impl NotificationRequest {
    pub fn new(target_url: Option<String>, title: &str, message: &str) -> Self {
        Self {
            target_url,
            title: title.to_string(),
            message: message.to_string(),
            ..Default::default()
        }
    }

    /// The target URL, if one is configured and non-empty.
    pub fn target(&self) -> Option<&str> {
        non_empty(self.target_url.as_ref())
    }

    pub fn with_method(mut self, method: &str) -> Self {
        self.method = Some(method.to_string());
        self
    }

    pub fn with_body_template(mut self, template: &str) -> Self {
        self.body_template = Some(template.to_string());
        self
    }

    pub fn with_headers_json(mut self, headers: &str) -> Self {
        self.headers_json = Some(headers.to_string());
        self
    }

    pub fn with_username(mut self, username: &str) -> Self {
        self.username = Some(username.to_string());
        self
    }

    pub fn with_icon_emoji(mut self, icon_emoji: &str) -> Self {
        self.icon_emoji = Some(icon_emoji.to_string());
        self
    }

    pub fn with_channel(mut self, channel: &str) -> Self {
        self.channel = Some(channel.to_string());
        self
    }
}

/// Treats empty strings the same as a missing value.
pub fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}
