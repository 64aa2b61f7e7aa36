use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

/// Message content shared by every target.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NotificationConfig {
    #[serde(default = "ConfigHelper::default_title")]
    pub title: String,

    #[serde(default)]
    pub message: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            title: ConfigHelper::default_title(),
            message: String::new(),
        }
    }
}
