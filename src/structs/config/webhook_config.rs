use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WebhookConfig {
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default = "ConfigHelper::default_method")]
    pub method: String,

    #[serde(default)]
    pub headers: HashMap<String, String>,

    #[serde(default)]
    pub body_template: Option<String>,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            url: None,
            method: ConfigHelper::default_method(),
            headers: HashMap::new(),
            body_template: None,
        }
    }
}
