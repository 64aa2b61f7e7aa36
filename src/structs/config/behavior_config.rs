use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BehaviorConfig {
    /// Exit non-zero when any target fails.
    #[serde(default = "ConfigHelper::default_fail_on_error")]
    pub fail_on_error: bool,

    /// Request timeout in seconds; unset leaves the HTTP client default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            fail_on_error: ConfigHelper::default_fail_on_error(),
            timeout_secs: None,
        }
    }
}
