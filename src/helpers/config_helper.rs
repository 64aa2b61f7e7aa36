use crate::config::constants::{DEFAULT_METHOD, DEFAULT_TITLE};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_title() -> String {
        DEFAULT_TITLE.to_string()
    }

    pub fn default_method() -> String {
        DEFAULT_METHOD.to_string()
    }

    pub fn default_fail_on_error() -> bool {
        true
    }
}
