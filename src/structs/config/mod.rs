pub mod config;
pub mod notification_config;
pub mod webhook_config;
pub mod slack_config;
pub mod behavior_config;
