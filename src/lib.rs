//! Delivers CI run notifications to a generic JSON webhook and to Slack.
//!
//! The dispatch core lives in [`services::dispatchers`]; each dispatcher turns a
//! [`structs::notification_request::NotificationRequest`] plus the run's
//! [`structs::run_context::RunContext`] into one HTTP request and reports a
//! [`enums::dispatch_result::DispatchResult`].

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
