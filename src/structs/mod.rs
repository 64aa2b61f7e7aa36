pub mod cli;
pub mod send_args;
pub mod config;
pub mod notification_request;
pub mod run_context;
pub mod transport_response;
pub mod webhook_payload;
pub mod slack;
