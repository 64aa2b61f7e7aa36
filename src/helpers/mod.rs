pub mod config_helper;
pub mod outcome;
pub mod template;
pub mod request_factory;
