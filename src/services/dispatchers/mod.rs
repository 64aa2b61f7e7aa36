pub mod webhook;
pub mod slack;
