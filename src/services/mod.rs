pub mod http_transport;
pub mod dispatchers;
pub mod github_output;
