pub mod commands;
pub mod dispatch_result;
pub mod transport_error;
