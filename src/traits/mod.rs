pub mod transport;
pub mod dispatcher;
