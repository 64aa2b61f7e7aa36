pub mod dispatch_logger;
