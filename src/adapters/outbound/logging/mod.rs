/// Diagnostic log adapters backed by `tracing`
mod subscriber;
mod tracing_activity_log;

pub use subscriber::{init_logging, parse_level, LoggingOptions};
pub use tracing_activity_log::TracingActivityLog;
