/// Data Transfer Objects for application layer
///
/// DTOs carry requests and results between the CLI, the use cases
/// and the adapters, keeping the domain layer isolated.
mod sweep_request;
mod sweep_summary;
mod trigger_mode;

pub use sweep_request::SweepRequest;
pub use sweep_summary::SweepSummary;
pub use trigger_mode::TriggerMode;
