/// Mock implementations for testing
mod mock_activity_log;
mod mock_progress_reporter;
mod mock_sweep_trigger;

pub use mock_activity_log::MockActivityLog;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_sweep_trigger::MockSweepTrigger;
