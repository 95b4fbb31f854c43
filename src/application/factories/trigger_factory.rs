use crate::adapters::outbound::watch::{IntervalSweepTrigger, NotifySweepTrigger, ShutdownFlag};
use crate::application::dto::TriggerMode;
use crate::ports::outbound::SweepTrigger;
use crate::shared::Result;
use std::path::Path;
use std::time::Duration;

/// Factory for creating the sweep trigger of the long-lived mode
///
/// Selects the infrastructure adapter for the configured [`TriggerMode`].
pub struct TriggerFactory;

impl TriggerFactory {
    /// Creates a trigger for the specified mode
    ///
    /// # Arguments
    /// * `mode` - Change notifications or fixed-interval polling
    /// * `input_directory` - Directory watched in notify mode
    /// * `poll_interval` - Delay between sweeps in poll mode
    /// * `shutdown` - Flag that makes the trigger return `Shutdown`
    ///
    /// # Errors
    /// Returns an error if the filesystem watcher cannot be started
    pub fn create(
        mode: TriggerMode,
        input_directory: &Path,
        poll_interval: Duration,
        shutdown: ShutdownFlag,
    ) -> Result<Box<dyn SweepTrigger>> {
        let trigger: Box<dyn SweepTrigger> = match mode {
            TriggerMode::Notify => Box::new(NotifySweepTrigger::new(input_directory, shutdown)?),
            TriggerMode::Poll => Box::new(IntervalSweepTrigger::new(poll_interval, shutdown)),
        };
        Ok(trigger)
    }
}
