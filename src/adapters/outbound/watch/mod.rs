/// Sweep triggers for the long-lived mode
mod interval_trigger;
mod notify_trigger;

pub use interval_trigger::IntervalSweepTrigger;
pub use notify_trigger::NotifySweepTrigger;

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

/// Set to true to ask a running trigger to return `TriggerEvent::Shutdown`.
pub type ShutdownFlag = Arc<AtomicBool>;

/// How often a blocked trigger re-checks the shutdown flag.
pub(crate) const SHUTDOWN_CHECK_INTERVAL: Duration = Duration::from_millis(200);
