use super::{ShutdownFlag, SHUTDOWN_CHECK_INTERVAL};
use crate::ports::outbound::{SweepTrigger, TriggerEvent};
use std::sync::atomic::Ordering;
use std::thread;
use std::time::{Duration, Instant};

/// Fires a sweep every `interval`, for filesystems where change
/// notifications are unreliable (network shares, some containers).
pub struct IntervalSweepTrigger {
    interval: Duration,
    shutdown: ShutdownFlag,
}

impl IntervalSweepTrigger {
    pub fn new(interval: Duration, shutdown: ShutdownFlag) -> Self {
        Self { interval, shutdown }
    }
}

impl SweepTrigger for IntervalSweepTrigger {
    fn next_event(&mut self) -> TriggerEvent {
        let deadline = Instant::now() + self.interval;
        loop {
            if self.shutdown.load(Ordering::SeqCst) {
                return TriggerEvent::Shutdown;
            }
            let now = Instant::now();
            if now >= deadline {
                return TriggerEvent::Sweep;
            }
            thread::sleep((deadline - now).min(SHUTDOWN_CHECK_INTERVAL));
        }
    }
}
