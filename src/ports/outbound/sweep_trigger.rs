/// What the long-lived loop should do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEvent {
    /// Re-scan the input directory
    Sweep,
    /// Stop the loop
    Shutdown,
}

/// SweepTrigger port for driving the long-lived mode
///
/// Implementations block until the next sweep is due (a file arrived or a
/// timer elapsed) or until shutdown was requested. Notifications that arrive
/// while a sweep is running must be coalesced into a single follow-up sweep.
pub trait SweepTrigger {
    fn next_event(&mut self) -> TriggerEvent;
}

impl<T: SweepTrigger + ?Sized> SweepTrigger for Box<T> {
    fn next_event(&mut self) -> TriggerEvent {
        (**self).next_event()
    }
}
