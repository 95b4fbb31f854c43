use secure_erase_export::prelude::*;
use std::collections::VecDeque;

type BeforeEvent = Box<dyn FnMut(usize)>;

/// Mock SweepTrigger replaying a fixed script of events
///
/// An optional hook runs before each event is handed out, so tests can
/// drop new report files into the input directory between sweeps.
pub struct MockSweepTrigger {
    events: VecDeque<TriggerEvent>,
    calls: usize,
    before_event: Option<BeforeEvent>,
}

impl MockSweepTrigger {
    pub fn new(events: Vec<TriggerEvent>) -> Self {
        Self {
            events: events.into(),
            calls: 0,
            before_event: None,
        }
    }

    pub fn with_hook(mut self, hook: impl FnMut(usize) + 'static) -> Self {
        self.before_event = Some(Box::new(hook));
        self
    }
}

impl SweepTrigger for MockSweepTrigger {
    fn next_event(&mut self) -> TriggerEvent {
        if let Some(hook) = self.before_event.as_mut() {
            hook(self.calls);
        }
        self.calls += 1;
        self.events.pop_front().unwrap_or(TriggerEvent::Shutdown)
    }
}
