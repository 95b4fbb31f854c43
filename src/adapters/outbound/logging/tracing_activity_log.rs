use crate::ports::outbound::ActivityLog;

/// TracingActivityLog adapter forwarding activity entries to `tracing`
///
/// Entries are emitted under the `activity` target so they can be filtered
/// apart from library diagnostics (e.g. `RUST_LOG=activity=info`).
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingActivityLog;

impl TracingActivityLog {
    pub fn new() -> Self {
        Self
    }
}

impl ActivityLog for TracingActivityLog {
    fn info(&self, message: &str) {
        tracing::info!(target: "activity", "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "activity", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "activity", "{}", message);
    }
}
