use super::{ShutdownFlag, SHUTDOWN_CHECK_INTERVAL};
use crate::ports::outbound::{SweepTrigger, TriggerEvent};
use crate::shared::Result;
use anyhow::Context;
use notify::event::ModifyKind;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::Path;
use std::sync::atomic::Ordering;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};

/// Fires a sweep when a report file appears in (or is written into) the
/// watched directory. Events that pile up while a sweep runs are collapsed
/// into a single follow-up sweep.
pub struct NotifySweepTrigger {
    _watcher: RecommendedWatcher,
    rx: Receiver<notify::Result<Event>>,
    shutdown: ShutdownFlag,
}

impl NotifySweepTrigger {
    /// Starts watching `directory` (non-recursively).
    ///
    /// # Errors
    /// Returns an error if the platform watcher cannot be created or the
    /// directory cannot be watched
    pub fn new(directory: &Path, shutdown: ShutdownFlag) -> Result<Self> {
        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(move |res| {
            // Receiver gone means the trigger was dropped.
            let _ = tx.send(res);
        })
        .context("Failed to create filesystem watcher")?;

        watcher
            .watch(directory, RecursiveMode::NonRecursive)
            .with_context(|| format!("Failed to watch directory: {}", directory.display()))?;
        tracing::debug!(directory = %directory.display(), "filesystem watcher started");

        Ok(Self {
            _watcher: watcher,
            rx,
            shutdown,
        })
    }

    fn is_report_arrival(event: &Event) -> bool {
        let relevant_kind = matches!(
            event.kind,
            EventKind::Create(_)
                | EventKind::Modify(ModifyKind::Data(_))
                | EventKind::Modify(ModifyKind::Name(_))
                | EventKind::Modify(ModifyKind::Any)
        );
        relevant_kind
            && event
                .paths
                .iter()
                .any(|p| p.extension().is_some_and(|ext| ext == "json"))
    }

    fn drain_pending(&self) {
        while self.rx.try_recv().is_ok() {}
    }
}

impl SweepTrigger for NotifySweepTrigger {
    fn next_event(&mut self) -> TriggerEvent {
        loop {
            if self.shutdown.load(Ordering::SeqCst) {
                return TriggerEvent::Shutdown;
            }
            match self.rx.recv_timeout(SHUTDOWN_CHECK_INTERVAL) {
                Ok(Ok(event)) if Self::is_report_arrival(&event) => {
                    self.drain_pending();
                    return TriggerEvent::Sweep;
                }
                Ok(Ok(_)) => {}
                Ok(Err(e)) => tracing::warn!("Filesystem watcher error: {}", e),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    tracing::error!("Filesystem watcher stopped unexpectedly");
                    return TriggerEvent::Shutdown;
                }
            }
        }
    }
}
