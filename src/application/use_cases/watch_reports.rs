use crate::application::dto::{SweepRequest, SweepSummary};
use crate::ports::inbound::ReportExportPort;
use crate::ports::outbound::{ActivityLog, SweepTrigger, TriggerEvent};

/// WatchReportsUseCase - Long-lived mode
///
/// Sweeps the input directory once at startup to pick up files that arrived
/// while nothing was running, then sweeps again on every trigger event until
/// the trigger asks for shutdown. A failed sweep is logged and the loop goes on.
pub struct WatchReportsUseCase<P, T, AL> {
    sweeper: P,
    trigger: T,
    activity_log: AL,
}

impl<P, T, AL> WatchReportsUseCase<P, T, AL>
where
    P: ReportExportPort,
    T: SweepTrigger,
    AL: ActivityLog,
{
    pub fn new(sweeper: P, trigger: T, activity_log: AL) -> Self {
        Self {
            sweeper,
            trigger,
            activity_log,
        }
    }

    /// Runs until shutdown and returns the counters of every sweep combined.
    pub fn execute(&mut self, request: &SweepRequest) -> SweepSummary {
        let mut total = SweepSummary::default();
        self.activity_log.info(&format!(
            "Watching {} for report files",
            request.input_directory.display()
        ));

        self.sweep_once(request, &mut total);
        while let TriggerEvent::Sweep = self.trigger.next_event() {
            self.sweep_once(request, &mut total);
        }

        self.activity_log
            .info(&format!("Stopped watching; totals: {}", total));
        total
    }

    fn sweep_once(&self, request: &SweepRequest, total: &mut SweepSummary) {
        match self.sweeper.sweep(request) {
            Ok(summary) => total.absorb(&summary),
            Err(e) => self.activity_log.error(&format!("Sweep failed: {:#}", e)),
        }
    }
}
