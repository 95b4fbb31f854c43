use crate::application::dto::{SweepRequest, SweepSummary};
use crate::shared::Result;

/// ReportExportPort - Inbound port for one sweep of the input directory
///
/// This is what the CLI and the long-lived loop drive. Implemented by
/// [`crate::application::use_cases::ProcessReportsUseCase`].
pub trait ReportExportPort {
    /// Processes every eligible report file currently in the input directory
    ///
    /// # Errors
    /// Returns an error only if the input directory cannot be listed.
    /// Problems with individual files are logged and counted in the summary.
    fn sweep(&self, request: &SweepRequest) -> Result<SweepSummary>;
}
