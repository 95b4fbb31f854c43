use crate::application::dto::{SweepRequest, SweepSummary};
use crate::asset_export::services::{ExportNaming, ReportOutcome, ReportParser, RecordCompiler};
use crate::ports::inbound::ReportExportPort;
use crate::ports::outbound::{
    ActivityLog, ExportWriter, ProgressReporter, RecordFormatter, ReportArchiver, ReportSource,
};
use crate::shared::error::ExportError;
use crate::shared::Result;
use std::path::{Path, PathBuf};

const REPORT_EXTENSION: &str = "json";

/// What happened to one report file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileOutcome {
    /// Not read, not parsed or an export failed; left in the input directory
    Failed,
    /// Exported and moved to the archive
    Archived,
    /// Exported, but the file was gone before it could be archived
    Vanished,
    /// Exported, but the move to the archive failed
    ArchiveFailed,
}

/// ProcessReportsUseCase - Core use case for one sweep of the input directory
///
/// For each report file: parse it into device records, export each record,
/// then move the file to the archive. One bad file never stops the sweep.
///
/// # Type Parameters
/// * `RS` - ReportSource implementation
/// * `RF` - RecordFormatter implementation
/// * `EW` - ExportWriter implementation
/// * `AR` - ReportArchiver implementation
/// * `AL` - ActivityLog implementation
/// * `PR` - ProgressReporter implementation
pub struct ProcessReportsUseCase<RS, RF, EW, AR, AL, PR> {
    report_source: RS,
    formatter: RF,
    export_writer: EW,
    archiver: AR,
    activity_log: AL,
    progress_reporter: PR,
}

impl<RS, RF, EW, AR, AL, PR> ProcessReportsUseCase<RS, RF, EW, AR, AL, PR>
where
    RS: ReportSource,
    RF: RecordFormatter,
    EW: ExportWriter,
    AR: ReportArchiver,
    AL: ActivityLog,
    PR: ProgressReporter,
{
    /// Creates a new ProcessReportsUseCase with injected dependencies
    pub fn new(
        report_source: RS,
        formatter: RF,
        export_writer: EW,
        archiver: AR,
        activity_log: AL,
        progress_reporter: PR,
    ) -> Self {
        Self {
            report_source,
            formatter,
            export_writer,
            archiver,
            activity_log,
            progress_reporter,
        }
    }

    /// Executes one sweep
    ///
    /// # Errors
    /// Returns an error only if the input directory cannot be listed
    pub fn execute(&self, request: &SweepRequest) -> Result<SweepSummary> {
        let candidates = self
            .report_source
            .list_candidates(&request.input_directory, &request.excluded_files)?;

        let reports: Vec<_> = candidates
            .into_iter()
            .filter(|path| Self::is_report_file(path))
            .collect();

        let mut summary = SweepSummary {
            files_seen: reports.len(),
            ..Default::default()
        };
        if reports.is_empty() {
            return Ok(summary);
        }

        self.progress_reporter.report(&format!(
            "📖 Found {} report file(s) in {}",
            reports.len(),
            request.input_directory.display()
        ));

        let total = reports.len();
        for (idx, path) in reports.iter().enumerate() {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            self.progress_reporter
                .report_progress(idx + 1, total, Some(&name));

            match self.process_file(path, &mut summary) {
                FileOutcome::Failed => summary.files_failed += 1,
                FileOutcome::Archived => {
                    summary.files_processed += 1;
                    summary.files_archived += 1;
                }
                FileOutcome::Vanished => summary.files_processed += 1,
                FileOutcome::ArchiveFailed => {
                    summary.files_processed += 1;
                    summary.files_failed += 1;
                }
            }
        }

        self.progress_reporter
            .report_completion(&format!("✅ Sweep complete: {}", summary));

        Ok(summary)
    }

    fn is_report_file(path: &Path) -> bool {
        path.extension().and_then(|e| e.to_str()) == Some(REPORT_EXTENSION)
    }

    fn process_file(&self, path: &Path, summary: &mut SweepSummary) -> FileOutcome {
        if !self.report_source.exists(path) {
            self.activity_log
                .error(&format!("File '{}' does not exist", path.display()));
            return FileOutcome::Failed;
        }

        let content = match self.report_source.read_report(path) {
            Ok(content) => content,
            Err(e) => {
                self.activity_log.error(&e.to_string());
                return FileOutcome::Failed;
            }
        };

        let outcomes = match ReportParser::parse_document(&content) {
            Ok(outcomes) => outcomes,
            Err(e) => {
                let error = ExportError::ReportParseError {
                    path: path.to_path_buf(),
                    details: e.to_string(),
                };
                self.activity_log.error(&error.to_string());
                return FileOutcome::Failed;
            }
        };

        if let Err(e) = self.export_writer.ensure_ready() {
            self.activity_log.error(&format!(
                "Not exporting '{}': {}",
                path.display(),
                e
            ));
            return FileOutcome::Failed;
        }

        let mut written: Vec<PathBuf> = Vec::new();
        for outcome in outcomes {
            match outcome {
                ReportOutcome::Skipped { serial, reason } => {
                    self.activity_log
                        .warn(&format!("{} {} - skipping", serial, reason));
                    summary.reports_skipped += 1;
                }
                ReportOutcome::Accepted(parsed) => {
                    for anomaly in &parsed.anomalies {
                        self.activity_log.warn(&anomaly.to_string());
                    }

                    let compiled = RecordCompiler::compile(&parsed.record);
                    let content = self.formatter.format(&compiled);
                    let file_name = ExportNaming::generate();

                    match self.export_writer.write_export(&file_name, &content) {
                        Ok(export_path) => {
                            self.activity_log.info(&format!(
                                "Created file {} with Serial Number: '{}' and Barcode: '{}' and Computer Id: '{}'",
                                file_name, compiled.serial, compiled.barcode, compiled.computer_id
                            ));
                            written.push(export_path);
                        }
                        Err(e) => {
                            // Leave the report in place; remaining records are not attempted.
                            self.activity_log.error(&format!(
                                "Export of '{}' stopped: {}",
                                path.display(),
                                e
                            ));
                            self.discard_partial_exports(&written);
                            return FileOutcome::Failed;
                        }
                    }
                }
            }
        }

        summary.records_exported += written.len();

        if !self.report_source.exists(path) {
            self.activity_log.warn(&format!(
                "File '{}' disappeared before it could be archived",
                path.display()
            ));
            return FileOutcome::Vanished;
        }

        match self.archiver.archive(path) {
            Ok(destination) => {
                self.activity_log.info(&format!(
                    "Archived '{}' to '{}'",
                    path.display(),
                    destination.display()
                ));
                FileOutcome::Archived
            }
            Err(e) => {
                self.activity_log.error(&e.to_string());
                FileOutcome::ArchiveFailed
            }
        }
    }

    /// Removes the exports already written for a report that is left in
    /// place, so the retry does not export the same devices twice.
    fn discard_partial_exports(&self, written: &[PathBuf]) {
        for export_path in written {
            match self.export_writer.discard_export(export_path) {
                Ok(()) => self.activity_log.info(&format!(
                    "Removed partial export '{}'",
                    export_path.display()
                )),
                Err(e) => self.activity_log.error(&format!(
                    "Partial export '{}' must be removed by hand: {}",
                    export_path.display(),
                    e
                )),
            }
        }
    }
}

impl<RS, RF, EW, AR, AL, PR> ReportExportPort for ProcessReportsUseCase<RS, RF, EW, AR, AL, PR>
where
    RS: ReportSource,
    RF: RecordFormatter,
    EW: ExportWriter,
    AR: ReportArchiver,
    AL: ActivityLog,
    PR: ProgressReporter,
{
    fn sweep(&self, request: &SweepRequest) -> Result<SweepSummary> {
        self.execute(request)
    }
}
