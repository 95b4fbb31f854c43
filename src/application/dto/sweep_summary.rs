use std::fmt;

/// SweepSummary - Counters describing one or more sweeps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepSummary {
    /// Report files picked up (".json", not excluded)
    pub files_seen: usize,
    /// Files whose records were all exported
    pub files_processed: usize,
    /// Files moved to the archive directory
    pub files_archived: usize,
    /// Files left in place because reading, parsing, exporting or archiving failed
    pub files_failed: usize,
    /// Export files written
    pub records_exported: usize,
    /// Reports dropped by the eligibility gate or as malformed
    pub reports_skipped: usize,
}

impl SweepSummary {
    pub fn has_failures(&self) -> bool {
        self.files_failed > 0
    }

    /// Adds the counters of another sweep to this one
    pub fn absorb(&mut self, other: &SweepSummary) {
        self.files_seen += other.files_seen;
        self.files_processed += other.files_processed;
        self.files_archived += other.files_archived;
        self.files_failed += other.files_failed;
        self.records_exported += other.records_exported;
        self.reports_skipped += other.reports_skipped;
    }
}

impl fmt::Display for SweepSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} file(s) seen, {} processed, {} archived, {} failed; {} record(s) exported, {} report(s) skipped",
            self.files_seen,
            self.files_processed,
            self.files_archived,
            self.files_failed,
            self.records_exported,
            self.reports_skipped
        )
    }
}
