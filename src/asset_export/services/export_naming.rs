use chrono::NaiveDate;
use rand::Rng;

/// ExportNaming generates export file names of the form
/// `SE_<MM-DD-YYYY>_<16 hex chars>.txt`.
///
/// The random suffix makes collisions negligible; they are not checked.
pub struct ExportNaming;

impl ExportNaming {
    pub const PREFIX: &'static str = "SE";
    pub const EXTENSION: &'static str = "txt";

    /// Name for a file exported today (local time).
    pub fn generate() -> String {
        Self::for_date(chrono::Local::now().date_naive(), &mut rand::thread_rng())
    }

    pub fn for_date<R: Rng>(date: NaiveDate, rng: &mut R) -> String {
        let suffix: u64 = rng.gen();
        format!(
            "{}_{}_{:016x}.{}",
            Self::PREFIX,
            date.format("%m-%d-%Y"),
            suffix,
            Self::EXTENSION
        )
    }
}
