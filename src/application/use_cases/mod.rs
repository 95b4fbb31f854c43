/// Use cases module containing application business logic orchestration
mod process_reports;
mod watch_reports;

pub use process_reports::ProcessReportsUseCase;
pub use watch_reports::WatchReportsUseCase;
