/// How the long-lived mode learns that new reports may have arrived
///
/// Shared by the CLI (which parses it) and the trigger factory (which
/// picks the adapter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerMode {
    /// File-system change notifications on the input directory
    #[default]
    Notify,
    /// Fixed-interval re-scan
    Poll,
}

impl std::str::FromStr for TriggerMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "notify" | "watch" => Ok(TriggerMode::Notify),
            "poll" | "interval" => Ok(TriggerMode::Poll),
            _ => Err(format!(
                "Invalid trigger: {}. Please specify 'notify' or 'poll'",
                s
            )),
        }
    }
}

impl std::fmt::Display for TriggerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TriggerMode::Notify => write!(f, "notify"),
            TriggerMode::Poll => write!(f, "poll"),
        }
    }
}
