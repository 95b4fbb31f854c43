use crate::asset_export::domain::WipeStatus;

/// WipeOutcomePolicy classifies the erase tool's free-text outcome.
///
/// Only the exact value "Successful" counts as a pass. Anything else,
/// including an empty or missing value, is a failure.
pub struct WipeOutcomePolicy;

impl WipeOutcomePolicy {
    const SUCCESS: &'static str = "Successful";

    pub fn classify(outcome: &str) -> WipeStatus {
        if outcome.trim() == Self::SUCCESS {
            WipeStatus::Passed
        } else {
            WipeStatus::Failed
        }
    }
}
