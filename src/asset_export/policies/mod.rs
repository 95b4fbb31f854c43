mod battery_health;
mod wipe_outcome;

pub use battery_health::{BatteryAssessment, BatteryHealthPolicy, BatteryNote};
pub use wipe_outcome::WipeOutcomePolicy;
