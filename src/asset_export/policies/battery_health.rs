use crate::asset_export::domain::NOT_AVAILABLE;

/// Why a battery assessment deserves a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryNote {
    /// The tool wrote "Normal" instead of a percentage.
    ReportedNormal,
    /// The value is neither numeric nor "Normal".
    NotNumeric,
    /// No reading at all (absent or "N/A").
    Missing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatteryAssessment {
    pub healthy: bool,
    pub note: Option<BatteryNote>,
}

/// BatteryHealthPolicy decides whether a battery passes inspection.
///
/// Rules, in order:
/// 1. no reading: unhealthy, noted
/// 2. "Normal": healthy, noted (known tool anomaly)
/// 3. numeric (a trailing "%" is tolerated): healthy when >= 60
/// 4. anything else: unhealthy, noted
pub struct BatteryHealthPolicy;

impl BatteryHealthPolicy {
    /// Minimum health percentage considered serviceable.
    pub const MINIMUM_HEALTH: f64 = 60.0;

    pub fn assess(raw: Option<&str>) -> BatteryAssessment {
        let value = match raw.map(str::trim) {
            None | Some("") | Some(NOT_AVAILABLE) => {
                return BatteryAssessment {
                    healthy: false,
                    note: Some(BatteryNote::Missing),
                }
            }
            Some(value) => value,
        };

        if value == "Normal" {
            return BatteryAssessment {
                healthy: true,
                note: Some(BatteryNote::ReportedNormal),
            };
        }

        match value.trim_end_matches('%').trim().parse::<f64>() {
            Ok(health) if health.is_finite() => BatteryAssessment {
                healthy: health >= Self::MINIMUM_HEALTH,
                note: None,
            },
            _ => BatteryAssessment {
                healthy: false,
                note: Some(BatteryNote::NotNumeric),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold() {
        assert_eq!(
            BatteryHealthPolicy::assess(Some("75")),
            BatteryAssessment { healthy: true, note: None }
        );
        assert_eq!(
            BatteryHealthPolicy::assess(Some("40")),
            BatteryAssessment { healthy: false, note: None }
        );
        assert!(BatteryHealthPolicy::assess(Some("60")).healthy);
        assert!(!BatteryHealthPolicy::assess(Some("59.9")).healthy);
    }

    #[test]
    fn test_percent_suffix_is_tolerated() {
        let assessment = BatteryHealthPolicy::assess(Some("88%"));
        assert!(assessment.healthy);
        assert!(assessment.note.is_none());
    }

    #[test]
    fn test_normal_is_healthy_with_note() {
        let assessment = BatteryHealthPolicy::assess(Some("Normal"));
        assert!(assessment.healthy);
        assert_eq!(assessment.note, Some(BatteryNote::ReportedNormal));
    }

    #[test]
    fn test_non_numeric_is_unhealthy_with_note() {
        let assessment = BatteryHealthPolicy::assess(Some("abc"));
        assert!(!assessment.healthy);
        assert_eq!(assessment.note, Some(BatteryNote::NotNumeric));

        let nan = BatteryHealthPolicy::assess(Some("NaN"));
        assert_eq!(nan.note, Some(BatteryNote::NotNumeric));
    }

    #[test]
    fn test_missing_reading() {
        for raw in [None, Some(""), Some("N/A")] {
            let assessment = BatteryHealthPolicy::assess(raw);
            assert!(!assessment.healthy);
            assert_eq!(assessment.note, Some(BatteryNote::Missing));
        }
    }
}
