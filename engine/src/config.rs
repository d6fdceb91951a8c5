//! Report configuration

use chrono::NaiveDate;
use serde::Deserialize;
use shared::validate_alert_threshold;

use crate::error::{EngineError, EngineResult};

/// Default near/safe boundary, in days before expiry.
pub const DEFAULT_ALERT_THRESHOLD_DAYS: i64 = 90;

/// Configuration for one report computation.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ReportConfig {
    /// Reference date all day arithmetic is anchored to. Injected
    /// rather than read from the system clock so reports are
    /// deterministic and testable.
    pub today: NaiveDate,

    /// Days before expiry at which a batch transitions from safe to
    /// near
    pub alert_threshold_days: i64,
}

impl ReportConfig {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            alert_threshold_days: DEFAULT_ALERT_THRESHOLD_DAYS,
        }
    }

    pub fn with_threshold(today: NaiveDate, alert_threshold_days: i64) -> EngineResult<Self> {
        validate_alert_threshold(alert_threshold_days).map_err(|reason| {
            EngineError::InvalidThreshold {
                days: alert_threshold_days,
                reason,
            }
        })?;
        Ok(Self {
            today,
            alert_threshold_days,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_threshold_is_90() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
        assert_eq!(ReportConfig::new(today).alert_threshold_days, 90);
    }

    #[test]
    fn negative_threshold_is_rejected() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
        assert!(ReportConfig::with_threshold(today, 30).is_ok());
        assert!(ReportConfig::with_threshold(today, -1).is_err());
    }
}
