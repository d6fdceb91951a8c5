//! Validation utilities for the retail back-office suite
//!
//! Only caller-supplied configuration is validated here. Historical
//! invoice data is never rejected; the expiry engine degrades bad data
//! instead of erroring on it.

use rust_decimal::Decimal;

/// Validate an alert threshold in days (the near/safe boundary).
pub fn validate_alert_threshold(days: i64) -> Result<(), &'static str> {
    if days < 0 {
        return Err("Alert threshold cannot be negative");
    }
    Ok(())
}

/// Validate a sub-unit conversion factor (minor units per major unit).
pub fn validate_unit_factor(factor: Decimal) -> Result<(), &'static str> {
    if factor <= Decimal::ZERO {
        return Err("Unit factor must be positive");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_validate_alert_threshold() {
        assert!(validate_alert_threshold(0).is_ok());
        assert!(validate_alert_threshold(90).is_ok());
        assert!(validate_alert_threshold(-1).is_err());
    }

    #[test]
    fn test_validate_unit_factor() {
        assert!(validate_unit_factor(Decimal::from(12)).is_ok());
        assert!(validate_unit_factor(Decimal::ZERO).is_err());
        assert!(validate_unit_factor(Decimal::from(-6)).is_err());
    }

    proptest! {
        #[test]
        fn prop_nonnegative_thresholds_accepted(days in 0i64..=3650) {
            prop_assert!(validate_alert_threshold(days).is_ok());
        }

        #[test]
        fn prop_negative_thresholds_rejected(days in i64::MIN..0) {
            prop_assert!(validate_alert_threshold(days).is_err());
        }
    }
}
