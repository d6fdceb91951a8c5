//! Expiry date parsing and day arithmetic
//!
//! Purchase records mix regional date formats (`DD/MM/YYYY`, `MM/YYYY`,
//! ISO `YYYY-MM-DD`), often within one dataset. Parsing is deliberately
//! lenient and format-guessing: anything unrecognized degrades to "no
//! date" rather than an error, so one bad entry never blanks out a
//! report.

use chrono::NaiveDate;

/// Parse a free-text expiry string into a calendar date.
///
/// Accepted shapes, in precedence order:
/// 1. Strings containing `-` are parsed as ISO dates.
/// 2. Three parts split by `/` or `.` are read as `DD/MM/YYYY`
///    (two-digit years are promoted by adding 2000).
/// 3. Two parts are read as `MM/YYYY` and resolve to the last calendar
///    day of that month, so month-granularity entries compare correctly
///    against "is it expired yet".
///
/// Anything else is `None`. Never panics.
pub fn parse_expiry(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if raw.contains('-') {
        return parse_iso(raw);
    }
    let parts: Vec<&str> = raw.split(['/', '.']).collect();
    match parts.as_slice() {
        [day, month, year] => {
            let day: u32 = day.trim().parse().ok()?;
            let month: u32 = month.trim().parse().ok()?;
            let year = promote_year(year.trim().parse().ok()?);
            NaiveDate::from_ymd_opt(year, month, day)
        }
        [month, year] => {
            let month: u32 = month.trim().parse().ok()?;
            let year = promote_year(year.trim().parse().ok()?);
            last_day_of_month(year, month)
        }
        _ => None,
    }
}

/// Whole days from `today` until `expiry`, at day granularity.
///
/// An item expiring today has 0 days left, yesterday -1, tomorrow 1.
/// `None` propagates for unknown dates; unknown is never expired.
pub fn days_left(today: NaiveDate, expiry: Option<NaiveDate>) -> Option<i64> {
    expiry.map(|date| (date - today).num_days())
}

fn parse_iso(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    // Timestamps occasionally show up in exported data
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }
    None
}

fn promote_year(year: i32) -> i32 {
    if (0..100).contains(&year) {
        year + 2000
    } else {
        year
    }
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_iso_dates() {
        assert_eq!(parse_expiry("2024-06-30"), Some(date(2024, 6, 30)));
        assert_eq!(parse_expiry("2024-06-30T10:15:00"), Some(date(2024, 6, 30)));
        assert_eq!(parse_expiry("2024-13-01"), None);
        assert_eq!(parse_expiry("not-a-date"), None);
    }

    #[test]
    fn parses_day_month_year() {
        assert_eq!(parse_expiry("25/06/2024"), Some(date(2024, 6, 25)));
        assert_eq!(parse_expiry("25.06.2024"), Some(date(2024, 6, 25)));
        assert_eq!(parse_expiry("25/06/24"), Some(date(2024, 6, 25)));
        assert_eq!(parse_expiry("31/02/2024"), None);
    }

    #[test]
    fn month_year_resolves_to_last_day() {
        assert_eq!(parse_expiry("06/2024"), Some(date(2024, 6, 30)));
        // Leap year February
        assert_eq!(parse_expiry("02/2024"), Some(date(2024, 2, 29)));
        assert_eq!(parse_expiry("02/2023"), Some(date(2023, 2, 28)));
        assert_eq!(parse_expiry("12/2024"), Some(date(2024, 12, 31)));
    }

    #[test]
    fn rejects_other_shapes() {
        assert_eq!(parse_expiry(""), None);
        assert_eq!(parse_expiry("   "), None);
        assert_eq!(parse_expiry("2024"), None);
        assert_eq!(parse_expiry("1/2/3/4"), None);
        assert_eq!(parse_expiry("soon"), None);
    }

    #[test]
    fn days_left_sign_convention() {
        let today = date(2024, 5, 15);
        assert_eq!(days_left(today, Some(today)), Some(0));
        assert_eq!(days_left(today, Some(date(2024, 5, 14))), Some(-1));
        assert_eq!(days_left(today, Some(date(2024, 5, 16))), Some(1));
        assert_eq!(days_left(today, None), None);
    }

    #[test]
    fn month_granularity_expiry_comparison() {
        // "06/2024" is not expired until July 1st
        let expiry = parse_expiry("06/2024");
        assert_eq!(days_left(date(2024, 6, 30), expiry), Some(0));
        assert_eq!(days_left(date(2024, 7, 1), expiry), Some(-1));
    }
}
