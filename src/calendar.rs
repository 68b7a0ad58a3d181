use chrono::{Datelike, NaiveDate, Weekday};

/// Counts business days (Mon-Fri) in the inclusive range `[start, end]`.
///
/// No holiday calendar. An empty or inverted range yields 0, which callers
/// must reject: a leave request always charges at least one day.
pub fn business_days_between(start: NaiveDate, end: NaiveDate) -> i32 {
    let mut days = 0;
    let mut current = start;

    while current <= end {
        if !matches!(current.weekday(), Weekday::Sat | Weekday::Sun) {
            days += 1;
        }
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }

    days
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn monday_to_friday_is_five() {
        // 2026-01-05 is a Monday
        assert_eq!(business_days_between(date(2026, 1, 5), date(2026, 1, 9)), 5);
    }

    #[test]
    fn full_week_from_monday_is_five() {
        // Monday through the following Sunday still charges five days
        assert_eq!(business_days_between(date(2026, 1, 5), date(2026, 1, 11)), 5);
    }

    #[test]
    fn single_weekday_is_one() {
        // a Wednesday
        assert_eq!(business_days_between(date(2026, 1, 7), date(2026, 1, 7)), 1);
    }

    #[test]
    fn single_weekend_day_is_zero() {
        // a Saturday
        assert_eq!(business_days_between(date(2026, 1, 10), date(2026, 1, 10)), 0);
    }

    #[test]
    fn pure_weekend_range_is_zero() {
        // Saturday to the following Sunday
        assert_eq!(business_days_between(date(2026, 1, 10), date(2026, 1, 11)), 0);
    }

    #[test]
    fn friday_to_monday_skips_weekend() {
        assert_eq!(business_days_between(date(2026, 1, 9), date(2026, 1, 12)), 2);
    }

    #[test]
    fn inverted_range_is_zero() {
        assert_eq!(business_days_between(date(2026, 1, 9), date(2026, 1, 5)), 0);
    }

    #[test]
    fn two_full_weeks() {
        assert_eq!(business_days_between(date(2026, 1, 5), date(2026, 1, 18)), 10);
    }
}
