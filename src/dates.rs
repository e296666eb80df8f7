//! Calendar alignment: week anchors, title parsing, horizon arithmetic.
//!
//! Everything here is a pure function of the dates passed in; "today" flows
//! down from `main` (or a test) so runs are reproducible.

use anyhow::{Context, Result, anyhow};
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Days from `date` to the next `target` weekday, counting `date` itself
/// as zero.
fn days_until(date: NaiveDate, target: Weekday) -> u64 {
    let delta =
        target.num_days_from_monday() as i64 - date.weekday().num_days_from_monday() as i64;
    delta.rem_euclid(7) as u64
}

/// Saturday ending the submission week: the reference date all flu
/// horizons are measured against.
pub fn reference_saturday(today: NaiveDate) -> NaiveDate {
    today + Days::new(days_until(today, Weekday::Sat))
}

/// Sunday starting the current forecast week: the next Sunday pulled back
/// one whole week. Submissions land mid-week, so this is in the past.
pub fn origin_sunday(today: NaiveDate) -> NaiveDate {
    today + Days::new(days_until(today, Weekday::Sun)) - Days::new(7)
}

/// Pulls the target end date out of a sub-question title, e.g.
/// `"How many ... for the week ending (November 30, 2024)?"`.
pub fn target_end_date(title: &str) -> Result<NaiveDate> {
    let inner = title
        .split_once('(')
        .and_then(|(_, rest)| rest.split_once(')'))
        .map(|(inner, _)| inner.trim())
        .ok_or_else(|| anyhow!("title has no parenthetical date: {title:?}"))?;

    NaiveDate::parse_from_str(inner, "%B %d, %Y")
        .with_context(|| format!("unparseable date {inner:?} in title {title:?}"))
}

/// Whole weeks from `anchor` to `target_end`, floor division so partial
/// weeks land on the earlier horizon. `day_offset` folds in the
/// pipeline-specific shift (0 for flu whose anchor is a Saturday, 1 for RSV
/// whose anchor is a Sunday while target weeks still end on Saturdays).
pub fn horizon(anchor: NaiveDate, target_end: NaiveDate, day_offset: i64) -> i64 {
    ((target_end - anchor).num_days() + day_offset).div_euclid(7)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_reference_saturday_from_wednesday() {
        // 2024-11-20 is a Wednesday; the week ends Saturday 2024-11-23
        assert_eq!(reference_saturday(ymd(2024, 11, 20)), ymd(2024, 11, 23));
    }

    #[test]
    fn test_reference_saturday_is_identity_on_saturday() {
        assert_eq!(reference_saturday(ymd(2024, 11, 23)), ymd(2024, 11, 23));
    }

    #[test]
    fn test_origin_sunday_from_tuesday() {
        // 2024-11-19 is a Tuesday; the forecast week started Sunday 11-17
        let origin = origin_sunday(ymd(2024, 11, 19));
        assert_eq!(origin, ymd(2024, 11, 17));
        assert_eq!(origin.weekday(), Weekday::Sun);
    }

    #[test]
    fn test_origin_sunday_from_sunday_steps_back_a_week() {
        assert_eq!(origin_sunday(ymd(2024, 11, 17)), ymd(2024, 11, 10));
    }

    #[test]
    fn test_target_end_date_parses_long_form() {
        let title = "US weekly flu hospitalizations for the week ending (November 30, 2024)?";
        assert_eq!(target_end_date(title).unwrap(), ymd(2024, 11, 30));
    }

    #[test]
    fn test_target_end_date_rejects_missing_parenthetical() {
        assert!(target_end_date("no date here").is_err());
        assert!(target_end_date("unbalanced (November 30, 2024").is_err());
    }

    #[test]
    fn test_target_end_date_rejects_garbage_date() {
        assert!(target_end_date("week ending (sometime soon)?").is_err());
    }

    #[test]
    fn test_flu_horizon_exact_weeks() {
        let reference = ymd(2024, 11, 23);
        assert_eq!(horizon(reference, ymd(2024, 11, 30), 0), 1);
        assert_eq!(horizon(reference, ymd(2024, 11, 23), 0), 0);
        assert_eq!(horizon(reference, ymd(2024, 12, 14), 0), 3);
    }

    #[test]
    fn test_flu_horizon_floors_negative_spans() {
        let reference = ymd(2024, 11, 23);
        // any day in the preceding week is horizon -1, not 0
        assert_eq!(horizon(reference, ymd(2024, 11, 16), 0), -1);
        assert_eq!(horizon(reference, ymd(2024, 11, 22), 0), -1);
    }

    #[test]
    fn test_rsv_horizon_offset() {
        // origin Sunday 11-17; week 1 ends Saturday 11-23
        let origin = ymd(2024, 11, 17);
        assert_eq!(horizon(origin, ymd(2024, 11, 23), 1), 1);
        assert_eq!(horizon(origin, ymd(2024, 11, 30), 1), 2);
        assert_eq!(horizon(origin, ymd(2024, 12, 14), 1), 4);
    }
}
