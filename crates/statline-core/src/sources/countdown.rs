//! Days-remaining computation for the countdown number stat.

use time::{Date, Month};

use crate::domain::StatValue;
use crate::ValidationError;

/// Parse a target date in `month/day/year` form.
///
/// The format is explicit rather than locale-dependent; both padded
/// (`07/04/2026`) and unpadded (`7/4/2026`) components are accepted.
pub fn parse_target_date(input: &str) -> Result<Date, ValidationError> {
    let invalid = || ValidationError::InvalidDate {
        value: input.to_owned(),
    };

    let mut parts = input.trim().splitn(3, '/');
    let (month, day, year) = match (parts.next(), parts.next(), parts.next()) {
        (Some(month), Some(day), Some(year)) => (month, day, year),
        _ => return Err(invalid()),
    };

    let month: u8 = month.trim().parse().map_err(|_| invalid())?;
    let day: u8 = day.trim().parse().map_err(|_| invalid())?;
    let year: i32 = year.trim().parse().map_err(|_| invalid())?;

    let month = Month::try_from(month).map_err(|_| invalid())?;
    Date::from_calendar_date(year, month, day).map_err(|_| invalid())
}

/// Whole days from `today` to `target`. Negative when the target has
/// passed, zero on the day itself; neither is special-cased.
pub fn days_remaining(target: Date, today: Date) -> i64 {
    i64::from(target.to_julian_day() - today.to_julian_day())
}

/// The countdown rendered as a number-stat payload.
pub fn countdown_value(target: Date, today: Date) -> StatValue {
    StatValue::number(days_remaining(target, today).to_string())
}
