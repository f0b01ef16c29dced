use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::config::BookingConfig;

/// Bookable weekdays after `reference`, using the default booking window.
pub fn available_dates(reference: NaiveDate) -> Vec<NaiveDate> {
    let config = BookingConfig::default();
    available_dates_within(reference, config.lookahead_days, config.max_dates)
}

/// Walks forward from the day after `reference`, skipping weekends, until
/// `limit` dates are collected or `lookahead_days` calendar days are scanned.
pub fn available_dates_within(reference: NaiveDate, lookahead_days: u32, limit: usize) -> Vec<NaiveDate> {
    (1..=i64::from(lookahead_days))
        .filter_map(|offset| reference.checked_add_signed(Duration::days(offset)))
        .filter(|date| !is_weekend(*date))
        .take(limit)
        .collect()
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Short label used on the date buttons (e.g., "Mon, Jan 5")
pub fn date_label(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

/// Long form used in messages (e.g., "Tuesday, January 7, 2026")
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Long form without the year, used in the confirmation popup
pub fn long_date_without_year(date: NaiveDate) -> String {
    date.format("%A, %B %-d").to_string()
}

/// ISO token used as the date button value (YYYY-MM-DD)
pub fn date_token(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
