use chrono::{Datelike, NaiveDate, NaiveDateTime};
use js_sys::Date;
use shared::Clock;

/// Local wall-clock time read from the browser
pub fn current_local_datetime() -> Option<NaiveDateTime> {
    let now = Date::new_0();
    let year = now.get_full_year() as i32;
    let month = now.get_month() + 1; // JavaScript months are 0-indexed

    NaiveDate::from_ymd_opt(year, month, now.get_date())?
        .and_hms_opt(now.get_hours(), now.get_minutes(), now.get_seconds())
}

/// Get the current year for the footer
pub fn current_year() -> i32 {
    BrowserClock.now().year()
}

/// `Clock` backed by the browser's local time
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now(&self) -> NaiveDateTime {
        current_local_datetime().unwrap_or_else(|| chrono::Local::now().naive_local())
    }
}
