//! Upcoming birthday computation.
//!
//! A birthday's *this-year occurrence* is its month and day placed in the
//! year of `today`. It qualifies when it falls in `[today, today + window)`.
//! Occurrences on a weekend are congratulated on the following Monday.
//! Occurrences that already passed this year are not rolled over into next
//! year.

use crate::domain::Birthday;
use crate::models::Record;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;
use std::fmt;

/// Default length of the upcoming birthday window, in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// A contact whose birthday should be acknowledged soon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// Weekend-adjusted date on which to congratulate the contact
    #[serde(serialize_with = "serialize_display_date")]
    pub congratulation_date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.name,
            self.congratulation_date
                .format(crate::domain::birthday::DISPLAY_FORMAT)
        )
    }
}

fn serialize_display_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(&date.format(crate::domain::birthday::DISPLAY_FORMAT))
}

/// Move a Saturday or Sunday forward to the following Monday.
pub fn congratulation_date(occurrence: NaiveDate) -> NaiveDate {
    match occurrence.weekday() {
        Weekday::Sat => occurrence + Duration::days(2),
        Weekday::Sun => occurrence + Duration::days(1),
        _ => occurrence,
    }
}

/// The congratulation date for `birthday` if its this-year occurrence falls
/// within `window_days` of `today`.
pub fn upcoming_congratulation(
    birthday: &Birthday,
    today: NaiveDate,
    window_days: u32,
) -> Option<NaiveDate> {
    let occurrence = birthday.in_year(today.year());
    let days_until = (occurrence - today).num_days();

    if (0..i64::from(window_days)).contains(&days_until) {
        Some(congratulation_date(occurrence))
    } else {
        None
    }
}

/// Collect the upcoming birthdays of `records`, preserving their order.
pub fn collect_upcoming<'a>(
    records: impl IntoIterator<Item = &'a Record>,
    today: NaiveDate,
    window_days: u32,
) -> Vec<UpcomingBirthday> {
    records
        .into_iter()
        .filter_map(|record| {
            let birthday = record.birthday()?;
            let date = upcoming_congratulation(birthday, today, window_days)?;
            Some(UpcomingBirthday {
                name: record.name().to_string(),
                congratulation_date: date,
            })
        })
        .collect()
}
