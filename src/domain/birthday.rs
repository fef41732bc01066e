//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

static BIRTHDAY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,2})-([0-9]{1,2})-([0-9]{4})$")
        .expect("Failed to compile birthday regex")
});

/// Input format accepted by [`Birthday::new`].
pub const INPUT_FORMAT: &str = "%d-%m-%Y";

/// Format used when a birthday is shown to the user.
pub const DISPLAY_FORMAT: &str = "%d.%m.%Y";

/// A calendar date of birth, with no time or timezone component.
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
/// use chrono::NaiveDate;
///
/// let birthday = Birthday::new("15-06-1990").unwrap();
/// assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(1990, 6, 15).unwrap());
/// assert_eq!(birthday.to_string(), "15.06.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from a `DD-MM-YYYY` string.
    ///
    /// Day and month may be one or two digits; the year must be four.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` for wrong separators,
    /// non-numeric fields, or dates that do not exist (e.g. `30-02-2020`).
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidBirthday(value.to_string());

        let caps = BIRTHDAY_REGEX.captures(value).ok_or_else(invalid)?;
        let day: u32 = caps[1].parse().map_err(|_| invalid())?;
        let month: u32 = caps[2].parse().map_err(|_| invalid())?;
        let year: i32 = caps[3].parse().map_err(|_| invalid())?;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(invalid)
    }

    /// The stored calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// The date this birthday falls on in `year`.
    ///
    /// February 29 maps to February 28 when `year` is not a leap year.
    pub fn in_year(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.month(), self.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
            .unwrap_or(self.0)
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// Serialized in the input format so that deserialization round-trips
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.format(INPUT_FORMAT).to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("15-06-1990").unwrap();
        assert_eq!(birthday.date(), ymd(1990, 6, 15));
        assert_eq!(
            (birthday.year(), birthday.month(), birthday.day()),
            (1990, 6, 15)
        );
    }

    #[test]
    fn test_birthday_accepts_unpadded_fields() {
        assert_eq!(Birthday::new("1-6-2000").unwrap().date(), ymd(2000, 6, 1));
    }

    #[test]
    fn test_birthday_month_lengths() {
        assert!(Birthday::new("31-01-2023").is_ok());
        assert!(Birthday::new("28-02-2023").is_ok());
        assert!(Birthday::new("29-02-2024").is_ok());
        assert!(Birthday::new("30-04-2023").is_ok());

        assert!(Birthday::new("29-02-2023").is_err());
        assert!(Birthday::new("30-02-2024").is_err());
        assert!(Birthday::new("31-04-2023").is_err());
        assert!(Birthday::new("32-01-2023").is_err());
        assert!(Birthday::new("00-01-2023").is_err());
        assert!(Birthday::new("10-13-2023").is_err());
    }

    #[test]
    fn test_birthday_rejects_malformed() {
        assert!(Birthday::new("").is_err());
        assert!(Birthday::new("15.06.1990").is_err());
        assert!(Birthday::new("15/06/1990").is_err());
        assert!(Birthday::new("1990-06-15").is_err());
        assert!(Birthday::new("15-06-90").is_err());
        assert!(Birthday::new("aa-bb-cccc").is_err());
        assert!(Birthday::new("15-06-1990 ").is_err());
        assert!(Birthday::new("115-06-1990").is_err());
    }

    #[test]
    fn test_birthday_error_carries_input() {
        assert_eq!(
            Birthday::new("30-02-2020"),
            Err(ValidationError::InvalidBirthday("30-02-2020".to_string()))
        );
    }

    #[test]
    fn test_birthday_display_uses_dots() {
        let birthday = Birthday::new("5-3-2001").unwrap();
        assert_eq!(birthday.to_string(), "05.03.2001");
    }

    #[test]
    fn test_birthday_in_year() {
        let birthday = Birthday::new("15-06-1990").unwrap();
        assert_eq!(birthday.in_year(2024), ymd(2024, 6, 15));
    }

    #[test]
    fn test_leap_day_birthday_in_common_year() {
        let birthday = Birthday::new("29-02-2000").unwrap();
        assert_eq!(birthday.in_year(2024), ymd(2024, 2, 29));
        assert_eq!(birthday.in_year(2023), ymd(2023, 2, 28));
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::new("15-06-1990").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"15-06-1990\"");

        let parsed: Birthday = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, birthday);
    }

    #[test]
    fn test_birthday_deserialization_invalid_fails() {
        let result: Result<Birthday, _> = serde_json::from_str("\"31-02-1990\"");
        assert!(result.is_err());
    }
}
