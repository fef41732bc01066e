//! Test fixtures and sample data for integration tests.
//!
//! This module provides reusable records, address books and sessions with
//! a fixed "today".

use address_book::session::FixedClock;
use address_book::{AddressBook, Config, Record, Session};
use chrono::NaiveDate;

/// Shorthand for a calendar date.
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Monday, 10 June 2024.
pub fn monday() -> NaiveDate {
    ymd(2024, 6, 10)
}

/// Create a record with the given phones and optional `DD-MM-YYYY` birthday.
#[allow(dead_code)]
pub fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let mut record = Record::new(name).unwrap();
    for phone in phones {
        record.add_phone(phone).unwrap();
    }
    if let Some(birthday) = birthday {
        record.add_birthday(birthday).unwrap();
    }
    record
}

/// Address book with Ann (Saturday birthday), Bob (birthday yesterday) and
/// Cid (Sunday birthday), relative to [`monday`].
#[allow(dead_code)]
pub fn birthday_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(sample_record("Ann", &["1111111111"], Some("15-06-1990")));
    book.add_record(sample_record("Bob", &["2222222222"], Some("09-06-1985")));
    book.add_record(sample_record("Cid", &["3333333333"], Some("16-06-2000")));
    book
}

/// Session whose clock is fixed on `today`.
#[allow(dead_code)]
pub fn session_on(today: NaiveDate) -> Session {
    Session::with_clock(Config::default(), Box::new(FixedClock(today)))
}
