//! The address book: a keyed, insertion-ordered collection of records.

use super::birthdays::{collect_upcoming, UpcomingBirthday, DEFAULT_WINDOW_DAYS};
use crate::models::Record;
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeSeq, Serializer};

/// Contacts keyed by name.
///
/// Every key equals the name of the record stored under it; the only way
/// in is [`AddressBook::add_record`], which derives the key from the record.
/// Iteration follows insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its own name.
    ///
    /// An existing record with the same name is replaced wholesale and
    /// returned; the entry keeps its original position in iteration order.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();
        let replaced = self.records.insert(key, record);
        if replaced.is_some() {
            tracing::debug!("Replaced existing contact");
        }
        replaced
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by name for mutation.
    ///
    /// The name of a record cannot be changed, so the key invariant holds.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove a record by name, returning it if it was present.
    ///
    /// The remaining records keep their relative order.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.records.shift_remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Birthdays to acknowledge in the 7 days starting at `today`.
    pub fn get_upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_within(today, DEFAULT_WINDOW_DAYS)
    }

    /// Birthdays to acknowledge in the `window_days` days starting at `today`.
    pub fn upcoming_birthdays_within(
        &self,
        today: NaiveDate,
        window_days: u32,
    ) -> Vec<UpcomingBirthday> {
        let upcoming = collect_upcoming(self.iter(), today, window_days);
        tracing::debug!(
            today = %today,
            window_days = window_days,
            found = upcoming.len(),
            "Computed upcoming birthdays"
        );
        upcoming
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = indexmap::map::Values<'a, String, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}

// Serialized as a list of records; the keys are redundant with the names.
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.records.len()))?;
        for record in self.records.values() {
            seq.serialize_element(record)?;
        }
        seq.end()
    }
}
