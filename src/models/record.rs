//! Record model: one contact's aggregate data.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use crate::error::{RecordError, RecordResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: an immutable name, an ordered list of phones and an
/// optional birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `raw` and append it to the phone list.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(raw)?);
        Ok(())
    }

    /// Remove every phone equal to `raw`. Missing values are ignored.
    pub fn delete_phone(&mut self, raw: &str) {
        self.phones.retain(|phone| !phone.matches(raw));
    }

    /// Replace every phone equal to `old` with `new`.
    ///
    /// `new` is validated before anything is looked up, so an invalid
    /// replacement fails even when `old` is not present. Returns the number
    /// of replaced entries; zero is not an error.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<usize, ValidationError> {
        let replacement = Phone::new(new)?;
        let mut replaced = 0;
        for phone in self.phones.iter_mut().filter(|phone| phone.matches(old)) {
            *phone = replacement.clone();
            replaced += 1;
        }
        Ok(replaced)
    }

    /// All stored phones equal to `raw`.
    pub fn find_phone(&self, raw: &str) -> Vec<&Phone> {
        self.phones.iter().filter(|phone| phone.matches(raw)).collect()
    }

    /// Discard the current phone list and keep only `raw`.
    ///
    /// The list is left untouched if `raw` is invalid.
    pub fn replace_phones(&mut self, raw: &str) -> Result<(), ValidationError> {
        let phone = Phone::new(raw)?;
        self.phones.clear();
        self.phones.push(phone);
        Ok(())
    }

    /// Set the birthday. A birthday can only be set once.
    ///
    /// # Errors
    ///
    /// - `RecordError::Validation` if `raw` is not a valid `DD-MM-YYYY` date
    /// - `RecordError::DuplicateBirthday` if a birthday is already stored;
    ///   the stored value is kept
    pub fn add_birthday(&mut self, raw: &str) -> RecordResult<&Birthday> {
        let birthday = Birthday::new(raw)?;
        if self.birthday.is_some() {
            return Err(RecordError::DuplicateBirthday {
                name: self.name.to_string(),
            });
        }
        Ok(&*self.birthday.insert(birthday))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}, birthday: ", self.name, phones)?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => write!(f, "Not specified"),
        }
    }
}
