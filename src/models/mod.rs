//! Data models for address book entities.
//!
//! A [`Record`] aggregates the validated fields of a single contact.

pub mod record;

pub use record::Record;
