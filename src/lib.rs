//! Address Book Assistant - an in-memory contact manager driven by a
//! line-oriented command interpreter.
//!
//! Contacts carry validated phone numbers and an optional birthday, and the
//! book can report whose birthday should be acknowledged in the coming days,
//! moving weekend birthdays to the following Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`Name`, `Phone`, `Birthday`)
//! - **models**: The `Record` aggregate for one contact
//! - **book**: The `AddressBook` collection and upcoming birthday query
//! - **session**: Tokenizer, command dispatch and the interactive loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **observability**: Per-session metrics

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;
pub mod session;

// Re-export commonly used types
pub use book::{AddressBook, UpcomingBirthday};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{CommandError, ConfigError, RecordError};
pub use models::Record;
pub use observability::{MetricsSummary, MetricsTracker};
pub use session::{Outcome, Session};
